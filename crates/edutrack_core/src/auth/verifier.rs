//! Credential verification capability.
//!
//! The fixed codes and the admin pair below stand in for a real
//! credential/verification service. State machines only see the
//! `CredentialVerifier` trait, so a real backend can replace them.

use crate::model::role::Role;

/// Checks one candidate credential.
pub trait CredentialVerifier {
    type Candidate: ?Sized;

    fn verify(&self, candidate: &Self::Candidate) -> bool;
}

impl<T: CredentialVerifier + ?Sized> CredentialVerifier for Box<T> {
    type Candidate = T::Candidate;

    fn verify(&self, candidate: &Self::Candidate) -> bool {
        (**self).verify(candidate)
    }
}

/// Pair of codes picked on the signup verification step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationAttempt {
    pub email_code: String,
    pub mobile_code: String,
}

/// Username/password pair typed into the admin screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

/// Candidate codes offered per channel (one correct code plus two decoys).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationCodes {
    pub email: [&'static str; 3],
    pub mobile: [&'static str; 3],
}

pub const STUDENT_VERIFICATION_CODES: VerificationCodes = VerificationCodes {
    email: ["1234", "5678", "9012"],
    mobile: ["2468", "1357", "9753"],
};

pub const TEACHER_VERIFICATION_CODES: VerificationCodes = VerificationCodes {
    email: ["5432", "8765", "1098"],
    mobile: ["3691", "7410", "2583"],
};

impl VerificationCodes {
    /// Offered codes for a portal role. Admin has no signup flow.
    pub fn for_role(role: Role) -> Option<Self> {
        match role {
            Role::Student => Some(STUDENT_VERIFICATION_CODES),
            Role::Teacher => Some(TEACHER_VERIFICATION_CODES),
            Role::Admin => None,
        }
    }

    /// Returns the offered email code equal to `code`.
    pub fn find_email(&self, code: &str) -> Option<&'static str> {
        self.email.iter().copied().find(|candidate| *candidate == code)
    }

    /// Returns the offered mobile code equal to `code`.
    pub fn find_mobile(&self, code: &str) -> Option<&'static str> {
        self.mobile.iter().copied().find(|candidate| *candidate == code)
    }
}

/// Static per-role signup codes. Identical for every user and session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCodeVerifier {
    email: &'static str,
    mobile: &'static str,
}

impl FixedCodeVerifier {
    pub const fn new(email: &'static str, mobile: &'static str) -> Self {
        Self { email, mobile }
    }

    pub const fn student() -> Self {
        Self::new("1234", "2468")
    }

    pub const fn teacher() -> Self {
        Self::new("5432", "3691")
    }

    pub fn for_role(role: Role) -> Option<Self> {
        match role {
            Role::Student => Some(Self::student()),
            Role::Teacher => Some(Self::teacher()),
            Role::Admin => None,
        }
    }
}

impl CredentialVerifier for FixedCodeVerifier {
    type Candidate = VerificationAttempt;

    fn verify(&self, candidate: &VerificationAttempt) -> bool {
        candidate.email_code == self.email && candidate.mobile_code == self.mobile
    }
}

/// The single hard-coded admin account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedAdminVerifier;

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin";

impl CredentialVerifier for FixedAdminVerifier {
    type Candidate = AdminCredentials;

    /// Username is case-insensitive, password is case-sensitive.
    fn verify(&self, candidate: &AdminCredentials) -> bool {
        candidate.username.to_lowercase() == ADMIN_USERNAME && candidate.password == ADMIN_PASSWORD
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AdminCredentials, CredentialVerifier, FixedAdminVerifier, FixedCodeVerifier,
        VerificationAttempt, VerificationCodes,
    };
    use crate::model::role::Role;

    fn attempt(email: &str, mobile: &str) -> VerificationAttempt {
        VerificationAttempt {
            email_code: email.to_string(),
            mobile_code: mobile.to_string(),
        }
    }

    #[test]
    fn correct_codes_are_offered_candidates() {
        for role in [Role::Student, Role::Teacher] {
            let codes = VerificationCodes::for_role(role).expect("portal role codes");
            let verifier = FixedCodeVerifier::for_role(role).expect("portal role verifier");
            let hits = codes
                .email
                .iter()
                .flat_map(|email| codes.mobile.iter().map(move |mobile| (*email, *mobile)))
                .filter(|(email, mobile)| verifier.verify(&attempt(email, mobile)))
                .count();
            assert_eq!(hits, 1, "exactly one offered pair must verify for {role:?}");
        }
    }

    #[test]
    fn admin_has_no_signup_codes() {
        assert!(VerificationCodes::for_role(Role::Admin).is_none());
        assert!(FixedCodeVerifier::for_role(Role::Admin).is_none());
    }

    #[test]
    fn admin_username_ignores_case_but_password_does_not() {
        let verifier = FixedAdminVerifier;
        let creds = |username: &str, password: &str| AdminCredentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        assert!(verifier.verify(&creds("ADMIN", "admin")));
        assert!(!verifier.verify(&creds("admin", "Admin")));
        assert!(!verifier.verify(&creds(" admin", "admin")));
    }

    #[test]
    fn boxed_verifier_delegates() {
        let boxed: Box<FixedCodeVerifier> = Box::new(FixedCodeVerifier::teacher());
        assert!(boxed.verify(&attempt("5432", "3691")));
        assert!(!boxed.verify(&attempt("1234", "2468")));
    }
}
