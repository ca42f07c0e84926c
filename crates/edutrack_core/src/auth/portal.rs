//! Student/teacher portal auth screen.
//!
//! # Responsibility
//! - Hold the login/signup tab state and the verification step.
//! - Accept any non-empty login (no account store exists).
//! - Gate account creation on the signup code check.
//!
//! # Invariants
//! - Initial state: `CredentialsEntry`, `Login` mode, no selections.
//! - Selections only exist while `ShowingVerification`.
//! - Verification succeeds iff the injected verifier accepts both codes.
//! - A failed verification keeps the current selections.

use super::signup::SignupForm;
use super::verifier::{
    CredentialVerifier, FixedCodeVerifier, VerificationAttempt, VerificationCodes,
    STUDENT_VERIFICATION_CODES, TEACHER_VERIFICATION_CODES,
};
use super::{AuthEffect, AuthError, AuthMode, AuthOutcome, CodeChannel, LoginForm};
use crate::model::notification::Notification;
use crate::model::role::Role;
use crate::route::dashboard_route;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Step of the portal screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStep {
    #[default]
    CredentialsEntry,
    ShowingVerification,
}

/// Auth screen state for one mounted student or teacher portal.
#[derive(Debug)]
pub struct PortalAuth<V = FixedCodeVerifier> {
    role: Role,
    mode: AuthMode,
    step: AuthStep,
    codes: VerificationCodes,
    selected_email: Option<&'static str>,
    selected_mobile: Option<&'static str>,
    email_verified: bool,
    mobile_verified: bool,
    verifier: V,
}

impl PortalAuth<FixedCodeVerifier> {
    /// Student portal with its fixed codes.
    pub fn student() -> Self {
        Self::build(
            Role::Student,
            STUDENT_VERIFICATION_CODES,
            FixedCodeVerifier::student(),
        )
    }

    /// Teacher portal with its fixed codes.
    pub fn teacher() -> Self {
        Self::build(
            Role::Teacher,
            TEACHER_VERIFICATION_CODES,
            FixedCodeVerifier::teacher(),
        )
    }

    /// Portal for `role` with the fixed codes.
    ///
    /// # Errors
    /// - `UnsupportedRole` for `Role::Admin`, which has no signup flow.
    pub fn for_role(role: Role) -> Result<Self, AuthError> {
        match role {
            Role::Student => Ok(Self::student()),
            Role::Teacher => Ok(Self::teacher()),
            Role::Admin => Err(AuthError::UnsupportedRole(role)),
        }
    }
}

impl<V> PortalAuth<V>
where
    V: CredentialVerifier<Candidate = VerificationAttempt>,
{
    /// Portal with a caller-provided verifier.
    ///
    /// # Errors
    /// - `UnsupportedRole` for `Role::Admin`.
    pub fn with_verifier(
        role: Role,
        codes: VerificationCodes,
        verifier: V,
    ) -> Result<Self, AuthError> {
        if role == Role::Admin {
            return Err(AuthError::UnsupportedRole(role));
        }
        Ok(Self::build(role, codes, verifier))
    }

    fn build(role: Role, codes: VerificationCodes, verifier: V) -> Self {
        Self {
            role,
            mode: AuthMode::Login,
            step: AuthStep::CredentialsEntry,
            codes,
            selected_email: None,
            selected_mobile: None,
            email_verified: false,
            mobile_verified: false,
            verifier,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn step(&self) -> AuthStep {
        self.step
    }

    pub fn codes(&self) -> &VerificationCodes {
        &self.codes
    }

    pub fn selected_email_code(&self) -> Option<&'static str> {
        self.selected_email
    }

    pub fn selected_mobile_code(&self) -> Option<&'static str> {
        self.selected_mobile
    }

    pub fn email_verified(&self) -> bool {
        self.email_verified
    }

    pub fn mobile_verified(&self) -> bool {
        self.mobile_verified
    }

    /// Switches between the login and signup tabs.
    ///
    /// # Errors
    /// - `VerificationInProgress` while the verification step hides the tabs.
    pub fn set_mode(&mut self, mode: AuthMode) -> Result<(), AuthError> {
        self.ensure_credentials_entry()?;
        self.mode = mode;
        Ok(())
    }

    /// Submits the login tab. Any non-empty pair is accepted.
    ///
    /// # Errors
    /// - `VerificationInProgress` / `WrongMode` when the login tab is not shown.
    /// - `MissingField` when identifier or password is empty.
    pub fn login(&mut self, form: &LoginForm) -> Result<AuthEffect, AuthError> {
        self.ensure_credentials_entry()?;
        self.ensure_mode(AuthMode::Login)?;
        form.check_required()?;

        info!(
            "event=login module=auth status=ok role={}",
            self.role.as_str()
        );
        let description = match self.role {
            Role::Teacher => "Welcome to Teacher Portal!",
            _ => "Welcome back to EduTrack!",
        };
        Ok(AuthEffect {
            outcome: AuthOutcome::Succeeded,
            notification: Notification::info("Login Successful", description),
            navigate_to: Some(dashboard_route(self.role)),
        })
    }

    /// Submits the signup tab and shows the verification step.
    ///
    /// # Errors
    /// - `VerificationInProgress` / `WrongMode` when the signup tab is not shown.
    /// - `RoleMismatch` when the form belongs to the other portal.
    /// - Required-field errors from `SignupForm::check_required`.
    pub fn submit_signup(&mut self, form: &SignupForm) -> Result<(), AuthError> {
        self.ensure_credentials_entry()?;
        self.ensure_mode(AuthMode::Signup)?;
        if form.role() != self.role {
            return Err(AuthError::RoleMismatch {
                expected: self.role,
                actual: form.role(),
            });
        }
        form.check_required()?;

        self.selected_email = None;
        self.selected_mobile = None;
        self.step = AuthStep::ShowingVerification;
        debug!(
            "event=signup_verification_shown module=auth status=ok role={}",
            self.role.as_str()
        );
        Ok(())
    }

    /// Picks one of the offered email codes, replacing any earlier pick.
    pub fn select_email_code(&mut self, code: &str) -> Result<(), AuthError> {
        self.ensure_verifying()?;
        let found = self
            .codes
            .find_email(code)
            .ok_or_else(|| AuthError::UnknownCode {
                channel: CodeChannel::Email,
                code: code.to_string(),
            })?;
        self.selected_email = Some(found);
        Ok(())
    }

    /// Picks one of the offered mobile codes, replacing any earlier pick.
    pub fn select_mobile_code(&mut self, code: &str) -> Result<(), AuthError> {
        self.ensure_verifying()?;
        let found = self
            .codes
            .find_mobile(code)
            .ok_or_else(|| AuthError::UnknownCode {
                channel: CodeChannel::Mobile,
                code: code.to_string(),
            })?;
        self.selected_mobile = Some(found);
        Ok(())
    }

    /// Whether "Verify Account" is enabled.
    pub fn can_verify(&self) -> bool {
        self.step == AuthStep::ShowingVerification
            && self.selected_email.is_some()
            && self.selected_mobile.is_some()
    }

    /// Checks the selected codes.
    ///
    /// On success the screen returns to credentials entry in login mode. On
    /// mismatch it stays on verification with the selections intact.
    ///
    /// # Errors
    /// - `NotVerifying` outside the verification step.
    /// - `SelectionIncomplete` until both codes are picked.
    pub fn verify(&mut self) -> Result<AuthEffect, AuthError> {
        self.ensure_verifying()?;
        let (Some(email_code), Some(mobile_code)) = (self.selected_email, self.selected_mobile)
        else {
            return Err(AuthError::SelectionIncomplete);
        };

        let attempt = VerificationAttempt {
            email_code: email_code.to_string(),
            mobile_code: mobile_code.to_string(),
        };
        if !self.verifier.verify(&attempt) {
            return Ok(AuthEffect {
                outcome: AuthOutcome::VerificationCodeMismatch,
                notification: Notification::destructive(
                    "Verification Failed",
                    "Please select the correct verification codes.",
                ),
                navigate_to: None,
            });
        }

        self.email_verified = true;
        self.mobile_verified = true;
        self.mode = AuthMode::Login;
        self.leave_verification();
        info!(
            "event=signup_verified module=auth status=ok role={}",
            self.role.as_str()
        );
        Ok(AuthEffect {
            outcome: AuthOutcome::Succeeded,
            notification: Notification::info(
                "Account Created Successfully",
                "Welcome to EduTrack! Please login to continue.",
            ),
            navigate_to: None,
        })
    }

    /// "Back" from the verification step. Discards selections.
    ///
    /// No-op while already on credentials entry.
    pub fn back(&mut self) {
        if self.step == AuthStep::ShowingVerification {
            self.leave_verification();
        }
    }

    fn leave_verification(&mut self) {
        self.selected_email = None;
        self.selected_mobile = None;
        self.step = AuthStep::CredentialsEntry;
    }

    fn ensure_credentials_entry(&self) -> Result<(), AuthError> {
        match self.step {
            AuthStep::CredentialsEntry => Ok(()),
            AuthStep::ShowingVerification => Err(AuthError::VerificationInProgress),
        }
    }

    fn ensure_verifying(&self) -> Result<(), AuthError> {
        match self.step {
            AuthStep::ShowingVerification => Ok(()),
            AuthStep::CredentialsEntry => Err(AuthError::NotVerifying),
        }
    }

    fn ensure_mode(&self, expected: AuthMode) -> Result<(), AuthError> {
        if self.mode != expected {
            return Err(AuthError::WrongMode { expected });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthStep, PortalAuth};
    use crate::auth::{AuthError, AuthMode};
    use crate::model::role::Role;

    #[test]
    fn starts_on_login_tab() {
        let portal = PortalAuth::student();
        assert_eq!(portal.role(), Role::Student);
        assert_eq!(portal.mode(), AuthMode::Login);
        assert_eq!(portal.step(), AuthStep::CredentialsEntry);
        assert!(!portal.can_verify());
    }

    #[test]
    fn admin_portal_is_rejected() {
        let err = PortalAuth::for_role(Role::Admin).expect_err("admin has no portal flow");
        assert_eq!(err, AuthError::UnsupportedRole(Role::Admin));
    }

    #[test]
    fn code_actions_need_verification_step() {
        let mut portal = PortalAuth::teacher();
        assert_eq!(
            portal.select_email_code("5432"),
            Err(AuthError::NotVerifying)
        );
        assert_eq!(portal.verify(), Err(AuthError::NotVerifying));
        portal.back();
        assert_eq!(portal.step(), AuthStep::CredentialsEntry);
    }
}
