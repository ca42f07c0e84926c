//! Admin auth screen.
//!
//! One credential check per submit. No lockout, no attempt counting.

use super::verifier::{AdminCredentials, CredentialVerifier, FixedAdminVerifier};
use super::{AuthEffect, AuthError, AuthOutcome, LoginForm};
use crate::model::notification::Notification;
use crate::model::role::Role;
use crate::route::dashboard_route;
use log::info;

/// Auth screen state for the admin portal.
#[derive(Debug, Default)]
pub struct AdminAuth<V = FixedAdminVerifier> {
    verifier: V,
}

impl AdminAuth<FixedAdminVerifier> {
    pub fn new() -> Self {
        Self::with_verifier(FixedAdminVerifier)
    }
}

impl<V> AdminAuth<V>
where
    V: CredentialVerifier<Candidate = AdminCredentials>,
{
    pub fn with_verifier(verifier: V) -> Self {
        Self { verifier }
    }

    /// Submits the admin form.
    ///
    /// Match: success notification and navigation to the admin dashboard.
    /// Mismatch: destructive notification, no navigation.
    ///
    /// # Errors
    /// - `MissingField` when username or password is empty.
    pub fn login(&self, form: &LoginForm) -> Result<AuthEffect, AuthError> {
        form.check_required()?;

        let candidate = AdminCredentials {
            username: form.identifier.clone(),
            password: form.password.clone(),
        };
        if !self.verifier.verify(&candidate) {
            return Ok(AuthEffect {
                outcome: AuthOutcome::CredentialMismatch,
                notification: Notification::destructive(
                    "Login Failed",
                    "Invalid admin credentials. Please try again.",
                ),
                navigate_to: None,
            });
        }

        info!("event=login module=auth status=ok role=admin");
        Ok(AuthEffect {
            outcome: AuthOutcome::Succeeded,
            notification: Notification::info(
                "Admin Login Successful",
                "Welcome to EduTrack Admin Portal!",
            ),
            navigate_to: Some(dashboard_route(Role::Admin)),
        })
    }
}
