//! Auth screen state machines.
//!
//! # Responsibility
//! - Drive the student/teacher login + signup-verification flow.
//! - Drive the admin credential check.
//! - Describe outcomes as `AuthEffect` values (notification + optional route).
//!
//! # Invariants
//! - Credential and code mismatches are outcomes, not `Err` values.
//! - `Err` is reserved for interactions the screen would not offer
//!   (hidden tab, disabled button, missing required field).
//! - Credentials and verification codes are never logged.
//!
//! # See also
//! - `auth::verifier` for the replaceable credential checks.

pub mod admin;
pub mod portal;
pub mod signup;
pub mod verifier;

use crate::model::notification::Notification;
use crate::model::role::Role;
use crate::route::Route;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Which tab of a portal auth screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
        }
    }
}

/// Kind of result an auth interaction produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthOutcome {
    Succeeded,
    /// Admin username/password did not match.
    CredentialMismatch,
    /// Selected signup codes did not match.
    VerificationCodeMismatch,
}

/// Side effects requested by an auth interaction.
///
/// The shell shows `notification` and, when present, navigates to
/// `navigate_to`. A `None` route means "stay on this screen".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthEffect {
    pub outcome: AuthOutcome,
    pub notification: Notification,
    pub navigate_to: Option<Route>,
}

impl AuthEffect {
    pub fn succeeded(&self) -> bool {
        self.outcome == AuthOutcome::Succeeded
    }
}

/// Credentials typed into a login tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Email or username.
    pub identifier: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: password.into(),
        }
    }

    /// Required-field presence check; no format validation.
    pub fn check_required(&self) -> Result<(), AuthError> {
        require_text("identifier", &self.identifier)?;
        require_text("password", &self.password)
    }
}

/// Verification channel a code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeChannel {
    Email,
    Mobile,
}

impl Display for CodeChannel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::Mobile => write!(f, "mobile"),
        }
    }
}

/// Interaction errors for auth screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A required form field was left empty.
    MissingField(&'static str),
    /// A select field holds an option the role's form does not offer.
    UnsupportedOption { field: &'static str, value: String },
    /// A signup form for another role was submitted to this portal.
    RoleMismatch { expected: Role, actual: Role },
    /// The portal flow does not exist for this role.
    UnsupportedRole(Role),
    /// The action belongs to the other tab.
    WrongMode { expected: AuthMode },
    /// Tabs are hidden while the verification step is shown.
    VerificationInProgress,
    /// Code actions require the verification step.
    NotVerifying,
    /// The code is not one of the offered candidates.
    UnknownCode { channel: CodeChannel, code: String },
    /// "Verify Account" is disabled until both codes are selected.
    SelectionIncomplete,
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field is empty: {field}"),
            Self::UnsupportedOption { field, value } => {
                write!(f, "option `{value}` is not offered for {field}")
            }
            Self::RoleMismatch { expected, actual } => write!(
                f,
                "signup form for {} submitted to {} portal",
                actual.as_str(),
                expected.as_str()
            ),
            Self::UnsupportedRole(role) => {
                write!(f, "portal auth flow is not available for {}", role.as_str())
            }
            Self::WrongMode { expected } => {
                write!(f, "action requires the {} tab", expected.as_str())
            }
            Self::VerificationInProgress => write!(f, "verification step is in progress"),
            Self::NotVerifying => write!(f, "verification step is not shown"),
            Self::UnknownCode { channel, code } => {
                write!(f, "{channel} code `{code}` is not an offered candidate")
            }
            Self::SelectionIncomplete => {
                write!(f, "both email and mobile codes must be selected")
            }
        }
    }
}

impl Error for AuthError {}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), AuthError> {
    if value.is_empty() {
        return Err(AuthError::MissingField(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{AuthError, LoginForm};

    #[test]
    fn login_form_requires_both_fields() {
        assert_eq!(
            LoginForm::new("", "pw").check_required(),
            Err(AuthError::MissingField("identifier"))
        );
        assert_eq!(
            LoginForm::new("alex", "").check_required(),
            Err(AuthError::MissingField("password"))
        );
        assert!(LoginForm::new("alex", "pw").check_required().is_ok());
    }

    #[test]
    fn whitespace_counts_as_present() {
        assert!(LoginForm::new(" ", " ").check_required().is_ok());
    }
}
