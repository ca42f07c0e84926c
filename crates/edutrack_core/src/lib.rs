//! Core screen state for EduTrack.
//! UI shells render from these types and forward user input back into them.

pub mod attendance;
pub mod auth;
pub mod logging;
pub mod model;
pub mod route;
pub mod screens;
pub mod tasks;

pub use attendance::{AttendanceMarker, MarkError, MarkPhase, MarkTimings};
pub use auth::admin::AdminAuth;
pub use auth::portal::{AuthStep, PortalAuth};
pub use auth::signup::{SignupForm, StudentSignup, TeacherSignup};
pub use auth::{AuthEffect, AuthError, AuthMode, AuthOutcome, LoginForm};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::attendance::AttendanceMethod;
pub use model::notification::{Notification, Severity};
pub use model::role::Role;
pub use model::task::{Task, TaskCategory, TaskId, TaskPriority};
pub use route::Route;
pub use tasks::{TaskBoard, TaskSummary, ACHIEVEMENT_BODY, ACHIEVEMENT_TITLE};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
