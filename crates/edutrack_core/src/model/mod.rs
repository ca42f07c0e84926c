//! Screen-local domain model for EduTrack projections.
//!
//! # Responsibility
//! - Define the data shapes rendered by dashboard/attendance/tasks screens.
//! - Keep wire naming stable for the UI shell (`snake_case` JSON).
//!
//! # Invariants
//! - No model value is shared between screens; every screen seeds its own copy.
//! - Nothing here is persisted; values live as long as their owning screen.

pub mod attendance;
pub mod notification;
pub mod role;
pub mod task;
