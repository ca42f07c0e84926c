//! Display-only screens backed by fixed content.
//!
//! Each screen is a plain value created at mount; the few switches they own
//! (profile settings, home contact panel) are local to that value.

pub mod dashboard;
pub mod home;
pub mod profile;
pub mod reports;
