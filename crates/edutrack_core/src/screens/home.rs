//! Landing screen.

use crate::model::role::Role;
use crate::route::{portal_route, Route};

/// Landing screen state: only the contact panel toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HomeScreen {
    contact_visible: bool,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contact_visible(&self) -> bool {
        self.contact_visible
    }

    /// Expands or collapses the contact panel; returns the new state.
    pub fn toggle_contact(&mut self) -> bool {
        self.contact_visible = !self.contact_visible;
        self.contact_visible
    }

    /// Route for a portal card's login button.
    pub fn open_portal(&self, role: Role) -> Route {
        portal_route(role)
    }
}
