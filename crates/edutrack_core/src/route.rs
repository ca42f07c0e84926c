//! View routing table.
//!
//! # Responsibility
//! - Map URL paths to logical screens and back.
//! - Describe the bottom navigation bar.
//!
//! # Invariants
//! - No route is guarded; every path is reachable directly.
//! - Unknown paths resolve to `Route::NotFound`, never to an error.
//! - Paths are matched exactly (no trailing-slash or case normalization).

use crate::model::role::Role;
use serde::{Deserialize, Serialize};

/// Logical screen reachable through navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    StudentAuth,
    TeacherAuth,
    AdminAuth,
    StudentDashboard,
    TeacherDashboard,
    AdminDashboard,
    Attendance,
    Tasks,
    Reports,
    Profile,
    NotFound,
}

const ROUTE_TABLE: &[(&str, Route)] = &[
    ("/", Route::Home),
    ("/auth/student", Route::StudentAuth),
    ("/auth/teacher", Route::TeacherAuth),
    ("/auth/admin", Route::AdminAuth),
    ("/student-dashboard", Route::StudentDashboard),
    ("/teacher-dashboard", Route::TeacherDashboard),
    ("/admin-dashboard", Route::AdminDashboard),
    ("/attendance", Route::Attendance),
    ("/tasks", Route::Tasks),
    ("/reports", Route::Reports),
    ("/profile", Route::Profile),
];

impl Route {
    /// Resolves a path; anything outside the table is `NotFound`.
    pub fn from_path(path: &str) -> Self {
        ROUTE_TABLE
            .iter()
            .find(|(candidate, _)| *candidate == path)
            .map(|(_, route)| *route)
            .unwrap_or(Self::NotFound)
    }

    /// Stable snake_case id, matching the serde wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::StudentAuth => "student_auth",
            Self::TeacherAuth => "teacher_auth",
            Self::AdminAuth => "admin_auth",
            Self::StudentDashboard => "student_dashboard",
            Self::TeacherDashboard => "teacher_dashboard",
            Self::AdminDashboard => "admin_dashboard",
            Self::Attendance => "attendance",
            Self::Tasks => "tasks",
            Self::Reports => "reports",
            Self::Profile => "profile",
            Self::NotFound => "not_found",
        }
    }

    /// Canonical path. `NotFound` has no path of its own and reports `*`.
    pub fn path(self) -> &'static str {
        ROUTE_TABLE
            .iter()
            .find(|(_, route)| *route == self)
            .map(|(path, _)| *path)
            .unwrap_or("*")
    }

    /// All three dashboard routes render the same dashboard screen.
    pub fn is_dashboard(self) -> bool {
        matches!(
            self,
            Self::StudentDashboard | Self::TeacherDashboard | Self::AdminDashboard
        )
    }
}

/// Auth screen for a role (`/auth/{role}`).
pub fn portal_route(role: Role) -> Route {
    match role {
        Role::Student => Route::StudentAuth,
        Role::Teacher => Route::TeacherAuth,
        Role::Admin => Route::AdminAuth,
    }
}

/// Dashboard a role lands on after a successful login.
pub fn dashboard_route(role: Role) -> Route {
    match role {
        Role::Student => Route::StudentDashboard,
        Role::Teacher => Route::TeacherDashboard,
        Role::Admin => Route::AdminDashboard,
    }
}

/// Entry of the bottom navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub route: Route,
}

impl NavItem {
    /// Active iff the current location path equals this item's href.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.route.path() == current_path
    }
}

const BOTTOM_NAVIGATION: &[NavItem] = &[
    NavItem {
        name: "Home",
        route: Route::Home,
    },
    NavItem {
        name: "Attendance",
        route: Route::Attendance,
    },
    NavItem {
        name: "Tasks",
        route: Route::Tasks,
    },
    NavItem {
        name: "Reports",
        route: Route::Reports,
    },
    NavItem {
        name: "Profile",
        route: Route::Profile,
    },
];

/// Bottom navigation items in display order.
pub fn bottom_navigation() -> &'static [NavItem] {
    BOTTOM_NAVIGATION
}

#[cfg(test)]
mod tests {
    use super::{bottom_navigation, Route, ROUTE_TABLE};

    #[test]
    fn every_table_path_round_trips() {
        for (path, route) in ROUTE_TABLE {
            assert_eq!(Route::from_path(path), *route);
            assert_eq!(route.path(), *path);
        }
    }

    #[test]
    fn only_one_nav_item_is_active_for_a_known_path() {
        let active = bottom_navigation()
            .iter()
            .filter(|item| item.is_active("/tasks"))
            .count();
        assert_eq!(active, 1);
    }
}
