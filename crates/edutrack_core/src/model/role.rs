//! Portal roles.

use serde::{Deserialize, Serialize};

/// Who is signing in. Each role has its own auth screen and dashboard route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    /// Stable lowercase id, also used as the `/auth/{role}` path segment.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Admin => "admin",
        }
    }

    /// Parses a lowercase role id. Returns `None` for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "student" => Some(Self::Student),
            "teacher" => Some(Self::Teacher),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Portal heading shown on the auth screen.
    pub fn portal_title(self) -> &'static str {
        match self {
            Self::Student => "Student Portal",
            Self::Teacher => "Teacher Portal",
            Self::Admin => "Admin Portal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Role;

    #[test]
    fn parse_round_trips_stable_ids() {
        for role in [Role::Student, Role::Teacher, Role::Admin] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("Student"), None);
        assert_eq!(Role::parse("parent"), None);
    }
}
