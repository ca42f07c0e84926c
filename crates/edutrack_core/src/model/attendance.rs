//! Attendance history and marking-method model.

use serde::{Deserialize, Serialize};

/// Outcome recorded for one class session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// Read-only history row on the attendance screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Relative date label, e.g. `Today`.
    pub date: String,
    pub subject: String,
    pub time: String,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    pub fn new(date: &str, subject: &str, time: &str, status: AttendanceStatus) -> Self {
        Self {
            date: date.to_string(),
            subject: subject.to_string(),
            time: time.to_string(),
            status,
        }
    }
}

/// Way of marking presence. All three behave identically; only the panel differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceMethod {
    #[default]
    Qr,
    Proximity,
    Face,
}

impl AttendanceMethod {
    pub const ALL: [AttendanceMethod; 3] = [Self::Qr, Self::Proximity, Self::Face];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Qr => "qr",
            Self::Proximity => "proximity",
            Self::Face => "face",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "qr" => Some(Self::Qr),
            "proximity" => Some(Self::Proximity),
            "face" => Some(Self::Face),
            _ => None,
        }
    }
}
