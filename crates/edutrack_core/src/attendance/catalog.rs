//! Static content of the attendance screen.

use crate::model::attendance::{AttendanceMethod, AttendanceRecord, AttendanceStatus};

/// Texts shown for one marking method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodPresentation {
    pub method: AttendanceMethod,
    /// Selection card title.
    pub title: &'static str,
    /// Selection card subtitle.
    pub description: &'static str,
    /// Action panel heading.
    pub panel_heading: &'static str,
    /// Action panel hint.
    pub panel_hint: &'static str,
    /// Button label while idle or marked.
    pub action_label: &'static str,
    /// Button label while marking.
    pub busy_label: &'static str,
}

const METHODS: &[MethodPresentation] = &[
    MethodPresentation {
        method: AttendanceMethod::Qr,
        title: "QR Code Scan",
        description: "Scan the classroom QR code",
        panel_heading: "Ready to Scan",
        panel_hint: "Point your camera at the classroom QR code",
        action_label: "Open Camera",
        busy_label: "Scanning...",
    },
    MethodPresentation {
        method: AttendanceMethod::Proximity,
        title: "Auto-Proximity",
        description: "Bluetooth/WiFi detection",
        panel_heading: "Auto-Detection Active",
        panel_hint: "Looking for classroom signals...",
        action_label: "Mark Present",
        busy_label: "Detecting...",
    },
    MethodPresentation {
        method: AttendanceMethod::Face,
        title: "Face Recognition",
        description: "AI-powered facial verification",
        panel_heading: "Face Recognition",
        panel_hint: "Position your face in the camera view",
        action_label: "Start Verification",
        busy_label: "Verifying...",
    },
];

/// Presentation for every method, in card order.
pub fn methods() -> &'static [MethodPresentation] {
    METHODS
}

/// Presentation for one method.
pub fn presentation(method: AttendanceMethod) -> &'static MethodPresentation {
    match method {
        AttendanceMethod::Qr => &METHODS[0],
        AttendanceMethod::Proximity => &METHODS[1],
        AttendanceMethod::Face => &METHODS[2],
    }
}

/// Class the student is currently marking attendance for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentClass {
    pub subject: &'static str,
    pub room: &'static str,
    pub teacher: &'static str,
    pub time: &'static str,
    pub remaining: &'static str,
}

pub const CURRENT_CLASS: CurrentClass = CurrentClass {
    subject: "Mathematics",
    room: "Room 101",
    teacher: "Dr. Smith",
    time: "09:00 - 10:30 AM",
    remaining: "5 min remaining",
};

/// Banner shown while the marker is in `Marked`.
pub const MARKED_BANNER_TITLE: &str = "Attendance Marked Successfully!";
pub const MARKED_BANNER_DETAIL: &str = "You're present for Mathematics - 09:00 AM";

/// History tab rows.
pub fn recent_attendance() -> Vec<AttendanceRecord> {
    vec![
        AttendanceRecord::new("Today", "Mathematics", "09:15 AM", AttendanceStatus::Present),
        AttendanceRecord::new("Today", "Physics", "11:05 AM", AttendanceStatus::Present),
        AttendanceRecord::new(
            "Yesterday",
            "Computer Science",
            "02:10 PM",
            AttendanceStatus::Present,
        ),
        AttendanceRecord::new("Yesterday", "English", "04:05 PM", AttendanceStatus::Absent),
    ]
}
