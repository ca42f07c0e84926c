//! Reports screen figures.
//!
//! Every figure is a fixed display constant. The only computation is the
//! half-up percentage used to size progress bars.

use crate::tasks::rounded_percent;

pub const OVERALL_ATTENDANCE: u8 = 91;
pub const AVERAGE_PRODUCTIVITY: u8 = 82;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyAttendance {
    pub month: &'static str,
    pub percentage: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectAttendance {
    pub subject: &'static str,
    pub percentage: u8,
}

/// `value / total` metric with its displayed percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductivityMetric {
    pub label: &'static str,
    pub value: u32,
    pub total: u32,
    pub percentage: u8,
}

impl ProductivityMetric {
    /// Percentage derived from `value / total`.
    pub fn computed_percentage(&self) -> u8 {
        percent_of(self.value, self.total)
    }
}

/// "This week" summary card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklySummary {
    pub classes_attended: (u32, u32),
    pub tasks_completed: (u32, u32),
    pub study_hours: f32,
    pub achievements: u32,
}

const MONTHLY_ATTENDANCE: &[MonthlyAttendance] = &[
    MonthlyAttendance {
        month: "Jan",
        percentage: 92,
    },
    MonthlyAttendance {
        month: "Feb",
        percentage: 88,
    },
    MonthlyAttendance {
        month: "Mar",
        percentage: 95,
    },
    MonthlyAttendance {
        month: "Apr",
        percentage: 87,
    },
    MonthlyAttendance {
        month: "May",
        percentage: 91,
    },
];

const SUBJECT_ATTENDANCE: &[SubjectAttendance] = &[
    SubjectAttendance {
        subject: "Mathematics",
        percentage: 94,
    },
    SubjectAttendance {
        subject: "Physics",
        percentage: 89,
    },
    SubjectAttendance {
        subject: "Computer Science",
        percentage: 96,
    },
    SubjectAttendance {
        subject: "English",
        percentage: 82,
    },
    SubjectAttendance {
        subject: "Biology",
        percentage: 91,
    },
];

const PRODUCTIVITY_METRICS: &[ProductivityMetric] = &[
    ProductivityMetric {
        label: "Tasks Completed",
        value: 142,
        total: 168,
        percentage: 85,
    },
    ProductivityMetric {
        label: "Study Hours",
        value: 48,
        total: 60,
        percentage: 80,
    },
    ProductivityMetric {
        label: "Projects Finished",
        value: 8,
        total: 10,
        percentage: 80,
    },
];

pub const WEEKLY_SUMMARY: WeeklySummary = WeeklySummary {
    classes_attended: (18, 20),
    tasks_completed: (28, 32),
    study_hours: 12.5,
    achievements: 3,
};

const RECOMMENDATIONS: &[&str] = &[
    "Great attendance in Computer Science! Keep it up.",
    "Focus on improving English attendance (currently 82%).",
    "You're on track to achieve 90%+ overall attendance this semester.",
];

/// Last five months, oldest first.
pub fn monthly_attendance() -> &'static [MonthlyAttendance] {
    MONTHLY_ATTENDANCE
}

pub fn subject_attendance() -> &'static [SubjectAttendance] {
    SUBJECT_ATTENDANCE
}

pub fn productivity_metrics() -> &'static [ProductivityMetric] {
    PRODUCTIVITY_METRICS
}

pub fn recommendations() -> &'static [&'static str] {
    RECOMMENDATIONS
}

/// Progress-bar percentage for `value / total`, half-up. Zero total → 0.
pub fn percent_of(value: u32, total: u32) -> u8 {
    rounded_percent(value as usize, total as usize)
}
