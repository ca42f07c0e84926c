//! Dashboard content shared by the three dashboard routes.

use crate::model::task::{TaskCategory, TaskPriority};
use serde::{Deserialize, Serialize};

pub const GREETING: &str = "Good morning, Alex!";
pub const ATTENDANCE_PERCENTAGE: u8 = 87;
pub const TASKS_COMPLETED: u32 = 4;
pub const TASKS_TOTAL: u32 = 6;

/// Status of a class on today's schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassStatus {
    Present,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledClass {
    pub id: u32,
    pub subject: &'static str,
    pub time: &'static str,
    pub room: &'static str,
    pub teacher: &'static str,
    pub status: ClassStatus,
}

/// Suggested study item with a "Start" button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub id: u32,
    pub title: &'static str,
    pub category: TaskCategory,
    pub duration: &'static str,
    pub priority: TaskPriority,
}

const TODAY_CLASSES: &[ScheduledClass] = &[
    ScheduledClass {
        id: 1,
        subject: "Mathematics",
        time: "09:00 - 10:30",
        room: "Room 101",
        teacher: "Dr. Smith",
        status: ClassStatus::Present,
    },
    ScheduledClass {
        id: 2,
        subject: "Physics",
        time: "11:00 - 12:30",
        room: "Lab 2",
        teacher: "Prof. Johnson",
        status: ClassStatus::Present,
    },
    ScheduledClass {
        id: 3,
        subject: "Computer Science",
        time: "14:00 - 15:30",
        room: "Room 205",
        teacher: "Dr. Brown",
        status: ClassStatus::Upcoming,
    },
    ScheduledClass {
        id: 4,
        subject: "English Literature",
        time: "16:00 - 17:30",
        room: "Room 301",
        teacher: "Ms. Davis",
        status: ClassStatus::Upcoming,
    },
];

const SUGGESTIONS: &[Suggestion] = &[
    Suggestion {
        id: 1,
        title: "Review Physics Lab Notes",
        category: TaskCategory::Study,
        duration: "30 min",
        priority: TaskPriority::High,
    },
    Suggestion {
        id: 2,
        title: "Practice Math Problems",
        category: TaskCategory::Homework,
        duration: "45 min",
        priority: TaskPriority::Medium,
    },
    Suggestion {
        id: 3,
        title: "Prepare CS Project Proposal",
        category: TaskCategory::Project,
        duration: "60 min",
        priority: TaskPriority::High,
    },
];

pub fn today_classes() -> &'static [ScheduledClass] {
    TODAY_CLASSES
}

pub fn suggestions() -> &'static [Suggestion] {
    SUGGESTIONS
}
