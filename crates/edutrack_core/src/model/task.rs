//! Task domain model.
//!
//! # Responsibility
//! - Define the task record rendered by the tasks screen.
//! - Provide the priority rank used for pending-list ordering.
//!
//! # Invariants
//! - `id` is unique within one task list.
//! - `completed` is the only field mutated after seeding.

use serde::{Deserialize, Serialize};

/// Task identifier, unique within one task board.
pub type TaskId = u32;

/// Kind of work a task represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Study,
    Homework,
    Project,
    Skill,
}

impl TaskCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Study => "study",
            Self::Homework => "homework",
            Self::Project => "project",
            Self::Skill => "skill",
        }
    }
}

/// Task urgency. Ordered by `rank()` on the pending list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl TaskPriority {
    /// Sort rank: high=3, medium=2, low=1.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// One entry on the tasks screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Serialized as `type` to match the screen's naming.
    #[serde(rename = "type")]
    pub category: TaskCategory,
    pub subject: String,
    /// Estimated duration label, e.g. `30 min`.
    pub duration: String,
    pub priority: TaskPriority,
    pub completed: bool,
    pub description: String,
    /// Free-form label such as `Today`; absent for open-ended tasks.
    pub deadline: Option<String>,
}

impl Task {
    /// Creates a pending task with no deadline.
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        category: TaskCategory,
        priority: TaskPriority,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            category,
            subject: String::new(),
            duration: String::new(),
            priority,
            completed: false,
            description: String::new(),
            deadline: None,
        }
    }
}
