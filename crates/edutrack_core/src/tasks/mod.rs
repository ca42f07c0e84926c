//! Tasks screen state.
//!
//! # Responsibility
//! - Own the task list seeded at mount.
//! - Toggle completion and derive pending/completed views and the rate.
//!
//! # Invariants
//! - Tasks are never created, removed, or reordered after seeding.
//! - Derived views are recomputed on every read, never stored.
//! - Pending order is a stable sort by priority rank, high first.
//! - `completed + pending == total` at all times.

pub mod seed;

use crate::model::task::{Task, TaskId};
use log::debug;
use serde::{Deserialize, Serialize};

pub use seed::seed_tasks;

/// Completion rate at which the progress card celebrates.
pub const ACHIEVEMENT_THRESHOLD: u8 = 80;
pub const ACHIEVEMENT_TITLE: &str = "Excellent Progress!";
pub const ACHIEVEMENT_BODY: &str = "You're crushing your goals today! Keep up the great work.";

/// Derived counters shown in the progress card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Whole percent, rounded half-up.
    pub completion_rate: u8,
    /// Whether the "Excellent Progress!" card is shown.
    pub achievement: bool,
}

/// Task list owned by one mounted tasks screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl Default for TaskBoard {
    fn default() -> Self {
        Self::seeded()
    }
}

impl TaskBoard {
    /// Board holding the five seed tasks.
    pub fn seeded() -> Self {
        Self::from_tasks(seed_tasks())
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// All tasks in seed order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Flips the completion flag of task `id`.
    ///
    /// Returns `false` (and changes nothing) when no task matches.
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.completed = !task.completed;
        debug!(
            "event=task_toggled module=tasks status=ok task_id={} completed={}",
            id, task.completed
        );
        true
    }

    /// Snooze button. Intentionally leaves the board unchanged until the
    /// rescheduling behavior is decided.
    pub fn snooze(&mut self, id: TaskId) {
        debug!(
            "event=task_snoozed module=tasks status=noop task_id={} known={}",
            id,
            self.get(id).is_some()
        );
    }

    /// Incomplete tasks, high priority first, ties kept in seed order.
    pub fn pending(&self) -> Vec<&Task> {
        let mut pending = self
            .tasks
            .iter()
            .filter(|task| !task.completed)
            .collect::<Vec<_>>();
        // `sort_by` is stable, which keeps equal priorities in input order.
        pending.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));
        pending
    }

    /// Completed tasks in seed order.
    pub fn completed(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.completed).collect()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    /// `round(100 * completed / total)`, half-up. An empty board reports 0.
    pub fn completion_rate(&self) -> u8 {
        rounded_percent(self.completed_count(), self.tasks.len())
    }

    /// Rate at or above `ACHIEVEMENT_THRESHOLD`.
    pub fn shows_achievement(&self) -> bool {
        self.completion_rate() >= ACHIEVEMENT_THRESHOLD
    }

    /// Header line, e.g. "2 of 5 tasks completed".
    pub fn progress_label(&self) -> String {
        format!(
            "{} of {} tasks completed",
            self.completed_count(),
            self.tasks.len()
        )
    }

    pub fn summary(&self) -> TaskSummary {
        let completed = self.completed_count();
        TaskSummary {
            total: self.tasks.len(),
            completed,
            pending: self.tasks.len() - completed,
            completion_rate: self.completion_rate(),
            achievement: self.shows_achievement(),
        }
    }
}

/// Integer half-up rounding of `100 * part / whole`, clamped to `0..=100`.
pub(crate) fn rounded_percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole) as u64;
    let whole = whole as u64;
    ((200 * part + whole) / (2 * whole)) as u8
}
