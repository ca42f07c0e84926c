//! Seed list mounted by the tasks screen.

use crate::model::task::{Task, TaskCategory, TaskPriority};

struct SeedTask {
    id: u32,
    title: &'static str,
    category: TaskCategory,
    subject: &'static str,
    duration: &'static str,
    priority: TaskPriority,
    completed: bool,
    description: &'static str,
    deadline: Option<&'static str>,
}

const SEED_TASKS: &[SeedTask] = &[
    SeedTask {
        id: 1,
        title: "Review Physics Lab Notes",
        category: TaskCategory::Study,
        subject: "Physics",
        duration: "30 min",
        priority: TaskPriority::High,
        completed: false,
        description: "Go through yesterday's lab experiment notes and formulas",
        deadline: Some("Today"),
    },
    SeedTask {
        id: 2,
        title: "Complete Math Problem Set #12",
        category: TaskCategory::Homework,
        subject: "Mathematics",
        duration: "45 min",
        priority: TaskPriority::High,
        completed: false,
        description: "Solve problems 1-20 from chapter 8",
        deadline: Some("Tomorrow"),
    },
    SeedTask {
        id: 3,
        title: "Practice Python Coding",
        category: TaskCategory::Skill,
        subject: "Computer Science",
        duration: "60 min",
        priority: TaskPriority::Medium,
        completed: true,
        description: "Work on data structures and algorithms",
        deadline: None,
    },
    SeedTask {
        id: 4,
        title: "Prepare Literature Essay Outline",
        category: TaskCategory::Project,
        subject: "English",
        duration: "40 min",
        priority: TaskPriority::Medium,
        completed: false,
        description: "Create detailed outline for upcoming essay on modern poetry",
        deadline: None,
    },
    SeedTask {
        id: 5,
        title: "Read Chapter 9: Cell Biology",
        category: TaskCategory::Study,
        subject: "Biology",
        duration: "35 min",
        priority: TaskPriority::Low,
        completed: true,
        description: "Understanding cellular processes and mitosis",
        deadline: None,
    },
];

/// Fresh copy of the five seeded tasks (ids 1-5, ids 3 and 5 completed).
pub fn seed_tasks() -> Vec<Task> {
    SEED_TASKS
        .iter()
        .map(|seed| Task {
            id: seed.id,
            title: seed.title.to_string(),
            category: seed.category,
            subject: seed.subject.to_string(),
            duration: seed.duration.to_string(),
            priority: seed.priority,
            completed: seed.completed,
            description: seed.description.to_string(),
            deadline: seed.deadline.map(str::to_string),
        })
        .collect()
}
