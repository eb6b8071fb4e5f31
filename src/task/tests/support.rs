//! Shared fixtures for task tests.

use chrono::NaiveDate;

use crate::identity::domain::UserId;
use crate::task::domain::{Priority, Task, TaskContent, TaskId, TaskStatus};
use crate::testing::FixedClock;

pub(super) const MAX_TITLE: usize = 200;

/// Wednesday 15 October 2025.
pub(super) fn today() -> NaiveDate {
    date(2025, 10, 15)
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

pub(super) fn clock() -> FixedClock {
    FixedClock::at_noon(today())
}

pub(super) fn content(title: &str) -> TaskContent {
    TaskContent {
        title: title.to_owned(),
        ..TaskContent::default()
    }
}

pub(super) fn task_with(id: u64, content: TaskContent) -> Task {
    Task::new(TaskId::new(id), content, MAX_TITLE, UserId::new(1), &clock())
        .expect("valid task")
}

pub(super) fn prioritized(id: u64, priority: Priority) -> Task {
    task_with(
        id,
        TaskContent {
            priority,
            ..content(&format!("Task {id}"))
        },
    )
}

pub(super) fn due(id: u64, due_date: Option<NaiveDate>, status: TaskStatus) -> Task {
    task_with(
        id,
        TaskContent {
            due_date,
            status,
            ..content(&format!("Task {id}"))
        },
    )
}

pub(super) fn assigned(id: u64, assignee: Option<u64>) -> Task {
    task_with(
        id,
        TaskContent {
            assignee: assignee.map(UserId::new),
            ..content(&format!("Task {id}"))
        },
    )
}

pub(super) fn ids(tasks: &[Task]) -> Vec<u64> {
    tasks.iter().map(|task| task.id().value()).collect()
}
