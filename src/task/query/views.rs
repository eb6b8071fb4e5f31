//! Derived views: overdue list, counters, and board columns.

use chrono::NaiveDate;

use crate::task::domain::{Task, TaskStatus};

/// Returns the overdue tasks in input order.
#[must_use]
pub fn overdue_tasks(tasks: &[Task], today: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.is_overdue(today))
        .cloned()
        .collect()
}

/// Task counters for the board header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    /// Number of tasks.
    pub total: usize,
    /// Tasks not yet done.
    pub pending: usize,
    /// Tasks in `todo`.
    pub todo: usize,
    /// Tasks in `inProgress`.
    pub in_progress: usize,
    /// Tasks in `done`.
    pub done: usize,
}

impl TaskStats {
    /// Counts `tasks`.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        tasks.iter().fold(Self::default(), |mut stats, task| {
            stats.total += 1;
            match task.status() {
                TaskStatus::Todo => stats.todo += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Done => stats.done += 1,
            }
            if !task.status().is_done() {
                stats.pending += 1;
            }
            stats
        })
    }

    /// Returns the count for `status`.
    #[must_use]
    pub const fn count(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Todo => self.todo,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Done => self.done,
        }
    }
}

/// Tasks grouped into status columns, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KanbanBoard {
    todo: Vec<Task>,
    in_progress: Vec<Task>,
    done: Vec<Task>,
}

impl KanbanBoard {
    /// Groups `tasks` by status.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut board = Self::default();
        for task in tasks {
            board.column_mut(task.status()).push(task.clone());
        }
        board
    }

    /// Returns the column for `status`.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    /// Returns every column in board order.
    #[must_use]
    pub fn columns(&self) -> [(TaskStatus, &[Task]); 3] {
        TaskStatus::ALL.map(|status| (status, self.column(status)))
    }

    const fn column_mut(&mut self, status: TaskStatus) -> &mut Vec<Task> {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Done => &mut self.done,
        }
    }
}
