//! The stored task collection and its identifier counter.

use super::{Task, TaskId};
use serde::{Deserialize, Serialize};

/// Task collection plus the next identifier to hand out.
///
/// The counter only moves forward, so identifiers of deleted tasks are never
/// reused. Documents written as a bare task array are still accepted; the
/// counter is then derived from the highest stored identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LedgerDocument", rename_all = "camelCase")]
pub struct TaskLedger {
    next_task_id: TaskId,
    tasks: Vec<Task>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LedgerDocument {
    Current {
        #[serde(rename = "nextTaskId")]
        next_task_id: TaskId,
        tasks: Vec<Task>,
    },
    Bare(Vec<Task>),
}

impl From<LedgerDocument> for TaskLedger {
    fn from(document: LedgerDocument) -> Self {
        match document {
            LedgerDocument::Current {
                next_task_id,
                tasks,
            } => Self::with_counter(tasks, next_task_id),
            LedgerDocument::Bare(tasks) => Self::from_tasks(tasks),
        }
    }
}

impl Default for TaskLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_task_id: TaskId::FIRST,
            tasks: Vec::new(),
        }
    }

    /// Creates a ledger whose counter follows the highest task identifier.
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self::with_counter(tasks, TaskId::FIRST)
    }

    fn with_counter(tasks: Vec<Task>, counter: TaskId) -> Self {
        let floor = tasks
            .iter()
            .map(Task::id)
            .max()
            .map_or(TaskId::FIRST, TaskId::next);
        Self {
            next_task_id: counter.max(floor),
            tasks,
        }
    }

    /// Returns the identifier the next created task will receive.
    #[must_use]
    pub const fn next_task_id(&self) -> TaskId {
        self.next_task_id
    }

    /// Returns the tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Finds a task by identifier for modification.
    pub fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    /// Appends a task, moving the counter past its identifier.
    pub fn push(&mut self, task: Task) {
        if task.id() >= self.next_task_id {
            self.next_task_id = task.id().next();
        }
        self.tasks.push(task);
    }

    /// Removes and returns the task with identifier `id`.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id() == id)?;
        Some(self.tasks.remove(position))
    }
}
