//! Change notification port for task mutations.

use crate::identity::domain::UserId;
use crate::task::domain::{Task, TeamRoster};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of mutation that produced a change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskAction {
    /// A task was created.
    Created,
    /// Task fields were replaced.
    Updated,
    /// A task was removed.
    Deleted,
    /// A task moved to another status.
    StatusChanged,
    /// A comment was appended.
    Commented,
}

impl TaskAction {
    /// Returns the past-tense phrase used in user-facing messages.
    #[must_use]
    pub const fn past_tense(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
            Self::StatusChanged => "status updated",
            Self::Commented => "commented",
        }
    }
}

impl fmt::Display for TaskAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.past_tense())
    }
}

/// A completed task mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChange {
    /// What happened.
    pub action: TaskAction,
    /// The task after the mutation; for deletions, the removed task.
    pub task: Task,
    /// The signed-in user who issued the command, if known.
    pub actor: Option<UserId>,
}

/// Observer of task mutations.
///
/// Called once per successful mutation, after the collection has been
/// written. Never called for rejected commands.
pub trait TaskChangeListener: Send + Sync {
    /// Handles one change; `roster` is the roster at the time of the change.
    fn on_task_change(&self, change: &TaskChange, roster: &TeamRoster);
}
