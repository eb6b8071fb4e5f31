//! Task store: the task collection, the team roster, and change events.

use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

use super::{TaskChanges, TaskDraft};
use crate::config::EngineConfig;
use crate::identity::domain::UserId;
use crate::storage::{KeyValueStore, Persistence, StorageKey};
use crate::task::{
    domain::{
        Comment, Task, TaskDomainError, TaskId, TaskLedger, TaskStatus, TeamMember, TeamRoster,
    },
    ports::{TaskAction, TaskChange, TaskChangeListener},
};

/// Service-level errors for task operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskStoreError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// No task has the given identifier.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The operation needs a signed-in user.
    #[error("no user is signed in")]
    NotAuthenticated,
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Length limits applied to task input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskLimits {
    /// Maximum title length in characters.
    pub max_title_length: usize,
    /// Maximum comment length in characters.
    pub max_comment_length: usize,
}

impl From<&EngineConfig> for TaskLimits {
    fn from(config: &EngineConfig) -> Self {
        Self {
            max_title_length: config.max_title_length,
            max_comment_length: config.max_comment_length,
        }
    }
}

impl Default for TaskLimits {
    fn default() -> Self {
        Self::from(&EngineConfig::default())
    }
}

/// Owns the task collection and the team roster.
///
/// Every successful mutation writes the whole collection once and then
/// notifies each subscribed [`TaskChangeListener`]. Rejected commands leave
/// memory, storage, and listeners untouched.
pub struct TaskStore<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    persistence: Persistence<S>,
    clock: Arc<C>,
    limits: TaskLimits,
    ledger: TaskLedger,
    roster: TeamRoster,
    listeners: Vec<Arc<dyn TaskChangeListener>>,
    actor: Option<UserId>,
    degraded: bool,
}

impl<S, C> TaskStore<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Creates a store over an initial ledger and roster.
    #[must_use]
    pub fn new(
        persistence: Persistence<S>,
        clock: Arc<C>,
        limits: TaskLimits,
        ledger: TaskLedger,
        roster: TeamRoster,
    ) -> Self {
        Self {
            persistence,
            clock,
            limits,
            ledger,
            roster,
            listeners: Vec::new(),
            actor: None,
            degraded: false,
        }
    }

    /// Registers a listener for subsequent changes.
    pub fn subscribe(&mut self, listener: Arc<dyn TaskChangeListener>) {
        self.listeners.push(listener);
    }

    /// Sets the user issuing subsequent commands.
    ///
    /// The actor becomes the creator of new tasks and is attached to every
    /// change event.
    pub const fn act_as(&mut self, actor: Option<UserId>) {
        self.actor = actor;
    }

    /// Returns the user issuing commands, if any.
    #[must_use]
    pub const fn actor(&self) -> Option<UserId> {
        self.actor
    }

    /// Returns every task in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.ledger.tasks()
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.ledger.find(id)
    }

    /// Returns the task collection with its identifier counter.
    #[must_use]
    pub const fn ledger(&self) -> &TaskLedger {
        &self.ledger
    }

    /// Returns the team members tasks can be assigned to.
    #[must_use]
    pub fn team_members(&self) -> &[TeamMember] {
        self.roster.members()
    }

    /// Returns the team roster.
    #[must_use]
    pub const fn roster(&self) -> &TeamRoster {
        &self.roster
    }

    /// Finds a team member by user identifier.
    #[must_use]
    pub fn find_member(&self, id: UserId) -> Option<&TeamMember> {
        self.roster.find(id)
    }

    /// Returns whether a storage write failed during this session.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Returns whether `task` is past due on `today`.
    #[must_use]
    pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
        task.is_overdue(today)
    }

    /// Adds or replaces a team member and writes the roster.
    pub fn add_member(&mut self, member: TeamMember) {
        tracing::debug!(user_id = %member.id(), "adding team member");
        self.roster.upsert(member);
        if self
            .persistence
            .save(StorageKey::TeamMembers, &self.roster)
            .is_err()
        {
            self.degraded = true;
        }
    }

    /// Creates a task authored by the current actor.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotAuthenticated`] when no actor is set, or
    /// [`TaskStoreError::Validation`] when the title is invalid.
    pub fn create_task(&mut self, draft: TaskDraft) -> TaskStoreResult<Task> {
        let created_by = self.actor.ok_or(TaskStoreError::NotAuthenticated)?;
        let task = Task::new(
            self.ledger.next_task_id(),
            draft.into_content(),
            self.limits.max_title_length,
            created_by,
            &*self.clock,
        )?;

        self.ledger.push(task.clone());
        tracing::info!(task_id = %task.id(), "created task");
        self.commit(TaskAction::Created, task.clone(), self.actor);
        Ok(task)
    }

    /// Replaces the fields named in `changes`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::TaskNotFound`] or
    /// [`TaskStoreError::Validation`].
    pub fn update_task(&mut self, id: TaskId, changes: TaskChanges) -> TaskStoreResult<Task> {
        let max_title_length = self.limits.max_title_length;
        let task = self
            .ledger
            .find_mut(id)
            .ok_or(TaskStoreError::TaskNotFound(id))?;
        let content = changes.merge(task.content());
        task.apply(content, max_title_length)?;

        let updated = task.clone();
        tracing::info!(task_id = %id, "updated task");
        self.commit(TaskAction::Updated, updated.clone(), self.actor);
        Ok(updated)
    }

    /// Removes a task and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::TaskNotFound`].
    pub fn delete_task(&mut self, id: TaskId) -> TaskStoreResult<Task> {
        let removed = self
            .ledger
            .remove(id)
            .ok_or(TaskStoreError::TaskNotFound(id))?;
        tracing::info!(task_id = %id, "deleted task");
        self.commit(TaskAction::Deleted, removed.clone(), self.actor);
        Ok(removed)
    }

    /// Moves a task to `status`.
    ///
    /// Any status may follow any other.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::TaskNotFound`].
    pub fn set_status(&mut self, id: TaskId, status: TaskStatus) -> TaskStoreResult<Task> {
        let task = self
            .ledger
            .find_mut(id)
            .ok_or(TaskStoreError::TaskNotFound(id))?;
        task.set_status(status);

        let updated = task.clone();
        tracing::info!(task_id = %id, status = %status, "changed task status");
        self.commit(TaskAction::StatusChanged, updated.clone(), self.actor);
        Ok(updated)
    }

    /// Appends a comment by `author`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::TaskNotFound`] or
    /// [`TaskStoreError::Validation`] for empty or oversized text.
    pub fn add_comment(
        &mut self,
        task_id: TaskId,
        author: UserId,
        text: &str,
    ) -> TaskStoreResult<Comment> {
        let max_comment_length = self.limits.max_comment_length;
        let task = self
            .ledger
            .find_mut(task_id)
            .ok_or(TaskStoreError::TaskNotFound(task_id))?;
        let comment = task.add_comment(author, text, max_comment_length, &*self.clock)?;

        let updated = task.clone();
        tracing::info!(task_id = %task_id, comment_id = %comment.id(), "added comment");
        self.commit(TaskAction::Commented, updated, Some(author));
        Ok(comment)
    }

    fn commit(&mut self, action: TaskAction, task: Task, actor: Option<UserId>) {
        if self.persistence.save(StorageKey::Tasks, &self.ledger).is_err() {
            self.degraded = true;
        }
        let change = TaskChange {
            action,
            task,
            actor,
        };
        for listener in &self.listeners {
            listener.on_task_change(&change, &self.roster);
        }
    }
}
