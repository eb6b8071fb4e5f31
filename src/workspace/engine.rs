//! Session lifecycle and the command surface.

use chrono::NaiveDate;
use mockable::Clock;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

use super::{
    Theme,
    seed::{sample_ledger, sample_users},
};
use crate::config::EngineConfig;
use crate::identity::{
    adapters::Argon2CredentialHasher,
    domain::{IdentityDomainError, User, UserId},
    services::{IdentityError, IdentityStore, RegisterRequest},
};
use crate::notification::{NotificationKind, NotificationSink};
use crate::storage::{KeyValueStore, Persistence, StorageKey};
use crate::task::{
    adapters::ActionAnnouncer,
    domain::{
        Comment, Task, TaskDomainError, TaskId, TaskLedger, TaskStatus, TeamMember, TeamRoster,
    },
    ports::TaskChangeListener,
    query::{
        CalendarMonth, KanbanBoard, SortKey, TaskFilter, TaskStats, filter_tasks, overdue_tasks,
        sort_tasks,
    },
    services::{TaskChanges, TaskDraft, TaskLimits, TaskStore, TaskStoreError},
};

/// Errors returned by workspace commands.
///
/// Errors from commands have already been reported to the notification sink
/// when they are returned; errors from [`Workspace::init`] have not.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// An account operation failed.
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// A task operation failed.
    #[error(transparent)]
    Task(#[from] TaskStoreError),
}

/// Result type for workspace commands.
pub type WorkspaceResult<T> = Result<T, WorkspaceError>;

/// One session over the engine's collections.
///
/// Created with [`Workspace::init`] and closed with [`Workspace::teardown`].
/// Hosts hold the workspace by value and pass it by reference to whatever
/// needs it; there is no global state.
pub struct Workspace<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    persistence: Persistence<S>,
    sink: Arc<dyn NotificationSink>,
    clock: Arc<C>,
    identity: IdentityStore<S>,
    tasks: TaskStore<S, C>,
    theme: Theme,
    degraded: bool,
}

impl<S, C> Workspace<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Loads every collection from `store` and restores the session.
    ///
    /// When `config.seed_sample_data` is set, absent `users` and `tasks`
    /// keys are filled with sample data. An absent `teamMembers` key is
    /// always derived from the users. `currentUser` and `theme` are never
    /// seeded. Values that cannot be read are reported and treated as
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Identity`] when the credential parameters
    /// are invalid or sample accounts cannot be hashed.
    pub fn init(
        store: Arc<S>,
        sink: Arc<dyn NotificationSink>,
        clock: Arc<C>,
        config: &EngineConfig,
    ) -> WorkspaceResult<Self> {
        let persistence = Persistence::new(store, Arc::clone(&sink));
        let hasher = Argon2CredentialHasher::from_config(&config.credentials)
            .map_err(IdentityError::from)?;
        let mut degraded = false;

        let users = match persistence.load_or_none::<Vec<User>>(StorageKey::Users) {
            Some(users) => users,
            None if config.seed_sample_data => {
                let seeded = sample_users(&hasher)?;
                degraded |= persistence.save(StorageKey::Users, &seeded).is_err();
                tracing::info!(count = seeded.len(), "seeded sample users");
                seeded
            }
            None => Vec::new(),
        };

        let roster = match persistence.load_or_none::<TeamRoster>(StorageKey::TeamMembers) {
            Some(roster) => roster,
            None => {
                let derived = TeamRoster::from_users(&users);
                degraded |= persistence.save(StorageKey::TeamMembers, &derived).is_err();
                derived
            }
        };

        let ledger = match persistence.load_or_none::<TaskLedger>(StorageKey::Tasks) {
            Some(ledger) => ledger,
            None if config.seed_sample_data => {
                let seeded = sample_ledger(&*clock).map_err(TaskStoreError::from)?;
                degraded |= persistence.save(StorageKey::Tasks, &seeded).is_err();
                tracing::info!(count = seeded.tasks().len(), "seeded sample tasks");
                seeded
            }
            None => TaskLedger::new(),
        };

        let current = persistence.load_or_none::<UserId>(StorageKey::CurrentUser);
        let theme = persistence
            .load_or_none::<Theme>(StorageKey::Theme)
            .unwrap_or_default();

        let identity = IdentityStore::new(persistence.clone(), Arc::new(hasher), users, current);
        let mut tasks = TaskStore::new(
            persistence.clone(),
            Arc::clone(&clock),
            TaskLimits::from(config),
            ledger,
            roster,
        );
        tasks.subscribe(Arc::new(ActionAnnouncer::new(Arc::clone(&sink))));
        tasks.act_as(identity.current_user().map(User::id));

        tracing::info!(
            users = identity.users().len(),
            tasks = tasks.tasks().len(),
            signed_in = identity.current_user().is_some(),
            "workspace ready"
        );
        Ok(Self {
            persistence,
            sink,
            clock,
            identity,
            tasks,
            theme,
            degraded,
        })
    }

    /// Closes the session.
    ///
    /// Every mutation has already been written, so nothing is flushed here.
    pub fn teardown(self) {
        tracing::info!(degraded = self.is_degraded(), "workspace closed");
    }

    /// Registers an additional change listener.
    pub fn subscribe(&mut self, listener: Arc<dyn TaskChangeListener>) {
        self.tasks.subscribe(listener);
    }

    /// Returns the identity store.
    #[must_use]
    pub const fn identity(&self) -> &IdentityStore<S> {
        &self.identity
    }

    /// Returns the task store.
    #[must_use]
    pub const fn task_store(&self) -> &TaskStore<S, C> {
        &self.tasks
    }

    /// Returns whether any storage write failed during this session.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.degraded || self.identity.is_degraded() || self.tasks.is_degraded()
    }

    /// Returns today's date in the local time zone.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    /// Registers an account and adds it to the team roster.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Identity`] for invalid input, a duplicate
    /// email, or a hashing failure.
    pub fn register(&mut self, request: RegisterRequest) -> WorkspaceResult<User> {
        match self.identity.register(request) {
            Ok(user) => {
                self.tasks.add_member(TeamMember::from_user(&user));
                self.notify("Registration successful! Please login.", NotificationKind::Success);
                Ok(user)
            }
            Err(err) => Err(self.reject_identity(err)),
        }
    }

    /// Signs in and makes the user the actor for subsequent commands.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Identity`] with
    /// [`IdentityError::InvalidCredentials`] when no account matches.
    pub fn login(&mut self, email: &str, password: &str) -> WorkspaceResult<User> {
        match self.identity.login(email, password) {
            Ok(user) => {
                self.tasks.act_as(Some(user.id()));
                self.notify("Login successful!", NotificationKind::Success);
                Ok(user)
            }
            Err(err) => Err(self.reject_identity(err)),
        }
    }

    /// Signs out.
    pub fn logout(&mut self) {
        self.identity.logout();
        self.tasks.act_as(None);
    }

    /// Returns the signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.identity.current_user()
    }

    /// Returns every task in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.task(id)
    }

    /// Returns the team members tasks can be assigned to.
    #[must_use]
    pub fn team_members(&self) -> &[TeamMember] {
        self.tasks.team_members()
    }

    /// Creates a task authored by the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Task`] when nobody is signed in or the title
    /// is invalid.
    pub fn create_task(&mut self, draft: TaskDraft) -> WorkspaceResult<Task> {
        match self.tasks.create_task(draft) {
            Ok(task) => {
                self.notify("Task created successfully!", NotificationKind::Success);
                Ok(task)
            }
            Err(err) => Err(self.reject_task(err, "Failed to save task")),
        }
    }

    /// Edits a task.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Task`] when the task is missing or the new
    /// title is invalid.
    pub fn update_task(&mut self, id: TaskId, changes: TaskChanges) -> WorkspaceResult<Task> {
        match self.tasks.update_task(id, changes) {
            Ok(task) => {
                self.notify("Task updated successfully!", NotificationKind::Success);
                Ok(task)
            }
            Err(err) => Err(self.reject_task(err, "Failed to save task")),
        }
    }

    /// Deletes a task and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Task`] when the task is missing.
    pub fn delete_task(&mut self, id: TaskId) -> WorkspaceResult<Task> {
        match self.tasks.delete_task(id) {
            Ok(task) => {
                self.notify("Task deleted successfully!", NotificationKind::Success);
                Ok(task)
            }
            Err(err) => Err(self.reject_task(err, "Failed to delete task")),
        }
    }

    /// Moves a task to another board column.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Task`] when the task is missing.
    pub fn set_status(&mut self, id: TaskId, status: TaskStatus) -> WorkspaceResult<Task> {
        match self.tasks.set_status(id, status) {
            Ok(task) => {
                self.notify(&format!("Task moved to {status}"), NotificationKind::Success);
                Ok(task)
            }
            Err(err) => Err(self.reject_task(err, "Failed to update task status")),
        }
    }

    /// Adds a comment by the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::Task`] when nobody is signed in, the task is
    /// missing, or the text is blank or too long.
    pub fn add_comment(&mut self, task_id: TaskId, text: &str) -> WorkspaceResult<Comment> {
        let result = match self.identity.current_user().map(User::id) {
            Some(author) => self.tasks.add_comment(task_id, author, text),
            None => Err(TaskStoreError::NotAuthenticated),
        };
        match result {
            Ok(comment) => {
                self.notify("Comment added successfully!", NotificationKind::Success);
                Ok(comment)
            }
            Err(err) => Err(self.reject_task(err, "Failed to add comment")),
        }
    }

    /// Filters then sorts the current snapshot, using today's date.
    #[must_use]
    pub fn query(&self, filter: &TaskFilter, sort: SortKey) -> Vec<Task> {
        sort_tasks(&filter_tasks(self.tasks(), filter, self.today()), sort)
    }

    /// Returns the overdue tasks.
    #[must_use]
    pub fn overdue(&self) -> Vec<Task> {
        overdue_tasks(self.tasks(), self.today())
    }

    /// Returns the header counters.
    #[must_use]
    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(self.tasks())
    }

    /// Returns the board columns over the whole collection.
    #[must_use]
    pub fn board(&self) -> KanbanBoard {
        KanbanBoard::from_tasks(self.tasks())
    }

    /// Returns the tasks due in `month`, keyed by day.
    #[must_use]
    pub fn calendar(&self, month: CalendarMonth) -> BTreeMap<NaiveDate, Vec<Task>> {
        month.tasks_by_day(self.tasks())
    }

    /// Warns the signed-in user about their overdue tasks.
    ///
    /// Sends one `warning` per overdue task assigned to the user and returns
    /// those tasks. Does nothing when nobody is signed in.
    pub fn check_overdue(&self) -> Vec<Task> {
        let Some(user) = self.identity.current_user().map(User::id) else {
            return Vec::new();
        };
        let overdue: Vec<Task> = self
            .overdue()
            .into_iter()
            .filter(|task| task.assignee() == Some(user))
            .collect();
        for task in &overdue {
            if let Some(due) = task.due_date() {
                self.notify(
                    &format!(
                        "Task \"{}\" is overdue! Due: {}",
                        task.title(),
                        due.format("%Y-%m-%d")
                    ),
                    NotificationKind::Warning,
                );
            }
        }
        overdue
    }

    /// Returns the current theme.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Switches to the other theme, stores it, and returns it.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if self
            .persistence
            .save(StorageKey::Theme, &self.theme)
            .is_err()
        {
            self.degraded = true;
        }
        tracing::debug!(theme = %self.theme, "theme changed");
        self.theme
    }

    fn notify(&self, message: &str, kind: NotificationKind) {
        self.sink.notify(message, kind);
    }

    fn reject_identity(&self, err: IdentityError) -> WorkspaceError {
        let message = match &err {
            IdentityError::Validation(IdentityDomainError::PasswordMismatch) => {
                "Passwords do not match.".to_owned()
            }
            IdentityError::DuplicateEmail(_) => "Email already registered.".to_owned(),
            IdentityError::InvalidCredentials => "Login failed. Invalid credentials.".to_owned(),
            IdentityError::Validation(other) => capitalized(&other.to_string()),
            IdentityError::Hashing(_) => "Failed to process credentials".to_owned(),
        };
        self.notify(&message, NotificationKind::Error);
        err.into()
    }

    fn reject_task(&self, err: TaskStoreError, fallback: &str) -> WorkspaceError {
        let message = match &err {
            TaskStoreError::Validation(TaskDomainError::EmptyTitle) => {
                "Task title is required.".to_owned()
            }
            TaskStoreError::Validation(other) => capitalized(&other.to_string()),
            TaskStoreError::NotAuthenticated => "Please login first.".to_owned(),
            TaskStoreError::TaskNotFound(_) => fallback.to_owned(),
        };
        self.notify(&message, NotificationKind::Error);
        err.into()
    }
}

fn capitalized(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
