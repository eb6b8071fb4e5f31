//! Request payloads for creating and editing tasks.

use chrono::NaiveDate;

use crate::identity::domain::UserId;
use crate::task::domain::{Priority, TaskContent, TaskStatus};

/// Request payload for creating a task.
///
/// Unset fields default to an empty description and category, medium
/// priority, no assignee, no due date, and the `todo` status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    content: TaskContent,
}

impl TaskDraft {
    /// Creates a draft with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            content: TaskContent {
                title: title.into(),
                ..TaskContent::default()
            },
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.content.description = description.into();
        self
    }

    /// Sets the category tag.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.content.category = category.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.content.priority = priority;
        self
    }

    /// Assigns the task to a team member.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: UserId) -> Self {
        self.content.assignee = Some(assignee);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.content.due_date = Some(due_date);
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.content.status = status;
        self
    }

    pub(crate) fn into_content(self) -> TaskContent {
        self.content
    }
}

/// Request payload for editing a task.
///
/// Only the fields that were set are replaced. Assignee and due date take an
/// `Option` so they can be cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    priority: Option<Priority>,
    assignee: Option<Option<UserId>>,
    due_date: Option<Option<NaiveDate>>,
    status: Option<TaskStatus>,
}

impl TaskChanges {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the category tag.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the assignee; `None` unassigns the task.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: Option<UserId>) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Replaces the due date; `None` clears it.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub(crate) fn merge(self, base: TaskContent) -> TaskContent {
        TaskContent {
            title: self.title.unwrap_or(base.title),
            description: self.description.unwrap_or(base.description),
            category: self.category.unwrap_or(base.category),
            priority: self.priority.unwrap_or(base.priority),
            assignee: self.assignee.unwrap_or(base.assignee),
            due_date: self.due_date.unwrap_or(base.due_date),
            status: self.status.unwrap_or(base.status),
        }
    }
}

impl From<TaskContent> for TaskChanges {
    /// Builds a change set replacing every editable field, as a full edit
    /// form does.
    fn from(content: TaskContent) -> Self {
        Self {
            title: Some(content.title),
            description: Some(content.description),
            category: Some(content.category),
            priority: Some(content.priority),
            assignee: Some(content.assignee),
            due_date: Some(content.due_date),
            status: Some(content.status),
        }
    }
}
