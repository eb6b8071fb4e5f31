//! Task aggregate root.

use super::{Comment, CommentId, Priority, TaskDomainError, TaskId, TaskStatus};
use crate::identity::domain::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Deserializer, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The editable fields of a task.
///
/// Used both to create a task and to replace the fields of an existing one;
/// identity, authorship, and comments are not part of the content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskContent {
    /// Required title; surrounding whitespace is trimmed.
    pub title: String,
    /// Free-form description; surrounding whitespace is trimmed.
    pub description: String,
    /// Free-form category tag.
    pub category: String,
    /// Urgency.
    pub priority: Priority,
    /// Assigned team member, if any.
    pub assignee: Option<UserId>,
    /// Calendar due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Workflow status.
    pub status: TaskStatus,
}

impl TaskContent {
    fn normalized(self, max_title_length: usize) -> Result<Self, TaskDomainError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        if title.chars().count() > max_title_length {
            return Err(TaskDomainError::TitleTooLong {
                max: max_title_length,
            });
        }
        Ok(Self {
            title: title.to_owned(),
            description: self.description.trim().to_owned(),
            ..self
        })
    }
}

/// A unit of work on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: String,
    priority: Priority,
    #[serde(default)]
    assignee: Option<UserId>,
    #[serde(default, deserialize_with = "deserialize_due_date")]
    due_date: Option<NaiveDate>,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    created_by: UserId,
    #[serde(default)]
    comments: Vec<Comment>,
    #[serde(default)]
    attachments: Vec<serde_json::Value>,
}

/// Accepts `null`, an empty string, or a `YYYY-MM-DD` date.
fn deserialize_due_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl Task {
    /// Creates a task with no comments or attachments.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::TitleTooLong`] when the title is invalid.
    pub fn new(
        id: TaskId,
        content: TaskContent,
        max_title_length: usize,
        created_by: UserId,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let TaskContent {
            title,
            description,
            category,
            priority,
            assignee,
            due_date,
            status,
        } = content.normalized(max_title_length)?;

        Ok(Self {
            id,
            title,
            description,
            category,
            priority,
            assignee,
            due_date,
            status,
            created_at: clock.utc(),
            created_by,
            comments: Vec::new(),
            attachments: Vec::new(),
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the category tag.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the assigned team member, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<UserId> {
        self.assignee
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the creator's user identifier.
    #[must_use]
    pub const fn created_by(&self) -> UserId {
        self.created_by
    }

    /// Returns the comments in the order they were added.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Returns the attachment metadata, carried through unchanged.
    #[must_use]
    pub fn attachments(&self) -> &[serde_json::Value] {
        &self.attachments
    }

    /// Returns the editable fields.
    #[must_use]
    pub fn content(&self) -> TaskContent {
        TaskContent {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            priority: self.priority,
            assignee: self.assignee,
            due_date: self.due_date,
            status: self.status,
        }
    }

    /// Returns whether the task is past due and not done.
    ///
    /// Only calendar dates are compared, so a task due today is never
    /// overdue.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.status.is_done() && self.due_date.is_some_and(|due| due < today)
    }

    /// Replaces the editable fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::TitleTooLong`]; the task is unchanged on error.
    pub fn apply(
        &mut self,
        content: TaskContent,
        max_title_length: usize,
    ) -> Result<(), TaskDomainError> {
        let TaskContent {
            title,
            description,
            category,
            priority,
            assignee,
            due_date,
            status,
        } = content.normalized(max_title_length)?;

        self.title = title;
        self.description = description;
        self.category = category;
        self.priority = priority;
        self.assignee = assignee;
        self.due_date = due_date;
        self.status = status;
        Ok(())
    }

    /// Moves the task to `status`.
    pub const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Appends a comment and returns it.
    ///
    /// The comment identifier is one more than the current comment count.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyCommentText`] or
    /// [`TaskDomainError::CommentTooLong`].
    pub fn add_comment(
        &mut self,
        author: UserId,
        text: &str,
        max_comment_length: usize,
        clock: &impl Clock,
    ) -> Result<Comment, TaskDomainError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyCommentText);
        }
        if trimmed.chars().count() > max_comment_length {
            return Err(TaskDomainError::CommentTooLong {
                max: max_comment_length,
            });
        }

        let count = u64::try_from(self.comments.len()).unwrap_or(u64::MAX);
        let comment = Comment::new(
            CommentId::new(count.saturating_add(1)),
            author,
            trimmed.to_owned(),
            clock.utc(),
        );
        self.comments.push(comment.clone());
        Ok(comment)
    }
}
