//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or changing task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the configured limit.
    #[error("task title exceeds {max} characters")]
    TitleTooLong {
        /// Configured limit in characters.
        max: usize,
    },

    /// The comment text is empty after trimming.
    #[error("comment text must not be empty")]
    EmptyCommentText,

    /// The comment text exceeds the configured limit.
    #[error("comment text exceeds {max} characters")]
    CommentTooLong {
        /// Configured limit in characters.
        max: usize,
    },
}

/// Error returned while parsing a task priority.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing a task status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
