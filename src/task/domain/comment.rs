//! Task comments.

use super::CommentId;
use crate::identity::domain::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment attached to a task. Comments are never edited or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    id: CommentId,
    user_id: UserId,
    text: String,
    timestamp: DateTime<Utc>,
}

impl Comment {
    pub(crate) const fn new(
        id: CommentId,
        user_id: UserId,
        text: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            text,
            timestamp,
        }
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the author's user identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the comment text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns when the comment was written.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
