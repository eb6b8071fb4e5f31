//! Notification kinds and recorded notification values.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Severity of a notification shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// An operation completed.
    Success,
    /// An operation failed.
    Error,
    /// Informational message about someone else's activity.
    Info,
    /// Something needs attention, such as an overdue task.
    Warning,
}

impl NotificationKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for NotificationKind {
    type Error = ParseNotificationKindError;

    fn try_from(value: &str) -> Result<Self, ParseNotificationKindError> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            _ => Err(ParseNotificationKindError(value.to_owned())),
        }
    }
}

/// Error returned while parsing a notification kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown notification kind: {0}")]
pub struct ParseNotificationKindError(pub String);

/// A single delivered notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Text shown to the user.
    pub message: String,
    /// Severity of the message.
    pub kind: NotificationKind,
}

impl Notification {
    /// Creates a notification value.
    #[must_use]
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}
