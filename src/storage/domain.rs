//! Well-known storage keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Key under which one engine collection or setting is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageKey {
    /// Registered users.
    #[serde(rename = "users")]
    Users,
    /// The task ledger.
    #[serde(rename = "tasks")]
    Tasks,
    /// The team roster derived from users.
    #[serde(rename = "teamMembers")]
    TeamMembers,
    /// Identifier of the signed-in user.
    #[serde(rename = "currentUser")]
    CurrentUser,
    /// Display theme preference.
    #[serde(rename = "theme")]
    Theme,
}

impl StorageKey {
    /// All keys in load order.
    pub const ALL: [Self; 5] = [
        Self::Users,
        Self::TeamMembers,
        Self::Tasks,
        Self::CurrentUser,
        Self::Theme,
    ];

    /// Returns the key string used by the underlying store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Tasks => "tasks",
            Self::TeamMembers => "teamMembers",
            Self::CurrentUser => "currentUser",
            Self::Theme => "theme",
        }
    }

    /// Returns whether an absent value should be replaced by seed data.
    #[must_use]
    pub const fn seeds_on_absence(self) -> bool {
        matches!(self, Self::Users | Self::Tasks | Self::TeamMembers)
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for StorageKey {
    type Error = ParseStorageKeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| ParseStorageKeyError(value.to_owned()))
    }
}

/// Error returned while parsing a storage key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown storage key: {0}")]
pub struct ParseStorageKeyError(pub String);
