//! JSON codec between engine collections and the key-value store.
//!
//! Failures are reported to the notification sink and logged before being
//! returned, so callers that choose to carry on with in-memory state do not
//! need to report them again.

use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use thiserror::Error;

use crate::notification::{NotificationKind, NotificationSink};
use crate::storage::{
    domain::StorageKey,
    ports::{KeyValueError, KeyValueStore},
};

/// Errors returned by [`Persistence`].
#[derive(Debug, Clone, Error)]
pub enum PersistenceError {
    /// The value could not be encoded.
    #[error("failed to encode {key}: {message}")]
    Encode {
        /// Key being written.
        key: StorageKey,
        /// Encoder error description.
        message: String,
    },

    /// The stored value is not valid for the requested type.
    #[error("failed to decode {key}: {message}")]
    Decode {
        /// Key being read.
        key: StorageKey,
        /// Decoder error description.
        message: String,
    },

    /// The underlying store failed.
    #[error("storage failure for {key}: {source}")]
    Store {
        /// Key being accessed.
        key: StorageKey,
        /// Store error.
        #[source]
        source: KeyValueError,
    },
}

impl PersistenceError {
    /// Returns the key the failing operation touched.
    #[must_use]
    pub const fn key(&self) -> StorageKey {
        match self {
            Self::Encode { key, .. } | Self::Decode { key, .. } | Self::Store { key, .. } => *key,
        }
    }
}

/// Result type for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

#[derive(Debug, Clone, Copy)]
enum Operation {
    Save,
    Load,
    Remove,
}

impl Operation {
    const fn describe(self) -> (&'static str, &'static str) {
        match self {
            Self::Save => ("save", "to"),
            Self::Load => ("retrieve", "from"),
            Self::Remove => ("remove", "from"),
        }
    }
}

/// Typed, fail-soft persistence codec.
pub struct Persistence<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
    sink: Arc<dyn NotificationSink>,
}

impl<S> Clone for Persistence<S>
where
    S: KeyValueStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            sink: Arc::clone(&self.sink),
        }
    }
}

impl<S> Persistence<S>
where
    S: KeyValueStore,
{
    /// Creates a codec writing to `store` and reporting to `sink`.
    #[must_use]
    pub fn new(store: Arc<S>, sink: Arc<dyn NotificationSink>) -> Self {
        Self { store, sink }
    }

    /// Returns the notification sink failures are reported to.
    #[must_use]
    pub fn sink(&self) -> &Arc<dyn NotificationSink> {
        &self.sink
    }

    /// Encodes `value` and stores it under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Encode`] or [`PersistenceError::Store`];
    /// the failure has already been reported.
    pub fn save<T>(&self, key: StorageKey, value: &T) -> PersistenceResult<()>
    where
        T: Serialize + ?Sized,
    {
        let result = serde_json::to_string(value)
            .map_err(|err| PersistenceError::Encode {
                key,
                message: err.to_string(),
            })
            .and_then(|encoded| {
                self.store
                    .set(key.as_str(), &encoded)
                    .map_err(|source| PersistenceError::Store { key, source })
            });
        match result {
            Ok(()) => {
                tracing::debug!(key = %key, "persisted value");
                Ok(())
            }
            Err(err) => Err(self.report(Operation::Save, err)),
        }
    }

    /// Loads and decodes the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Decode`] for corrupt values or
    /// [`PersistenceError::Store`] for store failures; the failure has
    /// already been reported.
    pub fn load<T>(&self, key: StorageKey) -> PersistenceResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let raw = self
            .store
            .get(key.as_str())
            .map_err(|source| self.report(Operation::Load, PersistenceError::Store { key, source }))?;
        let Some(encoded) = raw else {
            return Ok(None);
        };
        serde_json::from_str(&encoded).map(Some).map_err(|err| {
            self.report(
                Operation::Load,
                PersistenceError::Decode {
                    key,
                    message: err.to_string(),
                },
            )
        })
    }

    /// Loads the value under `key`, treating every failure as absence.
    #[must_use]
    pub fn load_or_none<T>(&self, key: StorageKey) -> Option<T>
    where
        T: DeserializeOwned,
    {
        self.load(key).ok().flatten()
    }

    /// Removes the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Store`]; the failure has already been
    /// reported.
    pub fn remove(&self, key: StorageKey) -> PersistenceResult<()> {
        self.store
            .remove(key.as_str())
            .map_err(|source| self.report(Operation::Remove, PersistenceError::Store { key, source }))
    }

    /// Returns whether any value is stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Store`]; the failure has already been
    /// reported.
    pub fn exists(&self, key: StorageKey) -> PersistenceResult<bool> {
        self.store
            .contains(key.as_str())
            .map_err(|source| self.report(Operation::Load, PersistenceError::Store { key, source }))
    }

    fn report(&self, operation: Operation, err: PersistenceError) -> PersistenceError {
        let (verb, preposition) = operation.describe();
        let key = err.key();
        tracing::warn!(key = %key, error = %err, "failed to {verb} value");
        self.sink.notify(
            &format!("Failed to {verb} {key} {preposition} storage"),
            NotificationKind::Error,
        );
        err
    }
}
