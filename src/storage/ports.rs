//! Port contract for raw key-value storage.

use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value store operations.
pub type KeyValueResult<T> = Result<T, KeyValueError>;

/// Text key-value storage contract.
///
/// Values are opaque strings; encoding is handled by
/// [`Persistence`](crate::storage::Persistence).
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError`] when the backing store cannot be read.
    fn get(&self, key: &str) -> KeyValueResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError::QuotaExceeded`] when the store is full, or
    /// another [`KeyValueError`] when the write fails.
    fn set(&self, key: &str, value: &str) -> KeyValueResult<()>;

    /// Removes `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError`] when the backing store cannot be modified.
    fn remove(&self, key: &str) -> KeyValueResult<()>;

    /// Returns whether a value is stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError`] when the backing store cannot be read.
    fn contains(&self, key: &str) -> KeyValueResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// Errors returned by key-value store implementations.
#[derive(Debug, Clone, Error)]
pub enum KeyValueError {
    /// Writing the value would exceed the store's capacity.
    #[error("storage quota of {limit} bytes exceeded while writing {key}")]
    QuotaExceeded {
        /// Key being written.
        key: String,
        /// Configured capacity in bytes.
        limit: usize,
    },

    /// The key cannot be represented by this store.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// Backend failure.
    #[error("storage backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl KeyValueError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
