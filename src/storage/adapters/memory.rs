//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::storage::ports::{KeyValueError, KeyValueResult, KeyValueStore};

/// Thread-safe in-memory store with an optional byte quota.
///
/// Clones share the same underlying map, so a test can keep a handle while
/// the engine owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    state: Arc<RwLock<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl InMemoryKeyValueStore {
    /// Creates an empty, unbounded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits the total size of keys and values to `bytes`.
    #[must_use]
    pub const fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Returns a copy of every stored entry.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.state
            .read()
            .map(|state| state.clone())
            .unwrap_or_default()
    }
}

fn lock_error(err: impl ToString) -> KeyValueError {
    KeyValueError::backend(std::io::Error::other(err.to_string()))
}

fn used_bytes(state: &HashMap<String, String>, excluding: &str) -> usize {
    state
        .iter()
        .filter(|(key, _)| key.as_str() != excluding)
        .map(|(key, value)| key.len() + value.len())
        .sum()
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> KeyValueResult<Option<String>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> KeyValueResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if let Some(limit) = self.quota {
            let required = used_bytes(&state, key) + key.len() + value.len();
            if required > limit {
                return Err(KeyValueError::QuotaExceeded {
                    key: key.to_owned(),
                    limit,
                });
            }
        }
        state.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> KeyValueResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.remove(key);
        Ok(())
    }
}
