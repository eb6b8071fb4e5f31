//! Listener that records change events in memory.

use std::sync::{Arc, RwLock};

use crate::task::{
    domain::TeamRoster,
    ports::{TaskChange, TaskChangeListener},
};

/// Thread-safe record of every change event, in emission order.
///
/// Views can poll [`ChangeLog::drain`] to learn whether they need to re-query.
#[derive(Debug, Clone, Default)]
pub struct ChangeLog {
    entries: Arc<RwLock<Vec<TaskChange>>>,
}

impl ChangeLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every recorded change.
    #[must_use]
    pub fn changes(&self) -> Vec<TaskChange> {
        self.entries
            .read()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Removes and returns every recorded change.
    pub fn drain(&self) -> Vec<TaskChange> {
        self.entries
            .write()
            .map(|mut entries| std::mem::take(&mut *entries))
            .unwrap_or_default()
    }
}

impl TaskChangeListener for ChangeLog {
    fn on_task_change(&self, change: &TaskChange, _roster: &TeamRoster) {
        if let Ok(mut entries) = self.entries.write() {
            entries.push(change.clone());
        }
    }
}
