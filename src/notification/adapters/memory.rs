//! Sink that keeps every notification in memory.

use std::sync::{Arc, RwLock};

use crate::notification::{Notification, NotificationKind, NotificationSink};

/// Thread-safe sink recording notifications in delivery order.
///
/// Hosts can drain it after each command to display toasts; tests use it to
/// assert on what the engine reported.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotificationSink {
    entries: Arc<RwLock<Vec<Notification>>>,
}

impl RecordingNotificationSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every recorded notification.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.entries
            .read()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Returns recorded notifications of one kind.
    #[must_use]
    pub fn of_kind(&self, kind: NotificationKind) -> Vec<Notification> {
        self.notifications()
            .into_iter()
            .filter(|notification| notification.kind == kind)
            .collect()
    }

    /// Removes and returns every recorded notification.
    pub fn drain(&self) -> Vec<Notification> {
        self.entries
            .write()
            .map(|mut entries| std::mem::take(&mut *entries))
            .unwrap_or_default()
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn notify(&self, message: &str, kind: NotificationKind) {
        // A poisoned lock drops the message rather than propagating a panic.
        if let Ok(mut entries) = self.entries.write() {
            entries.push(Notification::new(message, kind));
        }
    }
}
