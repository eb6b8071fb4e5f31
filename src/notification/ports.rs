//! Port contract for notification delivery.

use super::NotificationKind;
use std::sync::Arc;

/// Receives human-readable events for display.
///
/// Delivery is fire-and-forget: implementations must not panic and have no
/// way to report failure back to the engine.
pub trait NotificationSink: Send + Sync {
    /// Delivers a message with the given severity.
    fn notify(&self, message: &str, kind: NotificationKind);
}

impl<T: NotificationSink + ?Sized> NotificationSink for Arc<T> {
    fn notify(&self, message: &str, kind: NotificationKind) {
        (**self).notify(message, kind);
    }
}
