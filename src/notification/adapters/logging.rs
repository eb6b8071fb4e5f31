//! Sink that forwards notifications to the `tracing` subscriber.

use crate::notification::{NotificationKind, NotificationSink};

/// Emits each notification as a log event at a level matching its kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, message: &str, kind: NotificationKind) {
        match kind {
            NotificationKind::Error => tracing::error!(kind = %kind, "{message}"),
            NotificationKind::Warning => tracing::warn!(kind = %kind, "{message}"),
            NotificationKind::Success | NotificationKind::Info => {
                tracing::info!(kind = %kind, "{message}");
            }
        }
    }
}
