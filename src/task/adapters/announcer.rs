//! Listener telling other team members about changes to their tasks.

use std::sync::Arc;

use crate::notification::{NotificationKind, NotificationSink};
use crate::task::{
    domain::TeamRoster,
    ports::{TaskAction, TaskChange, TaskChangeListener},
};

/// Sends `info` notifications when someone changes a task assigned to, or
/// created by, another member.
///
/// Comments are not announced. Changes without a known actor are ignored.
pub struct ActionAnnouncer {
    sink: Arc<dyn NotificationSink>,
}

impl ActionAnnouncer {
    /// Creates an announcer delivering to `sink`.
    #[must_use]
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self { sink }
    }

    /// Returns the messages a change produces, in delivery order.
    #[must_use]
    pub fn messages_for(change: &TaskChange, roster: &TeamRoster) -> Vec<String> {
        if change.action == TaskAction::Commented {
            return Vec::new();
        }
        let Some(actor) = change.actor.and_then(|id| roster.find(id)) else {
            return Vec::new();
        };

        let task = &change.task;
        let mut messages = Vec::new();
        if let Some(assignee) = task
            .assignee()
            .and_then(|id| roster.find(id))
            .filter(|member| member.id() != actor.id())
        {
            messages.push(format!(
                "Task \"{}\" {} by {} for {}",
                task.title(),
                change.action,
                actor.name(),
                assignee.name()
            ));
        }
        if let Some(creator) = roster.find(task.created_by()).filter(|member| {
            member.id() != actor.id() && Some(member.id()) != task.assignee()
        }) {
            messages.push(format!(
                "Task \"{}\" {} by {} (created by {})",
                task.title(),
                change.action,
                actor.name(),
                creator.name()
            ));
        }
        messages
    }
}

impl TaskChangeListener for ActionAnnouncer {
    fn on_task_change(&self, change: &TaskChange, roster: &TeamRoster) {
        for message in Self::messages_for(change, roster) {
            self.sink.notify(&message, NotificationKind::Info);
        }
    }
}
