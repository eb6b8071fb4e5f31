//! Tests for change announcements.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::support::{content, task_with};
use crate::identity::domain::{EmailAddress, PasswordHash, User, UserId};
use crate::notification::{NotificationKind, adapters::RecordingNotificationSink};
use crate::task::{
    adapters::ActionAnnouncer,
    domain::{Task, TaskContent, TeamMember, TeamRoster},
    ports::{TaskAction, TaskChange, TaskChangeListener},
};

#[fixture]
fn roster() -> TeamRoster {
    let mut roster = TeamRoster::new();
    for (id, name, email) in [
        (1, "John Doe", "john@example.com"),
        (2, "Jane Smith", "jane@example.com"),
        (3, "Mike Johnson", "mike@example.com"),
    ] {
        let user = User::new(
            UserId::new(id),
            name,
            EmailAddress::new(email).expect("valid email"),
            PasswordHash::new("$argon2id$stub"),
        )
        .expect("valid user");
        roster.upsert(TeamMember::from_user(&user));
    }
    roster
}

/// A task created by John and assigned to `assignee`.
fn task_for(assignee: Option<u64>) -> Task {
    task_with(
        1,
        TaskContent {
            assignee: assignee.map(UserId::new),
            ..content("Design Homepage")
        },
    )
}

fn change(action: TaskAction, task: Task, actor: u64) -> TaskChange {
    TaskChange {
        action,
        task,
        actor: Some(UserId::new(actor)),
    }
}

#[rstest]
fn assignee_and_creator_both_hear_about_a_third_party_change(roster: TeamRoster) {
    let messages = ActionAnnouncer::messages_for(
        &change(TaskAction::StatusChanged, task_for(Some(2)), 3),
        &roster,
    );

    assert_eq!(
        messages,
        vec![
            "Task \"Design Homepage\" status updated by Mike Johnson for Jane Smith".to_owned(),
            "Task \"Design Homepage\" status updated by Mike Johnson (created by John Doe)"
                .to_owned(),
        ]
    );
}

#[rstest]
fn actors_are_not_told_about_their_own_changes(roster: TeamRoster) {
    let own = ActionAnnouncer::messages_for(
        &change(TaskAction::Updated, task_for(Some(1)), 1),
        &roster,
    );
    let creator_is_assignee = ActionAnnouncer::messages_for(
        &change(TaskAction::Deleted, task_for(Some(1)), 2),
        &roster,
    );

    assert!(own.is_empty());
    assert_eq!(
        creator_is_assignee,
        vec!["Task \"Design Homepage\" deleted by Jane Smith for John Doe".to_owned()]
    );
}

#[rstest]
fn comments_and_unknown_actors_are_silent(roster: TeamRoster) {
    let commented = ActionAnnouncer::messages_for(
        &change(TaskAction::Commented, task_for(Some(2)), 3),
        &roster,
    );
    let stranger = ActionAnnouncer::messages_for(
        &change(TaskAction::Created, task_for(Some(2)), 9),
        &roster,
    );
    let anonymous = ActionAnnouncer::messages_for(
        &TaskChange {
            action: TaskAction::Created,
            task: task_for(Some(2)),
            actor: None,
        },
        &roster,
    );

    assert!(commented.is_empty());
    assert!(stranger.is_empty());
    assert!(anonymous.is_empty());
}

#[rstest]
fn listener_delivers_info_notifications(roster: TeamRoster) {
    let sink = RecordingNotificationSink::new();
    let announcer = ActionAnnouncer::new(Arc::new(sink.clone()));

    announcer.on_task_change(&change(TaskAction::Created, task_for(None), 2), &roster);

    let delivered = sink.notifications();
    assert_eq!(delivered.len(), 1);
    assert!(
        delivered
            .iter()
            .all(|notification| notification.kind == NotificationKind::Info)
    );
}
