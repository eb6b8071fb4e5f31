//! Integration tests for the read side: UI criteria through to views.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use rstest::{fixture, rstest};
use taskdeck::{
    config::EngineConfig,
    identity::domain::UserId,
    notification::adapters::RecordingNotificationSink,
    storage::adapters::InMemoryKeyValueStore,
    task::{
        domain::{Priority, Task, TaskStatus},
        query::{
            AssigneeFilter, CalendarMonth, DueBucket, KanbanBoard, PriorityFilter, SortKey,
            TaskFilter, TaskStats,
        },
        services::TaskDraft,
    },
    testing::FixedClock,
    workspace::{SAMPLE_PASSWORD, Workspace},
};

type MemoryWorkspace = Workspace<InMemoryKeyValueStore, FixedClock>;

#[fixture]
fn workspace() -> MemoryWorkspace {
    let today = chrono::NaiveDate::from_ymd_opt(2025, 10, 15).expect("valid date");
    let mut workspace = Workspace::init(
        Arc::new(InMemoryKeyValueStore::new()),
        Arc::new(RecordingNotificationSink::new()),
        Arc::new(FixedClock::at_noon(today)),
        &EngineConfig::lightweight(),
    )
    .expect("workspace should initialise");
    workspace
        .login("jane@example.com", SAMPLE_PASSWORD)
        .expect("sample credentials");
    for (title, priority, assignee, due) in [
        ("Book venue", Priority::High, 3, Some((2025, 10, 17))),
        ("Order badges", Priority::Low, 3, None),
        ("Send invites", Priority::High, 2, Some((2025, 11, 2))),
    ] {
        let mut draft = TaskDraft::new(title)
            .with_priority(priority)
            .with_assignee(UserId::new(assignee));
        if let Some((year, month, day)) = due {
            draft = draft.with_due_date(
                chrono::NaiveDate::from_ymd_opt(year, month, day).expect("valid date"),
            );
        }
        workspace.create_task(draft).expect("valid task");
    }
    workspace
}

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::title).collect()
}

#[rstest]
fn ui_criteria_select_and_order_tasks(workspace: MemoryWorkspace) {
    let filter = TaskFilter::new()
        .with_assignee(AssigneeFilter::try_from("3").expect("member id"))
        .with_priority(PriorityFilter::try_from("all").expect("wildcard"));
    let sort = SortKey::try_from("dueDate").expect("sort key");

    let selected = workspace.query(&filter, sort);

    assert_eq!(
        titles(&selected),
        vec!["Review Codebase", "Book venue", "Order badges"]
    );
}

#[rstest]
fn priority_sort_keeps_equal_priorities_in_creation_order(workspace: MemoryWorkspace) {
    let sorted = workspace.query(&TaskFilter::new(), SortKey::Priority);

    assert_eq!(
        titles(&sorted),
        vec![
            "Design Homepage",
            "Book venue",
            "Send invites",
            "Write Project Proposal",
            "Review Codebase",
            "Order badges",
        ]
    );
}

#[rstest]
fn search_and_buckets_compose(workspace: MemoryWorkspace) {
    let this_week = workspace.query(
        &TaskFilter::new()
            .with_due_bucket(DueBucket::try_from("week").expect("bucket"))
            .with_search("O"),
        SortKey::Unsorted,
    );

    assert_eq!(titles(&this_week), vec!["Review Codebase", "Book venue"]);
}

#[rstest]
fn views_summarise_the_snapshot(workspace: MemoryWorkspace) {
    let stats = TaskStats::from_tasks(workspace.tasks());
    let board = KanbanBoard::from_tasks(workspace.tasks());
    let november = CalendarMonth::containing(workspace.today()).next();

    assert_eq!(stats.total, 6);
    assert_eq!(stats.pending, 5);
    assert_eq!(board.column(TaskStatus::Todo).len(), 4);
    assert_eq!(
        workspace
            .calendar(november)
            .values()
            .flatten()
            .map(Task::title)
            .collect::<Vec<_>>(),
        vec!["Send invites"]
    );
    assert_eq!(november.leading_blank_days(), 6);
}
