//! Tests for the task ledger and its identifier counter.

use rstest::rstest;
use serde_json::json;

use super::support::{content, ids, task_with};
use crate::task::domain::{TaskId, TaskLedger};

#[rstest]
fn empty_ledger_starts_at_one() {
    let ledger = TaskLedger::new();

    assert_eq!(ledger.next_task_id(), TaskId::FIRST);
    assert_eq!(TaskId::FIRST, TaskId::new(1));
    assert!(ledger.tasks().is_empty());
}

#[rstest]
fn deleted_identifiers_are_never_reused() {
    let mut ledger = TaskLedger::new();
    ledger.push(task_with(1, content("one")));
    ledger.push(task_with(2, content("two")));

    let removed = ledger.remove(TaskId::new(2));

    assert_eq!(removed.map(|task| task.id()), Some(TaskId::new(2)));
    assert_eq!(ledger.next_task_id(), TaskId::new(3));
    assert!(ledger.remove(TaskId::new(2)).is_none());
}

#[rstest]
fn bare_arrays_derive_the_counter_from_the_highest_id() {
    let tasks = vec![task_with(4, content("four")), task_with(2, content("two"))];
    let document = serde_json::to_value(&tasks).expect("serializable tasks");

    let ledger: TaskLedger = serde_json::from_value(document).expect("bare array accepted");

    assert_eq!(ids(ledger.tasks()), vec![4, 2]);
    assert_eq!(ledger.next_task_id(), TaskId::new(5));
}

#[rstest]
fn stored_counter_survives_a_round_trip() {
    let mut ledger = TaskLedger::new();
    ledger.push(task_with(1, content("one")));
    ledger.push(task_with(2, content("two")));
    ledger.remove(TaskId::new(2));

    let encoded = serde_json::to_value(&ledger).expect("serializable ledger");
    let decoded: TaskLedger = serde_json::from_value(encoded.clone()).expect("valid ledger");

    assert_eq!(encoded["nextTaskId"], json!(3));
    assert_eq!(decoded, ledger);
}

#[rstest]
fn stale_counters_are_raised_past_stored_tasks() {
    let tasks = serde_json::to_value(vec![task_with(6, content("six"))]).expect("serializable");
    let document = json!({ "nextTaskId": 2, "tasks": tasks });

    let ledger: TaskLedger = serde_json::from_value(document).expect("valid ledger");

    assert_eq!(ledger.next_task_id(), TaskId::new(7));
}

#[rstest]
fn find_mut_edits_in_place() {
    let mut ledger = TaskLedger::from_tasks(vec![task_with(1, content("one"))]);

    if let Some(task) = ledger.find_mut(TaskId::new(1)) {
        task.set_status(crate::task::domain::TaskStatus::Done);
    }

    assert!(
        ledger
            .find(TaskId::new(1))
            .is_some_and(|task| task.status().is_done())
    );
}
