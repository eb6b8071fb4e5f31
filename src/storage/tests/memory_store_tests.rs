//! Tests for the in-memory key-value store.

use crate::storage::{KeyValueError, KeyValueStore, adapters::InMemoryKeyValueStore};
use rstest::{fixture, rstest};

#[fixture]
fn store() -> InMemoryKeyValueStore {
    InMemoryKeyValueStore::new()
}

#[rstest]
fn get_returns_none_for_absent_key(store: InMemoryKeyValueStore) {
    assert!(store.get("tasks").expect("read should succeed").is_none());
    assert!(!store.contains("tasks").expect("read should succeed"));
}

#[rstest]
fn set_replaces_previous_value(store: InMemoryKeyValueStore) {
    store.set("theme", "\"light\"").expect("write should succeed");
    store.set("theme", "\"dark\"").expect("write should succeed");

    assert_eq!(
        store.get("theme").expect("read should succeed").as_deref(),
        Some("\"dark\"")
    );
}

#[rstest]
fn remove_is_idempotent(store: InMemoryKeyValueStore) {
    store.set("currentUser", "1").expect("write should succeed");
    store.remove("currentUser").expect("remove should succeed");
    store.remove("currentUser").expect("second remove should succeed");

    assert!(store.snapshot().is_empty());
}

#[rstest]
fn clones_share_state(store: InMemoryKeyValueStore) {
    let handle = store.clone();
    store.set("users", "[]").expect("write should succeed");

    assert_eq!(handle.snapshot().len(), 1);
}

#[rstest]
fn quota_rejects_oversized_write_and_keeps_old_value() {
    let store = InMemoryKeyValueStore::new().with_quota(16);
    store.set("theme", "\"dark\"").expect("small write fits");

    let result = store.set("tasks", "[1,2,3,4,5,6,7,8,9]");

    assert!(matches!(
        result,
        Err(KeyValueError::QuotaExceeded { ref key, limit: 16 }) if key == "tasks"
    ));
    assert_eq!(store.snapshot().len(), 1);
}

#[rstest]
fn quota_counts_replaced_value_once() {
    let store = InMemoryKeyValueStore::new().with_quota(12);
    store.set("theme", "\"dark\"").expect("fits");

    store
        .set("theme", "\"lite\"")
        .expect("replacement of equal size fits");
}
