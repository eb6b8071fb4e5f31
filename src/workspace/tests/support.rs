//! Shared fixtures for workspace tests.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::EngineConfig;
use crate::notification::adapters::RecordingNotificationSink;
use crate::storage::adapters::InMemoryKeyValueStore;
use crate::testing::FixedClock;
use crate::workspace::Workspace;

pub(super) type MemoryWorkspace = Workspace<InMemoryKeyValueStore, FixedClock>;

pub(super) struct Harness {
    pub(super) store: InMemoryKeyValueStore,
    pub(super) sink: RecordingNotificationSink,
    pub(super) workspace: MemoryWorkspace,
}

/// Wednesday 15 October 2025: after the first sample task's due date.
pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 15).expect("valid calendar date")
}

pub(super) fn open(store: &InMemoryKeyValueStore, config: &EngineConfig) -> Harness {
    let sink = RecordingNotificationSink::new();
    let workspace = Workspace::init(
        Arc::new(store.clone()),
        Arc::new(sink.clone()),
        Arc::new(FixedClock::at_noon(today())),
        config,
    )
    .expect("workspace should initialise");
    Harness {
        store: store.clone(),
        sink,
        workspace,
    }
}

pub(super) fn seeded() -> Harness {
    open(&InMemoryKeyValueStore::new(), &EngineConfig::lightweight())
}

pub(super) fn messages(sink: &RecordingNotificationSink) -> Vec<String> {
    sink.drain()
        .into_iter()
        .map(|notification| notification.message)
        .collect()
}
