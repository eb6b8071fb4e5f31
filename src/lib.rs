//! Taskdeck: a local-first task collection engine.
//!
//! This crate holds the data model and logic behind a small team task board:
//! accounts and the signed-in session, tasks with comments, a team roster,
//! and the filters, sorts, and views a board, list, or calendar renders from.
//! All state lives in a key-value store, one JSON document per collection.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure data and validation with no infrastructure dependencies
//! - **Ports**: Trait contracts for collaborators (storage, hashing, events)
//! - **Adapters**: Concrete implementations of ports
//! - **Services**: Stores that own state and orchestrate the domain
//!
//! # Modules
//!
//! - [`identity`]: Registration, login, and the current session
//! - [`task`]: Tasks, comments, the roster, and read-only queries
//! - [`storage`]: Key-value persistence with fail-soft reporting
//! - [`notification`]: User-facing event delivery
//! - [`workspace`]: Session lifecycle and the command surface
//! - [`config`]: Engine configuration
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use mockable::DefaultClock;
//! use taskdeck::{
//!     config::EngineConfig,
//!     notification::adapters::RecordingNotificationSink,
//!     storage::adapters::InMemoryKeyValueStore,
//!     task::{
//!         domain::Priority,
//!         query::{SortKey, TaskFilter},
//!         services::TaskDraft,
//!     },
//!     workspace::{SAMPLE_PASSWORD, Workspace},
//! };
//!
//! let mut workspace = Workspace::init(
//!     Arc::new(InMemoryKeyValueStore::new()),
//!     Arc::new(RecordingNotificationSink::new()),
//!     Arc::new(DefaultClock),
//!     &EngineConfig::lightweight(),
//! )
//! .expect("workspace should initialise");
//!
//! workspace
//!     .login("john@example.com", SAMPLE_PASSWORD)
//!     .expect("sample account");
//! workspace
//!     .create_task(TaskDraft::new("Ship it").with_priority(Priority::High))
//!     .expect("valid task");
//!
//! let urgent_first = workspace.query(&TaskFilter::new(), SortKey::Priority);
//! assert_eq!(urgent_first.len(), 4);
//! ```

pub mod config;
pub mod identity;
pub mod notification;
pub mod storage;
pub mod task;
pub mod telemetry;
pub mod testing;
pub mod workspace;
