//! Application services for the task collection.

mod requests;
mod store;

pub use requests::{TaskChanges, TaskDraft};
pub use store::{TaskLimits, TaskStore, TaskStoreError, TaskStoreResult};
