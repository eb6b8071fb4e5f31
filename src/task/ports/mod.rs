//! Port contracts for the task store.
//!
//! Ports define how the store talks to collaborators it does not own.

pub mod listener;

pub use listener::{TaskAction, TaskChange, TaskChangeListener};
