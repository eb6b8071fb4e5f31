//! The assembled engine: one session over one key-value store.
//!
//! [`Workspace`] loads every collection at start-up, seeds sample data into
//! a fresh store, and exposes the command surface a UI calls into. It is the
//! layer that turns command results into user-facing notifications; the
//! stores underneath only return errors.

mod engine;
mod seed;
mod theme;

pub use engine::{Workspace, WorkspaceError, WorkspaceResult};
pub use seed::SAMPLE_PASSWORD;
pub use theme::{ParseThemeError, Theme};

#[cfg(test)]
mod tests;
