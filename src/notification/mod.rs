//! Human-readable event delivery for the presentation layer.
//!
//! The engine never renders anything itself. Success, failure, and reminder
//! messages are pushed through the [`ports::NotificationSink`] contract and
//! the host decides how to display them:
//!
//! - Domain types in [`domain`]
//! - Port contract in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

pub use domain::{Notification, NotificationKind, ParseNotificationKindError};
pub use ports::NotificationSink;

#[cfg(test)]
mod tests;
