//! Notification sink implementations.

pub mod logging;
pub mod memory;

pub use logging::TracingNotificationSink;
pub use memory::RecordingNotificationSink;
