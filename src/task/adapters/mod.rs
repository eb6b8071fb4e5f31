//! Task change listener implementations.

pub mod announcer;
pub mod memory;

pub use announcer::ActionAnnouncer;
pub use memory::ChangeLog;
