//! Typed persistence over a key-value store.

mod persistence;

pub use persistence::{Persistence, PersistenceError, PersistenceResult};
