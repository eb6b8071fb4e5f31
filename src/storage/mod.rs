//! Durable key-value persistence for engine collections.
//!
//! Every collection the engine owns is written as one JSON document under a
//! well-known key, mirroring browser local storage. The module follows the
//! same hexagonal split as the rest of the crate:
//!
//! - Storage keys in [`domain`]
//! - The raw key-value contract in [`ports`]
//! - In-memory and directory-backed stores in [`adapters`]
//! - The typed, fail-soft codec in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

pub use domain::{ParseStorageKeyError, StorageKey};
pub use ports::{KeyValueError, KeyValueResult, KeyValueStore};
pub use services::{Persistence, PersistenceError, PersistenceResult};

#[cfg(test)]
mod tests;
