//! The task collection: tasks, comments, the team roster, and queries.
//!
//! [`services::TaskStore`] owns the collection in memory and writes it back
//! through [`crate::storage::Persistence`] after every mutation. Views read
//! the snapshot through the pure functions in [`query`]. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The task store in [`services`]
//! - Read-only queries in [`query`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod query;
pub mod services;

#[cfg(test)]
mod tests;
