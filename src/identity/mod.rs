//! User accounts and the signed-in session.
//!
//! Accounts live in a local user list; the engine has no server. Passwords
//! are stored as salted Argon2id hashes behind the
//! [`ports::CredentialHasher`] contract.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The identity store in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
