//! Credential hasher implementations.

pub mod hashing;

pub use hashing::Argon2CredentialHasher;
