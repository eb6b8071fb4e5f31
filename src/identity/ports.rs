//! Port contract for credential hashing.

use crate::identity::domain::PasswordHash;
use thiserror::Error;

/// Hashes and verifies passwords.
pub trait CredentialHasher: Send + Sync {
    /// Produces a salted hash of `password`.
    ///
    /// # Errors
    ///
    /// Returns [`HashingError::Hash`] when hashing fails.
    fn hash(&self, password: &str) -> Result<PasswordHash, HashingError>;

    /// Returns whether `password` matches `hash`.
    ///
    /// # Errors
    ///
    /// Returns [`HashingError::MalformedHash`] when `hash` cannot be parsed.
    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, HashingError>;
}

/// Errors returned by credential hashers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HashingError {
    /// The configured cost parameters are invalid.
    #[error("invalid hashing parameters: {0}")]
    InvalidParameters(String),

    /// Hash generation failed.
    #[error("password hashing failed: {0}")]
    Hash(String),

    /// A stored hash could not be parsed.
    #[error("malformed password hash: {0}")]
    MalformedHash(String),
}
