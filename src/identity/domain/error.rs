//! Error types for account validation.

use thiserror::Error;

/// Errors returned while constructing account values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityDomainError {
    /// The display name is empty after trimming.
    #[error("name must not be empty")]
    EmptyName,

    /// The email address is not usable.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The password is empty.
    #[error("password must not be empty")]
    EmptyPassword,

    /// The password confirmation differs from the password.
    #[error("passwords do not match")]
    PasswordMismatch,
}
