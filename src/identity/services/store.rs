//! Identity store: registration, login, and the current session.

use std::sync::Arc;
use thiserror::Error;

use crate::identity::{
    domain::{EmailAddress, IdentityDomainError, User, UserId},
    ports::{CredentialHasher, HashingError},
};
use crate::storage::{KeyValueStore, Persistence, StorageKey};

/// Request payload for registering a new account.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    name: String,
    email: String,
    password: String,
    confirmation: Option<String>,
}

impl RegisterRequest {
    /// Creates a request with the required account fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirmation: None,
        }
    }

    /// Sets the repeated password entered for confirmation.
    #[must_use]
    pub fn with_confirmation(mut self, confirmation: impl Into<String>) -> Self {
        self.confirmation = Some(confirmation.into());
        self
    }
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Service-level errors for identity operations.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] IdentityDomainError),

    /// The email address is already registered.
    #[error("email already registered: {0}")]
    DuplicateEmail(EmailAddress),

    /// No account matches the email and password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Password hashing failed.
    #[error(transparent)]
    Hashing(#[from] HashingError),
}

/// Result type for identity operations.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Owns the user list and the current-user reference.
///
/// The current user is held by identifier and resolved against the user list
/// on every access.
pub struct IdentityStore<S>
where
    S: KeyValueStore,
{
    persistence: Persistence<S>,
    hasher: Arc<dyn CredentialHasher>,
    users: Vec<User>,
    current: Option<UserId>,
    degraded: bool,
}

impl<S> IdentityStore<S>
where
    S: KeyValueStore,
{
    /// Creates a store over an initial user list.
    ///
    /// A `current` identifier that matches no user is discarded.
    #[must_use]
    pub fn new(
        persistence: Persistence<S>,
        hasher: Arc<dyn CredentialHasher>,
        users: Vec<User>,
        current: Option<UserId>,
    ) -> Self {
        let resolved = current.filter(|id| users.iter().any(|user| user.id() == *id));
        if current.is_some() && resolved.is_none() {
            tracing::warn!("discarding session for unknown user");
        }
        Self {
            persistence,
            hasher,
            users,
            current: resolved,
            degraded: false,
        }
    }

    /// Returns every registered user in registration order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Finds a user by identifier.
    #[must_use]
    pub fn find_user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    /// Returns the signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.current.and_then(|id| self.find_user(id))
    }

    /// Returns whether a storage write failed during this session.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Registers a new account.
    ///
    /// The new user receives the identifier following the highest existing
    /// one.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Validation`] for invalid input,
    /// [`IdentityError::DuplicateEmail`] when the address is taken (exact,
    /// case-sensitive match), or [`IdentityError::Hashing`] when the password
    /// cannot be hashed. No state changes on error.
    pub fn register(&mut self, request: RegisterRequest) -> IdentityResult<User> {
        let RegisterRequest {
            name,
            email,
            password,
            confirmation,
        } = request;

        if confirmation.is_some_and(|repeated| repeated != password) {
            return Err(IdentityDomainError::PasswordMismatch.into());
        }
        if name.trim().is_empty() {
            return Err(IdentityDomainError::EmptyName.into());
        }
        if password.is_empty() {
            return Err(IdentityDomainError::EmptyPassword.into());
        }
        let address = EmailAddress::new(email)?;
        if self.users.iter().any(|user| user.email() == &address) {
            return Err(IdentityError::DuplicateEmail(address));
        }

        let id = self
            .users
            .iter()
            .map(User::id)
            .max()
            .map_or(UserId::new(1), UserId::next);
        let hash = self.hasher.hash(&password)?;
        let user = User::new(id, name, address, hash)?;

        self.users.push(user.clone());
        self.persist_users();
        tracing::info!(user_id = %user.id(), "registered user");
        Ok(user)
    }

    /// Signs in the account matching `email` and `password`.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidCredentials`] when no account matches.
    pub fn login(&mut self, email: &str, password: &str) -> IdentityResult<User> {
        let candidate = self
            .users
            .iter()
            .find(|user| user.email().as_str() == email)
            .ok_or(IdentityError::InvalidCredentials)?;

        let matches = self
            .hasher
            .verify(password, candidate.password_hash())
            .unwrap_or_else(|err| {
                tracing::warn!(user_id = %candidate.id(), error = %err, "stored hash unusable");
                false
            });
        if !matches {
            tracing::warn!("rejected login attempt");
            return Err(IdentityError::InvalidCredentials);
        }

        let user = candidate.clone();
        self.current = Some(user.id());
        if self
            .persistence
            .save(StorageKey::CurrentUser, &user.id())
            .is_err()
        {
            self.degraded = true;
        }
        tracing::info!(user_id = %user.id(), "user signed in");
        Ok(user)
    }

    /// Clears the current session.
    pub fn logout(&mut self) {
        if let Some(id) = self.current.take() {
            tracing::info!(user_id = %id, "user signed out");
        }
        if self.persistence.remove(StorageKey::CurrentUser).is_err() {
            self.degraded = true;
        }
    }

    fn persist_users(&mut self) {
        if self.persistence.save(StorageKey::Users, &self.users).is_err() {
            self.degraded = true;
        }
    }
}
