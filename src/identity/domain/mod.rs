//! Domain model for user accounts.

mod email;
mod error;
mod ids;
mod user;

pub use email::EmailAddress;
pub use error::IdentityDomainError;
pub use ids::UserId;
pub use user::{PasswordHash, User};
