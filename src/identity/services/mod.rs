//! Application services for account management.

mod store;

pub use store::{IdentityError, IdentityResult, IdentityStore, RegisterRequest};
