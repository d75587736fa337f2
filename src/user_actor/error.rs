//! Error types for the User actor.

use thiserror::Error;

/// Errors raised while registering, updating or looking up users.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// No user with this id is registered.
    #[error("User {0} not found")]
    NotFound(String),

    /// The username is empty or whitespace.
    #[error("username is required")]
    MissingUsername,

    /// The email address has no `@`.
    #[error("invalid email: {0}")]
    InvalidEmail(String),

    /// The user store could not be reached.
    #[error("user store unavailable: {0}")]
    StoreUnavailable(String),
}

impl UserError {
    /// Whether the caller supplied bad user data.
    pub fn is_validation(&self) -> bool {
        matches!(self, UserError::MissingUsername | UserError::InvalidEmail(_))
    }
}

impl From<String> for UserError {
    fn from(msg: String) -> Self {
        UserError::StoreUnavailable(msg)
    }
}
