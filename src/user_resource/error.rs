//! Error types for the User resource.

use thiserror::Error;

use crate::framework::ControllerError;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(String),

    /// A user with the same email already exists.
    #[error("User already exists: {0}")]
    AlreadyExists(String),

    /// The user data provided is incomplete.
    #[error("User validation error: {0}")]
    ValidationError(String),
}

impl From<UserError> for ControllerError {
    fn from(e: UserError) -> Self {
        ControllerError::Custom(e.to_string())
    }
}
