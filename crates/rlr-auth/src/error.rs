//! Bootstrap protocol error types.
//!
//! Every variant's message is safe to show to an API caller. Storage
//! and crypto failures keep their detail only as the error source.

use rlr_core::error::RlrError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid setup token.")]
    InvalidToken,

    #[error("Password must be at least {min_length} characters long.")]
    PasswordTooShort { min_length: usize },

    #[error("Password has already been set. Use the standard password reset flow to change it.")]
    PasswordAlreadySet,

    #[error("API user not found. Please run the module migrations first.")]
    UserNotFound,

    #[error("Internal server error.")]
    Internal(#[source] RlrError),
}

impl From<RlrError> for AuthError {
    fn from(err: RlrError) -> Self {
        AuthError::Internal(err)
    }
}
