//! Error types shared across the Request Logger Remote crates.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RlrError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Cryptography error: {0}")]
    Crypto(String),
}

impl RlrError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RlrError::NotFound { .. })
    }
}

pub type RlrResult<T> = Result<T, RlrError>;
