//! # Record Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("String not found: {0}")]
    NotFound(String),

    #[error("String already exists: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::NotFound(_) => 404,
            StoreError::Conflict(_) => 409,
            StoreError::Internal(_) => 500,
        }
    }
}
