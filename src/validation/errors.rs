//! # Validation Errors

use thiserror::Error;

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Creation request validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Body is not a JSON object or could not be parsed
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Required field absent, null or empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Field present with the wrong JSON type
    #[error("Field '{0}' must be a string")]
    WrongType(&'static str),
}

impl ValidationError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ValidationError::InvalidBody(_) => 400,
            ValidationError::MissingField(_) => 400,
            ValidationError::WrongType(_) => 422,
        }
    }
}
