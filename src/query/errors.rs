//! # Query Errors

use thiserror::Error;

/// Result type for query parsing
pub type QueryResult<T> = Result<T, QueryError>;

/// Filter parsing and interpretation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A structured filter parameter could not be parsed
    #[error("Invalid query parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Natural-language query absent or empty
    #[error("Missing required parameter: query")]
    MissingQuery,

    /// Natural-language query supplied as something other than one string
    #[error("Parameter 'query' must be a single string")]
    NonStringQuery,

    /// Interpreted filters cannot all hold at once
    #[error("Query parsed but resulted in conflicting filters: {0}")]
    ConflictingFilters(String),
}

impl QueryError {
    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        QueryError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            QueryError::InvalidParameter { .. } => 400,
            QueryError::MissingQuery => 400,
            QueryError::NonStringQuery => 422,
            QueryError::ConflictingFilters(_) => 422,
        }
    }
}
