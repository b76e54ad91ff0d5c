//! # HTTP API Errors
//!
//! Every failure leaving a handler becomes `{ "success": false, "error": ... }`
//! with the status owned by the originating error.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::{Event, Logger};
use crate::query::QueryError;
use crate::records::StoreError;
use crate::validation::ValidationError;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the HTTP API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Query(#[from] QueryError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            ApiError::Validation(e) => e.status_code(),
            ApiError::Store(e) => e.status_code(),
            ApiError::Query(e) => e.status_code(),
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(ValidationError::InvalidBody(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Query(QueryError::invalid("string_value", rejection.body_text()))
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            success: false,
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        let fields = [("status", status.as_str()), ("error", message.as_str())];

        if status.is_server_error() {
            Logger::error(Event::RequestFailed.as_str(), &fields);
        } else {
            Logger::warn(Event::RequestFailed.as_str(), &fields);
        }

        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(ValidationError::MissingField("value")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ValidationError::WrongType("value")).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(StoreError::NotFound("x".into())).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(StoreError::Conflict("x".into())).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(StoreError::Internal("x".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(QueryError::NonStringQuery).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_error_envelope() {
        let err = ApiError::from(StoreError::NotFound("ghost".into()));
        let body = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "String not found: ghost");
    }
}
