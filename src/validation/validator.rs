//! Creation request validator
//!
//! Checks, in order:
//! - the body is a JSON object
//! - `value` is present, non-null and non-empty
//! - `value` is a JSON string
//!
//! Validation never touches the store and never mutates the body.

use serde_json::Value;

use super::errors::{ValidationError, ValidationResult};

const VALUE_FIELD: &str = "value";

/// Validate a `POST /strings` body and borrow its `value`.
///
/// # Errors
///
/// - `InvalidBody` if the body is not an object
/// - `MissingField` if `value` is absent, null or `""`
/// - `WrongType` if `value` is any non-string JSON type
pub fn validate_create_request(body: &Value) -> ValidationResult<&str> {
    let object = body
        .as_object()
        .ok_or_else(|| ValidationError::InvalidBody("expected a JSON object".to_string()))?;

    match object.get(VALUE_FIELD) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(VALUE_FIELD)),
        Some(Value::String(s)) if s.is_empty() => Err(ValidationError::MissingField(VALUE_FIELD)),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(ValidationError::WrongType(VALUE_FIELD)),
    }
}
