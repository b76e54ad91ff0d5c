//! Request validation
//!
//! Rejects malformed creation requests before they reach the store.

mod errors;
mod validator;

pub use errors::{ValidationError, ValidationResult};
pub use validator::validate_create_request;
