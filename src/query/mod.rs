//! # Query Filtering
//!
//! Structured predicate sets over stored records, parsed either from
//! HTTP query parameters or heuristically from a free-text query.
//!
//! Both paths produce the same [`FilterSet`], which is applied as a
//! conjunction with unset predicates acting as no-ops.

mod errors;
mod filters;
mod natural_language;
mod parser;

pub use errors::{QueryError, QueryResult};
pub use filters::FilterSet;
pub use natural_language::interpret;
