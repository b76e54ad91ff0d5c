//! string-analyzer - analyze, store and filter strings over HTTP
//!
//! Strings posted to the service are analyzed once (length, palindrome
//! check, word count, special characters, letter frequencies, SHA-256),
//! kept in an in-memory store keyed by value, and queried either with
//! structured filters or a free-text query.

pub mod analysis;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod query;
pub mod records;
pub mod validation;
