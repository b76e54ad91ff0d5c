//! # Query Parameter Parser
//!
//! Parses `GET /strings` query parameters into a [`FilterSet`].

use super::errors::{QueryError, QueryResult};
use super::filters::FilterSet;

impl FilterSet {
    /// Parse filter parameters from decoded query pairs.
    ///
    /// Unknown keys are ignored. When a key repeats, the last value wins.
    pub fn from_query_pairs(pairs: &[(String, String)]) -> QueryResult<Self> {
        let mut filters = FilterSet::new();

        for (key, value) in pairs {
            match key.as_str() {
                "is_palindrome" => {
                    filters.is_palindrome = Some(parse_bool(key, value)?);
                }
                "min_length" => {
                    filters.min_length = Some(parse_count(key, value)?);
                }
                "max_length" => {
                    filters.max_length = Some(parse_count(key, value)?);
                }
                "word_count" => {
                    filters.word_count = Some(parse_count(key, value)?);
                }
                "contains_character" => {
                    if value.is_empty() {
                        return Err(QueryError::invalid(key, "cannot be empty"));
                    }
                    filters.contains_character = Some(value.clone());
                }
                _ => {}
            }
        }

        Ok(filters)
    }
}

fn parse_bool(name: &str, value: &str) -> QueryResult<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(QueryError::invalid(
            name,
            format!("expected 'true' or 'false', got '{}'", value),
        )),
    }
}

fn parse_count(name: &str, value: &str) -> QueryResult<usize> {
    value.trim().parse().map_err(|_| {
        QueryError::invalid(
            name,
            format!("expected a non-negative integer, got '{}'", value),
        )
    })
}
