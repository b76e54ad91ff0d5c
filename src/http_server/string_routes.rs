//! String Analysis HTTP Routes
//!
//! - `POST   /strings` analyze and store a string
//! - `GET    /strings` list with structured filters
//! - `GET    /strings/filter-by-natural-language` list with a free-text query
//! - `GET    /strings/:string_value` fetch by exact value
//! - `DELETE /strings/:string_value` delete by exact value

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::observability::{log_event_with_fields, Event, Logger};
use crate::query::{interpret, FilterSet, QueryError};
use crate::records::{Record, RecordStore, StoreError};
use crate::validation::validate_create_request;

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Record store shared across handlers
#[derive(Debug, Clone, Default)]
pub struct StringsState {
    pub store: Arc<RecordStore>,
}

impl StringsState {
    pub fn with_store(store: Arc<RecordStore>) -> Self {
        Self { store }
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub data: Vec<Record>,
    pub count: usize,
    pub filters_applied: FilterSet,
}

#[derive(Debug, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterSet,
}

#[derive(Debug, Serialize)]
pub struct NaturalLanguageResponse {
    pub filtered: Vec<Record>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

type QueryPairs = Vec<(String, String)>;

// ==================
// String Routes
// ==================

/// Create string analysis routes
pub fn string_routes(state: StringsState) -> Router {
    Router::new()
        .route("/strings", get(list_strings_handler).post(create_string_handler))
        .route(
            "/strings/filter-by-natural-language",
            get(natural_language_handler),
        )
        .route(
            "/strings/:string_value",
            get(get_string_handler).delete(delete_string_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn create_string_handler(
    State(state): State<StringsState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Record>)> {
    let Json(body) = payload?;
    let value = validate_create_request(&body)?;

    let record = state.store.create(value).map_err(|e| {
        if let StoreError::Conflict(_) = &e {
            Logger::warn(Event::StringConflict.as_str(), &[("value", value)]);
        }
        e
    })?;

    let length = record.properties.length.to_string();
    log_event_with_fields(
        Event::StringCreated,
        &[("id", record.id.as_str()), ("length", length.as_str())],
    );

    Ok((StatusCode::CREATED, Json(record)))
}

async fn get_string_handler(
    State(state): State<StringsState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Record>> {
    let Path(string_value) = path?;
    let record = state.store.get_by_value(&string_value)?;
    Ok(Json(record))
}

async fn delete_string_handler(
    State(state): State<StringsState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(string_value) = path?;
    state.store.delete(&string_value)?;
    log_event_with_fields(Event::StringDeleted, &[("value", string_value.as_str())]);
    Ok(StatusCode::NO_CONTENT)
}

async fn list_strings_handler(
    State(state): State<StringsState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> ApiResult<Json<ListResponse>> {
    let Query(pairs) = query.map_err(query_rejection)?;
    let filters = FilterSet::from_query_pairs(&pairs)?;

    let data = state.store.list(|record| filters.matches(record))?;

    let count = data.len().to_string();
    Logger::trace(Event::FilterApplied.as_str(), &[("count", count.as_str())]);

    Ok(Json(ListResponse {
        count: data.len(),
        data,
        filters_applied: filters,
    }))
}

async fn natural_language_handler(
    State(state): State<StringsState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> ApiResult<Json<NaturalLanguageResponse>> {
    let Query(pairs) = query.map_err(query_rejection)?;
    let original = single_query_value(&pairs)?;

    let filters = interpret(&original)?;
    let filtered = state.store.list(|record| filters.matches(record))?;

    let count = filtered.len().to_string();
    Logger::trace(
        Event::NaturalLanguageInterpreted.as_str(),
        &[("count", count.as_str()), ("query", original.as_str())],
    );

    Ok(Json(NaturalLanguageResponse {
        count: filtered.len(),
        filtered,
        interpreted_query: InterpretedQuery {
            original,
            parsed_filters: filters,
        },
    }))
}

// ==================
// Helper Functions
// ==================

/// The one non-empty `query` value; repeated keys are not a single string
fn single_query_value(pairs: &[(String, String)]) -> Result<String, QueryError> {
    let mut values = pairs.iter().filter(|(k, _)| k == "query").map(|(_, v)| v);

    match (values.next(), values.next()) {
        (None, _) => Err(QueryError::MissingQuery),
        (Some(_), Some(_)) => Err(QueryError::NonStringQuery),
        (Some(v), None) if v.trim().is_empty() => Err(QueryError::MissingQuery),
        (Some(v), None) => Ok(v.clone()),
    }
}

fn query_rejection(rejection: QueryRejection) -> ApiError {
    ApiError::Query(QueryError::InvalidParameter {
        name: "query string".to_string(),
        reason: rejection.body_text(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> QueryPairs {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_single_query_value() {
        assert_eq!(
            single_query_value(&pairs(&[("query", "palindromes")])),
            Ok("palindromes".to_string())
        );
        assert_eq!(single_query_value(&[]), Err(QueryError::MissingQuery));
        assert_eq!(
            single_query_value(&pairs(&[("query", "  ")])),
            Err(QueryError::MissingQuery)
        );
        assert_eq!(
            single_query_value(&pairs(&[("query", "a"), ("query", "b")])),
            Err(QueryError::NonStringQuery)
        );
        assert_eq!(
            single_query_value(&pairs(&[("other", "a")])),
            Err(QueryError::MissingQuery)
        );
    }

    #[test]
    fn test_state_shares_store() {
        let store = Arc::new(RecordStore::new());
        let state = StringsState::with_store(Arc::clone(&store));
        state.store.create("hello").unwrap();
        assert_eq!(store.len().unwrap(), 1);
    }
}
