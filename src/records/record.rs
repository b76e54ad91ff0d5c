//! Stored analysis record

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::{analyze, StringProperties};

/// One stored string-analysis result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Hex SHA-256 of `value`
    pub id: String,
    pub value: String,
    pub properties: StringProperties,
    pub created_at: DateTime<Utc>,
}

impl Record {
    /// Analyze `value` and stamp the record with the current time.
    ///
    /// The id is derived from the value's digest, so the same string always
    /// maps to the same id.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let properties = analyze(&value);
        Self {
            id: properties.sha256_hash.clone(),
            value,
            properties,
            created_at: Utc::now(),
        }
    }
}
