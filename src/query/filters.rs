//! Predicate set evaluation
//!
//! All set predicates must match (AND semantics). Length bounds are
//! inclusive. `contains_character` is a case-sensitive substring test
//! against the original value.

use serde::Serialize;

use crate::records::Record;

/// Structured filter over stored records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no predicate is set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Check if a record satisfies every set predicate
    pub fn matches(&self, record: &Record) -> bool {
        let props = &record.properties;

        if let Some(expected) = self.is_palindrome {
            if props.is_palindrome != expected {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if props.length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if props.length > max {
                return false;
            }
        }
        if let Some(count) = self.word_count {
            if props.word_count != count {
                return false;
            }
        }
        if let Some(needle) = &self.contains_character {
            if !record.value.contains(needle.as_str()) {
                return false;
            }
        }

        true
    }

    /// Length bounds that no record can satisfy
    pub fn has_conflicting_bounds(&self) -> bool {
        matches!((self.min_length, self.max_length), (Some(min), Some(max)) if min > max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: &str) -> Record {
        Record::new(value)
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filters = FilterSet::new();
        assert!(filters.is_empty());
        assert!(filters.matches(&record("anything")));
        assert!(filters.matches(&record("")));
    }

    #[test]
    fn test_palindrome_predicate() {
        let filters = FilterSet {
            is_palindrome: Some(true),
            ..Default::default()
        };
        assert!(filters.matches(&record("racecar")));
        assert!(!filters.matches(&record("hello")));

        let filters = FilterSet {
            is_palindrome: Some(false),
            ..Default::default()
        };
        assert!(filters.matches(&record("hello")));
    }

    #[test]
    fn test_length_bounds_inclusive() {
        let filters = FilterSet {
            min_length: Some(5),
            max_length: Some(5),
            ..Default::default()
        };
        assert!(filters.matches(&record("hello")));
        assert!(!filters.matches(&record("hell")));
        assert!(!filters.matches(&record("hello!")));
    }

    #[test]
    fn test_word_count_exact() {
        let filters = FilterSet {
            word_count: Some(2),
            ..Default::default()
        };
        assert!(filters.matches(&record("hello world")));
        assert!(!filters.matches(&record("hello")));
    }

    #[test]
    fn test_contains_is_case_sensitive_substring() {
        let filters = FilterSet {
            contains_character: Some("z".to_string()),
            ..Default::default()
        };
        assert!(filters.matches(&record("pizza")));
        assert!(!filters.matches(&record("Zebra")));

        let filters = FilterSet {
            contains_character: Some("ell".to_string()),
            ..Default::default()
        };
        assert!(filters.matches(&record("hello")));
    }

    #[test]
    fn test_conjunction() {
        let filters = FilterSet {
            is_palindrome: Some(true),
            word_count: Some(1),
            contains_character: Some("c".to_string()),
            ..Default::default()
        };
        assert!(filters.matches(&record("racecar")));
        assert!(!filters.matches(&record("noon")));
        assert!(!filters.matches(&record("race car")));
    }

    #[test]
    fn test_permissive_bounds_match_all() {
        let filters = FilterSet {
            min_length: Some(0),
            max_length: Some(1_000_000_000),
            ..Default::default()
        };
        for v in ["", "a", "hello world", "A man a plan a canal Panama"] {
            assert!(filters.matches(&record(v)));
        }
    }

    #[test]
    fn test_conflicting_bounds() {
        let filters = FilterSet {
            min_length: Some(10),
            max_length: Some(3),
            ..Default::default()
        };
        assert!(filters.has_conflicting_bounds());
        assert!(!FilterSet::new().has_conflicting_bounds());
    }

    #[test]
    fn test_serialization_omits_unset() {
        let filters = FilterSet {
            is_palindrome: Some(true),
            min_length: Some(3),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&filters).unwrap(),
            json!({"is_palindrome": true, "min_length": 3})
        );
        assert_eq!(serde_json::to_value(FilterSet::new()).unwrap(), json!({}));
    }
}
