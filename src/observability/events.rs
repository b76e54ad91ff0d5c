//! Observable events
//!
//! Every log line names one of these.

use std::fmt;

/// Observable events in the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration resolved
    ConfigLoaded,
    /// Listener bound, serving requests
    ServerStart,
    /// Server exited with an error
    ServerFailed,

    // Store mutations
    /// New record stored
    StringCreated,
    /// Creation rejected as a duplicate
    StringConflict,
    /// Record removed
    StringDeleted,

    // Reads
    /// Structured filter applied
    FilterApplied,
    /// Free-text query translated and applied
    NaturalLanguageInterpreted,

    /// Request ended in an error response
    RequestFailed,
}

impl Event {
    /// Returns the event name as it appears in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerStart => "SERVER_START",
            Event::ServerFailed => "SERVER_FAILED",
            Event::StringCreated => "STRING_CREATED",
            Event::StringConflict => "STRING_CONFLICT",
            Event::StringDeleted => "STRING_DELETED",
            Event::FilterApplied => "FILTER_APPLIED",
            Event::NaturalLanguageInterpreted => "NATURAL_LANGUAGE_INTERPRETED",
            Event::RequestFailed => "REQUEST_FAILED",
        }
    }

    /// Whether this event ends the process
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::ServerFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::StringCreated.as_str(), "STRING_CREATED");
        assert_eq!(
            Event::NaturalLanguageInterpreted.to_string(),
            "NATURAL_LANGUAGE_INTERPRETED"
        );
    }

    #[test]
    fn test_only_server_failure_is_fatal() {
        assert!(Event::ServerFailed.is_fatal());
        assert!(!Event::RequestFailed.is_fatal());
        assert!(!Event::StringCreated.is_fatal());
    }
}
