//! Observability
//!
//! Structured JSON logging for lifecycle and request events.
//!
//! # Usage
//!
//! ```ignore
//! use string_analyzer::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::StringCreated, &[("id", &record.id)]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_fatal() {
        Severity::Fatal
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // Verifies no panic
        log_event(Event::ServerStart);
        log_event_with_fields(Event::ConfigLoaded, &[("port", "3000")]);
    }
}
