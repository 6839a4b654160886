//! Lifecycle events for roster
//!
//! Events are explicit and typed. Each maps to one stable UPPER_SNAKE name
//! that appears as the `event` field of a log line.
//!
//! Ingestion and generation are wrapped in `ObservationScope`s named
//! `INGEST` and `GENERATE`, which log their own `_BEGIN`, `_COMPLETE` and
//! `_FAILED` lines.

use std::fmt;

/// Observable events in a roster run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// A command started
    RunBegin,
    /// A command finished
    RunComplete,
    /// A command aborted (FATAL)
    RunFailed,

    // Configuration
    /// Configuration loaded and validated
    ConfigLoaded,

    // Queries
    /// A catalog entry produced a value
    QueryComplete,
    /// A catalog entry failed; the run continues
    QueryFailed,

    // Report
    /// Every selected entry reached the sink
    ReportComplete,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::RunBegin => "ROSTER_RUN_BEGIN",
            Event::RunComplete => "ROSTER_RUN_COMPLETE",
            Event::RunFailed => "ROSTER_RUN_FAILED",

            Event::ConfigLoaded => "CONFIG_LOADED",

            Event::QueryComplete => "QUERY_COMPLETE",
            Event::QueryFailed => "QUERY_FAILED",

            Event::ReportComplete => "REPORT_COMPLETE",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::RunFailed)
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
    fn test_all_events_have_string_representation() {
        let events = [
            Event::RunBegin,
            Event::RunComplete,
            Event::RunFailed,
            Event::ConfigLoaded,
            Event::QueryComplete,
            Event::QueryFailed,
            Event::ReportComplete,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_fatal_events() {
        assert!(Event::RunFailed.is_fatal());
        assert!(!Event::QueryFailed.is_fatal());
        assert!(!Event::RunBegin.is_fatal());
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::RunBegin), "ROSTER_RUN_BEGIN");
        assert_eq!(format!("{}", Event::QueryFailed), "QUERY_FAILED");
    }
}
