//! Observability for roster
//!
//! - Structured logging (JSON lines on stderr)
//! - Lifecycle events
//! - Run metrics
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. Logging never fails the caller
//! 3. No background threads
//! 4. Deterministic output

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsSnapshot, RunMetrics};
pub use scope::ObservationScope;

/// Log a lifecycle event with fields
///
/// Fatal events log at FATAL, `QueryFailed` at ERROR, everything else at INFO.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_fatal() {
        Severity::Fatal
    } else if event == Event::QueryFailed {
        Severity::Error
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::ConfigLoaded, &[("path", "roster.json")]);
    }
}
