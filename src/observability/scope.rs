//! ObservationScope for begin/complete logging around a unit of work
//!
//! - Logs `{name}_BEGIN` on creation
//! - Logs `{name}_COMPLETE` with `duration_ms` on success
//! - Logs `{name}_FAILED` on failure
//! - Warns `{name}_INCOMPLETE` if dropped unresolved

use std::cell::Cell;
use std::time::Instant;

use super::logger::{Logger, Severity};

/// A scope that logs begin, outcome and elapsed time
///
/// ```ignore
/// let scope = ObservationScope::with_fields("INGEST", &[("path", "employees.csv")]);
/// let store = CsvRecordReader::open(path)?;
/// scope.complete_with_fields(&[("records", "1000")]);
/// ```
pub struct ObservationScope<'a> {
    name: &'a str,
    resolved: Cell<bool>,
    fields: Vec<(&'a str, String)>,
    started: Instant,
}

impl<'a> ObservationScope<'a> {
    /// Create a scope, logging `{name}_BEGIN`.
    ///
    /// The fields are repeated on every line the scope logs.
    pub fn with_fields(name: &'a str, fields: &[(&'a str, &str)]) -> Self {
        Logger::info(&format!("{}_BEGIN", name), fields);

        Self {
            name,
            resolved: Cell::new(false),
            fields: fields.iter().map(|(k, v)| (*k, v.to_string())).collect(),
            started: Instant::now(),
        }
    }

    /// Mark the scope as successfully completed
    pub fn complete(self) {
        self.complete_with_fields(&[]);
    }

    /// Mark the scope as completed, adding result fields
    pub fn complete_with_fields(self, extra_fields: &[(&str, &str)]) {
        self.resolved.set(true);
        let elapsed = self.elapsed_ms();

        let mut all_fields = self.field_refs();
        all_fields.extend(extra_fields.iter().copied());
        all_fields.push(("duration_ms", elapsed.as_str()));

        Logger::info(&format!("{}_COMPLETE", self.name), &all_fields);
    }

    /// Mark the scope as failed at ERROR level
    pub fn fail(self, reason: &str) {
        self.fail_at(Severity::Error, reason);
    }

    /// Mark the scope as failed at FATAL level
    pub fn fail_fatal(self, reason: &str) {
        self.fail_at(Severity::Fatal, reason);
    }

    fn fail_at(self, severity: Severity, reason: &str) {
        self.resolved.set(true);
        let mut all_fields = self.field_refs();
        all_fields.push(("reason", reason));
        Logger::log(severity, &format!("{}_FAILED", self.name), &all_fields);
    }

    fn elapsed_ms(&self) -> String {
        self.started.elapsed().as_millis().to_string()
    }

    fn field_refs(&self) -> Vec<(&str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str())).collect()
    }
}

impl Drop for ObservationScope<'_> {
    fn drop(&mut self) {
        if !self.resolved.get() {
            let event = format!("{}_INCOMPLETE", self.name);
            Logger::warn(&event, &[("reason", "scope dropped without completion")]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_starts_unresolved() {
        let scope = ObservationScope::with_fields("TEST", &[]);
        assert!(!scope.resolved.get());
        scope.complete();
    }

    #[test]
    fn test_scope_with_fields_complete() {
        let scope = ObservationScope::with_fields("TEST", &[("path", "employees.csv")]);
        scope.complete_with_fields(&[("records", "10")]);
    }

    #[test]
    fn test_scope_fail() {
        let scope = ObservationScope::with_fields("TEST", &[]);
        scope.fail("bad row");
    }

    #[test]
    fn test_scope_fail_fatal() {
        let scope = ObservationScope::with_fields("TEST", &[]);
        scope.fail_fatal("unreadable input");
    }

    #[test]
    fn test_scope_drop_without_complete() {
        let scope = ObservationScope::with_fields("TEST", &[]);
        drop(scope);
    }

    #[test]
    fn test_elapsed_is_numeric() {
        let scope = ObservationScope::with_fields("TEST", &[]);
        std::thread::sleep(std::time::Duration::from_millis(5));
        let ms: u64 = scope.elapsed_ms().parse().unwrap();
        assert!(ms >= 5);
        scope.complete();
    }
}
