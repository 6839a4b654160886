//! In-memory report sink for tests and embedding callers

use std::io;

use crate::catalog::QueryOutcome;

use super::sink::ReportSink;

/// Keeps every outcome in emission order
#[derive(Debug, Default)]
pub struct MemorySink {
    outcomes: Vec<(String, QueryOutcome)>,
    finished: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcomes(&self) -> &[(String, QueryOutcome)] {
        &self.outcomes
    }

    /// Outcome of the named query, if it was emitted
    pub fn get(&self, name: &str) -> Option<&QueryOutcome> {
        self.outcomes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, outcome)| outcome)
    }

    /// Emitted names, in order
    pub fn names(&self) -> Vec<&str> {
        self.outcomes.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl ReportSink for MemorySink {
    fn emit(&mut self, name: &str, outcome: &QueryOutcome) -> io::Result<()> {
        self.outcomes.push((name.to_string(), outcome.clone()));
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.finished = true;
        Ok(())
    }
}
