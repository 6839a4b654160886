//! Result types for catalog runs

use serde_json::Value;

use super::errors::QueryResult;

/// What one query produced, as handed to a report sink
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// The query's value
    Ok(Value),
    /// The query could not be computed
    Failed {
        /// Error code (ROSTER_QUERY_*)
        code: &'static str,
        /// Human-readable message
        message: String,
    },
}

impl QueryOutcome {
    /// Converts a query result into an outcome
    pub fn from_result(result: QueryResult<Value>) -> Self {
        match result {
            Ok(value) => QueryOutcome::Ok(value),
            Err(e) => QueryOutcome::Failed {
                code: e.code(),
                message: e.to_string(),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, QueryOutcome::Ok(_))
    }
}

/// Counts for one catalog run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Queries that produced a value
    pub executed: usize,
    /// Queries that failed, as (name, code)
    pub failures: Vec<(String, &'static str)>,
}

impl RunSummary {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Total number of queries that reached the sink
    pub fn total(&self) -> usize {
        self.executed + self.failures.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}
