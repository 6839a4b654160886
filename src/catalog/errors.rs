//! Catalog query errors
//!
//! Error codes:
//! - ROSTER_QUERY_DATE_FORMAT
//! - ROSTER_QUERY_DUPLICATE_KEY
//! - ROSTER_QUERY_SERIALIZATION
//! - ROSTER_QUERY_UNKNOWN
//!
//! A query error is local to the query that raised it; the runner reports
//! it and moves on to the next query.

use thiserror::Error;

use crate::record::DateFormatError;

/// Result type for catalog queries
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors a single catalog query can raise
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// A record's hire date could not be read
    #[error("{0}")]
    DateFormat(#[from] DateFormatError),

    /// A mapping query met the same key twice
    #[error("duplicate key '{0}'")]
    DuplicateKey(String),

    /// The typed result could not be turned into a report value
    #[error("result serialization failed: {0}")]
    Serialization(String),

    /// No catalog entry has this name
    #[error("unknown query '{0}'")]
    UnknownQuery(String),
}

impl QueryError {
    /// Stable error code used in reports and logs
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::DateFormat(_) => "ROSTER_QUERY_DATE_FORMAT",
            QueryError::DuplicateKey(_) => "ROSTER_QUERY_DUPLICATE_KEY",
            QueryError::Serialization(_) => "ROSTER_QUERY_SERIALIZATION",
            QueryError::UnknownQuery(_) => "ROSTER_QUERY_UNKNOWN",
        }
    }
}

/// Errors that stop a catalog run as a whole
#[derive(Debug, Error)]
pub enum RunError {
    /// The selection named a query the catalog does not have
    #[error(transparent)]
    Selection(#[from] QueryError),

    /// The report sink could not be written
    #[error("report output failed: {0}")]
    Sink(#[from] std::io::Error),
}

impl From<serde_json::Error> for QueryError {
    fn from(e: serde_json::Error) -> Self {
        QueryError::Serialization(e.to_string())
    }
}
