//! CLI-specific error types
//!
//! All CLI errors are FATAL: the process prints the error and exits 1.

use std::fmt;
use std::io;

use crate::catalog::{QueryError, RunError};
use crate::store::IngestionError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (files, stdout)
    IoError,
    /// Input CSV rejected
    IngestFailed,
    /// Query name not in the catalog
    UnknownQuery,
    /// Command-line value out of range or malformed
    InvalidArgument,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "ROSTER_CLI_CONFIG_ERROR",
            Self::IoError => "ROSTER_CLI_IO_ERROR",
            Self::IngestFailed => "ROSTER_CLI_INGEST_FAILED",
            Self::UnknownQuery => "ROSTER_CLI_UNKNOWN_QUERY",
            Self::InvalidArgument => "ROSTER_CLI_INVALID_ARGUMENT",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn ingest_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IngestFailed, msg)
    }

    pub fn unknown_query(name: &str) -> Self {
        Self::new(
            CliErrorCode::UnknownQuery,
            format!("Unknown query '{}'. Run 'roster list' for names.", name),
        )
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidArgument, msg)
    }

    /// Get the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<IngestionError> for CliError {
    fn from(e: IngestionError) -> Self {
        Self::ingest_failed(e.to_string())
    }
}

impl From<RunError> for CliError {
    fn from(e: RunError) -> Self {
        match e {
            RunError::Selection(QueryError::UnknownQuery(name)) => Self::unknown_query(&name),
            RunError::Selection(other) => Self::invalid_argument(other.to_string()),
            RunError::Sink(io) => Self::from(io),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_has_code_and_message() {
        let err = CliError::config_error("max_items must be > 0");
        assert_eq!(
            err.to_string(),
            "ROSTER_CLI_CONFIG_ERROR: max_items must be > 0"
        );
    }

    #[test]
    fn test_from_ingestion_error() {
        let err = CliError::from(IngestionError::duplicate_id(3, 7));
        assert_eq!(err.code(), CliErrorCode::IngestFailed);
        assert!(err.message().contains("ROSTER_INGEST_DUPLICATE_ID"));
    }

    #[test]
    fn test_from_run_error() {
        let unknown = CliError::from(RunError::Selection(QueryError::UnknownQuery("x".into())));
        assert_eq!(unknown.code_str(), "ROSTER_CLI_UNKNOWN_QUERY");

        let sink = CliError::from(RunError::Sink(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "closed",
        )));
        assert_eq!(sink.code(), CliErrorCode::IoError);
    }
}
