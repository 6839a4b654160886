//! Ingestion error types
//!
//! Error codes:
//! - ROSTER_INGEST_ARITY (FATAL)
//! - ROSTER_INGEST_ID (FATAL)
//! - ROSTER_INGEST_DUPLICATE_ID (FATAL)
//! - ROSTER_INGEST_NAME (FATAL)
//! - ROSTER_INGEST_SALARY (FATAL)
//! - ROSTER_INGEST_HIRE_DATE (FATAL)
//! - ROSTER_INGEST_IO (FATAL)
//!
//! A corrupt input never produces a partial store, so every ingestion
//! error is fatal for the run.

use std::fmt;
use std::io;

/// Severity levels for ingestion errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The run must stop
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Ingestion error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestionErrorCode {
    /// Row does not have exactly ten fields
    RosterIngestArity,
    /// Id is not a positive integer
    RosterIngestId,
    /// Id already present in the store
    RosterIngestDuplicateId,
    /// First or last name is empty
    RosterIngestName,
    /// Salary is not a finite non-negative number
    RosterIngestSalary,
    /// Hire date does not match yyyy-MM-dd
    RosterIngestHireDate,
    /// Underlying reader failed (I/O or CSV syntax)
    RosterIngestIo,
}

impl IngestionErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            IngestionErrorCode::RosterIngestArity => "ROSTER_INGEST_ARITY",
            IngestionErrorCode::RosterIngestId => "ROSTER_INGEST_ID",
            IngestionErrorCode::RosterIngestDuplicateId => "ROSTER_INGEST_DUPLICATE_ID",
            IngestionErrorCode::RosterIngestName => "ROSTER_INGEST_NAME",
            IngestionErrorCode::RosterIngestSalary => "ROSTER_INGEST_SALARY",
            IngestionErrorCode::RosterIngestHireDate => "ROSTER_INGEST_HIRE_DATE",
            IngestionErrorCode::RosterIngestIo => "ROSTER_INGEST_IO",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Fatal
    }
}

impl fmt::Display for IngestionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Ingestion error with row context
#[derive(Debug)]
pub struct IngestionError {
    /// Error code
    code: IngestionErrorCode,
    /// Human-readable message
    message: String,
    /// 1-based data row number, header excluded
    row: Option<usize>,
    /// Underlying cause for reader failures
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl IngestionError {
    fn at_row(code: IngestionErrorCode, row: usize, message: String) -> Self {
        Self {
            code,
            message,
            row: Some(row),
            source: None,
        }
    }

    /// Row has the wrong number of fields
    pub fn arity(row: usize, found: usize, expected: usize) -> Self {
        Self::at_row(
            IngestionErrorCode::RosterIngestArity,
            row,
            format!("expected {} fields, found {}", expected, found),
        )
    }

    /// Id is not a positive integer
    pub fn invalid_id(row: usize, value: &str) -> Self {
        Self::at_row(
            IngestionErrorCode::RosterIngestId,
            row,
            format!("id '{}' is not a positive integer", value),
        )
    }

    /// Id seen twice
    pub fn duplicate_id(row: usize, id: u32) -> Self {
        Self::at_row(
            IngestionErrorCode::RosterIngestDuplicateId,
            row,
            format!("id {} already present", id),
        )
    }

    /// First or last name is empty
    pub fn empty_name(row: usize, field: &str) -> Self {
        Self::at_row(
            IngestionErrorCode::RosterIngestName,
            row,
            format!("{} must not be empty", field),
        )
    }

    /// Salary is not a finite non-negative number
    pub fn invalid_salary(row: usize, value: &str) -> Self {
        Self::at_row(
            IngestionErrorCode::RosterIngestSalary,
            row,
            format!("salary '{}' is not a non-negative number", value),
        )
    }

    /// Hire date does not parse
    pub fn invalid_hire_date(row: usize, value: &str) -> Self {
        Self::at_row(
            IngestionErrorCode::RosterIngestHireDate,
            row,
            format!("hire date '{}' does not match yyyy-MM-dd", value),
        )
    }

    /// Reader failure with its cause
    pub fn io(
        reason: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code: IngestionErrorCode::RosterIngestIo,
            message: reason.into(),
            row: None,
            source: Some(Box::new(source)),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> IngestionErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the 1-based data row, if the error is tied to one
    pub fn row(&self) -> Option<usize> {
        self.row
    }

    /// Ingestion errors always abort the run
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for IngestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: ", self.severity(), self.code.code())?;
        if let Some(row) = self.row {
            write!(f, "row {}: ", row)?;
        }
        write!(f, "{}", self.message)?;
        if let Some(ref source) = self.source {
            write!(f, " (caused by: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for IngestionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<io::Error> for IngestionError {
    fn from(e: io::Error) -> Self {
        Self::io("failed to read input", e)
    }
}

impl From<csv::Error> for IngestionError {
    fn from(e: csv::Error) -> Self {
        Self::io("malformed CSV input", e)
    }
}

/// Result type for ingestion
pub type IngestionResult<T> = Result<T, IngestionError>;
