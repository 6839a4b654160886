//! Record accessor errors

use thiserror::Error;

/// Result type for hire-date access
pub type DateResult<T> = Result<T, DateFormatError>;

/// A hire date that does not match the fixed `yyyy-MM-dd` format.
///
/// Ingestion rejects such records, so this surfaces only when a record
/// was built by hand and never passed through a store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("hire date '{value}' does not match {expected}")]
pub struct DateFormatError {
    /// The offending text
    pub value: String,
    /// The format that was expected
    pub expected: &'static str,
}

impl DateFormatError {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            expected: "yyyy-MM-dd",
        }
    }

    /// Stable error code used in reports and logs
    pub fn code(&self) -> &'static str {
        "ROSTER_DATE_FORMAT"
    }
}
