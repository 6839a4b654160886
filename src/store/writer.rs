//! CSV writer for employee records
//!
//! Writes the header followed by one row per record, in record order.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::record::{Employee, HEADER};

use super::errors::{IngestionError, IngestionResult};

/// Writes employee records as CSV
pub struct CsvRecordWriter;

impl CsvRecordWriter {
    /// Creates (or truncates) a file and writes the records to it.
    pub fn create(path: &Path, records: &[Employee]) -> IngestionResult<()> {
        let file = File::create(path).map_err(|e| {
            IngestionError::io(format!("failed to create {}", path.display()), e)
        })?;
        Self::to_writer(file, records)
    }

    /// Writes header and records to any writer, flushing at the end.
    pub fn to_writer<W: Write>(writer: W, records: &[Employee]) -> IngestionResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(HEADER)?;
        for record in records {
            csv_writer.write_record(record.to_row())?;
        }
        csv_writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_header_then_rows() {
        let records = vec![Employee::new(
            1,
            "Ann",
            "Lee",
            "a@x.com",
            "555-1",
            "HR",
            "Manager",
            55000.25,
            "2023-01-02",
            "John Doe",
        )];

        let mut buffer = Vec::new();
        CsvRecordWriter::to_writer(&mut buffer, &records).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ID,First Name,Last Name"));
        assert_eq!(
            lines[1],
            "1,Ann,Lee,a@x.com,555-1,HR,Manager,55000.25,2023-01-02,John Doe"
        );
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let records = vec![Employee::new(
            1,
            "Ann",
            "Lee",
            "a@x.com",
            "555-1",
            "HR",
            "Manager, Senior",
            1.0,
            "2023-01-02",
            "Doe, John",
        )];

        let mut buffer = Vec::new();
        CsvRecordWriter::to_writer(&mut buffer, &records).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"Manager, Senior\""));
        assert!(text.contains("\"Doe, John\""));
    }
}
