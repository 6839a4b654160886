//! CSV reader feeding the record store
//!
//! The header row is skipped here, not in the store. Rows are read with
//! flexible arity so a short or long row reaches the store and fails as
//! `ROSTER_INGEST_ARITY` with its row number, instead of as a CSV error.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::errors::{IngestionError, IngestionResult};
use super::store::RecordStore;

/// Reads employee CSV into a [`RecordStore`]
pub struct CsvRecordReader;

impl CsvRecordReader {
    /// Opens a CSV file and loads it.
    pub fn open(path: &Path) -> IngestionResult<RecordStore> {
        let file = File::open(path).map_err(|e| {
            IngestionError::io(format!("failed to open {}", path.display()), e)
        })?;
        Self::from_reader(file)
    }

    /// Loads CSV text from any reader. The first line is treated as a header.
    pub fn from_reader<R: Read>(reader: R) -> IngestionResult<RecordStore> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let rows = csv_reader
            .records()
            .collect::<Result<Vec<csv::StringRecord>, csv::Error>>()?;

        RecordStore::load(rows.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::IngestionErrorCode;

    const HEADER: &str =
        "ID,First Name,Last Name,Email,Phone,Department,Position,Salary,Hire Date,Manager\n";

    #[test]
    fn test_reads_rows_after_header() {
        let data = format!(
            "{}1,Ann,Lee,a@x.com,555-1,HR,Manager,55000.5,2023-01-02,John Doe\n\
             2,Bob,Kay,b@x.com,555-2,Sales,Salesperson,61000,2023-01-03,Jane Smith\n",
            HEADER
        );
        let store = CsvRecordReader::from_reader(data.as_bytes()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].first_name, "Ann");
        assert_eq!(store.all()[0].salary, 55000.5);
        assert_eq!(store.all()[1].manager, "Jane Smith");
    }

    #[test]
    fn test_header_only_gives_empty_store() {
        let store = CsvRecordReader::from_reader(HEADER.as_bytes()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_short_row_is_arity_error() {
        let data = format!("{}1,Ann,Lee,a@x.com,555-1,HR,Manager,55000,2023-01-02\n", HEADER);
        let err = CsvRecordReader::from_reader(data.as_bytes()).unwrap_err();
        assert_eq!(err.code(), IngestionErrorCode::RosterIngestArity);
        assert_eq!(err.row(), Some(1));
    }

    #[test]
    fn test_quoted_fields() {
        let data = format!(
            "{}\"1\",\"Ann\",\"Lee\",\"a@x.com\",\"555-1\",\"HR\",\"Manager, Senior\",\
             \"55000\",\"2023-01-02\",\"John Doe\"\n",
            HEADER
        );
        let store = CsvRecordReader::from_reader(data.as_bytes()).unwrap();
        assert_eq!(store.all()[0].position, "Manager, Senior");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CsvRecordReader::open(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert_eq!(err.code(), IngestionErrorCode::RosterIngestIo);
    }
}
