//! Record Store subsystem for roster
//!
//! Turns positional rows into an immutable, ordered store of employee
//! records. The CSV reader and writer are thin collaborators around the
//! `csv` crate; the store itself never sees CSV syntax.
//!
//! # Design Principles
//!
//! - Fail fast: one bad row aborts the whole load
//! - Insertion order is preserved and observable
//! - No indexes, no mutation, no deletion

mod errors;
mod reader;
mod store;
mod writer;

pub use errors::{IngestionError, IngestionErrorCode, IngestionResult, Severity};
pub use reader::CsvRecordReader;
pub use store::RecordStore;
pub use writer::CsvRecordWriter;
