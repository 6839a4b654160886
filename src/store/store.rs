//! In-memory record store
//!
//! Holds the ordered, validated sequence of employee records for one run.
//! Loading is all-or-nothing: the first bad row aborts the whole load.

use std::collections::HashSet;

use crate::record::{parse_hire_date, Employee, FIELD_COUNT};

use super::errors::{IngestionError, IngestionResult};

/// Immutable, insertion-ordered collection of employee records.
///
/// There are no indexes; every query is a full scan.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Employee>,
}

impl RecordStore {
    /// Creates an empty store
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads positional rows into a store.
    ///
    /// Each row must hold exactly ten fields in column order. Row numbers in
    /// errors are 1-based and exclude any header the reader skipped.
    pub fn load<I, R, S>(rows: I) -> IngestionResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut records = Vec::new();
        let mut seen = HashSet::new();

        for (index, row) in rows.into_iter().enumerate() {
            let row_number = index + 1;
            let fields: Vec<S> = row.into_iter().collect();
            let record = parse_row(row_number, &fields)?;

            if !seen.insert(record.id) {
                return Err(IngestionError::duplicate_id(row_number, record.id));
            }
            records.push(record);
        }

        Ok(Self { records })
    }

    /// Builds a store from typed records, applying the same validation as
    /// [`RecordStore::load`].
    pub fn from_records(records: Vec<Employee>) -> IngestionResult<Self> {
        let mut seen = HashSet::new();

        for (index, record) in records.iter().enumerate() {
            let row_number = index + 1;
            validate_record(row_number, record)?;
            if !seen.insert(record.id) {
                return Err(IngestionError::duplicate_id(row_number, record.id));
            }
        }

        Ok(Self { records })
    }

    /// Builds a store without validation, so tests can hold records that
    /// ingestion would have rejected.
    #[cfg(test)]
    pub(crate) fn unchecked(records: Vec<Employee>) -> Self {
        Self { records }
    }

    /// All records in insertion order
    pub fn all(&self) -> &[Employee] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finds a record by id (linear scan)
    pub fn get(&self, id: u32) -> Option<&Employee> {
        self.records.iter().find(|e| e.id == id)
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Parses one positional row into a validated record.
fn parse_row<S: AsRef<str>>(row: usize, fields: &[S]) -> IngestionResult<Employee> {
    if fields.len() != FIELD_COUNT {
        return Err(IngestionError::arity(row, fields.len(), FIELD_COUNT));
    }

    let field = move |i: usize| fields[i].as_ref();

    let id = parse_id(row, field(0))?;

    let salary = parse_salary(row, field(7))?;

    let record = Employee::new(
        id,
        field(1),
        field(2),
        field(3),
        field(4),
        field(5),
        field(6),
        salary,
        field(8),
        field(9),
    );

    validate_record(row, &record)?;
    Ok(record)
}

/// Fields are never trimmed: ids are plain ASCII digits.
fn parse_id(row: usize, text: &str) -> IngestionResult<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IngestionError::invalid_id(row, text));
    }
    match text.parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(IngestionError::invalid_id(row, text)),
    }
}

/// Salaries start and end with a digit: no sign, no padding, no `inf`.
fn parse_salary(row: usize, text: &str) -> IngestionResult<f64> {
    let well_formed = text.starts_with(|c: char| c.is_ascii_digit())
        && text.ends_with(|c: char| c.is_ascii_digit())
        && text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !well_formed {
        return Err(IngestionError::invalid_salary(row, text));
    }
    text.parse().map_err(|_| IngestionError::invalid_salary(row, text))
}

/// Checks the record invariants that do not depend on other rows.
fn validate_record(row: usize, record: &Employee) -> IngestionResult<()> {
    if record.id == 0 {
        return Err(IngestionError::invalid_id(row, "0"));
    }
    if record.first_name.trim().is_empty() {
        return Err(IngestionError::empty_name(row, "first name"));
    }
    if record.last_name.trim().is_empty() {
        return Err(IngestionError::empty_name(row, "last name"));
    }
    if !record.salary.is_finite() || record.salary < 0.0 {
        return Err(IngestionError::invalid_salary(
            row,
            &record.salary.to_string(),
        ));
    }
    if parse_hire_date(&record.hire_date).is_err() {
        return Err(IngestionError::invalid_hire_date(row, &record.hire_date));
    }
    Ok(())
}
