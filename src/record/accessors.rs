//! Typed field accessors
//!
//! Every query reads record fields through these projections instead of
//! touching raw text, so hire-date parsing happens in one place.

use chrono::NaiveDate;

use super::errors::{DateFormatError, DateResult};
use super::types::{Employee, HIRE_DATE_FORMAT};

/// Text-valued record fields usable as filter targets and grouping keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    FirstName,
    LastName,
    Email,
    Phone,
    Department,
    Position,
    Manager,
}

impl TextField {
    /// Projects the field out of a record
    pub fn get(self, employee: &Employee) -> &str {
        match self {
            TextField::FirstName => &employee.first_name,
            TextField::LastName => &employee.last_name,
            TextField::Email => &employee.email,
            TextField::Phone => &employee.phone,
            TextField::Department => &employee.department,
            TextField::Position => &employee.position,
            TextField::Manager => &employee.manager,
        }
    }
}

pub fn salary(employee: &Employee) -> f64 {
    employee.salary
}

/// "First Last"
pub fn full_name(employee: &Employee) -> String {
    format!("{} {}", employee.first_name, employee.last_name)
}

/// Parses a record's hire date.
pub fn hire_date(employee: &Employee) -> DateResult<NaiveDate> {
    parse_hire_date(&employee.hire_date)
}

/// Parses text in the fixed `yyyy-MM-dd` format.
///
/// The shape is checked before chrono sees the text: chrono accepts
/// unpadded days and months, which the fixed format does not.
pub fn parse_hire_date(text: &str) -> DateResult<NaiveDate> {
    let bytes = text.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !well_shaped {
        return Err(DateFormatError::new(text));
    }

    NaiveDate::parse_from_str(text, HIRE_DATE_FORMAT).map_err(|_| DateFormatError::new(text))
}
