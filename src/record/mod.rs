//! Employee record subsystem for roster
//!
//! Defines the immutable employee record and the typed field accessors
//! every catalog query reads through.
//!
//! # Design Principles
//!
//! - Records are created once at ingestion and never mutated
//! - Hire dates are kept in their textual `yyyy-MM-dd` form
//! - Date parsing lives in exactly one place (`parse_hire_date`)

mod accessors;
mod errors;
mod types;

pub use accessors::{full_name, hire_date, parse_hire_date, salary, TextField};
pub use errors::{DateFormatError, DateResult};
pub use types::{Employee, FIELD_COUNT, HEADER, HIRE_DATE_FORMAT};
