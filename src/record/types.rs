//! Employee record type
//!
//! Positional layout (CSV column order):
//!
//! ```text
//! id, firstName, lastName, email, phone, department, position, salary, hireDate, manager
//! ```

use serde::{Deserialize, Serialize};

/// Number of positional fields in one row
pub const FIELD_COUNT: usize = 10;

/// Column headers written by the CSV writer
pub const HEADER: [&str; FIELD_COUNT] = [
    "ID",
    "First Name",
    "Last Name",
    "Email",
    "Phone",
    "Department",
    "Position",
    "Salary",
    "Hire Date",
    "Manager",
];

/// chrono format string for hire dates
pub const HIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// One employee's flat field tuple.
///
/// `department`, `position` and `manager` are open string sets; `manager`
/// names another employee informally and is never resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique positive identifier
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    /// Salary exactly as encountered
    pub salary: f64,
    /// Hire date in `yyyy-MM-dd` form
    pub hire_date: String,
    pub manager: String,
}

impl Employee {
    /// Creates a record from owned field values.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        department: impl Into<String>,
        position: impl Into<String>,
        salary: f64,
        hire_date: impl Into<String>,
        manager: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: phone.into(),
            department: department.into(),
            position: position.into(),
            salary,
            hire_date: hire_date.into(),
            manager: manager.into(),
        }
    }

    /// Returns the record as positional text fields.
    ///
    /// Salary uses the shortest representation that parses back to the
    /// same `f64`, so writing and re-reading a record is lossless.
    pub fn to_row(&self) -> [String; FIELD_COUNT] {
        [
            self.id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.department.clone(),
            self.position.clone(),
            self.salary.to_string(),
            self.hire_date.clone(),
            self.manager.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_row_positional_order() {
        let e = Employee::new(
            7,
            "Ada",
            "Byron",
            "ada@example.com",
            "555-0101",
            "Engineering",
            "Developer",
            72000.5,
            "2023-01-09",
            "Jane Smith",
        );
        let row = e.to_row();
        assert_eq!(row[0], "7");
        assert_eq!(row[1], "Ada");
        assert_eq!(row[5], "Engineering");
        assert_eq!(row[7], "72000.5");
        assert_eq!(row[8], "2023-01-09");
        assert_eq!(row[9], "Jane Smith");
    }

    #[test]
    fn test_salary_text_round_trips() {
        let salary = 50000.0 + 0.123456789012345 * 50000.0;
        let e = Employee::new(1, "A", "B", "", "", "HR", "Manager", salary, "2023-01-01", "");
        let parsed: f64 = e.to_row()[7].parse().unwrap();
        assert_eq!(parsed, salary);
    }

    #[test]
    fn test_header_matches_field_count() {
        assert_eq!(HEADER.len(), FIELD_COUNT);
        assert_eq!(HEADER[8], "Hire Date");
    }
}
