//! Seeded record generator

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::record::Employee;

pub const DEPARTMENTS: [&str; 4] = ["HR", "Engineering", "Sales", "Marketing"];
pub const POSITIONS: [&str; 4] = ["Manager", "Developer", "Salesperson", "Marketer"];
pub const MANAGERS: [&str; 4] = ["John Doe", "Jane Smith", "Jim Brown", "Judy White"];

const BASE_SALARY: f64 = 50_000.0;
const SALARY_SPREAD: f64 = 50_000.0;
const HIRE_YEAR: i32 = 2023;
const HIRE_MONTH: u32 = 1;
const MAX_HIRE_DAY: u32 = 28;

/// Generates employee records from a seeded random source.
///
/// Record `i` (1-based) gets deterministic name, email and phone values
/// derived from `i`; department, position, salary, hire day and manager
/// are drawn from the seeded source.
pub struct EmployeeGenerator {
    rng: StdRng,
}

impl EmployeeGenerator {
    /// Creates a generator with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates `count` records with ids `1..=count`.
    pub fn generate(&mut self, count: u32) -> Vec<Employee> {
        (1..=count).map(|id| self.record(id)).collect()
    }

    /// Generates the record with the given id
    pub fn record(&mut self, id: u32) -> Employee {
        let department = self.pick(&DEPARTMENTS);
        let position = self.pick(&POSITIONS);
        let salary = BASE_SALARY + self.rng.gen::<f64>() * SALARY_SPREAD;
        let day = self.rng.gen_range(1..=MAX_HIRE_DAY);
        let manager = self.pick(&MANAGERS);

        Employee::new(
            id,
            format!("FirstName{}", id),
            format!("LastName{}", id),
            format!("email{}@example.com", id),
            format!("555-1234{}", id),
            department,
            position,
            salary,
            format!("{:04}-{:02}-{:02}", HIRE_YEAR, HIRE_MONTH, day),
            manager,
        )
    }

    fn pick(&mut self, choices: &[&'static str]) -> &'static str {
        choices[self.rng.gen_range(0..choices.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::hire_date;

    #[test]
    fn test_same_seed_same_records() {
        let a = EmployeeGenerator::new(7).generate(50);
        let b = EmployeeGenerator::new(7).generate(50);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_differs() {
        let a = EmployeeGenerator::new(1).generate(50);
        let b = EmployeeGenerator::new(2).generate(50);
        assert_ne!(a, b);
    }

    #[test]
    fn test_ids_and_derived_fields() {
        let records = EmployeeGenerator::new(3).generate(12);
        assert_eq!(records.len(), 12);
        for (i, e) in records.iter().enumerate() {
            let id = i as u32 + 1;
            assert_eq!(e.id, id);
            assert_eq!(e.first_name, format!("FirstName{}", id));
            assert_eq!(e.last_name, format!("LastName{}", id));
            assert_eq!(e.email, format!("email{}@example.com", id));
            assert!(e.phone.starts_with("555-1234"));
        }
    }

    #[test]
    fn test_values_within_ranges() {
        for e in EmployeeGenerator::new(11).generate(500) {
            assert!(DEPARTMENTS.contains(&e.department.as_str()));
            assert!(POSITIONS.contains(&e.position.as_str()));
            assert!(MANAGERS.contains(&e.manager.as_str()));
            assert!(e.salary >= 50_000.0 && e.salary < 100_000.0);
            assert!(hire_date(&e).is_ok(), "bad date {}", e.hire_date);
            assert!(e.hire_date.starts_with("2023-01-"));
        }
    }

    #[test]
    fn test_zero_count() {
        assert!(EmployeeGenerator::new(0).generate(0).is_empty());
    }
}
