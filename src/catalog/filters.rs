//! Predicate filtering for catalog queries
//!
//! Filters records strictly according to predicates.
//! Text matching is exact and case-sensitive, no coercion.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::record::{hire_date, DateResult, Employee, TextField};
use crate::store::RecordStore;

/// A condition over one record field
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// salary > bound
    SalaryAbove(f64),
    /// salary < bound
    SalaryBelow(f64),
    /// field == value
    TextEquals(TextField, String),
    /// field starts with prefix
    TextStartsWith(TextField, String),
    /// field contains substring
    TextContains(TextField, String),
    /// field has more than n characters
    TextLongerThan(TextField, usize),
    /// hire date strictly after the date
    HiredAfter(NaiveDate),
    /// hire date strictly before the date
    HiredBefore(NaiveDate),
    /// hire date falls on Saturday or Sunday
    HiredOnWeekend,
    /// negation of the inner predicate
    Not(Box<Predicate>),
}

impl Predicate {
    pub fn salary_above(bound: f64) -> Self {
        Predicate::SalaryAbove(bound)
    }

    pub fn salary_below(bound: f64) -> Self {
        Predicate::SalaryBelow(bound)
    }

    pub fn equals(field: TextField, value: impl Into<String>) -> Self {
        Predicate::TextEquals(field, value.into())
    }

    pub fn starts_with(field: TextField, prefix: impl Into<String>) -> Self {
        Predicate::TextStartsWith(field, prefix.into())
    }

    pub fn contains(field: TextField, needle: impl Into<String>) -> Self {
        Predicate::TextContains(field, needle.into())
    }

    pub fn longer_than(field: TextField, chars: usize) -> Self {
        Predicate::TextLongerThan(field, chars)
    }

    pub fn hired_after(date: NaiveDate) -> Self {
        Predicate::HiredAfter(date)
    }

    pub fn hired_before(date: NaiveDate) -> Self {
        Predicate::HiredBefore(date)
    }
}

/// Evaluates predicates against records
pub struct PredicateFilter;

impl PredicateFilter {
    /// Checks if a record matches all predicates.
    ///
    /// Evaluation stops at the first predicate that does not match.
    pub fn matches(employee: &Employee, predicates: &[Predicate]) -> DateResult<bool> {
        for predicate in predicates {
            if !Self::matches_predicate(employee, predicate)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Records matching all predicates, in store order
    pub fn select<'a>(
        store: &'a RecordStore,
        predicates: &[Predicate],
    ) -> DateResult<Vec<&'a Employee>> {
        let mut selected = Vec::new();
        for employee in store {
            if Self::matches(employee, predicates)? {
                selected.push(employee);
            }
        }
        Ok(selected)
    }

    /// Number of records matching all predicates
    pub fn count(store: &RecordStore, predicates: &[Predicate]) -> DateResult<usize> {
        let mut count = 0;
        for employee in store {
            if Self::matches(employee, predicates)? {
                count += 1;
            }
        }
        Ok(count)
    }

    fn matches_predicate(employee: &Employee, predicate: &Predicate) -> DateResult<bool> {
        let matched = match predicate {
            Predicate::SalaryAbove(bound) => employee.salary > *bound,
            Predicate::SalaryBelow(bound) => employee.salary < *bound,
            Predicate::TextEquals(field, value) => field.get(employee) == value.as_str(),
            Predicate::TextStartsWith(field, prefix) => {
                field.get(employee).starts_with(prefix.as_str())
            }
            Predicate::TextContains(field, needle) => field.get(employee).contains(needle.as_str()),
            Predicate::TextLongerThan(field, chars) => field.get(employee).chars().count() > *chars,
            Predicate::HiredAfter(date) => hire_date(employee)? > *date,
            Predicate::HiredBefore(date) => hire_date(employee)? < *date,
            Predicate::HiredOnWeekend => is_weekend(hire_date(employee)?),
            Predicate::Not(inner) => !Self::matches_predicate(employee, inner)?,
        };
        Ok(matched)
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
