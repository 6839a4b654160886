//! Record sorting for catalog queries
//!
//! All sorts are stable: records with equal keys keep store order,
//! in both directions.

use std::cmp::Ordering;

use crate::record::{full_name, hire_date, DateResult, Employee};
use crate::store::RecordStore;

/// Key to sort records by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Salary,
    HireDate,
    /// "First Last" as one string
    FullName,
    /// Last name, then first name
    LastThenFirst,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Desc,
        }
    }
}

/// Sorts records
pub struct RecordSorter;

impl RecordSorter {
    /// Sorts records in place according to the specification.
    ///
    /// Keys that need parsing or allocation are computed once per record
    /// before sorting.
    pub fn sort(records: &mut Vec<&Employee>, spec: &SortSpec) -> DateResult<()> {
        match spec.key {
            SortKey::Salary => {
                records.sort_by(|a, b| directed(a.salary.total_cmp(&b.salary), spec.direction));
            }
            SortKey::LastThenFirst => {
                records.sort_by(|a, b| {
                    let ordering = a
                        .last_name
                        .cmp(&b.last_name)
                        .then_with(|| a.first_name.cmp(&b.first_name));
                    directed(ordering, spec.direction)
                });
            }
            SortKey::HireDate => {
                let mut keyed = Vec::with_capacity(records.len());
                for record in records.iter() {
                    keyed.push((hire_date(record)?, *record));
                }
                keyed.sort_by(|a, b| directed(a.0.cmp(&b.0), spec.direction));
                *records = keyed.into_iter().map(|(_, r)| r).collect();
            }
            SortKey::FullName => {
                let mut keyed: Vec<(String, &Employee)> =
                    records.iter().map(|r| (full_name(r), *r)).collect();
                keyed.sort_by(|a, b| directed(a.0.cmp(&b.0), spec.direction));
                *records = keyed.into_iter().map(|(_, r)| r).collect();
            }
        }
        Ok(())
    }

    /// Returns every record of the store in sorted order
    pub fn sorted<'a>(store: &'a RecordStore, spec: &SortSpec) -> DateResult<Vec<&'a Employee>> {
        let mut records: Vec<&Employee> = store.iter().collect();
        Self::sort(&mut records, spec)?;
        Ok(records)
    }

    /// The `k` highest-paid records, equal salaries in store order.
    ///
    /// Equivalent to taking `k` from the descending salary sort.
    pub fn top_k(store: &RecordStore, k: usize) -> Vec<&Employee> {
        let mut records: Vec<&Employee> = store.iter().collect();
        records.sort_by(|a, b| b.salary.total_cmp(&a.salary));
        records.truncate(k);
        records
    }
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(id: u32, first: &str, last: &str, salary: f64, hire: &str) -> Employee {
        Employee::new(id, first, last, "", "", "HR", "Manager", salary, hire, "")
    }

    fn ids(records: &[&Employee]) -> Vec<u32> {
        records.iter().map(|e| e.id).collect()
    }

    fn store() -> RecordStore {
        RecordStore::from_records(vec![
            make(1, "Cy", "Adams", 30.0, "2023-01-05"),
            make(2, "Ann", "Brown", 20.0, "2023-01-03"),
            make(3, "Bob", "Adams", 25.0, "2023-01-04"),
        ])
        .unwrap()
    }

    #[test]
    fn test_sort_salary_ascending() {
        let s = store();
        let sorted = RecordSorter::sorted(&s, &SortSpec::asc(SortKey::Salary)).unwrap();
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_salary_descending() {
        let s = store();
        let sorted = RecordSorter::sorted(&s, &SortSpec::desc(SortKey::Salary)).unwrap();
        assert_eq!(ids(&sorted), vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_stable_both_directions() {
        let s = RecordStore::from_records(vec![
            make(1, "A", "A", 25.0, "2023-01-01"),
            make(2, "B", "B", 25.0, "2023-01-01"),
            make(3, "C", "C", 25.0, "2023-01-01"),
        ])
        .unwrap();

        let asc = RecordSorter::sorted(&s, &SortSpec::asc(SortKey::Salary)).unwrap();
        let desc = RecordSorter::sorted(&s, &SortSpec::desc(SortKey::HireDate)).unwrap();
        assert_eq!(ids(&asc), vec![1, 2, 3]);
        assert_eq!(ids(&desc), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_by_hire_date() {
        let s = store();
        let sorted = RecordSorter::sorted(&s, &SortSpec::asc(SortKey::HireDate)).unwrap();
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_last_then_first() {
        let s = store();
        let sorted = RecordSorter::sorted(&s, &SortSpec::asc(SortKey::LastThenFirst)).unwrap();
        // Adams Bob, Adams Cy, Brown Ann
        assert_eq!(ids(&sorted), vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_full_name() {
        let s = store();
        let sorted = RecordSorter::sorted(&s, &SortSpec::asc(SortKey::FullName)).unwrap();
        // "Ann Brown", "Bob Adams", "Cy Adams"
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn test_top_k_matches_descending_prefix() {
        let s = store();
        let sorted = RecordSorter::sorted(&s, &SortSpec::desc(SortKey::Salary)).unwrap();
        for k in 0..=4 {
            let top = RecordSorter::top_k(&s, k);
            let expected: Vec<&Employee> = sorted.iter().copied().take(k).collect();
            assert_eq!(ids(&top), ids(&expected));
        }
    }

    #[test]
    fn test_bad_date_fails_hire_date_sort() {
        let bad = make(9, "X", "Y", 1.0, "2023-1-1");
        let mut records = vec![&bad];
        assert!(RecordSorter::sort(&mut records, &SortSpec::asc(SortKey::HireDate)).is_err());
    }
}
