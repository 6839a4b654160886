//! Grouping aggregates
//!
//! Groups are keyed by exact, case-sensitive field values and returned as
//! `BTreeMap`s, so report output is ordered by key. A group exists only if
//! at least one record falls into it.

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::record::{hire_date, DateResult, Employee, TextField};

use super::extrema::first_max_by;

/// Number of records per field value
pub fn count_by<'a, I>(records: I, field: TextField) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let mut groups = BTreeMap::new();
    for record in records {
        *groups.entry(field.get(record).to_string()).or_insert(0) += 1;
    }
    groups
}

/// Salary total per field value
pub fn salary_sum_by<'a, I>(records: I, field: TextField) -> BTreeMap<String, f64>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let mut groups = BTreeMap::new();
    for record in records {
        *groups.entry(field.get(record).to_string()).or_insert(0.0) += record.salary;
    }
    groups
}

/// Mean salary per field value
pub fn salary_average_by<'a, I>(records: I, field: TextField) -> BTreeMap<String, f64>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let mut totals: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = totals
            .entry(field.get(record).to_string())
            .or_insert((0.0, 0));
        entry.0 += record.salary;
        entry.1 += 1;
    }
    totals
        .into_iter()
        .map(|(key, (sum, count))| (key, sum / count as f64))
        .collect()
}

/// Projected values per field value, each list in store order
pub fn collect_by<'a, I, T, F>(
    records: I,
    field: TextField,
    mut project: F,
) -> BTreeMap<String, Vec<T>>
where
    I: IntoIterator<Item = &'a Employee>,
    F: FnMut(&'a Employee) -> T,
{
    let mut groups: BTreeMap<String, Vec<T>> = BTreeMap::new();
    for record in records {
        groups
            .entry(field.get(record).to_string())
            .or_default()
            .push(project(record));
    }
    groups
}

/// Highest-paid record per field value; ties keep the earlier record
pub fn highest_salary_by<'a, I>(records: I, field: TextField) -> BTreeMap<String, &'a Employee>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let mut groups: BTreeMap<String, &'a Employee> = BTreeMap::new();
    for record in records {
        groups
            .entry(field.get(record).to_string())
            .and_modify(|best| {
                if record.salary.total_cmp(&best.salary).is_gt() {
                    *best = record;
                }
            })
            .or_insert(record);
    }
    groups
}

/// Counts by `inner` within each `outer` group
pub fn nested_count_by<'a, I>(
    records: I,
    outer: TextField,
    inner: TextField,
) -> BTreeMap<String, BTreeMap<String, usize>>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let mut groups: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
    for record in records {
        *groups
            .entry(outer.get(record).to_string())
            .or_default()
            .entry(inner.get(record).to_string())
            .or_insert(0) += 1;
    }
    groups
}

/// Records per hire year
pub fn by_hire_year<'a, I>(records: I) -> DateResult<BTreeMap<i32, Vec<&'a Employee>>>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let mut groups: BTreeMap<i32, Vec<&'a Employee>> = BTreeMap::new();
    for record in records {
        groups.entry(hire_date(record)?.year()).or_default().push(record);
    }
    Ok(groups)
}

/// Number of hires per calendar month (1-12), across all years
pub fn count_by_hire_month<'a, I>(records: I) -> DateResult<BTreeMap<u32, usize>>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let mut groups = BTreeMap::new();
    for record in records {
        *groups.entry(hire_date(record)?.month()).or_insert(0) += 1;
    }
    Ok(groups)
}

/// Key of the largest group value.
///
/// Keys are visited in ascending order and the first maximum wins, so
/// ties resolve to the smallest key.
pub fn key_of_max<K, V, F>(groups: &BTreeMap<K, V>, mut compare: F) -> Option<K>
where
    K: Clone,
    F: FnMut(&V, &V) -> std::cmp::Ordering,
{
    first_max_by(groups.iter(), |a, b| compare(a.1, b.1)).map(|(k, _)| k.clone())
}
