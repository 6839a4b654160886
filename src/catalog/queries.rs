//! Typed query functions
//!
//! Each function is a pure read of the store. Thresholds, names and
//! dates are parameters; the catalog registry binds the fixed values.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;

use crate::record::{full_name, hire_date, DateResult, Employee, TextField};
use crate::store::RecordStore;

use super::context::QueryContext;
use super::errors::{QueryError, QueryResult};
use super::extrema::{first_max_by, first_min_by};
use super::filters::{Predicate, PredicateFilter};
use super::grouping;
use super::sorter::{RecordSorter, SortKey, SortSpec};
use super::stats;

// =============================================================================
// Filters
// =============================================================================

pub fn salary_above(store: &RecordStore, bound: f64) -> Vec<&Employee> {
    store.iter().filter(|e| e.salary > bound).collect()
}

pub fn salary_below(store: &RecordStore, bound: f64) -> Vec<&Employee> {
    store.iter().filter(|e| e.salary < bound).collect()
}

/// Records with a salary above the store mean
pub fn salary_above_average(store: &RecordStore) -> Vec<&Employee> {
    let average = stats::salary_average(store);
    salary_above(store, average)
}

pub fn hired_after(store: &RecordStore, date: NaiveDate) -> DateResult<Vec<&Employee>> {
    PredicateFilter::select(store, &[Predicate::hired_after(date)])
}

pub fn hired_before(store: &RecordStore, date: NaiveDate) -> DateResult<Vec<&Employee>> {
    PredicateFilter::select(store, &[Predicate::hired_before(date)])
}

pub fn field_starts_with<'a>(
    store: &'a RecordStore,
    field: TextField,
    prefix: &str,
) -> Vec<&'a Employee> {
    store
        .iter()
        .filter(|e| field.get(e).starts_with(prefix))
        .collect()
}

pub fn field_equals<'a>(
    store: &'a RecordStore,
    field: TextField,
    value: &str,
) -> Vec<&'a Employee> {
    store.iter().filter(|e| field.get(e) == value).collect()
}

pub fn field_contains<'a>(
    store: &'a RecordStore,
    field: TextField,
    needle: &str,
) -> Vec<&'a Employee> {
    store.iter().filter(|e| field.get(e).contains(needle)).collect()
}

/// Records whose field has more than `chars` characters
pub fn field_longer_than(store: &RecordStore, field: TextField, chars: usize) -> Vec<&Employee> {
    store
        .iter()
        .filter(|e| field.get(e).chars().count() > chars)
        .collect()
}

/// Full names of records hired on a Saturday or Sunday
pub fn hired_on_weekend(store: &RecordStore) -> DateResult<Vec<String>> {
    Ok(PredicateFilter::select(store, &[Predicate::HiredOnWeekend])?
        .into_iter()
        .map(full_name)
        .collect())
}

// =============================================================================
// Projections
// =============================================================================

/// One field of every record, in store order
pub fn project(store: &RecordStore, field: TextField) -> Vec<&str> {
    store.iter().map(|e| field.get(e)).collect()
}

/// Distinct values of a field in first-seen order
pub fn distinct(store: &RecordStore, field: TextField) -> Vec<&str> {
    let mut seen = HashSet::new();
    store
        .iter()
        .map(|e| field.get(e))
        .filter(|value| seen.insert(*value))
        .collect()
}

pub fn full_names(records: &[&Employee]) -> Vec<String> {
    records.iter().map(|e| full_name(e)).collect()
}

pub fn ids(records: &[&Employee]) -> Vec<u32> {
    records.iter().map(|e| e.id).collect()
}

/// Full name to salary.
///
/// Two records with the same full name make the mapping ambiguous, so the
/// query fails instead of silently keeping one of them.
pub fn salary_by_full_name(store: &RecordStore) -> QueryResult<BTreeMap<String, f64>> {
    let mut mapping = BTreeMap::new();
    for record in store {
        let name = full_name(record);
        if mapping.contains_key(&name) {
            return Err(QueryError::DuplicateKey(name));
        }
        mapping.insert(name, record.salary);
    }
    Ok(mapping)
}

// =============================================================================
// Extrema
// =============================================================================

pub fn highest_earner(store: &RecordStore) -> Option<&Employee> {
    first_max_by(store.iter(), |a, b| a.salary.total_cmp(&b.salary))
}

pub fn earliest_hired(store: &RecordStore) -> DateResult<Option<&Employee>> {
    let dated = with_hire_dates(store)?;
    Ok(first_min_by(dated, |a, b| a.0.cmp(&b.0)).map(|(_, e)| e))
}

pub fn latest_hired(store: &RecordStore) -> DateResult<Option<&Employee>> {
    let dated = with_hire_dates(store)?;
    Ok(first_max_by(dated, |a, b| a.0.cmp(&b.0)).map(|(_, e)| e))
}

pub fn oldest_hire_date(store: &RecordStore) -> DateResult<Option<NaiveDate>> {
    earliest_hired(store)?.map(hire_date).transpose()
}

pub fn newest_hire_date(store: &RecordStore) -> DateResult<Option<NaiveDate>> {
    latest_hired(store)?.map(hire_date).transpose()
}

/// Record with the fewest characters in its first name
pub fn shortest_first_name(store: &RecordStore) -> Option<&Employee> {
    first_min_by(store.iter(), |a, b| {
        a.first_name.chars().count().cmp(&b.first_name.chars().count())
    })
}

fn with_hire_dates(store: &RecordStore) -> DateResult<Vec<(NaiveDate, &Employee)>> {
    store
        .iter()
        .map(|e| hire_date(e).map(|date| (date, e)))
        .collect()
}

// =============================================================================
// Sorting
// =============================================================================

/// The `k` highest-paid records
pub fn top_earners(store: &RecordStore, k: usize) -> Vec<&Employee> {
    RecordSorter::top_k(store, k)
}

/// Emails of the `k` highest-paid records
pub fn top_earner_emails(store: &RecordStore, k: usize) -> Vec<&str> {
    top_earners(store, k)
        .into_iter()
        .map(|e| e.email.as_str())
        .collect()
}

/// "First Last" strings in ascending order
pub fn sorted_full_names(store: &RecordStore) -> Vec<String> {
    let mut names: Vec<String> = store.iter().map(full_name).collect();
    names.sort();
    names
}

pub fn sorted_by_hire_date(store: &RecordStore) -> DateResult<Vec<&Employee>> {
    RecordSorter::sorted(store, &SortSpec::asc(SortKey::HireDate))
}

pub fn sorted_by_last_then_first(store: &RecordStore) -> DateResult<Vec<&Employee>> {
    RecordSorter::sorted(store, &SortSpec::asc(SortKey::LastThenFirst))
}

// =============================================================================
// Grouping composites
// =============================================================================

/// Most frequent value of a field; ties go to the smallest value
pub fn most_common(store: &RecordStore, field: TextField) -> Option<String> {
    let counts = grouping::count_by(store, field);
    grouping::key_of_max(&counts, |a, b| a.cmp(b))
}

pub fn group_with_highest_average_salary(store: &RecordStore, field: TextField) -> Option<String> {
    let averages = grouping::salary_average_by(store, field);
    grouping::key_of_max(&averages, |a, b| a.total_cmp(b))
}

pub fn group_with_highest_total_salary(store: &RecordStore, field: TextField) -> Option<String> {
    let totals = grouping::salary_sum_by(store, field);
    grouping::key_of_max(&totals, |a, b| a.total_cmp(b))
}

/// Group (by `group_field`) holding the most records whose position
/// contains `needle`
pub fn group_with_most_positions_containing(
    store: &RecordStore,
    group_field: TextField,
    needle: &str,
) -> Option<String> {
    let matching = field_contains(store, TextField::Position, needle);
    let counts = grouping::count_by(matching, group_field);
    grouping::key_of_max(&counts, |a, b| a.cmp(b))
}

/// Field values whose group has more than `threshold` records
pub fn groups_larger_than(store: &RecordStore, field: TextField, threshold: usize) -> Vec<String> {
    grouping::count_by(store, field)
        .into_iter()
        .filter(|(_, count)| *count > threshold)
        .map(|(key, _)| key)
        .collect()
}

// =============================================================================
// Statistics
// =============================================================================

/// Salary total of records whose field equals `value`
pub fn salary_total_where(store: &RecordStore, field: TextField, value: &str) -> f64 {
    stats::salary_total(field_equals(store, field, value))
}

/// Mean salary of records whose position contains `needle`
pub fn salary_average_where_position_contains(store: &RecordStore, needle: &str) -> f64 {
    stats::salary_average(field_contains(store, TextField::Position, needle))
}

/// Records hired before the reference date moved back `years`
pub fn tenured_longer_than(
    store: &RecordStore,
    reference: NaiveDate,
    years: u32,
) -> DateResult<Vec<&Employee>> {
    hired_before(store, years_before(reference, years))
}

/// Mean salary of records hired after the reference date moved back `years`
pub fn salary_average_hired_within(
    store: &RecordStore,
    reference: NaiveDate,
    years: u32,
) -> DateResult<f64> {
    let recent = hired_after(store, years_before(reference, years))?;
    Ok(stats::salary_average(recent))
}

fn years_before(reference: NaiveDate, years: u32) -> NaiveDate {
    QueryContext::new(reference).years_ago(years)
}
