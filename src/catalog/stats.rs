//! Derived salary and tenure statistics
//!
//! Empty inputs yield 0.0 (sums, averages) or `None` (median), never a
//! division by zero.

use chrono::NaiveDate;

use crate::record::{hire_date, DateResult, Employee};

/// Days per tenure year, no leap-year adjustment
pub const DAYS_PER_YEAR: f64 = 365.0;

pub fn salary_total<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a Employee>,
{
    records.into_iter().map(|e| e.salary).sum()
}

/// Mean salary, 0.0 when there are no records
pub fn salary_average<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a Employee>,
{
    let (sum, count) = records
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), e| (sum + e.salary, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Median salary.
///
/// Odd count: the middle value of the ascending sort. Even count: the mean
/// of the two central values.
pub fn salary_median<'a, I>(records: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let mut salaries: Vec<f64> = records.into_iter().map(|e| e.salary).collect();
    if salaries.is_empty() {
        return None;
    }
    salaries.sort_by(|a, b| a.total_cmp(b));

    let mid = salaries.len() / 2;
    if salaries.len() % 2 == 0 {
        Some((salaries[mid - 1] + salaries[mid]) / 2.0)
    } else {
        Some(salaries[mid])
    }
}

/// Whole days between hire date and the reference date
pub fn tenure_days(employee: &Employee, reference: NaiveDate) -> DateResult<i64> {
    Ok(reference.signed_duration_since(hire_date(employee)?).num_days())
}

/// Mean tenure in years: mean of tenure days, divided by 365
pub fn tenure_average_years<'a, I>(records: I, reference: NaiveDate) -> DateResult<f64>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let mut total_days: i64 = 0;
    let mut count: usize = 0;
    for record in records {
        total_days += tenure_days(record, reference)?;
        count += 1;
    }
    if count == 0 {
        return Ok(0.0);
    }
    Ok(total_days as f64 / count as f64 / DAYS_PER_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_salary(id: u32, salary: f64) -> Employee {
        Employee::new(id, "F", "L", "", "", "HR", "Manager", salary, "2023-01-01", "")
    }

    fn with_hire(id: u32, hire: &str) -> Employee {
        Employee::new(id, "F", "L", "", "", "HR", "Manager", 1.0, hire, "")
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_total_and_average() {
        let r = vec![with_salary(1, 40_000.0), with_salary(2, 60_000.0), with_salary(3, 80_000.0)];
        assert_eq!(salary_total(&r), 180_000.0);
        assert_eq!(salary_average(&r), 60_000.0);
    }

    #[test]
    fn test_empty_defaults() {
        let r: Vec<Employee> = Vec::new();
        assert_eq!(salary_total(&r), 0.0);
        assert_eq!(salary_average(&r), 0.0);
        assert_eq!(salary_median(&r), None);
        assert_eq!(tenure_average_years(&r, date(2025, 1, 1)).unwrap(), 0.0);
    }

    #[test]
    fn test_median_odd() {
        let r = vec![with_salary(1, 80_000.0), with_salary(2, 40_000.0), with_salary(3, 60_000.0)];
        assert_eq!(salary_median(&r), Some(60_000.0));
    }

    #[test]
    fn test_median_even() {
        let r = vec![
            with_salary(1, 10.0),
            with_salary(2, 40.0),
            with_salary(3, 20.0),
            with_salary(4, 30.0),
        ];
        assert_eq!(salary_median(&r), Some(25.0));
    }

    #[test]
    fn test_median_single() {
        let r = vec![with_salary(1, 7.5)];
        assert_eq!(salary_median(&r), Some(7.5));
    }

    #[test]
    fn test_tenure_days() {
        let e = with_hire(1, "2023-01-01");
        assert_eq!(tenure_days(&e, date(2024, 1, 1)).unwrap(), 365);
        assert_eq!(tenure_days(&e, date(2023, 1, 1)).unwrap(), 0);
        assert_eq!(tenure_days(&e, date(2022, 12, 31)).unwrap(), -1);
    }

    #[test]
    fn test_tenure_average_divides_by_365() {
        // 2024 is a leap year: 366 days and 731 days
        let r = vec![with_hire(1, "2024-01-01"), with_hire(2, "2023-01-01")];
        let avg = tenure_average_years(&r, date(2025, 1, 1)).unwrap();
        let expected = (366.0 + 731.0) / 2.0 / 365.0;
        assert!((avg - expected).abs() < 1e-12);
    }

    #[test]
    fn test_tenure_bad_date_errors() {
        let r = vec![with_hire(1, "Jan 1 2023")];
        assert!(tenure_average_years(&r, date(2025, 1, 1)).is_err());
    }
}
