//! The standard query catalog
//!
//! Every entry is a named pure function of the store and the run context.
//! Entries run in catalog order; their names are stable identifiers used by
//! `roster query NAME` and `roster report --only NAME`.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::record::{full_name, parse_hire_date, TextField};
use crate::store::RecordStore;

use super::context::QueryContext;
use super::errors::{QueryError, QueryResult};
use super::grouping;
use super::queries;
use super::stats;

/// Signature shared by every catalog entry
pub type QueryFn = fn(&RecordStore, &QueryContext) -> QueryResult<Value>;

/// Salary strictly above this counts as a high earner
pub const HIGH_EARNER_SALARY: f64 = 100_000.0;

/// Salary strictly below this counts as a low earner
pub const LOW_EARNER_SALARY: f64 = 50_000.0;

/// Hires strictly after this date count as recent
pub const RECENT_HIRE_CUTOFF: &str = "2015-12-31";

/// Tenure threshold for long-serving employees
pub const LONG_TENURE_YEARS: u32 = 10;

/// Look-back window for recent-hire salary averages
pub const RECENT_HIRE_YEARS: u32 = 5;

/// Managers with more than this many reports
pub const LARGE_TEAM_SIZE: usize = 5;

/// Kind of computation an entry performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Filter,
    Grouping,
    Extrema,
    Sorting,
    Statistic,
    DateDerived,
    Composite,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Filter => "filter",
            Category::Grouping => "grouping",
            Category::Extrema => "extrema",
            Category::Sorting => "sorting",
            Category::Statistic => "statistic",
            Category::DateDerived => "date",
            Category::Composite => "composite",
        }
    }
}

/// One named catalog entry
#[derive(Clone, Copy)]
pub struct QueryDef {
    name: &'static str,
    description: &'static str,
    category: Category,
    run: QueryFn,
}

impl QueryDef {
    pub fn new(
        name: &'static str,
        description: &'static str,
        category: Category,
        run: QueryFn,
    ) -> Self {
        Self {
            name,
            description,
            category,
            run,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Runs the entry against a store; never mutates it
    pub fn execute(&self, store: &RecordStore, context: &QueryContext) -> QueryResult<Value> {
        (self.run)(store, context)
    }
}

impl fmt::Debug for QueryDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryDef")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish()
    }
}

fn output<T: Serialize>(value: T) -> QueryResult<Value> {
    Ok(serde_json::to_value(value)?)
}

/// An ordered set of named queries
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<QueryDef>,
}

impl Catalog {
    /// Builds a catalog from entries, in the given order
    pub fn new(entries: Vec<QueryDef>) -> Self {
        Self { entries }
    }

    /// The full employee query catalog
    pub fn standard() -> Self {
        use Category::*;
        use TextField::*;

        Self::new(vec![
            QueryDef::new(
                "high_earners",
                "Number of employees earning more than 100000",
                Filter,
                |store, _| output(queries::salary_above(store, HIGH_EARNER_SALARY).len()),
            ),
            QueryDef::new(
                "employees_per_department",
                "Employee count per department",
                Grouping,
                |store, _| output(grouping::count_by(store, Department)),
            ),
            QueryDef::new(
                "average_salary",
                "Mean salary across all employees",
                Statistic,
                |store, _| output(stats::salary_average(store)),
            ),
            QueryDef::new(
                "hired_after_2015",
                "Number of employees hired after 2015-12-31",
                DateDerived,
                |store, _| {
                    let cutoff = parse_hire_date(RECENT_HIRE_CUTOFF)?;
                    output(queries::hired_after(store, cutoff)?.len())
                },
            ),
            QueryDef::new(
                "highest_earner",
                "Employee with the highest salary",
                Extrema,
                |store, _| output(queries::highest_earner(store)),
            ),
            QueryDef::new(
                "distinct_positions",
                "Positions in first-seen order",
                Filter,
                |store, _| output(queries::distinct(store, Position)),
            ),
            QueryDef::new(
                "employees_per_manager",
                "Employee count per manager",
                Grouping,
                |store, _| output(grouping::count_by(store, Manager)),
            ),
            QueryDef::new(
                "total_salaries",
                "Sum of all salaries",
                Statistic,
                |store, _| output(stats::salary_total(store)),
            ),
            QueryDef::new(
                "first_names",
                "Number of first names",
                Filter,
                |store, _| output(queries::project(store, FirstName).len()),
            ),
            QueryDef::new(
                "earliest_hired",
                "Employee with the earliest hire date",
                Extrema,
                |store, _| output(queries::earliest_hired(store)?),
            ),
            QueryDef::new(
                "first_names_by_department",
                "First names grouped by department",
                Grouping,
                |store, _| {
                    output(grouping::collect_by(store, Department, |e| {
                        e.first_name.as_str()
                    }))
                },
            ),
            QueryDef::new(
                "average_salary_per_department",
                "Mean salary per department",
                Grouping,
                |store, _| output(grouping::salary_average_by(store, Department)),
            ),
            QueryDef::new(
                "top_3_earners",
                "Three highest-paid employees",
                Sorting,
                |store, _| output(queries::top_earners(store, 3)),
            ),
            QueryDef::new(
                "emails",
                "Number of email addresses",
                Filter,
                |store, _| output(queries::project(store, Email).len()),
            ),
            QueryDef::new(
                "first_name_starts_with_j",
                "Number of first names starting with J",
                Filter,
                |store, _| output(queries::field_starts_with(store, FirstName, "J").len()),
            ),
            QueryDef::new(
                "salary_by_full_name",
                "Salary keyed by full name",
                Composite,
                |store, _| output(queries::salary_by_full_name(store)?),
            ),
            QueryDef::new(
                "distinct_managers",
                "Number of distinct managers",
                Filter,
                |store, _| output(queries::distinct(store, Manager).len()),
            ),
            QueryDef::new(
                "phone_numbers",
                "Number of phone numbers",
                Filter,
                |store, _| output(queries::project(store, Phone).len()),
            ),
            QueryDef::new(
                "shortest_first_name",
                "Employee with the shortest first name",
                Extrema,
                |store, _| output(queries::shortest_first_name(store)),
            ),
            QueryDef::new(
                "employees_by_hire_year",
                "Employees grouped by hire year",
                DateDerived,
                |store, _| output(grouping::by_hire_year(store)?),
            ),
            QueryDef::new(
                "it_department_salaries",
                "Sum of salaries in the IT department",
                Statistic,
                |store, _| output(queries::salary_total_where(store, Department, "IT")),
            ),
            QueryDef::new(
                "sorted_full_names",
                "Full names in ascending order",
                Sorting,
                |store, _| output(queries::sorted_full_names(store)),
            ),
            QueryDef::new(
                "low_earners",
                "Number of employees earning less than 50000",
                Filter,
                |store, _| output(queries::salary_below(store, LOW_EARNER_SALARY).len()),
            ),
            QueryDef::new(
                "most_common_first_name",
                "Most frequent first name",
                Grouping,
                |store, _| output(queries::most_common(store, FirstName)),
            ),
            QueryDef::new(
                "ids_managed_by_john_doe",
                "Ids of employees managed by John Doe",
                Filter,
                |store, _| {
                    output(queries::ids(&queries::field_equals(store, Manager, "John Doe")))
                },
            ),
            QueryDef::new(
                "highest_salary_per_department",
                "Highest-paid employee per department",
                Grouping,
                |store, _| output(grouping::highest_salary_by(store, Department)),
            ),
            QueryDef::new(
                "total_employees",
                "Number of employees",
                Statistic,
                |store, _| output(store.len()),
            ),
            QueryDef::new(
                "department_with_highest_average_salary",
                "Department with the highest mean salary",
                Composite,
                |store, _| output(queries::group_with_highest_average_salary(store, Department)),
            ),
            QueryDef::new(
                "sorted_by_hire_date",
                "Number of employees ordered by hire date",
                Sorting,
                |store, _| output(queries::sorted_by_hire_date(store)?.len()),
            ),
            QueryDef::new(
                "top_5_earner_emails",
                "Emails of the five highest-paid employees",
                Sorting,
                |store, _| output(queries::top_earner_emails(store, 5)),
            ),
            QueryDef::new(
                "total_salary_managed_by_jane_smith",
                "Sum of salaries of employees managed by Jane Smith",
                Statistic,
                |store, _| output(queries::salary_total_where(store, Manager, "Jane Smith")),
            ),
            QueryDef::new(
                "manager_with_most_employees",
                "Manager with the most reports",
                Composite,
                |store, _| output(queries::most_common(store, Manager)),
            ),
            QueryDef::new(
                "manager_position_names",
                "Full names of employees whose position contains Manager",
                Filter,
                |store, _| {
                    output(queries::full_names(&queries::field_contains(
                        store, Position, "Manager",
                    )))
                },
            ),
            QueryDef::new(
                "oldest_hire_date",
                "Earliest hire date",
                DateDerived,
                |store, _| output(queries::oldest_hire_date(store)?),
            ),
            QueryDef::new(
                "newest_hire_date",
                "Latest hire date",
                DateDerived,
                |store, _| output(queries::newest_hire_date(store)?),
            ),
            QueryDef::new(
                "tenure_over_10_years",
                "Number of employees hired more than 10 years before the reference date",
                DateDerived,
                |store, ctx| {
                    let tenured =
                        queries::tenured_longer_than(store, ctx.reference_date, LONG_TENURE_YEARS)?;
                    output(tenured.len())
                },
            ),
            QueryDef::new(
                "full_names_by_position",
                "Full names grouped by position",
                Grouping,
                |store, _| output(grouping::collect_by(store, Position, full_name)),
            ),
            QueryDef::new(
                "median_salary",
                "Median salary",
                Statistic,
                |store, _| output(stats::salary_median(store)),
            ),
            QueryDef::new(
                "average_salary_last_5_years",
                "Mean salary of employees hired in the last 5 years",
                DateDerived,
                |store, ctx| {
                    output(queries::salary_average_hired_within(
                        store,
                        ctx.reference_date,
                        RECENT_HIRE_YEARS,
                    )?)
                },
            ),
            QueryDef::new(
                "employees_by_department_and_position",
                "Employee count per position within each department",
                Grouping,
                |store, _| output(grouping::nested_count_by(store, Department, Position)),
            ),
            QueryDef::new(
                "above_average_salary",
                "Number of employees earning more than the mean",
                Composite,
                |store, _| output(queries::salary_above_average(store).len()),
            ),
            QueryDef::new(
                "hired_on_weekend",
                "Full names of employees hired on a Saturday or Sunday",
                DateDerived,
                |store, _| output(queries::hired_on_weekend(store)?),
            ),
            QueryDef::new(
                "average_developer_salary",
                "Mean salary of employees whose position contains Developer",
                Statistic,
                |store, _| {
                    output(queries::salary_average_where_position_contains(store, "Developer"))
                },
            ),
            QueryDef::new(
                "hires_per_month",
                "Hire count per calendar month",
                DateDerived,
                |store, _| output(grouping::count_by_hire_month(store)?),
            ),
            QueryDef::new(
                "sorted_by_last_then_first_name",
                "Number of employees ordered by last then first name",
                Sorting,
                |store, _| output(queries::sorted_by_last_then_first(store)?.len()),
            ),
            QueryDef::new(
                "department_with_highest_total_salary",
                "Department with the highest salary total",
                Composite,
                |store, _| output(queries::group_with_highest_total_salary(store, Department)),
            ),
            QueryDef::new(
                "phone_starts_with_555",
                "Full names of employees whose phone starts with 555",
                Filter,
                |store, _| {
                    output(queries::full_names(&queries::field_starts_with(
                        store, Phone, "555",
                    )))
                },
            ),
            QueryDef::new(
                "average_tenure_years",
                "Mean tenure in years at the reference date",
                DateDerived,
                |store, ctx| output(stats::tenure_average_years(store, ctx.reference_date)?),
            ),
            QueryDef::new(
                "department_with_most_engineers",
                "Department with the most positions containing Engineer",
                Composite,
                |store, _| {
                    output(queries::group_with_most_positions_containing(
                        store, Department, "Engineer",
                    ))
                },
            ),
            QueryDef::new(
                "managers_with_more_than_5_employees",
                "Managers with more than 5 reports",
                Composite,
                |store, _| output(queries::groups_larger_than(store, Manager, LARGE_TEAM_SIZE)),
            ),
            QueryDef::new(
                "last_names_longer_than_5",
                "Number of last names longer than 5 characters",
                Filter,
                |store, _| output(queries::field_longer_than(store, LastName, 5).len()),
            ),
            QueryDef::new(
                "engineering_roster",
                "Full names of employees in the Engineering department",
                Filter,
                |store, _| {
                    output(queries::full_names(&queries::field_equals(
                        store,
                        Department,
                        "Engineering",
                    )))
                },
            ),
        ])
    }

    pub fn entries(&self) -> &[QueryDef] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&QueryDef> {
        self.entries.iter().find(|def| def.name == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|def| def.name).collect()
    }

    /// Resolves names to entries, keeping catalog order.
    ///
    /// Any unknown name fails the whole selection.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> QueryResult<Vec<&QueryDef>> {
        if let Some(unknown) = names.iter().find(|n| self.get(n.as_ref()).is_none()) {
            return Err(QueryError::UnknownQuery(unknown.as_ref().to_string()));
        }
        Ok(self
            .entries
            .iter()
            .filter(|def| names.iter().any(|n| n.as_ref() == def.name))
            .collect())
    }
}
