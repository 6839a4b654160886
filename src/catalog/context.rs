//! Evaluation context shared by every query in a run

use chrono::{Local, Months, NaiveDate};

/// Inputs a query may need besides the store.
///
/// `reference_date` stands in for "today" in tenure and recency queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryContext {
    pub reference_date: NaiveDate,
}

impl QueryContext {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    /// Context anchored at the local calendar date
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// The reference date moved back by whole years.
    ///
    /// Feb 29 clamps to Feb 28 in non-leap years.
    pub fn years_ago(&self, years: u32) -> NaiveDate {
        self.reference_date
            .checked_sub_months(Months::new(years.saturating_mul(12)))
            .unwrap_or(NaiveDate::MIN)
    }
}
