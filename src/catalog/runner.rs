//! Catalog runner
//!
//! Run flow (strict order):
//! 1. Execute the entry against the store
//! 2. Log QUERY_COMPLETE or QUERY_FAILED
//! 3. Count it in the run metrics
//! 4. Hand the outcome to the sink
//!
//! A failing query never stops the run. Only a sink write error does.

use crate::observability::{log_event_with_fields, Event, RunMetrics};
use crate::report::ReportSink;
use crate::store::RecordStore;

use super::context::QueryContext;
use super::errors::RunError;
use super::registry::{Catalog, QueryDef};
use super::result::{QueryOutcome, RunSummary};

/// Runs catalog entries against one store
pub struct QueryRunner<'a> {
    store: &'a RecordStore,
    context: QueryContext,
    metrics: Option<&'a RunMetrics>,
}

impl<'a> QueryRunner<'a> {
    pub fn new(store: &'a RecordStore, context: QueryContext) -> Self {
        Self {
            store,
            context,
            metrics: None,
        }
    }

    /// Records executed and failed counts in `metrics`
    pub fn with_metrics(mut self, metrics: &'a RunMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Runs `entries` in order, emitting each outcome exactly once
    pub fn run<'q, I, S>(&self, entries: I, sink: &mut S) -> Result<RunSummary, RunError>
    where
        I: IntoIterator<Item = &'q QueryDef>,
        S: ReportSink + ?Sized,
    {
        let mut summary = RunSummary::default();

        for def in entries {
            let outcome = QueryOutcome::from_result(def.execute(self.store, &self.context));

            match &outcome {
                QueryOutcome::Ok(_) => {
                    log_event_with_fields(
                        Event::QueryComplete,
                        &[("category", def.category().as_str()), ("query", def.name())],
                    );
                    if let Some(metrics) = self.metrics {
                        metrics.increment_queries_executed();
                    }
                    summary.executed += 1;
                }
                QueryOutcome::Failed { code, message } => {
                    log_event_with_fields(
                        Event::QueryFailed,
                        &[("code", *code), ("message", message.as_str()), ("query", def.name())],
                    );
                    if let Some(metrics) = self.metrics {
                        metrics.increment_queries_failed();
                    }
                    summary.failures.push((def.name().to_string(), *code));
                }
            }

            sink.emit(def.name(), &outcome)?;
        }

        sink.finish()?;

        let executed = summary.executed.to_string();
        let failed = summary.failed().to_string();
        log_event_with_fields(
            Event::ReportComplete,
            &[("executed", executed.as_str()), ("failed", failed.as_str())],
        );

        Ok(summary)
    }
}

impl Catalog {
    /// Runs every entry in catalog order
    pub fn run_all<S>(
        &self,
        store: &RecordStore,
        context: QueryContext,
        sink: &mut S,
    ) -> Result<RunSummary, RunError>
    where
        S: ReportSink + ?Sized,
    {
        QueryRunner::new(store, context).run(self.entries(), sink)
    }

    /// Runs the named entries in catalog order.
    ///
    /// Unknown names fail before any entry runs.
    pub fn run_selected<N, S>(
        &self,
        names: &[N],
        store: &RecordStore,
        context: QueryContext,
        sink: &mut S,
    ) -> Result<RunSummary, RunError>
    where
        N: AsRef<str>,
        S: ReportSink + ?Sized,
    {
        let selected = self.select(names)?;
        QueryRunner::new(store, context).run(selected, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use chrono::NaiveDate;

    use crate::catalog::QueryError;
    use crate::record::Employee;
    use crate::report::MemorySink;

    fn context() -> QueryContext {
        QueryContext::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    fn store() -> RecordStore {
        RecordStore::from_records(vec![
            Employee::new(
                1,
                "A",
                "One",
                "",
                "",
                "HR",
                "Manager",
                40_000.0,
                "2023-01-01",
                "John Doe",
            ),
            Employee::new(
                2,
                "B",
                "Two",
                "",
                "",
                "Sales",
                "Salesperson",
                60_000.0,
                "2023-01-02",
                "John Doe",
            ),
        ])
        .unwrap()
    }

    struct BrokenSink;

    impl ReportSink for BrokenSink {
        fn emit(&mut self, _name: &str, _outcome: &QueryOutcome) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_run_all_reaches_sink_once_per_entry() {
        let catalog = Catalog::standard();
        let mut sink = MemorySink::new();

        let summary = catalog.run_all(&store(), context(), &mut sink).unwrap();

        assert_eq!(sink.names(), catalog.names());
        assert_eq!(summary.total(), catalog.len());
        assert!(summary.all_succeeded());
        assert!(sink.is_finished());
    }

    #[test]
    fn test_bad_hire_date_fails_date_queries_only() {
        let store = RecordStore::unchecked(vec![
            Employee::new(1, "A", "One", "", "", "HR", "Manager", 40_000.0, "2023-01-01", ""),
            Employee::new(2, "B", "Two", "", "", "HR", "Manager", 60_000.0, "01/02/2023", ""),
        ]);
        let catalog = Catalog::standard();
        let metrics = RunMetrics::new();
        let mut sink = MemorySink::new();

        let summary = QueryRunner::new(&store, context())
            .with_metrics(&metrics)
            .run(catalog.entries(), &mut sink)
            .unwrap();

        assert_eq!(sink.outcomes().len(), catalog.len());
        assert!(summary.failed() > 0);
        assert!(summary
            .failures
            .iter()
            .all(|(_, code)| *code == "ROSTER_QUERY_DATE_FORMAT"));
        assert!(!sink.get("oldest_hire_date").unwrap().is_ok());
        assert!(sink.get("average_salary").unwrap().is_ok());

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.queries_failed as usize, summary.failed());
        assert_eq!(snapshot.queries_executed as usize, summary.executed);
    }

    #[test]
    fn test_run_selected_unknown_runs_nothing() {
        let mut sink = MemorySink::new();
        let err = Catalog::standard()
            .run_selected(&["average_salary", "bogus"], &store(), context(), &mut sink)
            .unwrap_err();

        assert!(matches!(
            err,
            RunError::Selection(QueryError::UnknownQuery(ref name)) if name == "bogus"
        ));
        assert!(sink.outcomes().is_empty());
    }

    #[test]
    fn test_run_selected_subset() {
        let mut sink = MemorySink::new();
        let summary = Catalog::standard()
            .run_selected(&["total_employees"], &store(), context(), &mut sink)
            .unwrap();

        assert_eq!(summary.executed, 1);
        assert_eq!(
            sink.get("total_employees"),
            Some(&QueryOutcome::Ok(serde_json::json!(2)))
        );
    }

    #[test]
    fn test_sink_error_stops_run() {
        let err = Catalog::standard()
            .run_all(&store(), context(), &mut BrokenSink)
            .unwrap_err();
        assert!(matches!(err, RunError::Sink(_)));
    }
}
