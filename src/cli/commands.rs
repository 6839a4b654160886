//! CLI command implementations
//!
//! Each command runs to completion synchronously:
//! - generate: seeded records → CSV
//! - report: CSV → store → catalog → stdout
//! - query: `report` restricted to one entry
//! - list: catalog names and descriptions
//!
//! Logs go to stderr. Stdout carries only command output.

use std::io::{self, Write};

use crate::catalog::{Catalog, QueryRunner, RunError, RunSummary};
use crate::generator::EmployeeGenerator;
use crate::observability::{log_event_with_fields, Event, Logger, ObservationScope, RunMetrics};
use crate::report::{JsonLinesSink, TextSink};
use crate::store::{CsvRecordReader, CsvRecordWriter, RecordStore};

use super::args::{Cli, Command, ReportFormat};
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_command(cli, &mut out)
}

/// Run the command described by `cli`, writing output to `out`
pub fn run_command<W: Write>(cli: Cli, out: &mut W) -> CliResult<()> {
    let config = Config::resolve(cli.config.as_deref())?;
    Logger::set_min_severity(config.log_severity());

    if let Some(path) = &cli.config {
        let path = path.display().to_string();
        log_event_with_fields(Event::ConfigLoaded, &[("path", path.as_str())]);
    }

    let command = cli.command.name();
    log_event_with_fields(Event::RunBegin, &[("command", command)]);

    let metrics = RunMetrics::new();
    let result = match cli.command {
        Command::Generate {
            output,
            count,
            seed,
        } => config
            .with_generate_overrides(output, count, seed)
            .and_then(|config| generate(&config, &metrics)),
        Command::Report { source, only } => config
            .with_source_overrides(source)
            .and_then(|config| report(&config, &only, &metrics, out))
            .map(|_| ()),
        Command::Query { name, source } => config
            .with_source_overrides(source)
            .and_then(|config| query(&config, &name, &metrics, out))
            .map(|_| ()),
        Command::List => list(&Catalog::standard(), out),
    };

    match &result {
        Ok(()) => {
            let counters = metrics.snapshot().fields();
            let mut fields: Vec<(&str, &str)> = vec![("command", command)];
            fields.extend(counters.iter().map(|(k, v)| (*k, v.as_str())));
            log_event_with_fields(Event::RunComplete, &fields);
        }
        Err(e) => {
            log_event_with_fields(
                Event::RunFailed,
                &[("code", e.code_str()), ("command", command), ("message", e.message())],
            );
        }
    }

    result
}

/// Generate `record_count` records with `seed` and write them to `output`
pub fn generate(config: &Config, metrics: &RunMetrics) -> CliResult<()> {
    let path = config.output.display().to_string();
    let count = config.record_count.to_string();
    let scope = ObservationScope::with_fields(
        "GENERATE",
        &[("count", count.as_str()), ("path", path.as_str())],
    );

    let records = EmployeeGenerator::new(config.seed).generate(config.record_count);

    if let Err(e) = CsvRecordWriter::create(&config.output, &records) {
        scope.fail(&e.to_string());
        return Err(CliError::io_error(format!("Failed to write {}: {}", path, e)));
    }

    metrics.add_records_generated(records.len() as u64);
    scope.complete();
    Ok(())
}

/// Read and validate the input CSV
pub fn load_store(config: &Config, metrics: &RunMetrics) -> CliResult<RecordStore> {
    let path = config.input.display().to_string();
    let scope = ObservationScope::with_fields("INGEST", &[("path", path.as_str())]);

    match CsvRecordReader::open(&config.input) {
        Ok(store) => {
            metrics.add_records_loaded(store.len() as u64);
            let records = store.len().to_string();
            scope.complete_with_fields(&[("records", records.as_str())]);
            Ok(store)
        }
        Err(e) => {
            scope.fail_fatal(&e.to_string());
            Err(e.into())
        }
    }
}

/// Run the catalog (or the `only` subset) over the input CSV.
///
/// Unknown names fail before the input is read. Failed queries are part of
/// the report and do not make the command fail.
pub fn report<W: Write>(
    config: &Config,
    only: &[String],
    metrics: &RunMetrics,
    out: &mut W,
) -> CliResult<RunSummary> {
    let catalog = Catalog::standard();
    let selected = if only.is_empty() {
        catalog.entries().iter().collect()
    } else {
        catalog.select(only).map_err(RunError::from)?
    };

    let context = config.query_context()?;
    let store = load_store(config, metrics)?;
    let runner = QueryRunner::new(&store, context).with_metrics(metrics);

    let summary = match config.format {
        ReportFormat::Text => {
            let mut sink = TextSink::with_max_items(&mut *out, config.max_items);
            runner.run(selected, &mut sink)?
        }
        ReportFormat::Json => {
            let mut sink = JsonLinesSink::new(&mut *out);
            runner.run(selected, &mut sink)?
        }
    };

    Ok(summary)
}

/// Run a single named query
pub fn query<W: Write>(
    config: &Config,
    name: &str,
    metrics: &RunMetrics,
    out: &mut W,
) -> CliResult<RunSummary> {
    report(config, &[name.to_string()], metrics, out)
}

/// Print every catalog entry: name, category, description
pub fn list<W: Write>(catalog: &Catalog, out: &mut W) -> CliResult<()> {
    for def in catalog.entries() {
        writeln!(
            out,
            "{:<40} {:<10} {}",
            def.name(),
            def.category().as_str(),
            def.description()
        )?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_prints_every_entry() {
        let catalog = Catalog::standard();
        let mut out = Vec::new();
        list(&catalog, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), catalog.len());
        assert!(text.lines().next().unwrap().starts_with("high_earners"));
    }

    #[test]
    fn test_unknown_query_fails_before_reading_input() {
        let config = Config {
            input: "does/not/exist.csv".into(),
            ..Config::default()
        };
        let mut out = Vec::new();
        let err = query(&config, "no_such_query", &RunMetrics::new(), &mut out).unwrap_err();

        assert_eq!(err.code_str(), "ROSTER_CLI_UNKNOWN_QUERY");
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_input_is_ingest_failure() {
        let config = Config {
            input: "does/not/exist.csv".into(),
            reference_date: Some("2025-01-01".to_string()),
            ..Config::default()
        };
        let mut out = Vec::new();
        let err = report(&config, &[], &RunMetrics::new(), &mut out).unwrap_err();
        assert_eq!(err.code_str(), "ROSTER_CLI_INGEST_FAILED");
    }
}
