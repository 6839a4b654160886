//! CLI module for roster
//!
//! Provides the command-line interface for:
//! - generate: write a synthetic employee CSV
//! - report: run the query catalog over a CSV
//! - query: run one catalog entry
//! - list: show catalog entries

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command, ReportFormat, SourceArgs};
pub use commands::{generate, list, load_store, query, report, run, run_command};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
