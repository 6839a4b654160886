//! CLI argument definitions using clap
//!
//! Commands:
//! - roster generate [--output PATH] [--count N] [--seed S]
//! - roster report [--input PATH] [--as-of DATE] [--format text|json] [--only NAME]...
//! - roster query NAME [--input PATH] [--as-of DATE] [--format text|json]
//! - roster list
//!
//! `--config PATH` is accepted by every command.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// roster - employee record generator and query report
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to an optional JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a synthetic employee CSV
    Generate {
        /// Output CSV path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Number of records to generate
        #[arg(long)]
        count: Option<u32>,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run the query catalog over an employee CSV
    Report {
        #[command(flatten)]
        source: SourceArgs,

        /// Run only the named queries (repeatable)
        #[arg(long = "only", value_name = "NAME")]
        only: Vec<String>,
    },

    /// Run one named query
    Query {
        /// Catalog entry name
        name: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// List catalog entries
    List,
}

impl Command {
    /// Stable command name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Generate { .. } => "generate",
            Command::Report { .. } => "report",
            Command::Query { .. } => "query",
            Command::List => "list",
        }
    }
}

/// Input and rendering options shared by `report` and `query`
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Input CSV path
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Reference date for tenure queries (YYYY-MM-DD), default today
    #[arg(long = "as-of", value_name = "DATE")]
    pub as_of: Option<String>,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Array items shown per result in text format
    #[arg(long)]
    pub max_items: Option<usize>,
}

/// Rendering of report output
#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// `name: value` lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
