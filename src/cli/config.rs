//! Run configuration
//!
//! Loaded from an optional JSON file; every key has a default. Command-line
//! flags override file values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::QueryContext;
use crate::observability::Severity;
use crate::record::parse_hire_date;

use super::args::{ReportFormat, SourceArgs};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// CSV read by `report` and `query`
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// CSV written by `generate`
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Records written by `generate` (must be > 0)
    #[serde(default = "default_record_count")]
    pub record_count: u32,

    /// Generator seed
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Reference date (YYYY-MM-DD) for tenure queries; today when absent
    #[serde(default)]
    pub reference_date: Option<String>,

    #[serde(default)]
    pub format: ReportFormat,

    /// Array items shown per result in text reports (must be > 0)
    #[serde(default = "default_max_items")]
    pub max_items: usize,

    /// Minimum log severity: trace, info, warn, error or fatal
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_input() -> PathBuf {
    PathBuf::from("employees.csv")
}
fn default_output() -> PathBuf {
    PathBuf::from("employees.csv")
}
fn default_record_count() -> u32 {
    1000
}
fn default_seed() -> u64 {
    42
}
fn default_max_items() -> usize {
    10
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            record_count: default_record_count(),
            seed: default_seed(),
            reference_date: None,
            format: ReportFormat::default(),
            max_items: default_max_items(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// File configuration when a path is given, defaults otherwise
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate value ranges and formats
    pub fn validate(&self) -> CliResult<()> {
        if self.record_count == 0 {
            return Err(CliError::config_error("record_count must be > 0"));
        }

        if self.max_items == 0 {
            return Err(CliError::config_error("max_items must be > 0"));
        }

        if Severity::parse(&self.log_level).is_none() {
            return Err(CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be trace, info, warn, error or fatal.",
                self.log_level
            )));
        }

        if let Some(date) = &self.reference_date {
            parse_hire_date(date).map_err(|e| {
                CliError::config_error(format!("Invalid reference_date: {}", e))
            })?;
        }

        Ok(())
    }

    /// Apply `generate` flags
    pub fn with_generate_overrides(
        mut self,
        output: Option<PathBuf>,
        count: Option<u32>,
        seed: Option<u64>,
    ) -> CliResult<Self> {
        if let Some(output) = output {
            self.output = output;
        }
        if let Some(count) = count {
            if count == 0 {
                return Err(CliError::invalid_argument("--count must be > 0"));
            }
            self.record_count = count;
        }
        if let Some(seed) = seed {
            self.seed = seed;
        }
        Ok(self)
    }

    /// Apply `report` / `query` flags
    pub fn with_source_overrides(mut self, source: SourceArgs) -> CliResult<Self> {
        if let Some(input) = source.input {
            self.input = input;
        }
        if let Some(as_of) = source.as_of {
            parse_hire_date(&as_of)
                .map_err(|e| CliError::invalid_argument(format!("Invalid --as-of: {}", e)))?;
            self.reference_date = Some(as_of);
        }
        if let Some(format) = source.format {
            self.format = format;
        }
        if let Some(max_items) = source.max_items {
            if max_items == 0 {
                return Err(CliError::invalid_argument("--max-items must be > 0"));
            }
            self.max_items = max_items;
        }
        Ok(self)
    }

    /// Query context at the configured reference date, or today
    pub fn query_context(&self) -> CliResult<QueryContext> {
        match &self.reference_date {
            Some(date) => parse_hire_date(date)
                .map(QueryContext::new)
                .map_err(|e| CliError::config_error(format!("Invalid reference_date: {}", e))),
            None => Ok(QueryContext::today()),
        }
    }

    /// Configured log severity, INFO when unparseable
    pub fn log_severity(&self) -> Severity {
        Severity::parse(&self.log_level).unwrap_or(Severity::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.input, PathBuf::from("employees.csv"));
        assert_eq!(config.record_count, 1000);
        assert_eq!(config.seed, 42);
        assert_eq!(config.format, ReportFormat::Text);
        assert_eq!(config.max_items, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_count() {
        let config = Config {
            record_count: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_reference_date() {
        let config = Config {
            reference_date: Some("2025-1-1".to_string()),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.code_str(), "ROSTER_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_validate_rejects_unknown_level() {
        let config = Config {
            log_level: "chatty".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_source_overrides() {
        let source = SourceArgs {
            input: Some(PathBuf::from("staff.csv")),
            as_of: Some("2024-06-30".to_string()),
            format: Some(ReportFormat::Json),
            max_items: Some(3),
        };
        let config = Config::default().with_source_overrides(source).unwrap();

        assert_eq!(config.input, PathBuf::from("staff.csv"));
        assert_eq!(config.format, ReportFormat::Json);
        assert_eq!(config.max_items, 3);
        assert_eq!(
            config.query_context().unwrap().reference_date,
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
        );
    }

    #[test]
    fn test_source_override_rejects_bad_date() {
        let source = SourceArgs {
            as_of: Some("30/06/2024".to_string()),
            ..SourceArgs::default()
        };
        let err = Config::default().with_source_overrides(source).unwrap_err();
        assert_eq!(err.code_str(), "ROSTER_CLI_INVALID_ARGUMENT");
    }

    #[test]
    fn test_generate_overrides() {
        let config = Config::default()
            .with_generate_overrides(Some(PathBuf::from("out.csv")), Some(5), Some(9))
            .unwrap();
        assert_eq!(config.output, PathBuf::from("out.csv"));
        assert_eq!(config.record_count, 5);
        assert_eq!(config.seed, 9);

        assert!(Config::default()
            .with_generate_overrides(None, Some(0), None)
            .is_err());
    }
}
