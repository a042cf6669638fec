//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use strum::IntoEnumIterator;

use crate::config::constants::{
    DEFAULT_MONGODB_URL, DEFAULT_REPORT_PATH, DEFAULT_USER_AGENT, IGNORE_STATUSES, PARKING_TEXTS,
    REQUEST_TIMEOUT_SECS,
};
use crate::error_handling::ConfigError;
use crate::export::ExportFormat;
use crate::models::UrlField;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Exit code policy for a sweep that completed.
///
/// Infrastructure failures always exit with 1 regardless of this setting.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Exit 0 whenever the sweep completes, however many URLs failed
    Never,
    /// Exit 2 if at least one failure row was reported
    AnyFailure,
}

/// Library configuration (no CLI dependencies).
///
/// Every component takes what it needs from this struct at construction, so
/// nothing reads the environment directly.
///
/// # Examples
///
/// ```no_run
/// use dapp_url_check::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: Some(PathBuf::from("dapps.jsonl")),
///     concurrency: 8,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string; the path names the database
    pub mongodb_url: String,

    /// Read records from a JSON Lines file instead of MongoDB
    pub input: Option<PathBuf>,

    /// Report destination (`-` for stdout)
    pub output: PathBuf,

    /// Report format
    pub format: ExportFormat,

    /// Maximum records scanned at once
    pub concurrency: usize,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Verify TLS certificates
    pub verify_tls: bool,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Records with one of these statuses are never scanned
    pub excluded_statuses: Vec<String>,

    /// Fields checked on each record, in report order
    pub url_fields: Vec<UrlField>,

    /// Parking page phrases (case-sensitive substrings)
    pub parking_texts: Vec<String>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Exit code policy
    pub fail_on: FailOn,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongodb_url: DEFAULT_MONGODB_URL.to_string(),
            input: None,
            output: PathBuf::from(DEFAULT_REPORT_PATH),
            format: ExportFormat::Csv,
            concurrency: default_concurrency(),
            timeout_seconds: REQUEST_TIMEOUT_SECS,
            verify_tls: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            excluded_statuses: IGNORE_STATUSES.iter().map(|s| s.to_string()).collect(),
            url_fields: UrlField::iter().collect(),
            parking_texts: PARKING_TEXTS.iter().map(|s| s.to_string()).collect(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            fail_on: FailOn::Never,
        }
    }
}

impl Config {
    /// Rejects settings the sweep cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency);
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        if self.url_fields.is_empty() {
            return Err(ConfigError::NoUrlFields);
        }
        Ok(())
    }
}

/// Worker count matching the host's available parallelism.
pub fn default_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

/// Command-line options.
///
/// Every option can also be set through the environment (or a `.env` file).
///
/// # Examples
///
/// ```bash
/// # Sweep the default database
/// dapp_url_check
///
/// # Another database, more workers, certificate checks off
/// MONGODB_URL=mongodb://db:27017/catalog dapp_url_check --concurrency 32 --insecure
///
/// # Sweep a mongoexport dump instead of a live database
/// dapp_url_check --input dapps.jsonl --output -
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "dapp_url_check",
    about = "Checks the URLs on every active dapp and reports the broken ones."
)]
pub struct Opt {
    /// MongoDB connection string (the path selects the database)
    #[arg(long, env = "MONGODB_URL", default_value = DEFAULT_MONGODB_URL)]
    pub mongodb_url: String,

    /// Read records from a JSON Lines file (e.g. mongoexport output) instead of MongoDB
    #[arg(long, env = "DAPP_URL_CHECK_INPUT", value_parser)]
    pub input: Option<PathBuf>,

    /// Report path, or `-` for stdout
    #[arg(long, env = "DAPP_URL_CHECK_OUTPUT", value_parser, default_value = DEFAULT_REPORT_PATH)]
    pub output: PathBuf,

    /// Report format: csv|jsonl
    #[arg(long, env = "DAPP_URL_CHECK_FORMAT", value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Maximum records scanned at once (defaults to the number of CPUs)
    #[arg(long, env = "DAPP_URL_CHECK_CONCURRENCY")]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long, env = "DAPP_URL_CHECK_TIMEOUT_SECONDS", default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Skip TLS certificate verification
    #[arg(long, env = "DAPP_URL_CHECK_INSECURE")]
    pub insecure: bool,

    /// HTTP User-Agent header value
    #[arg(long, env = "DAPP_URL_CHECK_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Status to exclude from the sweep (repeatable; default: abandoned)
    #[arg(long = "exclude-status", value_name = "STATUS")]
    pub exclude_statuses: Vec<String>,

    /// Field to check (repeatable; default: all URL fields)
    #[arg(long = "field", value_enum, value_name = "FIELD")]
    pub fields: Vec<UrlField>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Exit code policy: never|any-failure
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        let defaults = Config::default();
        Self {
            mongodb_url: opt.mongodb_url,
            input: opt.input,
            output: opt.output,
            format: opt.format,
            concurrency: opt.concurrency.unwrap_or(defaults.concurrency),
            timeout_seconds: opt.timeout_seconds,
            verify_tls: !opt.insecure,
            user_agent: opt.user_agent,
            excluded_statuses: if opt.exclude_statuses.is_empty() {
                defaults.excluded_statuses
            } else {
                opt.exclude_statuses
            },
            url_fields: if opt.fields.is_empty() {
                defaults.url_fields
            } else {
                opt.fields
            },
            parking_texts: defaults.parking_texts,
            log_level: opt.log_level,
            log_format: opt.log_format,
            fail_on: opt.fail_on,
        }
    }
}
