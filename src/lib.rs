//! dapp_url_check library: URL health sweep over the dapp catalogue
//!
//! Reads active dapp records from MongoDB (or a JSON Lines export), sends one
//! GET to every URL-valued field, and writes a report of the URLs that are
//! unreachable, erroring, or parked.
//!
//! # Example
//!
//! ```no_run
//! use dapp_url_check::{run_sweep, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     mongodb_url: "mongodb://127.0.0.1:27017/sotd".to_string(),
//!     concurrency: 16,
//!     ..Default::default()
//! };
//!
//! let report = run_sweep(config).await?;
//! println!("{} failing URLs across {} records", report.failures, report.records_scanned);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

mod app;
pub mod classify;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod models;
pub mod scan;
pub mod source;

// Re-export public API
pub use config::{Config, FailOn, LogFormat, LogLevel, Opt};
pub use models::{DappRecord, FailureRow, UrlField};
pub use run::{exit_code_for, run_sweep, SweepReport};

// Internal run module (contains the sweep orchestration)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tokio_util::sync::CancellationToken;

    use crate::app::{log_progress, print_outcome_statistics, shutdown_gracefully};
    use crate::classify::HttpClassifier;
    use crate::config::{Config, FailOn, EXIT_CODE_FAILURES_FOUND, LOGGING_INTERVAL};
    use crate::error_handling::ProcessingStats;
    use crate::export::{is_stdout, write_report};
    use crate::initialization::init_client;
    use crate::scan::{run_all, ScanContext};
    use crate::source::{JsonLinesRecordSource, MongoRecordSource, RecordSource, RecordStream};

    /// Results of a sweep.
    #[derive(Debug, Clone)]
    pub struct SweepReport {
        /// Records scanned (after the candidate filter)
        pub records_scanned: usize,
        /// URLs checked across all records
        pub urls_checked: usize,
        /// Rows written to the report
        pub failures: usize,
        /// Where the report was written (`-` for stdout)
        pub output: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs one sweep with the provided configuration.
    ///
    /// Failing URLs are data, not errors: the sweep succeeds however many
    /// URLs fail.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The configuration is invalid
    /// - The HTTP client cannot be built
    /// - The record store cannot be queried, or fails mid-read
    /// - The report cannot be written
    pub async fn run_sweep(config: Config) -> Result<SweepReport> {
        config.validate().context("Invalid configuration")?;

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let stats = Arc::new(ProcessingStats::new());
        let ctx = Arc::new(
            ScanContext::new(
                HttpClassifier::from_config(client, &config),
                config.url_fields.clone(),
            )
            .with_stats(Arc::clone(&stats))
            // Keep stdout clean when the report itself goes there.
            .echo_failures(!is_stdout(&config.output)),
        );

        let records = open_records(&config).await?;

        info!(
            "Starting sweep with up to {} concurrent records, {}s request timeout",
            config.concurrency, config.timeout_seconds
        );
        let start_time = std::time::Instant::now();

        let cancel = CancellationToken::new();
        let cancel_logging = cancel.child_token();
        let stats_for_logging = Arc::clone(&stats);
        let logging_task = tokio::task::spawn(async move {
            let mut interval =
                tokio::time::interval(std::time::Duration::from_secs(LOGGING_INTERVAL));
            // The first tick fires immediately; skip it so short sweeps stay quiet.
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        log_progress(start_time, &stats_for_logging);
                    }
                    _ = cancel_logging.cancelled() => {
                        break;
                    }
                }
            }
        });

        let results = run_all(records, ctx, config.concurrency).await;
        shutdown_gracefully(cancel, Some(logging_task)).await;
        let results = results.context("Failed while reading records")?;

        log_progress(start_time, &stats);

        let failures = write_report(&results, &config.output, &config.format)
            .context("Failed to write report")?;
        print_outcome_statistics(&stats);

        Ok(SweepReport {
            records_scanned: results.len(),
            urls_checked: stats.total_urls(),
            failures,
            output: config.output.clone(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }

    async fn open_records(config: &Config) -> Result<RecordStream> {
        match &config.input {
            Some(path) => {
                JsonLinesRecordSource::new(path.clone(), config.excluded_statuses.clone())
                    .fetch_candidates()
                    .await
                    .with_context(|| format!("Failed to read records from {}", path.display()))
            }
            None => {
                let source =
                    MongoRecordSource::connect(&config.mongodb_url, config.excluded_statuses.clone())
                        .await
                        .context("Failed to connect to MongoDB")?;
                source
                    .fetch_candidates()
                    .await
                    .context("Failed to query candidate records")
            }
        }
    }

    /// Process exit code for a completed sweep.
    pub fn exit_code_for(fail_on: &FailOn, report: &SweepReport) -> i32 {
        match fail_on {
            FailOn::Never => 0,
            FailOn::AnyFailure if report.failures > 0 => EXIT_CODE_FAILURES_FOUND,
            FailOn::AnyFailure => 0,
        }
    }
}
