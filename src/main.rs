//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dapp_url_check` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use dapp_url_check::initialization::init_logger_with;
use dapp_url_check::{exit_code_for, run_sweep, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // .env in the working directory first, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let fail_on = config.fail_on.clone();
    match run_sweep(config).await {
        Ok(report) => {
            log::info!(
                "Checked {} URL{} on {} record{} ({} failing) in {:.1}s - report written to {}",
                report.urls_checked,
                if report.urls_checked == 1 { "" } else { "s" },
                report.records_scanned,
                if report.records_scanned == 1 { "" } else { "s" },
                report.failures,
                report.elapsed_seconds,
                report.output.display()
            );
            process::exit(exit_code_for(&fail_on, &report));
        }
        Err(e) => {
            eprintln!("dapp_url_check error: {:#}", e);
            process::exit(1);
        }
    }
}
