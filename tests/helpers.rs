// Shared test helpers for record files and sweep configuration.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io::Write;
use std::path::PathBuf;

use dapp_url_check::{Config, FailOn, LogFormat, LogLevel};
use tempfile::NamedTempFile;

/// Writes one JSON document per line to a temporary file.
#[allow(dead_code)] // Used by other test files
pub fn write_records_file(records: &[serde_json::Value]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for record in records {
        writeln!(file, "{}", record).expect("Failed to write record");
    }
    file.flush().expect("Failed to flush file");
    file
}

/// Config reading records from `input` and writing the report to `output`.
#[allow(dead_code)] // Used by other test files
pub fn create_test_config(input: PathBuf, output: PathBuf, concurrency: usize) -> Config {
    Config {
        input: Some(input),
        output,
        concurrency,
        timeout_seconds: 5,
        user_agent: "dapp_url_check_test/1.0".to_string(),
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
        fail_on: FailOn::Never,
        ..Default::default()
    }
}

/// Reads a CSV report back as header plus rows.
#[allow(dead_code)] // Used by other test files
pub fn read_report(path: &std::path::Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).expect("Failed to open report");
    let header = reader
        .headers()
        .expect("Failed to read header")
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|r| {
            r.expect("Failed to read row")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect();
    (header, rows)
}
