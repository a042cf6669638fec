//! Tests for command-line parsing and the resulting sweep configuration.

use clap::Parser;
use dapp_url_check::config::{DEFAULT_REPORT_PATH, REQUEST_TIMEOUT_SECS};
use dapp_url_check::export::ExportFormat;
use dapp_url_check::{Config, FailOn, LogFormat, LogLevel, Opt, UrlField};
use std::path::PathBuf;

fn parse(args: &[&str]) -> Config {
    let mut argv = vec!["dapp_url_check"];
    argv.extend_from_slice(args);
    Config::from(Opt::try_parse_from(argv).expect("arguments should parse"))
}

#[test]
fn test_defaults_match_a_plain_sweep() {
    let config = parse(&["--output", DEFAULT_REPORT_PATH]);

    assert_eq!(config.output, PathBuf::from("url_failures.csv"));
    assert_eq!(config.timeout_seconds, REQUEST_TIMEOUT_SECS);
    assert_eq!(config.excluded_statuses, vec!["abandoned".to_string()]);
    assert_eq!(config.url_fields.len(), 9);
    assert_eq!(config.url_fields[0], UrlField::Url);
    assert_eq!(config.url_fields[8], UrlField::Logo);
    assert_eq!(config.parking_texts.len(), 9);
    assert!(config.concurrency >= 1);
    assert!(config.validate().is_ok());
}

#[test]
fn test_all_options() {
    let config = parse(&[
        "--mongodb-url",
        "mongodb://db.internal:27017/catalog",
        "--input",
        "dapps.jsonl",
        "--output",
        "-",
        "--format",
        "jsonl",
        "--concurrency",
        "32",
        "--timeout-seconds",
        "10",
        "--insecure",
        "--user-agent",
        "sweeper/2.0",
        "--exclude-status",
        "abandoned",
        "--exclude-status",
        "stealth",
        "--field",
        "url",
        "--field",
        "github",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--fail-on",
        "any-failure",
    ]);

    assert_eq!(config.mongodb_url, "mongodb://db.internal:27017/catalog");
    assert_eq!(config.input, Some(PathBuf::from("dapps.jsonl")));
    assert_eq!(config.output, PathBuf::from("-"));
    assert_eq!(config.format, ExportFormat::Jsonl);
    assert_eq!(config.concurrency, 32);
    assert_eq!(config.timeout_seconds, 10);
    assert!(!config.verify_tls);
    assert_eq!(config.user_agent, "sweeper/2.0");
    assert_eq!(config.excluded_statuses, vec!["abandoned", "stealth"]);
    assert_eq!(config.url_fields, vec![UrlField::Url, UrlField::Github]);
    assert!(matches!(config.log_level, LogLevel::Debug));
    assert!(matches!(config.log_format, LogFormat::Json));
    assert!(matches!(config.fail_on, FailOn::AnyFailure));
}

#[test]
fn test_unknown_field_is_rejected() {
    let result = Opt::try_parse_from(["dapp_url_check", "--field", "homepage"]);
    assert!(result.is_err());
}

#[test]
fn test_zero_concurrency_fails_validation() {
    let config = parse(&["--concurrency", "0"]);
    assert!(config.validate().is_err());
}
