//! Logger setup.
//!
//! Logs always go to stderr: stdout is reserved for the tab-separated
//! failure lines (or the report itself with `--output -`).

use std::io::Write;

use colored::*;
use log::{Level, LevelFilter};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Dependency targets that are chatty at debug level, with the most verbose
/// level let through for each.
const QUIET_TARGETS: &[(&str, LevelFilter)] = &[
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
    ("rustls", LevelFilter::Warn),
    ("mongodb", LevelFilter::Warn),
];

/// Installs the global logger.
///
/// `RUST_LOG` is read first; `level` then applies to this crate, so
/// `--log-level` wins over the environment for our own messages. The
/// dependency caps only apply to targets `RUST_LOG` does not name, so the
/// environment can still turn a dependency up.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=reqwest=debug dapp_url_check --log-level debug
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stderr);
    builder.filter_level(level);
    let env_filter = std::env::var(env_logger::DEFAULT_FILTER_ENV).unwrap_or_default();
    for (target, cap) in QUIET_TARGETS {
        if !names_target(&env_filter, target) {
            builder.filter_module(target, (*cap).min(level));
        }
    }
    builder.filter_module(env!("CARGO_CRATE_NAME"), level);

    match format {
        LogFormat::Json => builder.format(|buf, record| {
            writeln!(
                buf,
                "{}",
                json_line(
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    &record.args().to_string(),
                )
            )
        }),
        LogFormat::Plain => builder.format(|buf, record| {
            let (marker, label) = level_style(record.level());
            writeln!(
                buf,
                "{} {} [{}] {}",
                marker,
                record.target().cyan(),
                label,
                record.args()
            )
        }),
    };

    builder.try_init()?;
    Ok(())
}

/// Whether a `RUST_LOG` filter has a directive for `target` or one of its
/// submodules. A bare level (`debug`) names no target.
fn names_target(filter: &str, target: &str) -> bool {
    let directives = filter.split('/').next().unwrap_or_default();
    directives
        .split(',')
        .filter_map(|directive| {
            let directive = directive.trim();
            match directive.split_once('=') {
                Some((name, _)) => Some(name.trim()),
                None if directive.parse::<LevelFilter>().is_ok() => None,
                None => Some(directive),
            }
        })
        .any(|name| {
            name == target
                || name
                    .strip_prefix(target)
                    .is_some_and(|rest| rest.starts_with("::"))
        })
}

/// One JSON object per line; `msg` and `target` are escaped by serde_json.
fn json_line(ts_millis: i64, level: Level, target: &str, msg: &str) -> String {
    serde_json::json!({
        "ts": ts_millis,
        "level": level.as_str(),
        "target": target,
        "msg": msg,
    })
    .to_string()
}

fn level_style(level: Level) -> (&'static str, ColoredString) {
    let label = level.as_str();
    match level {
        Level::Error => ("❌", label.red()),
        Level::Warn => ("⚠️", label.yellow()),
        Level::Info => ("✔️", label.green()),
        Level::Debug => ("🔍", label.blue()),
        Level::Trace => ("🔬", label.purple()),
    }
}
