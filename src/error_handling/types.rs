//! Error type definitions.
//!
//! This module defines the run-level error enums and the per-URL outcome
//! categories used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::{EnumIter as EnumIterMacro, EnumString, IntoStaticStr};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Invalid configuration values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("concurrency must be at least 1")]
    InvalidConcurrency,

    #[error("request timeout must be at least 1 second")]
    InvalidTimeout,

    #[error("at least one URL field must be checked")]
    NoUrlFields,
}

/// Errors raised while reading records from the store.
///
/// All of these abort the run.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The connection string has no database path.
    #[error("MongoDB connection string does not name a database: {0}")]
    NoDefaultDatabase(String),

    /// Driver error (connection, query, or cursor).
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// Failure reading the input file.
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// A line of the input file is not a JSON object.
    #[error("Malformed record on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Transport-level failure categories.
///
/// Each variant renders as the short tag written to the report's `error`
/// column (`Timeout` → `timeout`, `SslError` → `ssl-error`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum TransportErrorKind {
    /// The URL has no scheme (`not-a-url`, `www.example.com`)
    MissingSchema,
    /// The URL has a scheme other than http/https
    InvalidSchema,
    /// The URL could not be parsed for another reason
    InvalidUrl,
    Timeout,
    /// TLS handshake or certificate validation failed
    SslError,
    /// DNS lookup or TCP connect failed
    ConnectionError,
    TooManyRedirects,
    /// The response body could not be read or decoded
    ContentDecodingError,
    /// Anything reqwest reports that fits none of the above
    RequestException,
}

impl TransportErrorKind {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one URL check (or one record scan, for `ScanPanic`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum OutcomeType {
    Healthy,
    /// Completed with a status other than 200
    HttpStatusError,
    /// 200 response whose body matched a parking phrase
    DomainParking,
    /// No response at all
    TransportError,
    /// The record's scan task panicked
    ScanPanic,
}

impl OutcomeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeType::Healthy => "Healthy",
            OutcomeType::HttpStatusError => "HTTP status error",
            OutcomeType::DomainParking => "Domain parking page",
            OutcomeType::TransportError => "Transport error",
            OutcomeType::ScanPanic => "Record scan panicked",
        }
    }
}

impl std::fmt::Display for OutcomeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
