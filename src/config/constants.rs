//! Configuration constants.
//!
//! Defaults for the sweep: connection string, timeouts, the fixed field and
//! phrase lists, and the report layout.

use std::time::Duration;

/// Connection string used when `MONGODB_URL` is not set.
/// The path component names the default database.
pub const DEFAULT_MONGODB_URL: &str = "mongodb://127.0.0.1:27017/sotd";

/// Collection holding the dapp records.
pub const DAPPS_COLLECTION: &str = "dapps";

/// Per-request timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Per-request timeout as a `Duration`.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(REQUEST_TIMEOUT_SECS);

/// Progress logging interval in seconds
pub const LOGGING_INTERVAL: u64 = 5;

/// Statuses whose records are never scanned.
pub const IGNORE_STATUSES: &[&str] = &["abandoned"];

/// Report file written to the working directory by default.
pub const DEFAULT_REPORT_PATH: &str = "url_failures.csv";

/// Report header, one column per `FailureRow` field.
pub const REPORT_FIELDS: [&str; 6] = ["dapp", "field", "url", "http_code", "error", "message"];

/// Phrases served by registrars and parking services on unused domains.
///
/// Matched as case-sensitive substrings of a 200 response body.
pub const PARKING_TEXTS: &[&str] = &[
    "This domain is for sale.",
    "This domain may be for sale.",
    "This domain was recently registered",
    "This Domain Name Has Expired",
    "Sedo's Domain Parking",
    "This page is provided courtesy of GoDaddy.com",
    "Domain Parking",
    "parkingcrew.net",
    "This page has been suspended",
];

/// Error tag recorded when a 200 page matches a parking phrase.
pub const DOMAIN_PARKING_ERROR: &str = "domain-parking";

/// Message recorded alongside [`DOMAIN_PARKING_ERROR`].
/// The trailing space is kept so reports diff cleanly against older runs.
pub const DOMAIN_PARKING_MESSAGE: &str = "domain parking page detected ";

/// Error tag for a record whose scan task panicked.
pub const SCAN_PANIC_ERROR: &str = "scan-panic";

/// Default HTTP User-Agent header value.
pub const DEFAULT_USER_AGENT: &str = concat!("dapp_url_check/", env!("CARGO_PKG_VERSION"));

/// Exit code for a completed sweep that found failures under `--fail-on any-failure`.
pub const EXIT_CODE_FAILURES_FOUND: i32 = 2;
