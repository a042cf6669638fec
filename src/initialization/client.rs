//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use log::warn;
use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the HTTP client used for URL checks.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Whole-request timeout from the config (covers connect, headers and body)
/// - Default redirect policy (up to 10 hops)
/// - Certificate verification unless `verify_tls` is off
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    if !config.verify_tls {
        warn!("TLS certificate verification is disabled");
    }
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .danger_accept_invalid_certs(!config.verify_tls)
        .build()?;
    Ok(Arc::new(client))
}
