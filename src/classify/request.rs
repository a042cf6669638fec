//! HTTP-backed URL classifier.

use std::sync::Arc;

use log::debug;

use super::outcome::Classification;
use super::parking::ParkingDetector;
use super::UrlClassifier;
use crate::config::Config;
use crate::error_handling::{
    categorize_parse_error, categorize_reqwest_error, error_chain_message, TransportErrorKind,
};

/// Classifies URLs with one GET request each.
///
/// No retries: a transient failure is reported as a failure.
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    client: Arc<reqwest::Client>,
    detector: ParkingDetector,
}

impl HttpClassifier {
    pub fn new(client: Arc<reqwest::Client>, detector: ParkingDetector) -> Self {
        Self { client, detector }
    }

    /// Builds the classifier's parking detector from `config`.
    pub fn from_config(client: Arc<reqwest::Client>, config: &Config) -> Self {
        Self::new(client, ParkingDetector::new(config.parking_texts.clone()))
    }

    async fn fetch(&self, url: &str) -> Classification {
        let parsed = match url::Url::parse(url) {
            Ok(parsed) => parsed,
            Err(e) => {
                let kind = categorize_parse_error(e);
                return Classification::transport(kind, format!("Invalid URL '{url}': {e}"));
            }
        };

        if !matches!(parsed.scheme(), "http" | "https") {
            return Classification::transport(
                TransportErrorKind::InvalidSchema,
                format!("Unsupported URL scheme '{}' in '{url}'", parsed.scheme()),
            );
        }

        let response = match self.client.get(parsed).send().await {
            Ok(response) => response,
            Err(e) => {
                return Classification::transport(
                    categorize_reqwest_error(&e),
                    error_chain_message(&e),
                );
            }
        };

        let status_code = response.status().as_u16();
        if status_code != 200 {
            return Classification::completed(status_code);
        }

        // A body that fails to arrive means the fetch never completed.
        match response.text().await {
            Ok(body) => self.detector.inspect(status_code, &body),
            Err(e) => Classification::transport(categorize_reqwest_error(&e), error_chain_message(&e)),
        }
    }
}

impl UrlClassifier for HttpClassifier {
    async fn classify(&self, url: &str) -> Classification {
        let started = std::time::Instant::now();
        let result = self.fetch(url).await;
        debug!(
            "Checked {} in {:.2}s: status={} error={:?}",
            url,
            started.elapsed().as_secs_f64(),
            result.status_code,
            result.error_kind()
        );
        result
    }
}
