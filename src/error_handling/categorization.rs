//! Transport error categorization.
//!
//! Maps URL parse failures and `reqwest::Error`s onto the report's error tags.

use std::error::Error as StdError;

use super::types::TransportErrorKind;

/// Substrings that mark a connect failure as a TLS problem.
const TLS_MARKERS: &[&str] = &["certificate", "tls", "ssl", "handshake"];

/// Categorizes a URL that failed to parse.
///
/// A relative reference such as `not-a-url` has no scheme at all, which is
/// reported separately from other syntax errors.
pub fn categorize_parse_error(error: url::ParseError) -> TransportErrorKind {
    match error {
        url::ParseError::RelativeUrlWithoutBase => TransportErrorKind::MissingSchema,
        _ => TransportErrorKind::InvalidUrl,
    }
}

/// Categorizes a `reqwest::Error` into a `TransportErrorKind`.
///
/// Timeouts are checked first because reqwest also flags a connect timeout
/// as a connect error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> TransportErrorKind {
    if error.is_timeout() {
        TransportErrorKind::Timeout
    } else if error.is_connect() {
        if chain_mentions_tls(error) {
            TransportErrorKind::SslError
        } else {
            TransportErrorKind::ConnectionError
        }
    } else if error.is_redirect() {
        TransportErrorKind::TooManyRedirects
    } else if error.is_body() || error.is_decode() {
        TransportErrorKind::ContentDecodingError
    } else if error.is_builder() {
        TransportErrorKind::InvalidUrl
    } else if chain_mentions_tls(error) {
        TransportErrorKind::SslError
    } else {
        TransportErrorKind::RequestException
    }
}

fn chain_mentions_tls(error: &(dyn StdError + 'static)) -> bool {
    let mut current: Option<&(dyn StdError + 'static)> = Some(error);
    while let Some(err) = current {
        let text = err.to_string().to_lowercase();
        if TLS_MARKERS.iter().any(|marker| text.contains(marker)) {
            return true;
        }
        current = err.source();
    }
    false
}

/// Renders an error and its sources as one line (`outer: inner: root`).
///
/// reqwest's own `Display` omits the underlying cause, which is usually the
/// useful part ("dns error", "connection refused").
pub fn error_chain_message(error: &(dyn StdError + 'static)) -> String {
    let mut parts = vec![error.to_string()];
    let mut current = error.source();
    while let Some(err) = current {
        let text = err.to_string();
        if parts.last().map(|last| !last.contains(&text)).unwrap_or(true) {
            parts.push(text);
        }
        current = err.source();
    }
    parts.join(": ")
}
