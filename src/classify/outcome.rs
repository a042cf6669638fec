//! Classification results.

use crate::config::{DOMAIN_PARKING_ERROR, DOMAIN_PARKING_MESSAGE};
use crate::error_handling::{OutcomeType, TransportErrorKind};
use crate::models::{FailureRow, UrlField};

/// Why a URL check did not come back healthy (besides a non-200 status).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    /// The request never produced a status code.
    Transport {
        kind: TransportErrorKind,
        message: String,
    },
    /// A 200 page that matched a parking phrase.
    DomainParking,
}

/// Result of probing one URL.
///
/// `status_code` is 0 when no response was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub status_code: u16,
    pub error: Option<ClassificationError>,
}

impl Classification {
    /// A response was received with `status_code`.
    pub fn completed(status_code: u16) -> Self {
        Self {
            status_code,
            error: None,
        }
    }

    /// No response was received.
    pub fn transport(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            status_code: 0,
            error: Some(ClassificationError::Transport {
                kind,
                message: message.into(),
            }),
        }
    }

    /// A 200 response serving a parking page.
    pub fn parked() -> Self {
        Self {
            status_code: 200,
            error: Some(ClassificationError::DomainParking),
        }
    }

    /// Healthy iff the status is 200 and no error was recorded.
    pub fn is_healthy(&self) -> bool {
        self.status_code == 200 && self.error.is_none()
    }

    /// Report tag for the error, empty when there is none.
    pub fn error_kind(&self) -> &str {
        match &self.error {
            None => "",
            Some(ClassificationError::Transport { kind, .. }) => kind.as_str(),
            Some(ClassificationError::DomainParking) => DOMAIN_PARKING_ERROR,
        }
    }

    /// Diagnostic text for the error, empty when there is none.
    pub fn error_message(&self) -> &str {
        match &self.error {
            None => "",
            Some(ClassificationError::Transport { message, .. }) => message,
            Some(ClassificationError::DomainParking) => DOMAIN_PARKING_MESSAGE,
        }
    }

    pub fn outcome(&self) -> OutcomeType {
        match &self.error {
            Some(ClassificationError::Transport { .. }) => OutcomeType::TransportError,
            Some(ClassificationError::DomainParking) => OutcomeType::DomainParking,
            None if self.status_code == 200 => OutcomeType::Healthy,
            None => OutcomeType::HttpStatusError,
        }
    }

    /// Builds the report row for this result, or `None` if the URL is healthy.
    pub fn to_failure_row(&self, dapp: &str, field: UrlField, url: &str) -> Option<FailureRow> {
        if self.is_healthy() {
            return None;
        }
        Some(FailureRow {
            dapp: dapp.to_string(),
            field: field.as_str().to_string(),
            url: url.to_string(),
            http_code: self.status_code.to_string(),
            error: self.error_kind().to_string(),
            message: self.error_message().to_string(),
        })
    }
}
