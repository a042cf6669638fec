//! Per-record scanning.

use std::io::Write;
use std::sync::Arc;

use crate::classify::{ClassificationError, UrlClassifier};
use crate::error_handling::ProcessingStats;
use crate::models::{DappRecord, FailureRow, UrlField};

/// Shared state for scanning records.
///
/// Built once per run and shared by every scan task through an `Arc`.
pub struct ScanContext<C> {
    pub classifier: C,
    pub url_fields: Vec<UrlField>,
    pub stats: Arc<ProcessingStats>,
    /// Print each failure as a tab-separated line on stdout
    pub echo_failures: bool,
}

impl<C: UrlClassifier> ScanContext<C> {
    pub fn new(classifier: C, url_fields: Vec<UrlField>) -> Self {
        Self {
            classifier,
            url_fields,
            stats: Arc::new(ProcessingStats::new()),
            echo_failures: true,
        }
    }

    pub fn with_stats(mut self, stats: Arc<ProcessingStats>) -> Self {
        self.stats = stats;
        self
    }

    pub fn echo_failures(mut self, echo: bool) -> Self {
        self.echo_failures = echo;
        self
    }

    /// Checks every configured field of `record`, in order.
    ///
    /// Absent and empty fields are skipped without calling the classifier.
    /// Returns one row per unhealthy URL.
    pub async fn scan_record(&self, record: &DappRecord) -> Vec<FailureRow> {
        let slug = record.slug_or_empty();
        let mut rows = Vec::new();

        for &field in &self.url_fields {
            let Some(url) = record.get(field) else {
                continue;
            };

            let result = self.classifier.classify(url).await;
            match &result.error {
                Some(ClassificationError::Transport { kind, .. }) => {
                    self.stats.increment_transport(*kind)
                }
                _ => self.stats.increment_outcome(result.outcome()),
            }

            if let Some(row) = result.to_failure_row(slug, field, url) {
                if self.echo_failures {
                    echo_failure(&row);
                }
                rows.push(row);
            }
        }

        rows
    }
}

/// Writes one operator line; lines from concurrent tasks interleave freely.
fn echo_failure(row: &FailureRow) {
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", row.to_tab_line()) {
        log::debug!("Failed to write failure line to stdout: {}", e);
    }
}
