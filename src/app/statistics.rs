//! Final statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{OutcomeType, ProcessingStats, TransportErrorKind};

/// Prints outcome counts, with transport errors broken down by tag.
pub fn print_outcome_statistics(stats: &ProcessingStats) {
    let total_failures = stats.total_failures();
    if total_failures == 0 {
        info!("No failing URLs");
        return;
    }

    info!("Failure Counts ({} total):", total_failures);
    for outcome in OutcomeType::iter().filter(|o| *o != OutcomeType::Healthy) {
        let count = stats.get_outcome_count(outcome);
        if count > 0 {
            info!("   {}: {}", outcome, count);
        }
        if outcome == OutcomeType::TransportError {
            for kind in TransportErrorKind::iter() {
                let count = stats.get_transport_count(kind);
                if count > 0 {
                    info!("      {}: {}", kind, count);
                }
            }
        }
    }
}
