//! Progress logging utilities.

use log::info;

use crate::error_handling::ProcessingStats;

/// Logs how many records and URLs have been checked so far.
///
/// # Arguments
///
/// * `start_time` - The start time of the sweep
/// * `stats` - Shared counters updated by the scan tasks
pub fn log_progress(start_time: std::time::Instant, stats: &ProcessingStats) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let records = stats.records_scanned();
    let urls = stats.total_urls();
    let rate = if elapsed_secs > 0.0 {
        urls as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Scanned {} records ({} URLs, {} failing) in {:.2} seconds (~{:.2} URLs/sec)",
        records,
        urls,
        stats.total_failures(),
        elapsed_secs,
        rate
    );
}
