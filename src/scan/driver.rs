//! Bounded parallel scanning across records.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::{FutureExt, Stream, StreamExt};
use log::{debug, warn};
use tokio::task::JoinSet;

use super::record::ScanContext;
use crate::classify::UrlClassifier;
use crate::config::SCAN_PANIC_ERROR;
use crate::error_handling::{OutcomeType, SourceError};
use crate::initialization::init_semaphore;
use crate::models::{DappRecord, FailureRow};

/// Scans every record from `records` with at most `concurrency` scans in flight.
///
/// Returns one row list per input record, in input order, whatever order the
/// scans finish in. A record whose scan panics, or whose task never reports
/// back, yields a single `scan-panic` row and the sweep goes on. An error from the stream aborts the sweep and
/// cancels the scans still running.
pub async fn run_all<C, S>(
    records: S,
    ctx: Arc<ScanContext<C>>,
    concurrency: usize,
) -> Result<Vec<Vec<FailureRow>>, SourceError>
where
    C: UrlClassifier,
    S: Stream<Item = Result<DappRecord, SourceError>>,
{
    let semaphore = init_semaphore(concurrency.max(1));
    let mut tasks = JoinSet::new();
    let mut results: Vec<Option<Vec<FailureRow>>> = Vec::new();
    let mut slugs: Vec<String> = Vec::new();

    futures::pin_mut!(records);
    while let Some(record) = records.next().await {
        let record = record?;
        let index = results.len();
        results.push(None);
        slugs.push(record.slug_or_empty().to_string());

        // Finished scans are collected while waiting for a permit.
        let permit = loop {
            tokio::select! {
                permit = Arc::clone(&semaphore).acquire_owned() => break permit,
                Some(joined) = tasks.join_next() => collect(joined, &mut results),
            }
        };
        let Ok(permit) = permit else {
            warn!("Semaphore closed, skipping record {}", record.slug_or_empty());
            continue;
        };

        let ctx = Arc::clone(&ctx);
        tasks.spawn(async move {
            let _permit = permit;
            let rows = scan_isolated(&ctx, &record).await;
            ctx.stats.increment_records();
            (index, rows)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        collect(joined, &mut results);
    }

    Ok(fill_incomplete(results, &slugs, &ctx))
}

/// Replaces every slot no task reported into with a synthetic row, so an
/// unfinished scan never reads as a healthy record.
fn fill_incomplete<C: UrlClassifier>(
    results: Vec<Option<Vec<FailureRow>>>,
    slugs: &[String],
    ctx: &ScanContext<C>,
) -> Vec<Vec<FailureRow>> {
    results
        .into_iter()
        .zip(slugs)
        .map(|(rows, slug)| {
            rows.unwrap_or_else(|| {
                warn!("Record {} has no scan result", slug);
                ctx.stats.increment_outcome(OutcomeType::ScanPanic);
                let row = panic_row(slug, INCOMPLETE_SCAN_MESSAGE.to_string());
                if ctx.echo_failures {
                    println!("{}", row.to_tab_line());
                }
                vec![row]
            })
        })
        .collect()
}

/// Scans one record, turning a panic into a single `scan-panic` row.
async fn scan_isolated<C: UrlClassifier>(
    ctx: &ScanContext<C>,
    record: &DappRecord,
) -> Vec<FailureRow> {
    match AssertUnwindSafe(ctx.scan_record(record)).catch_unwind().await {
        Ok(rows) => rows,
        Err(payload) => {
            let slug = record.slug_or_empty();
            let message = panic_message(payload);
            warn!("Scan of record {} panicked: {}", slug, message);
            ctx.stats.increment_outcome(OutcomeType::ScanPanic);

            let row = panic_row(slug, message);
            if ctx.echo_failures {
                println!("{}", row.to_tab_line());
            }
            vec![row]
        }
    }
}

fn collect(
    joined: Result<(usize, Vec<FailureRow>), tokio::task::JoinError>,
    results: &mut [Option<Vec<FailureRow>>],
) {
    match joined {
        Ok((index, rows)) => {
            debug!("Record #{} finished with {} failure(s)", index, rows.len());
            results[index] = Some(rows);
        }
        // Only reachable if the task was aborted; panics are caught inside it.
        // The slot stays empty and is filled by `fill_incomplete`.
        Err(join_error) => warn!("Scan task did not complete: {}", join_error),
    }
}

const INCOMPLETE_SCAN_MESSAGE: &str = "scan task did not complete";

/// Synthetic row standing in for a record whose scan did not finish.
fn panic_row(slug: &str, message: String) -> FailureRow {
    FailureRow {
        dapp: slug.to_string(),
        field: String::new(),
        url: String::new(),
        http_code: "0".to_string(),
        error: SCAN_PANIC_ERROR.to_string(),
        message,
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "scan task panicked".to_string()
    }
}
