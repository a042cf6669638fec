//! Processing statistics tracking.
//!
//! Thread-safe counters for URL outcomes and transport error kinds, shared
//! across scan tasks.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{OutcomeType, TransportErrorKind};

/// Thread-safe processing statistics tracker.
///
/// Every `OutcomeType` and `TransportErrorKind` gets a counter at creation,
/// so the maps are never written after construction and lookups need no lock.
pub struct ProcessingStats {
    outcomes: HashMap<OutcomeType, AtomicUsize>,
    transport: HashMap<TransportErrorKind, AtomicUsize>,
    records: AtomicUsize,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    pub fn new() -> Self {
        let outcomes = OutcomeType::iter()
            .map(|o| (o, AtomicUsize::new(0)))
            .collect();
        let transport = TransportErrorKind::iter()
            .map(|k| (k, AtomicUsize::new(0)))
            .collect();

        ProcessingStats {
            outcomes,
            transport,
            records: AtomicUsize::new(0),
        }
    }

    /// Increment an outcome counter.
    pub fn increment_outcome(&self, outcome: OutcomeType) {
        if let Some(counter) = self.outcomes.get(&outcome) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment outcome counter for {:?} which is not in the map.",
                outcome
            );
        }
    }

    /// Increment a transport error counter (and the `TransportError` outcome).
    pub fn increment_transport(&self, kind: TransportErrorKind) {
        self.increment_outcome(OutcomeType::TransportError);
        if let Some(counter) = self.transport.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment transport counter for {:?} which is not in the map.",
                kind
            );
        }
    }

    /// Count one finished record scan.
    pub fn increment_records(&self) {
        self.records.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_outcome_count(&self, outcome: OutcomeType) -> usize {
        self.outcomes
            .get(&outcome)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn get_transport_count(&self, kind: TransportErrorKind) -> usize {
        self.transport
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Records whose scan has finished (including panicked scans).
    pub fn records_scanned(&self) -> usize {
        self.records.load(Ordering::SeqCst)
    }

    /// URLs checked, healthy or not.
    pub fn total_urls(&self) -> usize {
        OutcomeType::iter()
            .filter(|o| *o != OutcomeType::ScanPanic)
            .map(|o| self.get_outcome_count(o))
            .sum()
    }

    /// Failure rows produced so far.
    pub fn total_failures(&self) -> usize {
        OutcomeType::iter()
            .filter(|o| *o != OutcomeType::Healthy)
            .map(|o| self.get_outcome_count(o))
            .sum()
    }
}
