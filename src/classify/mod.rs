//! URL health classification.
//!
//! A URL is healthy iff it answers a single GET with HTTP 200 and its body
//! matches no parking phrase. Everything else (other statuses, transport
//! faults, parking pages) is a failure carried as data; nothing here returns
//! an error.

mod outcome;
mod parking;
mod request;

use std::future::Future;

pub use outcome::{Classification, ClassificationError};
pub use parking::ParkingDetector;
pub use request::HttpClassifier;

/// Probes one URL.
///
/// The scanner and driver are generic over this so they can be exercised
/// without a network.
pub trait UrlClassifier: Send + Sync + 'static {
    fn classify(&self, url: &str) -> impl Future<Output = Classification> + Send;
}
