//! Record sources.
//!
//! A source yields the candidate records for a sweep: records whose `url`
//! is not the empty string and whose status is not excluded. A record with
//! no `url` at all is still a candidate; its other URL fields get checked.
//! Only the slug and the URL fields are read.

mod jsonl;
mod mongo;

use std::future::Future;

use futures::stream::BoxStream;
use mongodb::bson::{doc, Document};
use strum::IntoEnumIterator;

use crate::error_handling::SourceError;
use crate::models::{DappRecord, UrlField};

pub use jsonl::JsonLinesRecordSource;
pub use mongo::{redact_credentials, MongoRecordSource};

/// Lazily-read candidate records, in the store's natural order.
pub type RecordStream = BoxStream<'static, Result<DappRecord, SourceError>>;

/// Something that can list candidate records.
pub trait RecordSource {
    fn fetch_candidates(&self) -> impl Future<Output = Result<RecordStream, SourceError>> + Send;
}

/// Query selecting candidate records.
///
/// `$ne: ""` also matches documents that have no `url` field.
pub fn candidate_filter(excluded_statuses: &[String]) -> Document {
    doc! {
        "url": { "$ne": "" },
        "status": { "$nin": excluded_statuses.to_vec() },
    }
}

/// Projection reading only the slug and the URL fields.
pub fn candidate_projection() -> Document {
    let mut projection = doc! { "slug": 1 };
    for field in UrlField::iter() {
        projection.insert(field.as_str(), 1);
    }
    projection
}

/// Client-side version of [`candidate_filter`].
///
/// Only an empty-string `url` disqualifies a record. An absent or
/// non-string `url` passes, as it does under `$ne`.
pub fn is_candidate(record: &DappRecord, excluded_statuses: &[String]) -> bool {
    if record.url.as_deref() == Some("") {
        return false;
    }
    match record.status.as_deref() {
        Some(status) => !excluded_statuses.iter().any(|s| s == status),
        None => true,
    }
}
