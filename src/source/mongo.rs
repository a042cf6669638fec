//! MongoDB record source.

use futures::{future, StreamExt, TryStreamExt};
use log::info;
use mongodb::{Client, Collection};

use super::{candidate_filter, candidate_projection, is_candidate, RecordSource, RecordStream};
use crate::config::DAPPS_COLLECTION;
use crate::error_handling::SourceError;
use crate::models::DappRecord;

/// Reads candidate records from the `dapps` collection of the database named
/// in the connection string.
pub struct MongoRecordSource {
    collection: Collection<DappRecord>,
    excluded_statuses: Vec<String>,
}

impl MongoRecordSource {
    /// Creates the client. No connection is made until the first query.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string is invalid or does not name
    /// a database.
    pub async fn connect(
        mongodb_url: &str,
        excluded_statuses: Vec<String>,
    ) -> Result<Self, SourceError> {
        let redacted = redact_credentials(mongodb_url);
        let client = Client::with_uri_str(mongodb_url).await?;
        let database = client
            .default_database()
            .ok_or_else(|| SourceError::NoDefaultDatabase(redacted.clone()))?;
        info!(
            "Reading records from {} (database {}, collection {})",
            redacted,
            database.name(),
            DAPPS_COLLECTION
        );

        Ok(Self {
            collection: database.collection(DAPPS_COLLECTION),
            excluded_statuses,
        })
    }
}

impl RecordSource for MongoRecordSource {
    async fn fetch_candidates(&self) -> Result<RecordStream, SourceError> {
        let cursor = self
            .collection
            .find(candidate_filter(&self.excluded_statuses))
            .projection(candidate_projection())
            .await?;

        // The projection drops `status`, so only the url check applies here.
        let excluded = self.excluded_statuses.clone();
        Ok(cursor
            .map_err(SourceError::from)
            .try_filter(move |record| future::ready(is_candidate(record, &excluded)))
            .boxed())
    }
}

/// Masks the password in a connection string for logging.
pub fn redact_credentials(mongodb_url: &str) -> String {
    match url::Url::parse(mongodb_url) {
        Ok(mut parsed) => {
            if parsed.password().is_some() {
                // Only fails for cannot-be-a-base URLs, which have no password.
                let _ = parsed.set_password(Some("****"));
            }
            parsed.to_string()
        }
        Err(_) => "<unparseable connection string>".to_string(),
    }
}
