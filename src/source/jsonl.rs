//! JSON Lines record source (one document per line, as `mongoexport` writes).

use std::path::PathBuf;

use futures::{future, stream, StreamExt, TryStreamExt};
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{is_candidate, RecordSource, RecordStream};
use crate::error_handling::SourceError;
use crate::models::DappRecord;

/// Reads records from a file and applies the candidate filter client-side.
pub struct JsonLinesRecordSource {
    path: PathBuf,
    excluded_statuses: Vec<String>,
}

impl JsonLinesRecordSource {
    pub fn new(path: PathBuf, excluded_statuses: Vec<String>) -> Self {
        Self {
            path,
            excluded_statuses,
        }
    }
}

impl RecordSource for JsonLinesRecordSource {
    async fn fetch_candidates(&self) -> Result<RecordStream, SourceError> {
        let file = tokio::fs::File::open(&self.path).await?;
        info!("Reading records from {}", self.path.display());
        let lines = BufReader::new(file).lines();

        // State is `None` once a read error has been reported.
        let records = stream::unfold(Some((lines, 0usize)), |state| async move {
            let (mut lines, mut line_no) = state?;
            loop {
                line_no += 1;
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        let trimmed = line.trim();
                        if trimmed.is_empty() {
                            continue;
                        }
                        let record = serde_json::from_str::<DappRecord>(trimmed)
                            .map_err(|source| SourceError::Json {
                                line: line_no,
                                source,
                            });
                        return Some((record, Some((lines, line_no))));
                    }
                    Ok(None) => return None,
                    Err(e) => return Some((Err(SourceError::Io(e)), None)),
                }
            }
        });

        let excluded = self.excluded_statuses.clone();
        Ok(records
            .try_filter(move |record| future::ready(is_candidate(record, &excluded)))
            .boxed())
    }
}
