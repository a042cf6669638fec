//! JSONL report writer.
//!
//! Each line is one failure row with the same keys as the CSV header, for
//! piping to `jq` or loading back into MongoDB.

use std::io::Write;

use anyhow::{Context, Result};

use crate::models::FailureRow;

/// Writes `rows` as JSON Lines to `writer`, returning the row count.
pub fn write_jsonl<'a, W, I>(mut writer: W, rows: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a FailureRow>,
{
    let mut count = 0;
    for row in rows {
        serde_json::to_writer(&mut writer, row).context("Failed to serialize row")?;
        writer.write_all(b"\n").context("Failed to write JSONL line")?;
        count += 1;
    }
    writer.flush().context("Failed to flush JSONL output")?;
    Ok(count)
}
