//! CSV report writer.
//!
//! One row per unhealthy URL, header first, in the order rows were produced.

use std::io::Write;

use anyhow::{Context, Result};
use csv::Writer;

use crate::config::REPORT_FIELDS;
use crate::models::FailureRow;

/// Writes `rows` as CSV to `writer`.
///
/// Fields containing commas, quotes or newlines are quoted.
///
/// # Returns
///
/// The number of rows written (header excluded).
pub fn write_csv<'a, W, I>(writer: W, rows: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a FailureRow>,
{
    let mut writer = Writer::from_writer(writer);
    writer
        .write_record(REPORT_FIELDS)
        .context("Failed to write CSV header")?;

    let mut count = 0;
    for row in rows {
        writer
            .write_record(row.as_record())
            .context("Failed to write CSV row")?;
        count += 1;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(count)
}
