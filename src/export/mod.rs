//! Report output.
//!
//! Writes the sweep's failure rows to a file (truncated each run) or to
//! stdout, as CSV or JSON Lines.

mod csv;
mod jsonl;
mod types;

use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::FailureRow;

pub use self::csv::write_csv;
pub use jsonl::write_jsonl;
pub use types::ExportFormat;

/// Wrapper around a Write that ignores broken pipe errors (EPIPE).
/// This allows graceful handling when stdout is piped to a command that exits early.
pub(crate) struct IgnoreBrokenPipe<W: Write> {
    inner: W,
}

impl<W: Write> IgnoreBrokenPipe<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(buf.len())
            } else {
                Err(e)
            }
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(())
            } else {
                Err(e)
            }
        })
    }
}

/// Returns true if `output` means stdout.
pub fn is_stdout(output: &Path) -> bool {
    output.as_os_str() == "-"
}

/// Writes the per-record row lists to `output`, flattened in order.
///
/// `output` is truncated if it exists; `-` writes to stdout.
///
/// # Returns
///
/// The number of rows written.
pub fn write_report(
    results: &[Vec<FailureRow>],
    output: &Path,
    format: &ExportFormat,
) -> Result<usize> {
    let writer: Box<dyn Write> = if is_stdout(output) {
        Box::new(IgnoreBrokenPipe::new(io::stdout()))
    } else {
        let file = std::fs::File::create(output)
            .with_context(|| format!("Failed to create output file: {}", output.display()))?;
        Box::new(BufWriter::new(file))
    };

    let rows = results.iter().flatten();
    match format {
        ExportFormat::Csv => write_csv(writer, rows),
        ExportFormat::Jsonl => write_jsonl(writer, rows),
    }
}
