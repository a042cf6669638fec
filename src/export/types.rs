//! Export types.

use clap::ValueEnum;

/// Report format options.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV with a header row (default)
    Csv,
    /// One JSON object per failure row
    Jsonl,
}
