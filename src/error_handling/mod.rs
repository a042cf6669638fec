//! Error handling and processing statistics.
//!
//! This module provides:
//! - Run-level error enums (initialization, configuration, record source)
//! - Transport error categories and their report tags
//! - Categorization of URL parse and `reqwest` errors
//! - Processing statistics tracking

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{
    categorize_parse_error, categorize_reqwest_error, error_chain_message,
};
pub use stats::ProcessingStats;
pub use types::{ConfigError, InitializationError, OutcomeType, SourceError, TransportErrorKind};
