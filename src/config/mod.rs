//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, field and phrase lists, report layout)
//! - The library `Config` struct
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{default_concurrency, Config, FailOn, LogFormat, LogLevel, Opt};
