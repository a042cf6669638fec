//! Run-time helpers: progress logging, shutdown handling, and statistics
//! printing used by the sweep.

pub mod logging;
pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use shutdown::shutdown_gracefully;
pub use statistics::print_outcome_statistics;
