//! Record scanning: per-record field checks and the parallel driver.

mod driver;
mod record;

pub use driver::run_all;
pub use record::ScanContext;
