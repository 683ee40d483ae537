//! Display model implementations for table and JSON output
//!
//! Display models transform opaque API payloads into CLI-friendly rows
//! with appropriate column names.

mod common;
mod outcome;
mod record;
mod stats;

pub use outcome::OutcomeDisplay;
pub use record::RecordDisplay;
pub use stats::StatDisplay;
