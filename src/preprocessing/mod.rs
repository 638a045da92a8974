//! Event-record cleaning
//!
//! Provides the cleaning stage of the pipeline:
//! - Exact-duplicate removal
//! - Per-column missing-value auditing
//! - Timestamp normalization for the three event-time columns
//! - Wait-time distribution summary and extreme-value counting

mod cleaning;
mod outlier;
mod timestamps;

pub use cleaning::{missing_value_counts, remove_duplicates, ColumnMissing};
pub use outlier::{find_extreme_wait_times, WaitTimeStats, DEFAULT_WAIT_THRESHOLD};
pub use timestamps::{normalize_timestamps, FRACTIONAL_SECONDS_FORMAT, MINUTE_DOT_FORMAT};
