//! queuecast - Queue wait-time analytics and prediction
//!
//! Cleans queueing-system event records and fits simple predictive models
//! for wait time:
//! - [`preprocessing`] - Duplicate removal, missing-value auditing,
//!   timestamp normalization, wait-time outlier summary
//! - [`features`] - Hour/day-of-week/queue-length feature extraction
//! - [`training`] - Batch OLS and online passive-aggressive regression,
//!   train/test splitting, mean absolute error
//! - [`daily`] - Day-by-day incremental updates of the online model
//!
//! The pipeline is a chain of stateless functions over an in-memory
//! `polars::DataFrame`; the only stateful object is the online model
//! handle, threaded mutably through the daily-update sequence:
//!
//! ```ignore
//! let df = remove_duplicates(&raw)?;
//! let df = normalize_timestamps(&df)?;
//! let (x, y) = prepare_features(&df)?;
//! let (x_train, x_test, y_train, y_test) = train_test_split(&x, &y, 0.2, Some(42))?;
//! let (mut online, _mae) = train_online_model(&x_train, &y_train, &x_test, &y_test)?;
//! let results = daily_learning(&df, &mut online, &x, &y)?;
//! ```

pub mod error;

pub mod daily;
pub mod features;
pub mod preprocessing;
pub mod training;

pub use error::{QueuecastError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{QueuecastError, Result};

    pub use crate::preprocessing::{
        find_extreme_wait_times, missing_value_counts, normalize_timestamps, remove_duplicates,
        ColumnMissing, WaitTimeStats, DEFAULT_WAIT_THRESHOLD,
    };

    pub use crate::features::{prepare_features, FEATURE_COLUMNS};

    pub use crate::training::{
        mean_absolute_error, train_linear_model, train_online_model, train_test_split,
        LinearRegression, PassiveAggressiveConfig, PassiveAggressiveRegressor,
    };

    pub use crate::daily::{daily_learning, DailyResult, MIN_DAILY_SAMPLES};
}
