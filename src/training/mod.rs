//! Model training
//!
//! Two model families cover the pipeline's needs:
//! - [`LinearRegression`] - closed-form OLS for batch training
//! - [`PassiveAggressiveRegressor`] - online model updated incrementally
//!
//! Plus the supporting pieces: seeded train/test splitting, the mean
//! absolute error metric, and the train-and-evaluate entry points.

pub mod linear;
pub mod metrics;
pub mod passive_aggressive;
pub mod split;
mod trainer;

pub use linear::LinearRegression;
pub use metrics::mean_absolute_error;
pub use passive_aggressive::{PassiveAggressiveConfig, PassiveAggressiveRegressor};
pub use split::train_test_split;
pub use trainer::{train_linear_model, train_online_model};
