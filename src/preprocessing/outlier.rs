//! Wait-time distribution summary and extreme-value counting

use crate::error::{QueuecastError, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Default wait-time threshold in minutes (4 hours)
pub const DEFAULT_WAIT_THRESHOLD: f64 = 240.0;

/// Descriptive statistics of the `wait_time` column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitTimeStats {
    /// Non-null observation count
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (ddof = 1)
    pub std: f64,
    pub min: f64,
    /// 25th percentile, linear interpolation
    pub q1: f64,
    pub median: f64,
    /// 75th percentile, linear interpolation
    pub q3: f64,
    pub max: f64,
}

/// Summarize the wait-time distribution and count records whose wait time
/// strictly exceeds `threshold` minutes.
///
/// The threshold boundary is strict: a wait time exactly equal to
/// `threshold` is not counted as extreme.
pub fn find_extreme_wait_times(df: &DataFrame, threshold: f64) -> Result<(WaitTimeStats, usize)> {
    let column = df
        .column("wait_time")
        .map_err(|_| QueuecastError::ColumnNotFound("wait_time".to_string()))?;
    let series = column.as_materialized_series();

    match series.dtype() {
        DataType::Float64
        | DataType::Float32
        | DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64 => {}
        dt => {
            return Err(QueuecastError::ValidationError(format!(
                "wait_time must be numeric, got {dt}"
            )))
        }
    }

    let as_f64 = series
        .cast(&DataType::Float64)
        .map_err(|e| QueuecastError::DataError(e.to_string()))?;
    let ca = as_f64
        .f64()
        .map_err(|e| QueuecastError::DataError(e.to_string()))?;

    let stats = WaitTimeStats {
        count: ca.len() - ca.null_count(),
        mean: ca.mean().unwrap_or(0.0),
        std: ca.std(1).unwrap_or(0.0),
        min: ca.min().unwrap_or(0.0),
        q1: quantile(ca, 0.25)?,
        median: ca.median().unwrap_or(0.0),
        q3: quantile(ca, 0.75)?,
        max: ca.max().unwrap_or(0.0),
    };

    let extreme_count = ca.into_iter().flatten().filter(|v| *v > threshold).count();

    Ok((stats, extreme_count))
}

fn quantile(ca: &Float64Chunked, q: f64) -> Result<f64> {
    let value = ca
        .quantile(q, QuantileMethod::Linear)
        .map_err(|e| QueuecastError::DataError(e.to_string()))?;
    Ok(value.unwrap_or(0.0))
}
