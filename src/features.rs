//! Feature extraction for wait-time models
//!
//! Derives hour-of-day and day-of-week from the normalized arrival
//! timestamp and pairs them with the observed queue length. The resulting
//! matrix is row-aligned with the input frame.

use crate::error::{QueuecastError, Result};
use chrono::{DateTime, Datelike, Timelike};
use ndarray::{Array1, Array2};
use polars::prelude::*;

/// Feature matrix column order. `arrival_day` is 0 = Monday through 6 = Sunday.
pub const FEATURE_COLUMNS: [&str; 3] = ["arrival_hour", "arrival_day", "queue_length"];

/// Build the `[arrival_hour, arrival_day, queue_length]` feature matrix and
/// the `wait_time` target vector.
///
/// `arrival_time` must already be a Datetime column (see
/// [`crate::preprocessing::normalize_timestamps`]); any other dtype is a
/// precondition violation.
pub fn prepare_features(df: &DataFrame) -> Result<(Array2<f64>, Array1<f64>)> {
    let arrival = df
        .column("arrival_time")
        .map_err(|_| QueuecastError::ColumnNotFound("arrival_time".to_string()))?;
    let arrival = arrival.as_materialized_series();

    if !matches!(arrival.dtype(), DataType::Datetime(_, _)) {
        return Err(QueuecastError::ValidationError(format!(
            "arrival_time must be a datetime column, got {}",
            arrival.dtype()
        )));
    }

    let n_rows = df.height();
    let millis = arrival
        .cast(&DataType::Int64)
        .map_err(|e| QueuecastError::DataError(e.to_string()))?;
    let millis = millis
        .i64()
        .map_err(|e| QueuecastError::DataError(e.to_string()))?;

    let mut hours = Vec::with_capacity(n_rows);
    let mut days = Vec::with_capacity(n_rows);
    for opt in millis {
        let ms = opt.ok_or_else(|| {
            QueuecastError::ValidationError("arrival_time contains null entries".to_string())
        })?;
        let dt = DateTime::from_timestamp_millis(ms)
            .ok_or_else(|| {
                QueuecastError::ValidationError(format!("arrival_time out of range: {ms}"))
            })?
            .naive_utc();
        hours.push(dt.hour() as f64);
        days.push(dt.weekday().num_days_from_monday() as f64);
    }

    let queue_lengths = numeric_column(df, "queue_length")?;
    let wait_times = numeric_column(df, "wait_time")?;

    let x = Array2::from_shape_fn((n_rows, FEATURE_COLUMNS.len()), |(row, col)| match col {
        0 => hours[row],
        1 => days[row],
        _ => queue_lengths[row],
    });
    let y = Array1::from_vec(wait_times);

    Ok((x, y))
}

fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = df
        .column(name)
        .map_err(|_| QueuecastError::ColumnNotFound(name.to_string()))?;
    let as_f64 = column
        .as_materialized_series()
        .cast(&DataType::Float64)
        .map_err(|e| QueuecastError::DataError(e.to_string()))?;
    Ok(as_f64
        .f64()
        .map_err(|e| QueuecastError::DataError(e.to_string()))?
        .into_iter()
        .map(|v| v.unwrap_or(0.0))
        .collect())
}
