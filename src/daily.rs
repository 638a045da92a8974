//! Day-by-day incremental learning
//!
//! Replays the dataset one calendar day at a time, extending the online
//! model with each day's records and recording the in-sample error after
//! every update. Model state carries forward across days; it is never
//! reset.

use crate::error::{QueuecastError, Result};
use crate::training::{mean_absolute_error, PassiveAggressiveRegressor};
use chrono::{DateTime, NaiveDate};
use ndarray::{Array1, Array2, Axis};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Days with this many samples or fewer are skipped: single-digit daily
/// batches make unstable update steps.
pub const MIN_DAILY_SAMPLES: usize = 10;

/// Outcome of one day's incremental update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyResult {
    /// Calendar date of the records in this update
    pub day: NaiveDate,
    /// In-sample mean absolute error of the just-updated model on this
    /// day's records
    pub error: f64,
    /// Number of records for this day
    pub samples: usize,
}

/// Update `model` with each distinct arrival day's records, ascending by
/// date regardless of input row order.
///
/// `x` and `y` must be row-aligned with `df` (see
/// [`crate::features::prepare_features`]). Days with more than
/// [`MIN_DAILY_SAMPLES`] rows update the model and contribute a result
/// entry; smaller days are skipped entirely.
pub fn daily_learning(
    df: &DataFrame,
    model: &mut PassiveAggressiveRegressor,
    x: &Array2<f64>,
    y: &Array1<f64>,
) -> Result<Vec<DailyResult>> {
    if x.nrows() != df.height() || y.len() != df.height() {
        return Err(QueuecastError::ShapeError {
            expected: format!("{} aligned rows", df.height()),
            actual: format!("x has {}, y has {}", x.nrows(), y.len()),
        });
    }

    let by_day = rows_by_arrival_date(df)?;
    let mut results = Vec::new();

    for (day, rows) in by_day {
        if rows.len() <= MIN_DAILY_SAMPLES {
            debug!(%day, samples = rows.len(), "skipping day below sample threshold");
            continue;
        }

        let x_day = x.select(Axis(0), &rows);
        let y_day = y.select(Axis(0), &rows);

        model.partial_fit(&x_day, &y_day)?;
        let predictions = model.predict(&x_day)?;
        let error = mean_absolute_error(&y_day, &predictions)?;
        debug!(%day, error, samples = rows.len(), "daily update applied");

        results.push(DailyResult {
            day,
            error,
            samples: rows.len(),
        });
    }

    Ok(results)
}

/// Group row indices by the calendar date of `arrival_time`, ascending.
fn rows_by_arrival_date(df: &DataFrame) -> Result<BTreeMap<NaiveDate, Vec<usize>>> {
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

    let millis = arrival
        .cast(&DataType::Int64)
        .map_err(|e| QueuecastError::DataError(e.to_string()))?;
    let millis = millis
        .i64()
        .map_err(|e| QueuecastError::DataError(e.to_string()))?;

    let mut by_day: BTreeMap<NaiveDate, Vec<usize>> = BTreeMap::new();
    for (row, opt) in millis.into_iter().enumerate() {
        let ms = opt.ok_or_else(|| {
            QueuecastError::ValidationError("arrival_time contains null entries".to_string())
        })?;
        let date = DateTime::from_timestamp_millis(ms)
            .ok_or_else(|| {
                QueuecastError::ValidationError(format!("arrival_time out of range: {ms}"))
            })?
            .naive_utc()
            .date();
        by_day.entry(date).or_default().push(row);
    }

    Ok(by_day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    /// Frame + aligned arrays with the given per-day record counts. Days
    /// are appended newest-first so sorted output order is observable.
    fn day_fixture(counts: &[(u32, usize)]) -> (DataFrame, Array2<f64>, Array1<f64>) {
        let mut millis = Vec::new();
        let mut queue = Vec::new();
        let mut wait = Vec::new();

        for &(day, count) in counts.iter().rev() {
            for i in 0..count {
                let stamp = NaiveDate::from_ymd_opt(2024, 3, day)
                    .unwrap()
                    .and_hms_opt((i % 24) as u32, 15, 0)
                    .unwrap()
                    .and_utc()
                    .timestamp_millis();
                millis.push(Some(stamp));
                queue.push((i % 6) as f64);
                wait.push(5.0 + 2.0 * (i % 6) as f64 + day as f64);
            }
        }

        let arrival: Int64Chunked = millis.into_iter().collect();
        let arrival = arrival
            .with_name("arrival_time".into())
            .into_datetime(TimeUnit::Milliseconds, None)
            .into_series();

        let n = queue.len();
        let mut df = df!("queue_length" => &queue).unwrap();
        df.with_column(arrival).unwrap();

        let x = Array2::from_shape_fn((n, 2), |(r, c)| if c == 0 { queue[r] } else { 1.0 });
        let y = Array1::from_vec(wait);
        (df, x, y)
    }

    #[test]
    fn test_one_entry_per_sufficient_day_sorted_ascending() {
        let (df, x, y) = day_fixture(&[(4, 11), (5, 11)]);
        let mut model = PassiveAggressiveRegressor::default();

        let results = daily_learning(&df, &mut model, &x, &y).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].day, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        assert_eq!(results[1].day, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(results[0].samples, 11);
        assert_eq!(results[1].samples, 11);
        assert!(results.iter().all(|r| r.error >= 0.0));
    }

    #[test]
    fn test_small_days_are_skipped() {
        // Exactly 10 rows is not enough: the guard is strictly greater-than
        let (df, x, y) = day_fixture(&[(4, 10), (5, 12), (6, 3)]);
        let mut model = PassiveAggressiveRegressor::default();

        let results = daily_learning(&df, &mut model, &x, &y).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].day, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(results[0].samples, 12);
    }

    #[test]
    fn test_model_state_carries_forward() {
        let (df, x, y) = day_fixture(&[(4, 11), (5, 11)]);
        let mut model = PassiveAggressiveRegressor::default();
        daily_learning(&df, &mut model, &x, &y).unwrap();
        let after_both = model.weights.clone().unwrap();

        // Replaying only the first day from scratch gives different state
        let (df1, x1, y1) = day_fixture(&[(4, 11)]);
        let mut fresh = PassiveAggressiveRegressor::default();
        daily_learning(&df1, &mut fresh, &x1, &y1).unwrap();
        let after_one = fresh.weights.clone().unwrap();

        assert!(after_both.iter().zip(after_one.iter()).any(|(a, b)| a != b));
    }

    #[test]
    fn test_misaligned_arrays_are_an_error() {
        let (df, x, _) = day_fixture(&[(4, 11)]);
        let y_short = Array1::<f64>::zeros(3);
        let mut model = PassiveAggressiveRegressor::default();
        assert!(matches!(
            daily_learning(&df, &mut model, &x, &y_short),
            Err(QueuecastError::ShapeError { .. })
        ));
    }

    #[test]
    fn test_string_arrival_time_is_an_error() {
        let df = df!(
            "arrival_time" => &["30-03-2023 0.10"]
        )
        .unwrap();
        let x = Array2::<f64>::zeros((1, 2));
        let y = Array1::<f64>::zeros(1);
        let mut model = PassiveAggressiveRegressor::default();
        assert!(matches!(
            daily_learning(&df, &mut model, &x, &y),
            Err(QueuecastError::ValidationError(_))
        ));
    }

    #[test]
    fn test_no_sufficient_days_yields_empty_result() {
        let (df, x, y) = day_fixture(&[(4, 2), (5, 3)]);
        let mut model = PassiveAggressiveRegressor::default();
        let results = daily_learning(&df, &mut model, &x, &y).unwrap();
        assert!(results.is_empty());
        // Model was never updated
        assert!(model.weights.is_none());
    }
}
