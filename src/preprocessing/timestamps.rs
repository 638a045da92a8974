//! Timestamp normalization for the three event-time columns
//!
//! Arrival and start times come from two systems that both emit a
//! day-month-year format with a period as the minute separator
//! (`"15-12-2024 14.30"`); finish times arrive pre-formatted as ISO-like
//! strings with fractional seconds. All three columns are reconciled into
//! one Datetime dtype so duration arithmetic across them is valid.

use crate::error::{QueuecastError, Result};
use chrono::NaiveDateTime;
use polars::prelude::*;

/// Day-month-year with a period separating hour and minute
pub const MINUTE_DOT_FORMAT: &str = "%d-%m-%Y %H.%M";

/// ISO-like date-time with optional fractional seconds
pub const FRACTIONAL_SECONDS_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

const TIMESTAMP_COLUMNS: [(&str, &str); 3] = [
    ("arrival_time", MINUTE_DOT_FORMAT),
    ("start_time", MINUTE_DOT_FORMAT),
    ("finish_time", FRACTIONAL_SECONDS_FORMAT),
];

/// Parse the `arrival_time`, `start_time`, and `finish_time` string columns
/// into `Datetime(Milliseconds, None)`.
///
/// A value that does not conform to its column's expected format is a hard
/// error naming the column and the offending value; nothing is coerced to
/// null. Null inputs stay null.
pub fn normalize_timestamps(df: &DataFrame) -> Result<DataFrame> {
    let mut result = df.clone();

    for (col_name, format) in TIMESTAMP_COLUMNS {
        let column = df
            .column(col_name)
            .map_err(|_| QueuecastError::ColumnNotFound(col_name.to_string()))?;
        let series = column.as_materialized_series();
        let ca = series
            .str()
            .map_err(|e| QueuecastError::DataError(e.to_string()))?;

        let parsed = parse_to_datetime(ca, col_name, format)?;
        result
            .with_column(parsed)
            .map_err(|e| QueuecastError::DataError(e.to_string()))?;
    }

    Ok(result)
}

fn parse_to_datetime(ca: &StringChunked, col_name: &str, format: &str) -> Result<Series> {
    let millis: std::result::Result<Int64Chunked, QueuecastError> = ca
        .into_iter()
        .map(|opt| {
            opt.map(|raw| {
                NaiveDateTime::parse_from_str(raw, format)
                    .map(|dt| dt.and_utc().timestamp_millis())
                    .map_err(|e| QueuecastError::TimestampParse {
                        column: col_name.to_string(),
                        message: format!("{raw:?} does not match {format}: {e}"),
                    })
            })
            .transpose()
        })
        .collect();

    Ok(millis?
        .with_name(col_name.into())
        .into_datetime(TimeUnit::Milliseconds, None)
        .into_series())
}
