//! Duplicate removal and missing-value auditing for event records

use crate::error::Result;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Null count for a single column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMissing {
    /// Column name
    pub column: String,
    /// Number of null entries in the column
    pub missing: usize,
}

/// Remove exact-duplicate rows, keeping the first occurrence of each.
///
/// Relative order of first occurrences is preserved. An empty frame
/// passes through unchanged.
pub fn remove_duplicates(df: &DataFrame) -> Result<DataFrame> {
    let deduped = df.unique_stable(None, UniqueKeepStrategy::First, None)?;
    Ok(deduped)
}

/// Count null entries per column, in DataFrame column order.
///
/// Columns with no nulls still appear with a zero count, so callers can
/// audit the full schema before relying on downstream numeric operations.
pub fn missing_value_counts(df: &DataFrame) -> Vec<ColumnMissing> {
    df.get_columns()
        .iter()
        .map(|col| ColumnMissing {
            column: col.name().to_string(),
            missing: col.null_count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with_duplicates() -> DataFrame {
        df!(
            "arrival_time" => &["15-12-2024 14.30", "15-12-2024 14.30", "16-12-2024 09.15"],
            "start_time" => &["15-12-2024 14.45", "15-12-2024 14.45", "16-12-2024 09.30"],
            "wait_time" => &[15.0, 15.0, 15.0],
            "customer_id" => &[1i64, 1, 2]
        )
        .unwrap()
    }

    #[test]
    fn test_remove_duplicates_collapses_exact_copies() {
        let df = frame_with_duplicates();
        let result = remove_duplicates(&df).unwrap();
        assert_eq!(result.height(), 2);

        let ids = result.column("customer_id").unwrap().i64().unwrap();
        let ids: Vec<i64> = ids.into_iter().flatten().collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_remove_duplicates_is_idempotent() {
        let df = frame_with_duplicates();
        let once = remove_duplicates(&df).unwrap();
        let twice = remove_duplicates(&once).unwrap();
        assert!(once.equals(&twice));
    }

    #[test]
    fn test_remove_duplicates_empty_frame() {
        let df = df!(
            "wait_time" => &[] as &[f64]
        )
        .unwrap();
        let result = remove_duplicates(&df).unwrap();
        assert_eq!(result.height(), 0);
    }

    #[test]
    fn test_missing_value_counts() {
        let df = df!(
            "arrival_time" => &[Some("15-12-2024 14.30"), None, Some("16-12-2024 09.15")],
            "start_time" => &[Some("15-12-2024 14.45"), Some("15-12-2024 14.45"), None],
            "wait_time" => &[Some(15.0), None, Some(20.0)],
            "queue_length" => &[5i64, 8, 12]
        )
        .unwrap();

        let counts = missing_value_counts(&df);
        assert_eq!(counts.len(), 4);
        assert_eq!(counts[0], ColumnMissing { column: "arrival_time".into(), missing: 1 });
        assert_eq!(counts[1], ColumnMissing { column: "start_time".into(), missing: 1 });
        assert_eq!(counts[2], ColumnMissing { column: "wait_time".into(), missing: 1 });
        assert_eq!(counts[3], ColumnMissing { column: "queue_length".into(), missing: 0 });
    }

    #[test]
    fn test_missing_plus_present_equals_height() {
        let df = df!(
            "a" => &[Some(1.0), None, Some(3.0), None],
            "b" => &[Some("x"), Some("y"), None, Some("w")]
        )
        .unwrap();

        for entry in missing_value_counts(&df) {
            let col = df.column(&entry.column).unwrap();
            let present = col.len() - col.null_count();
            assert_eq!(present + entry.missing, df.height());
        }
    }
}
