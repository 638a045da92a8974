//! Regression error metrics

use crate::error::{QueuecastError, Result};
use ndarray::Array1;

/// Mean absolute error between true and predicted targets.
pub fn mean_absolute_error(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(QueuecastError::ShapeError {
            expected: format!("{} predictions", y_true.len()),
            actual: format!("{} predictions", y_pred.len()),
        });
    }
    if y_true.is_empty() {
        return Err(QueuecastError::ValidationError(
            "cannot compute error over zero samples".to_string(),
        ));
    }

    let total: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).abs())
        .sum();
    Ok(total / y_true.len() as f64)
}
