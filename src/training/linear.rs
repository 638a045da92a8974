//! Closed-form linear regression for the batch wait-time model

use crate::error::{QueuecastError, Result};
use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

/// Ordinary-least-squares linear regression.
///
/// Fit once on a training split; read-only for prediction afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegression {
    /// Fitted coefficients, one per feature
    pub coefficients: Option<Array1<f64>>,
    /// Fitted intercept
    pub intercept: f64,
    /// Whether the model is fitted
    pub is_fitted: bool,
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearRegression {
    pub fn new() -> Self {
        Self {
            coefficients: None,
            intercept: 0.0,
            is_fitted: false,
        }
    }

    /// Fit via normal equations on centered data.
    ///
    /// A singular feature matrix surfaces as a computation error.
    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<&mut Self> {
        let n_samples = x.nrows();
        if n_samples == 0 {
            return Err(QueuecastError::TrainingError("empty training set".to_string()));
        }
        if n_samples != y.len() {
            return Err(QueuecastError::ShapeError {
                expected: format!("y length = {}", n_samples),
                actual: format!("y length = {}", y.len()),
            });
        }

        // Center so the intercept falls out of the solve
        let x_mean = x.mean_axis(Axis(0)).unwrap();
        let y_mean = y.mean().unwrap_or(0.0);
        let x_centered = x - &x_mean.clone().insert_axis(Axis(0));
        let y_centered = y - y_mean;

        let xtx = x_centered.t().dot(&x_centered);
        let xty = x_centered.t().dot(&y_centered);

        let coefficients = solve_normal_equations(&xtx, &xty).ok_or_else(|| {
            QueuecastError::ComputationError(
                "singular feature matrix, cannot solve least squares".to_string(),
            )
        })?;

        self.intercept = y_mean - coefficients.dot(&x_mean);
        self.coefficients = Some(coefficients);
        self.is_fitted = true;
        Ok(self)
    }

    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        if !self.is_fitted {
            return Err(QueuecastError::ModelNotFitted);
        }
        let coefficients = self.coefficients.as_ref().unwrap();
        Ok(x.dot(coefficients) + self.intercept)
    }
}

/// Solve (X^T X) w = X^T y. Cholesky first; if the matrix is not positive
/// definite, retry with a small ridge bump, then fall back to Gauss-Jordan.
fn solve_normal_equations(a: &Array2<f64>, b: &Array1<f64>) -> Option<Array1<f64>> {
    let n = a.nrows();
    if let Some(l) = cholesky_factor(a) {
        return Some(triangular_solve(&l, b));
    }

    let ridge = 1e-8 * a.diag().iter().map(|v| v.abs()).sum::<f64>() / n as f64;
    let mut regularized = a.clone();
    for k in 0..n {
        regularized[[k, k]] += ridge;
    }
    if let Some(l) = cholesky_factor(&regularized) {
        return Some(triangular_solve(&l, b));
    }

    gauss_jordan_inverse(a).map(|inv| inv.dot(b))
}

/// Lower-triangular Cholesky factor of a symmetric matrix, or None when the
/// matrix is not positive definite.
fn cholesky_factor(a: &Array2<f64>) -> Option<Array2<f64>> {
    let n = a.nrows();
    let mut l: Array2<f64> = Array2::zeros((n, n));

    for i in 0..n {
        for j in 0..=i {
            let mut sum = 0.0;
            for k in 0..j {
                sum += l[[i, k]] * l[[j, k]];
            }
            if i == j {
                let diag = a[[i, i]] - sum;
                if diag <= 0.0 {
                    return None;
                }
                l[[i, j]] = diag.sqrt();
            } else {
                l[[i, j]] = (a[[i, j]] - sum) / l[[j, j]];
            }
        }
    }

    Some(l)
}

/// Solve L L^T x = b by forward then backward substitution.
fn triangular_solve(l: &Array2<f64>, b: &Array1<f64>) -> Array1<f64> {
    let n = l.nrows();

    let mut y: Array1<f64> = Array1::zeros(n);
    for i in 0..n {
        let mut sum = 0.0;
        for j in 0..i {
            sum += l[[i, j]] * y[j];
        }
        y[i] = (b[i] - sum) / l[[i, i]];
    }

    let mut x: Array1<f64> = Array1::zeros(n);
    for i in (0..n).rev() {
        let mut sum = 0.0;
        for j in (i + 1)..n {
            sum += l[[j, i]] * x[j];
        }
        x[i] = (y[i] - sum) / l[[i, i]];
    }

    x
}

fn gauss_jordan_inverse(m: &Array2<f64>) -> Option<Array2<f64>> {
    let n = m.nrows();
    let mut aug: Array2<f64> = Array2::zeros((n, 2 * n));
    for i in 0..n {
        for j in 0..n {
            aug[[i, j]] = m[[i, j]];
        }
        aug[[i, n + i]] = 1.0;
    }

    for col in 0..n {
        let mut pivot_row = col;
        for row in col + 1..n {
            if aug[[row, col]].abs() > aug[[pivot_row, col]].abs() {
                pivot_row = row;
            }
        }
        if pivot_row != col {
            for j in 0..2 * n {
                aug.swap([col, j], [pivot_row, j]);
            }
        }

        if aug[[col, col]].abs() < 1e-10 {
            return None;
        }

        let pivot = aug[[col, col]];
        for j in 0..2 * n {
            aug[[col, j]] /= pivot;
        }
        for row in 0..n {
            if row != col {
                let factor = aug[[row, col]];
                for j in 0..2 * n {
                    aug[[row, j]] -= factor * aug[[col, j]];
                }
            }
        }
    }

    let mut inv: Array2<f64> = Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            inv[[i, j]] = aug[[i, n + j]];
        }
    }
    Some(inv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_recovers_exact_linear_relation() {
        // y = 2*x1 + 3*x2 + 1
        let x = array![
            [1.0, 1.0],
            [2.0, 1.0],
            [1.0, 2.0],
            [2.0, 2.0],
            [3.0, 1.0],
        ];
        let y = array![6.0, 8.0, 9.0, 11.0, 10.0];

        let mut model = LinearRegression::new();
        model.fit(&x, &y).unwrap();
        assert!(model.is_fitted);

        let preds = model.predict(&x).unwrap();
        for (pred, actual) in preds.iter().zip(y.iter()) {
            assert!((pred - actual).abs() < 1e-6, "pred {pred} vs {actual}");
        }
    }

    #[test]
    fn test_predict_before_fit_fails() {
        let model = LinearRegression::new();
        let x = array![[1.0, 2.0]];
        assert!(matches!(model.predict(&x), Err(QueuecastError::ModelNotFitted)));
    }

    #[test]
    fn test_shape_mismatch() {
        let x = array![[1.0], [2.0]];
        let y = array![1.0, 2.0, 3.0];
        let mut model = LinearRegression::new();
        assert!(matches!(
            model.fit(&x, &y),
            Err(QueuecastError::ShapeError { .. })
        ));
    }

    #[test]
    fn test_singular_matrix_is_an_error() {
        // A constant feature centers to all zeros: X^T X is singular
        let x = array![[1.0], [1.0], [1.0], [1.0]];
        let y = array![5.0, 5.0, 5.0, 5.0];
        let mut model = LinearRegression::new();
        assert!(matches!(
            model.fit(&x, &y),
            Err(QueuecastError::ComputationError(_))
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let x = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [2.0, 1.0]];
        let y = array![1.0, 2.0, 3.0, 4.0];
        let mut model = LinearRegression::new();
        model.fit(&x, &y).unwrap();

        let json = serde_json::to_string(&model).unwrap();
        let restored: LinearRegression = serde_json::from_str(&json).unwrap();
        let a = model.predict(&x).unwrap();
        let b = restored.predict(&x).unwrap();
        for (va, vb) in a.iter().zip(b.iter()) {
            assert_eq!(va, vb);
        }
    }
}
