//! Passive-aggressive online regression
//!
//! Linear model updated by the PA-I rule: each sample moves the weights
//! just enough to bring its prediction inside an epsilon-insensitive
//! margin, capped by the aggressiveness parameter. Supports incremental
//! updates on new data without retraining from scratch.

use crate::error::{QueuecastError, Result};
use ndarray::{Array1, Array2, ArrayView1};
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassiveAggressiveConfig {
    /// Aggressiveness: caps the size of each update step
    pub c: f64,
    /// Epsilon-insensitive margin; errors inside it trigger no update
    pub epsilon: f64,
    /// Maximum epochs for the initial fit
    pub max_iter: usize,
    /// Early-stop tolerance on epoch loss improvement
    pub tol: f64,
    /// Seed for the epoch shuffling RNG
    pub random_state: Option<u64>,
}

impl Default for PassiveAggressiveConfig {
    fn default() -> Self {
        Self {
            c: 1.0,
            epsilon: 0.1,
            max_iter: 1000,
            tol: 1e-3,
            random_state: Some(42),
        }
    }
}

/// Online wait-time regressor.
///
/// Created once, then mutated in place by `fit` and repeated `partial_fit`
/// calls; each update strictly extends the learned state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassiveAggressiveRegressor {
    pub config: PassiveAggressiveConfig,
    pub weights: Option<Array1<f64>>,
    pub bias: f64,
}

impl Default for PassiveAggressiveRegressor {
    fn default() -> Self {
        Self::new(PassiveAggressiveConfig::default())
    }
}

impl PassiveAggressiveRegressor {
    pub fn new(config: PassiveAggressiveConfig) -> Self {
        Self {
            config,
            weights: None,
            bias: 0.0,
        }
    }

    /// Initial fit: repeated shuffled passes with tolerance-based early stop.
    /// Restarts from zero weights; use `partial_fit` to extend learned state.
    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<()> {
        let n = x.nrows();
        if n == 0 {
            return Err(QueuecastError::TrainingError("empty training set".to_string()));
        }
        check_aligned(x, y)?;

        let mut w: Array1<f64> = Array1::zeros(x.ncols());
        let mut b = 0.0;
        let mut rng =
            Xoshiro256PlusPlus::seed_from_u64(self.config.random_state.unwrap_or(42));
        let mut indices: Vec<usize> = (0..n).collect();
        let mut prev_loss = f64::MAX;

        for epoch in 0..self.config.max_iter {
            indices.shuffle(&mut rng);
            let mut epoch_loss = 0.0;
            for &i in &indices {
                epoch_loss += pa_step(&mut w, &mut b, &self.config, x.row(i), y[i]);
            }
            epoch_loss /= n as f64;

            if epoch > 0 && (prev_loss - epoch_loss).abs() < self.config.tol {
                break;
            }
            prev_loss = epoch_loss;
        }

        self.weights = Some(w);
        self.bias = b;
        Ok(())
    }

    /// One in-order pass over the given samples, extending current state.
    ///
    /// Usable before `fit`: weights initialize to zeros on first update.
    pub fn partial_fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<()> {
        check_aligned(x, y)?;

        let mut w = match self.weights.take() {
            Some(w) if w.len() == x.ncols() => w,
            Some(w) => {
                return Err(QueuecastError::ShapeError {
                    expected: format!("{} features", w.len()),
                    actual: format!("{} features", x.ncols()),
                })
            }
            None => Array1::zeros(x.ncols()),
        };

        for (xi, &yi) in x.rows().into_iter().zip(y.iter()) {
            pa_step(&mut w, &mut self.bias, &self.config, xi, yi);
        }

        self.weights = Some(w);
        Ok(())
    }

    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        let w = self
            .weights
            .as_ref()
            .ok_or(QueuecastError::ModelNotFitted)?;
        Ok(Array1::from_vec(
            x.rows().into_iter().map(|row| row.dot(w) + self.bias).collect(),
        ))
    }
}

fn check_aligned(x: &Array2<f64>, y: &Array1<f64>) -> Result<()> {
    if x.nrows() != y.len() {
        return Err(QueuecastError::ShapeError {
            expected: format!("y length = {}", x.nrows()),
            actual: format!("y length = {}", y.len()),
        });
    }
    Ok(())
}

/// PA-I update on one sample. Returns the epsilon-insensitive loss before
/// the update.
fn pa_step(
    w: &mut Array1<f64>,
    b: &mut f64,
    config: &PassiveAggressiveConfig,
    xi: ArrayView1<f64>,
    yi: f64,
) -> f64 {
    let pred = xi.dot(w) + *b;
    let diff = yi - pred;
    let loss = diff.abs() - config.epsilon;
    if loss <= 0.0 {
        return 0.0;
    }

    // Norm includes the implicit intercept feature
    let norm_sq = xi.dot(&xi) + 1.0;
    let tau = (loss / norm_sq).min(config.c);
    let step = diff.signum() * tau;

    w.scaled_add(step, &xi);
    *b += step;
    loss
}
