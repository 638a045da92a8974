//! Training entry points: fit a model on the train split, report mean
//! absolute error on the test split.

use crate::error::Result;
use crate::training::linear::LinearRegression;
use crate::training::metrics::mean_absolute_error;
use crate::training::passive_aggressive::PassiveAggressiveRegressor;
use ndarray::{Array1, Array2};
use tracing::info;

/// Fit a closed-form linear regression and evaluate it on the test split.
pub fn train_linear_model(
    x_train: &Array2<f64>,
    y_train: &Array1<f64>,
    x_test: &Array2<f64>,
    y_test: &Array1<f64>,
) -> Result<(LinearRegression, f64)> {
    let mut model = LinearRegression::new();
    model.fit(x_train, y_train)?;

    let predictions = model.predict(x_test)?;
    let error = mean_absolute_error(y_test, &predictions)?;
    info!(
        mae = error,
        train_samples = x_train.nrows(),
        test_samples = x_test.nrows(),
        "batch linear model trained"
    );

    Ok((model, error))
}

/// Fit a passive-aggressive regressor (default seeded config) and evaluate
/// it on the test split. The returned model supports further
/// `partial_fit` updates.
pub fn train_online_model(
    x_train: &Array2<f64>,
    y_train: &Array1<f64>,
    x_test: &Array2<f64>,
    y_test: &Array1<f64>,
) -> Result<(PassiveAggressiveRegressor, f64)> {
    let mut model = PassiveAggressiveRegressor::default();
    model.fit(x_train, y_train)?;

    let predictions = model.predict(x_test)?;
    let error = mean_absolute_error(y_test, &predictions)?;
    info!(
        mae = error,
        train_samples = x_train.nrows(),
        test_samples = x_test.nrows(),
        "online model trained"
    );

    Ok((model, error))
}
