//! Train/test splitting for aligned feature/target arrays

use crate::error::{QueuecastError, Result};
use ndarray::{Array1, Array2, Axis};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Shuffle and split aligned arrays into train and test partitions.
///
/// `test_size` is the fraction of rows assigned to the test partition.
/// A seed makes the split reproducible; without one the shuffle order is
/// drawn from entropy.
pub fn train_test_split(
    x: &Array2<f64>,
    y: &Array1<f64>,
    test_size: f64,
    random_state: Option<u64>,
) -> Result<(Array2<f64>, Array2<f64>, Array1<f64>, Array1<f64>)> {
    let n = x.nrows();
    if n != y.len() {
        return Err(QueuecastError::ShapeError {
            expected: format!("y length = {}", n),
            actual: format!("y length = {}", y.len()),
        });
    }
    if test_size <= 0.0 || test_size >= 1.0 {
        return Err(QueuecastError::ValidationError(format!(
            "test_size must be in (0, 1), got {test_size}"
        )));
    }

    let n_test = ((n as f64) * test_size) as usize;
    if n_test == 0 || n_test == n {
        return Err(QueuecastError::ValidationError(format!(
            "split of {n} rows with test_size {test_size} leaves an empty partition"
        )));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = match random_state {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    indices.shuffle(&mut rng);

    let (test_idx, train_idx) = indices.split_at(n_test);

    Ok((
        x.select(Axis(0), train_idx),
        x.select(Axis(0), test_idx),
        y.select(Axis(0), train_idx),
        y.select(Axis(0), test_idx),
    ))
}
