//! Error types for the queuecast pipeline

use thiserror::Error;

/// Result type alias for queuecast operations
pub type Result<T> = std::result::Result<T, QueuecastError>;

/// Main error type for the queuecast pipeline
#[derive(Error, Debug)]
pub enum QueuecastError {
    #[error("Data error: {0}")]
    DataError(String),

    #[error("Timestamp parse error in column '{column}': {message}")]
    TimestampParse { column: String, message: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid shape: expected {expected}, got {actual}")]
    ShapeError { expected: String, actual: String },

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Model not fitted")]
    ModelNotFitted,

    #[error("Training error: {0}")]
    TrainingError(String),

    #[error("Computation error: {0}")]
    ComputationError(String),
}

impl From<polars::error::PolarsError> for QueuecastError {
    fn from(err: polars::error::PolarsError) -> Self {
        QueuecastError::DataError(err.to_string())
    }
}
