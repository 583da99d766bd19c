//! Error types for the tanh_net library
//!
//! Every fallible operation returns [`Result<T>`]. Shape problems surface as
//! [`NetworkError::DimensionMismatch`] rather than panicking inside the array
//! library, so a bad input never takes down the caller.

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Operand shapes are incompatible for the named operation
    #[error("dimension mismatch in {operation}: {left:?} vs {right:?}")]
    DimensionMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Training inputs and targets differ in length
    #[error("dataset length mismatch: {inputs} inputs but {targets} targets")]
    LengthMismatch { inputs: usize, targets: usize },

    /// Training or evaluation was asked to run over zero examples
    #[error("dataset is empty")]
    EmptyDataset,

    /// A layer was asked for gradients before it saw an input
    #[error("{layer} layer: backward called before forward")]
    BackwardBeforeForward { layer: &'static str },

    /// Configuration values failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NetworkError {
    pub(crate) fn dimension_mismatch(
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    ) -> Self {
        NetworkError::DimensionMismatch {
            operation,
            left,
            right,
        }
    }
}
