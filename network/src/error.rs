use thiserror::Error;

use crate::Result;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    /// A vector handed to a model does not match the width it was built with.
    #[error("{what} has length {actual}, expected {expected}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{what} must have at least one unit")]
    InvalidWidth { what: &'static str },

    #[error("learning rate must be positive and finite, got {0}")]
    InvalidLearningRate(f64),

    #[error("hidden layer has {hidden_rows} units but the output layer reads {output_cols}")]
    IncompatibleLayers {
        hidden_rows: usize,
        output_cols: usize,
    },
}

#[inline]
pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(NetworkError::ShapeMismatch {
            what,
            expected,
            actual,
        })
    }
}

#[inline]
pub(crate) fn check_width(what: &'static str, width: usize) -> Result<usize> {
    if width == 0 {
        Err(NetworkError::InvalidWidth { what })
    } else {
        Ok(width)
    }
}

#[inline]
pub(crate) fn check_learning_rate(learning_rate: f64) -> Result<f64> {
    if learning_rate.is_finite() && learning_rate > 0.0 {
        Ok(learning_rate)
    } else {
        Err(NetworkError::InvalidLearningRate(learning_rate))
    }
}
