use network::NetworkError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RevenueError {
    /// Normalizing against this range would divide by zero.
    #[error("feature range [{min}, {max}] is degenerate")]
    DegenerateRange { min: f64, max: f64 },

    #[error("dataset is empty")]
    EmptyDataset,

    /// Revenue must be a finite, non-negative amount.
    #[error("record {index} has invalid revenue {value}")]
    InvalidRevenue { index: usize, value: f64 },

    #[error("year {0} is outside the supported calendar")]
    InvalidYear(i32),

    #[error(transparent)]
    Network(#[from] NetworkError),
}
