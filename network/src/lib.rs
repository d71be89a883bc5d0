pub mod activation;
pub mod error;
pub mod example;
pub mod feedforward;
pub mod gates;
pub mod perceptron;
pub mod weights;

#[cfg(test)]
mod tests;

pub use error::NetworkError;
pub use example::{LabeledExample, TrainingExample};
pub use feedforward::{FeedforwardNetwork, Topology};
pub use perceptron::Perceptron;
pub use weights::WeightMatrix;

/// Step size used when a model is built without an explicit learning rate.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

pub type Result<T> = std::result::Result<T, NetworkError>;
