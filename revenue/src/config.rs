/// Hyperparameters of a revenue regressor.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingConfig {
    /// Units in the hidden layer.
    pub hidden_width: usize,
    pub learning_rate: f64,
    /// Full passes over the training records.
    pub epochs: usize,
    /// Seed for the initial weights. `None` draws from entropy.
    pub seed: Option<u64>,
    /// Epochs between debug-level loss reports. Zero disables them.
    pub log_interval: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            hidden_width: 10,
            learning_rate: network::DEFAULT_LEARNING_RATE,
            epochs: 1000,
            seed: None,
            log_interval: 100,
        }
    }
}
