use network::{FeedforwardNetwork, Topology, TrainingExample};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::TrainingConfig;
use crate::features::{FeatureScaler, NUM_FEATURES};
use crate::metrics::Evaluation;
use crate::record::{DayFeatures, SalesRecord};
use crate::Result;

/// An untrained revenue model: a `NUM_FEATURES`-input, single-output network.
#[derive(Debug, Clone)]
pub struct RevenueRegressor {
    network: FeedforwardNetwork,
    config: TrainingConfig,
}

/// A trained model together with the scaling it was trained under.
#[derive(Debug, Clone)]
pub struct FittedRegressor {
    network: FeedforwardNetwork,
    scaler: FeatureScaler,
}

impl RevenueRegressor {
    pub fn new(config: &TrainingConfig) -> Result<Self> {
        let topology = Topology::new(NUM_FEATURES, config.hidden_width, 1)?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let network = FeedforwardNetwork::with_rng(topology, config.learning_rate, &mut rng)?;

        Ok(Self {
            network,
            config: config.clone(),
        })
    }

    pub fn network(&self) -> &FeedforwardNetwork {
        &self.network
    }

    pub fn fit(self, records: &[SalesRecord]) -> Result<FittedRegressor> {
        self.fit_with_progress(records, |_| {})
    }

    /// Trains for the configured number of epochs, visiting `records` in order
    /// each epoch. `on_epoch` receives the 1-based number of every finished epoch.
    pub fn fit_with_progress<F>(
        self,
        records: &[SalesRecord],
        mut on_epoch: F,
    ) -> Result<FittedRegressor>
    where
        F: FnMut(usize),
    {
        let scaler = FeatureScaler::fit(records)?;
        let examples: Vec<TrainingExample> =
            records.iter().map(|r| scaler.encode_record(r)).collect();

        let Self { mut network, config } = self;

        log::info!(
            "Training {:?} on {} days for {} epochs",
            network.topology(),
            examples.len(),
            config.epochs
        );

        for epoch in 1..=config.epochs {
            for example in &examples {
                network.train(&example.inputs, &example.targets)?;
            }

            if config.log_interval > 0
                && epoch % config.log_interval == 0
                && log::log_enabled!(log::Level::Debug)
            {
                let mse = network.mean_squared_error(&examples)?;
                log::debug!("Epoch {}: mse {:.6}", epoch, mse);
            }

            on_epoch(epoch);
        }

        Ok(FittedRegressor { network, scaler })
    }
}

impl FittedRegressor {
    pub fn network(&self) -> &FeedforwardNetwork {
        &self.network
    }

    pub fn scaler(&self) -> &FeatureScaler {
        &self.scaler
    }

    /// Predicted revenue in currency units.
    pub fn predict(&self, day: &DayFeatures) -> Result<f64> {
        let output = self.network.predict(&self.scaler.encode_features(day))?;
        Ok(self.scaler.decode_target(output[0]))
    }

    pub fn evaluate(&self, records: &[SalesRecord]) -> Result<Evaluation> {
        let pairs = records
            .iter()
            .map(|record| Ok((self.predict(&record.day)?, record.revenue)))
            .collect::<Result<Vec<_>>>()?;

        Evaluation::from_pairs(pairs)
    }
}
