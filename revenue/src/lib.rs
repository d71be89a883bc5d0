pub mod config;
pub mod error;
pub mod features;
pub mod metrics;
pub mod record;
pub mod regressor;
pub mod synthetic;


pub use config::TrainingConfig;
pub use error::RevenueError;
pub use features::{denormalize, discover_target_range, normalize, FeatureRange, FeatureScaler};
pub use metrics::Evaluation;
pub use record::{DayFeatures, SalesRecord};
pub use regressor::{FittedRegressor, RevenueRegressor};
pub use synthetic::{generate_year, SalesProfile};

pub type Result<T> = std::result::Result<T, RevenueError>;
