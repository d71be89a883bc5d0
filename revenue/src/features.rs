use network::TrainingExample;

use crate::error::RevenueError;
use crate::record::{DayFeatures, SalesRecord};
use crate::Result;

/// Number of network inputs produced per day.
pub const NUM_FEATURES: usize = 5;

pub const DAY_OF_YEAR: FeatureRange = FeatureRange::fixed(1.0, 365.0);
pub const DAY_OF_MONTH: FeatureRange = FeatureRange::fixed(1.0, 31.0);
pub const DAY_OF_WEEK: FeatureRange = FeatureRange::fixed(1.0, 7.0);
pub const MONTH: FeatureRange = FeatureRange::fixed(1.0, 12.0);

/// Revenue is scaled from zero, not from the smallest value seen.
pub const TARGET_MIN: f64 = 0.0;

/// `(value - min) / (max - min)`. Fails when `max == min`.
pub fn normalize(value: f64, min: f64, max: f64) -> Result<f64> {
    Ok(FeatureRange::new(min, max)?.normalize(value))
}

/// Inverse of [`normalize`]: `norm * (max - min) + min`.
pub fn denormalize(norm: f64, min: f64, max: f64) -> f64 {
    norm * (max - min) + min
}

/// Largest revenue in `records`.
///
/// Every revenue must be finite and non-negative; the first one that is not
/// fails the whole collection.
pub fn discover_target_range(records: &[SalesRecord]) -> Result<f64> {
    if records.is_empty() {
        return Err(RevenueError::EmptyDataset);
    }

    let mut max = f64::NEG_INFINITY;
    for (index, record) in records.iter().enumerate() {
        let value = record.revenue;
        if !value.is_finite() || value < 0.0 {
            return Err(RevenueError::InvalidRevenue { index, value });
        }
        max = max.max(value);
    }

    Ok(max)
}

/// Closed interval a feature is scaled from.
///
/// Always has `min != max` and finite bounds, so scaling never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRange {
    min: f64,
    max: f64,
}

impl FeatureRange {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min == max {
            return Err(RevenueError::DegenerateRange { min, max });
        }
        Ok(Self { min, max })
    }

    const fn fixed(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    #[inline]
    pub fn denormalize(&self, norm: f64) -> f64 {
        denormalize(norm, self.min, self.max)
    }
}

/// Normalization state of one training session.
///
/// Calendar features use fixed ranges; the revenue range is discovered from the
/// records the scaler is fitted on and must be reused when decoding predictions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureScaler {
    target: FeatureRange,
}

impl FeatureScaler {
    pub fn fit(records: &[SalesRecord]) -> Result<Self> {
        let max = discover_target_range(records)?;
        let target = FeatureRange::new(TARGET_MIN, max)?;
        log::debug!("Revenue range [{}, {}] over {} records", TARGET_MIN, max, records.len());

        Ok(Self { target })
    }

    pub fn with_target_range(target: FeatureRange) -> Self {
        Self { target }
    }

    pub fn target_range(&self) -> FeatureRange {
        self.target
    }

    pub fn encode_features(&self, day: &DayFeatures) -> [f64; NUM_FEATURES] {
        [
            DAY_OF_YEAR.normalize(f64::from(day.day_of_year)),
            DAY_OF_MONTH.normalize(f64::from(day.day_of_month)),
            DAY_OF_WEEK.normalize(f64::from(day.day_of_week)),
            MONTH.normalize(f64::from(day.month)),
            // Already 0 or 1
            f64::from(u8::from(day.is_holiday)),
        ]
    }

    pub fn encode_record(&self, record: &SalesRecord) -> TrainingExample {
        TrainingExample::new(
            self.encode_features(&record.day),
            [self.target.normalize(record.revenue)],
        )
    }

    pub fn decode_target(&self, norm: f64) -> f64 {
        self.target.denormalize(norm)
    }
}
