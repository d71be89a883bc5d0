use crate::error::RevenueError;
use crate::Result;

/// Error of predicted revenue against booked revenue over a set of days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub samples: usize,
    pub mean_absolute_error: f64,
    /// Mean of `|predicted - actual| / actual`. Days without revenue are left out,
    /// so this is `None` when no day had any.
    pub mean_percentage_error: Option<f64>,
    pub max_percentage_error: Option<f64>,
}

impl Evaluation {
    /// Builds an evaluation from `(predicted, actual)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut samples = 0usize;
        let mut total_abs = 0.0;
        let mut total_pct = 0.0;
        let mut pct_samples = 0usize;
        let mut max_pct: f64 = 0.0;

        for (predicted, actual) in pairs {
            let abs_error = (predicted - actual).abs();
            samples += 1;
            total_abs += abs_error;

            if actual != 0.0 {
                let pct = abs_error / actual.abs();
                total_pct += pct;
                pct_samples += 1;
                max_pct = max_pct.max(pct);
            }
        }

        if samples == 0 {
            return Err(RevenueError::EmptyDataset);
        }

        let (mean_percentage_error, max_percentage_error) = if pct_samples > 0 {
            (Some(total_pct / pct_samples as f64), Some(max_pct))
        } else {
            (None, None)
        };

        Ok(Self {
            samples,
            mean_absolute_error: total_abs / samples as f64,
            mean_percentage_error,
            max_percentage_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() {
        let eval = Evaluation::from_pairs([(110.0, 100.0), (180.0, 200.0), (5.0, 0.0)]).unwrap();

        assert_eq!(eval.samples, 3);
        assert!((eval.mean_absolute_error - 35.0 / 3.0).abs() < 1e-12);
        assert!((eval.mean_percentage_error.unwrap() - 0.1).abs() < 1e-12);
        assert!((eval.max_percentage_error.unwrap() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_no_percentage_without_revenue() {
        let eval = Evaluation::from_pairs([(12.0, 0.0), (3.0, 0.0)]).unwrap();

        assert_eq!(eval.samples, 2);
        assert_eq!(eval.mean_absolute_error, 7.5);
        assert_eq!(eval.mean_percentage_error, None);
        assert_eq!(eval.max_percentage_error, None);
    }

    #[test]
    fn test_empty_is_an_error() {
        assert_eq!(
            Evaluation::from_pairs(std::iter::empty()).unwrap_err(),
            RevenueError::EmptyDataset
        );
    }
}
