use rand::Rng;

use crate::error::{check_len, check_width, NetworkError};
use crate::Result;

/// Dense row-major weight grid.
///
/// Rows are indexed by the destination unit, columns by the source unit, so
/// row `r` holds every weight feeding unit `r` of the next layer.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    values: Box<[f64]>,
    rows: usize,
    cols: usize,
}

impl WeightMatrix {
    /// Draws every weight independently and uniformly from `[-1, 1]`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        let rows = check_width("weight matrix rows", rows)?;
        let cols = check_width("weight matrix columns", cols)?;

        let values = (0..rows * cols)
            .map(|_| rng.gen_range(-1.0..=1.0))
            .collect();

        Ok(Self { values, rows, cols })
    }

    pub fn from_values(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self> {
        let rows = check_width("weight matrix rows", rows)?;
        let cols = check_width("weight matrix columns", cols)?;
        check_len("weight values", rows * cols, values.len())?;

        Ok(Self {
            values: values.into_boxed_slice(),
            rows,
            cols,
        })
    }

    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let cols = rows.first().map(Vec::len).ok_or(NetworkError::InvalidWidth {
            what: "weight matrix rows",
        })?;

        let mut values = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            check_len("weight row", cols, row.len())?;
            values.extend_from_slice(row);
        }

        Self::from_values(rows.len(), cols, values)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        let offset = row * self.cols;
        &self.values[offset..offset + self.cols]
    }

    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let offset = row * self.cols;
        &mut self.values[offset..offset + self.cols]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// `output[r] = row(r) · input`. Callers guarantee `input.len() == cols`
    /// and `output.len() == rows`.
    #[inline]
    pub fn forward(&self, input: &[f64], output: &mut [f64]) {
        for (r, val) in output.iter_mut().enumerate().take(self.rows) {
            *val = dot_product(input, self.row(r));
        }
    }

    /// Transposed product, `output[c] = Σ_r self[r][c] · input[r]`.
    ///
    /// Pushes per-unit errors of the destination layer back onto the source layer.
    #[inline]
    pub fn backward(&self, input: &[f64], output: &mut [f64]) {
        output.fill(0.0);
        for (r, &err) in input.iter().enumerate().take(self.rows) {
            for (val, &w) in output.iter_mut().zip(self.row(r)) {
                *val += err * w;
            }
        }
    }
}

#[inline(always)]
pub fn dot_product(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).fold(0.0, |sum, (x, w)| sum + x * w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_weights_are_in_unit_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let matrix = WeightMatrix::random(10, 5, &mut rng).unwrap();

        assert_eq!(matrix.rows(), 10);
        assert_eq!(matrix.cols(), 5);
        assert_eq!(matrix.as_slice().len(), 50);
        assert!(matrix.as_slice().iter().all(|w| (-1.0..=1.0).contains(w)));
    }

    #[test]
    fn test_same_seed_gives_same_weights() {
        let a = WeightMatrix::random(4, 3, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = WeightMatrix::random(4, 3, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_empty_dimensions() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            WeightMatrix::random(0, 3, &mut rng),
            Err(NetworkError::InvalidWidth { .. })
        ));
        assert!(matches!(
            WeightMatrix::from_rows(&[]),
            Err(NetworkError::InvalidWidth { .. })
        ));
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let err = WeightMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            NetworkError::ShapeMismatch {
                what: "weight row",
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn test_forward_and_backward() {
        let matrix = WeightMatrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![-1.0, 0.5, 0.0]]).unwrap();

        let mut out = [0.0; 2];
        matrix.forward(&[1.0, 1.0, 2.0], &mut out);
        assert_eq!(out, [9.0, -0.5]);

        let mut back = [0.0; 3];
        matrix.backward(&[2.0, 4.0], &mut back);
        assert_eq!(back, [-2.0, 6.0, 6.0]);

        assert_eq!(matrix.get(1, 1), 0.5);
        assert_eq!(matrix.row(0), &[1.0, 2.0, 3.0]);
    }
}
