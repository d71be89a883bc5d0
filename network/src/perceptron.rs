use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::activation::step;
use crate::error::{check_len, check_learning_rate, check_width, NetworkError};
use crate::example::LabeledExample;
use crate::Result;

/// Single linear unit with a step activation.
///
/// Holds `input_width + 1` weights. Index 0 is the bias weight, paired with a
/// constant input of 1; the remaining weights line up with the inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron {
    weights: Box<[f64]>,
    learning_rate: f64,
}

impl Perceptron {
    pub fn new(input_width: usize, learning_rate: f64) -> Result<Self> {
        Self::with_rng(input_width, learning_rate, &mut StdRng::from_entropy())
    }

    /// Draws the initial weights uniformly from `[-1, 1]` using `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        input_width: usize,
        learning_rate: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let input_width = check_width("perceptron input", input_width)?;
        let learning_rate = check_learning_rate(learning_rate)?;

        let weights = (0..=input_width)
            .map(|_| rng.gen_range(-1.0..=1.0))
            .collect();

        Ok(Self {
            weights,
            learning_rate,
        })
    }

    /// Builds a perceptron from explicit weights, bias weight first.
    pub fn from_weights(weights: Vec<f64>, learning_rate: f64) -> Result<Self> {
        if weights.len() < 2 {
            return Err(NetworkError::InvalidWidth {
                what: "perceptron input",
            });
        }
        let learning_rate = check_learning_rate(learning_rate)?;

        Ok(Self {
            weights: weights.into_boxed_slice(),
            learning_rate,
        })
    }

    #[inline]
    pub fn input_width(&self) -> usize {
        self.weights.len() - 1
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.weights[0]
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn predict(&self, inputs: &[f64]) -> Result<bool> {
        check_len("perceptron input", self.input_width(), inputs.len())?;
        Ok(step(self.weighted_sum(inputs)))
    }

    /// Applies the perceptron rule for one example:
    /// `w_i += lr * (target - prediction) * x_i`, with `x_0 = 1`.
    pub fn train_one(&mut self, inputs: &[f64], target: bool) -> Result<()> {
        let prediction = self.predict(inputs)?;
        let error = f64::from(u8::from(target)) - f64::from(u8::from(prediction));
        if error == 0.0 {
            return Ok(());
        }

        let rate = self.learning_rate * error;
        self.weights[0] += rate;
        for (weight, input) in self.weights[1..].iter_mut().zip(inputs) {
            *weight += rate * input;
        }

        Ok(())
    }

    /// Runs `epochs` passes over `examples` in the given order.
    ///
    /// Every example is shape-checked up front, so a malformed one fails the
    /// call before any weight has moved.
    pub fn train(&mut self, examples: &[LabeledExample], epochs: usize) -> Result<()> {
        for example in examples {
            check_len("perceptron input", self.input_width(), example.inputs.len())?;
        }

        for _ in 0..epochs {
            for example in examples {
                self.train_one(&example.inputs, example.target)?;
            }
        }

        Ok(())
    }

    /// Fraction of `examples` classified correctly. Zero for an empty slice.
    pub fn accuracy(&self, examples: &[LabeledExample]) -> Result<f64> {
        if examples.is_empty() {
            return Ok(0.0);
        }

        let mut correct = 0usize;
        for example in examples {
            if self.predict(&example.inputs)? == example.target {
                correct += 1;
            }
        }

        Ok(correct as f64 / examples.len() as f64)
    }

    // Bias first, then inputs in order
    #[inline(always)]
    fn weighted_sum(&self, inputs: &[f64]) -> f64 {
        inputs
            .iter()
            .zip(&self.weights[1..])
            .fold(self.weights[0], |sum, (x, w)| sum + x * w)
    }
}
