use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::activation::{sigmoid_derivative, sigmoid_in_place};
use crate::error::{check_len, check_learning_rate, check_width, NetworkError};
use crate::example::TrainingExample;
use crate::weights::WeightMatrix;
use crate::Result;

/// Unit counts of the three layers. Fixed for the lifetime of a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topology {
    pub input: usize,
    pub hidden: usize,
    pub output: usize,
}

impl Topology {
    pub fn new(input: usize, hidden: usize, output: usize) -> Result<Self> {
        Ok(Self {
            input: check_width("input layer", input)?,
            hidden: check_width("hidden layer", hidden)?,
            output: check_width("output layer", output)?,
        })
    }
}

/// One-hidden-layer network with sigmoid units throughout, trained online.
///
/// There is no bias unit on either layer; every activation is a pure function
/// of the previous layer's activations and the weights.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedforwardNetwork {
    input_hidden: WeightMatrix,
    hidden_output: WeightMatrix,
    topology: Topology,
    learning_rate: f64,
}

struct Activations {
    hidden: Vec<f64>,
    output: Vec<f64>,
}

impl FeedforwardNetwork {
    pub fn new(topology: Topology, learning_rate: f64) -> Result<Self> {
        Self::with_rng(topology, learning_rate, &mut StdRng::from_entropy())
    }

    /// Draws both weight matrices uniformly from `[-1, 1]` using `rng`,
    /// input-to-hidden first.
    pub fn with_rng<R: Rng + ?Sized>(
        topology: Topology,
        learning_rate: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let learning_rate = check_learning_rate(learning_rate)?;
        let input_hidden = WeightMatrix::random(topology.hidden, topology.input, rng)?;
        let hidden_output = WeightMatrix::random(topology.output, topology.hidden, rng)?;

        Ok(Self {
            input_hidden,
            hidden_output,
            topology,
            learning_rate,
        })
    }

    /// Builds a network from explicit weights. The topology is read off the
    /// matrix shapes, which must chain.
    pub fn from_weights(
        input_hidden: WeightMatrix,
        hidden_output: WeightMatrix,
        learning_rate: f64,
    ) -> Result<Self> {
        if hidden_output.cols() != input_hidden.rows() {
            return Err(NetworkError::IncompatibleLayers {
                hidden_rows: input_hidden.rows(),
                output_cols: hidden_output.cols(),
            });
        }
        let learning_rate = check_learning_rate(learning_rate)?;

        let topology = Topology {
            input: input_hidden.cols(),
            hidden: input_hidden.rows(),
            output: hidden_output.rows(),
        };

        Ok(Self {
            input_hidden,
            hidden_output,
            topology,
            learning_rate,
        })
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn input_hidden(&self) -> &WeightMatrix {
        &self.input_hidden
    }

    pub fn hidden_output(&self) -> &WeightMatrix {
        &self.hidden_output
    }

    pub fn predict(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        check_len("network input", self.topology.input, inputs.len())?;
        Ok(self.forward(inputs).output)
    }

    /// One online gradient-descent step on a single example.
    ///
    /// Hidden errors are back-propagated through the output weights as they were
    /// during the forward pass, before the output layer is updated.
    pub fn train(&mut self, inputs: &[f64], targets: &[f64]) -> Result<()> {
        check_len("network input", self.topology.input, inputs.len())?;
        check_len("network target", self.topology.output, targets.len())?;

        let Activations { hidden, output } = self.forward(inputs);

        let output_errors: Vec<f64> = targets
            .iter()
            .zip(&output)
            .map(|(target, out)| target - out)
            .collect();

        let mut hidden_errors = vec![0.0; self.topology.hidden];
        self.hidden_output.backward(&output_errors, &mut hidden_errors);

        let learning_rate = self.learning_rate;

        // Hidden -> output
        for (k, (&error, &out)) in output_errors.iter().zip(&output).enumerate() {
            let gradient = learning_rate * error * sigmoid_derivative(out);
            for (weight, h) in self.hidden_output.row_mut(k).iter_mut().zip(&hidden) {
                *weight += gradient * h;
            }
        }

        // Input -> hidden
        for (j, (&error, &h)) in hidden_errors.iter().zip(&hidden).enumerate() {
            let gradient = learning_rate * error * sigmoid_derivative(h);
            for (weight, x) in self.input_hidden.row_mut(j).iter_mut().zip(inputs) {
                *weight += gradient * x;
            }
        }

        Ok(())
    }

    /// Mean of `(target - output)^2` over every example and output unit.
    /// Zero for an empty slice.
    pub fn mean_squared_error(&self, examples: &[TrainingExample]) -> Result<f64> {
        if examples.is_empty() {
            return Ok(0.0);
        }

        let mut total = 0.0;
        for example in examples {
            check_len("network target", self.topology.output, example.targets.len())?;
            let output = self.predict(&example.inputs)?;
            total += example
                .targets
                .iter()
                .zip(&output)
                .map(|(target, out)| (target - out).powi(2))
                .sum::<f64>();
        }

        Ok(total / (examples.len() * self.topology.output) as f64)
    }

    #[inline]
    fn forward(&self, inputs: &[f64]) -> Activations {
        let mut hidden = vec![0.0; self.topology.hidden];
        self.input_hidden.forward(inputs, &mut hidden);
        sigmoid_in_place(&mut hidden);

        let mut output = vec![0.0; self.topology.output];
        self.hidden_output.forward(&hidden, &mut output);
        sigmoid_in_place(&mut output);

        Activations { hidden, output }
    }
}
