/// An input vector paired with the output vector the network should produce.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingExample {
    pub inputs: Vec<f64>,
    pub targets: Vec<f64>,
}

impl TrainingExample {
    pub fn new(inputs: impl Into<Vec<f64>>, targets: impl Into<Vec<f64>>) -> Self {
        Self {
            inputs: inputs.into(),
            targets: targets.into(),
        }
    }
}

/// An input vector paired with the class a perceptron should assign it.
/// `true` is class 1, `false` class 0.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledExample {
    pub inputs: Vec<f64>,
    pub target: bool,
}

impl LabeledExample {
    pub fn new(inputs: impl Into<Vec<f64>>, target: bool) -> Self {
        Self {
            inputs: inputs.into(),
            target,
        }
    }
}
