//! Two-input logic gates as toy datasets.
//!
//! Each gate is its truth table over the inputs `(0,0)`, `(0,1)`, `(1,0)`, `(1,1)`,
//! in that order.

use crate::example::{LabeledExample, TrainingExample};

pub type TruthTable = [bool; 4];

pub const AND: TruthTable = [false, false, false, true];
pub const OR: TruthTable = [false, true, true, true];
pub const XOR: TruthTable = [false, true, true, false];

pub const INPUTS: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];

/// Classification examples for a perceptron.
pub fn labeled(table: TruthTable) -> Vec<LabeledExample> {
    INPUTS
        .iter()
        .zip(table)
        .map(|(inputs, target)| LabeledExample::new(*inputs, target))
        .collect()
}

/// Regression examples with a single 0.0 / 1.0 target, for a network.
pub fn regression(table: TruthTable) -> Vec<TrainingExample> {
    INPUTS
        .iter()
        .zip(table)
        .map(|(inputs, target)| TrainingExample::new(*inputs, [f64::from(u8::from(target))]))
        .collect()
}
