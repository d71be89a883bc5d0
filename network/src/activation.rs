/// Logistic sigmoid, `1 / (1 + e^-x)`.
#[inline(always)]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid slope expressed through the activation `y = sigmoid(x)`, not through `x`.
#[inline(always)]
pub fn sigmoid_derivative(y: f64) -> f64 {
    y * (1.0 - y)
}

/// Step activation of the perceptron. A sum of exactly zero fires.
#[inline(always)]
pub fn step(sum: f64) -> bool {
    sum >= 0.0
}

// Apply the sigmoid to every value in place
#[inline(always)]
pub fn sigmoid_in_place(values: &mut [f64]) {
    for val in values.iter_mut() {
        *val = sigmoid(*val);
    }
}
