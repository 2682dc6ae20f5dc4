//! Logistic squashing function used for fitness shaping

/// Map any real value into (0, 1); larger `steepness` flattens the curve.
pub fn sigmoid(x: f64, steepness: f64) -> f64 {
    1.0 / (1.0 + (-x / steepness).exp())
}

#[cfg(test)]
#[path = "sigmoid_tests.rs"]
mod sigmoid_tests;
