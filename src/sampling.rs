//! Evenly spaced sample points.

use log::debug;
use ndarray::Array1;
use crate::GraphConfig;

/// Return `n` evenly spaced values from `a` to `b`, both included.
///
/// The last value is exactly `b`.  `n = 1` gives `[a]` and `n = 0`
/// an empty array.
pub fn linspace(a: f64, b: f64, n: usize) -> Array1<f64> {
    if n == 1 {
        return Array1::from_elem(1, a)
    }
    let d = (n as f64) - 1.;
    // Multiply before dividing so that i = n - 1 lands on `b`.
    Array1::from_shape_fn(n, |i| a + (b - a) * i as f64 / d)
}

/// Sample points of the domain described by `config`.
pub fn samples(config: &GraphConfig) -> Array1<f64> {
    debug!("Sampling {} points in [{}, {}]",
           config.samples, config.start, config.end);
    linspace(config.start, config.end, config.samples)
}
