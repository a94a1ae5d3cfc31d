//! Running times compared on the graph.

use log::debug;
use ndarray::Array1;

/// A named function of `n`.
#[derive(Debug, Clone, Copy)]
pub struct Curve {
    pub label: &'static str,
    f: fn(f64) -> f64,
}

/// n·2ⁿ: try every subset, each in linear time.
pub const EXHAUSTIVE_SEARCH: Curve = Curve {
    label: "exhaustive search",
    f: exhaustive_search,
};

/// n³: fill a cubic table.
pub const DYNAMIC_PROGRAMMING: Curve = Curve {
    label: "dynamic programming",
    f: dynamic_programming,
};

fn exhaustive_search(n: f64) -> f64 { n * n.exp2() }

fn dynamic_programming(n: f64) -> f64 { n.powi(3) }

impl Curve {
    pub fn at(&self, x: f64) -> f64 { (self.f)(x) }

    /// Evaluate the curve at every sample point.
    pub fn series(&self, x: &Array1<f64>) -> Series {
        Series { label: self.label, y: x.mapv(self.f) }
    }
}

/// Values of a [`Curve`] at the sample points.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: &'static str,
    pub y: Array1<f64>,
}

/// Sample points with the values of both curves, in plotting order.
#[derive(Debug, Clone, PartialEq)]
pub struct Growth {
    pub x: Array1<f64>,
    pub series: [Series; 2],
}

impl Growth {
    pub fn exhaustive_search(&self) -> &Series { &self.series[0] }

    pub fn dynamic_programming(&self) -> &Series { &self.series[1] }
}

/// Evaluate [`EXHAUSTIVE_SEARCH`] and [`DYNAMIC_PROGRAMMING`] at `x`.
pub fn evaluate(x: Array1<f64>) -> Growth {
    let series = [EXHAUSTIVE_SEARCH.series(&x),
                  DYNAMIC_PROGRAMMING.series(&x)];
    debug!("Evaluated {} curves at {} points", series.len(), x.len());
    Growth { x, series }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{sampling::samples, GraphConfig};

    fn growth() -> Growth { evaluate(samples(&GraphConfig::default())) }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.)
    }

    #[test]
    fn formulas() {
        let g = growth();
        for (i, &x) in g.x.iter().enumerate() {
            let a = g.exhaustive_search().y[i];
            let b = g.dynamic_programming().y[i];
            assert!(close(a, x * 2f64.powf(x)), "x = {x}: {a}");
            assert!(close(b, x * x * x), "x = {x}: {b}");
        }
    }

    #[test]
    fn same_length() {
        let g = growth();
        assert_eq!(g.x.len(), 50);
        for s in &g.series {
            assert_eq!(s.y.len(), g.x.len());
        }
    }

    #[test]
    fn labels_and_order() {
        let g = growth();
        assert_eq!(g.series[0].label, "exhaustive search");
        assert_eq!(g.series[1].label, "dynamic programming");
    }

    #[test]
    fn middle_point() {
        let g = growth();
        let x = 250. / 49.;
        assert!(close(g.exhaustive_search().y[25], x * 2f64.powf(x)));
        assert!(close(g.dynamic_programming().y[25], x.powi(3)));
        assert!((g.exhaustive_search().y[25] - 175.231).abs() < 1e-3);
        assert!((g.dynamic_programming().y[25] - 132.810).abs() < 1e-3);
    }

    #[test]
    fn end_points() {
        let g = growth();
        assert_eq!(g.exhaustive_search().y[0], 0.);
        assert_eq!(g.dynamic_programming().y[0], 0.);
        assert_eq!(g.exhaustive_search().y[49], 10240.);
        assert_eq!(g.dynamic_programming().y[49], 1000.);
    }

    #[test]
    fn no_clamping() {
        assert_eq!(EXHAUSTIVE_SEARCH.at(2000.), f64::INFINITY);
        assert!(DYNAMIC_PROGRAMMING.at(-2.) < 0.);
    }

    #[test]
    fn idempotent() {
        assert_eq!(growth(), growth());
    }
}
