//! Plot the running time of an exhaustive search, n·2ⁿ, against the
//! one of a dynamic programming solution, n³, using [Matplotlib][].
//!
//! Usage
//! -----
//!
//! The computation is a short pipeline:
//!
//! 1. [`sampling::samples`] draws evenly spaced values of `n`;
//! 2. [`curves::evaluate`] computes both running times;
//! 3. [`render::render`] draws the two labeled curves and writes the
//!    image.
//!
//! [`run`] chains the three steps.  The `growth-graph` binary calls it
//! with [`GraphConfig::default()`] which writes `graph.png` in the
//! current directory.
//!
//! [Matplotlib]: https://matplotlib.org/

use pyo3::PyErr;
use thiserror::Error;

pub mod config;
pub mod curves;
pub mod plot;
pub mod render;
pub mod sampling;

pub use config::GraphConfig;
pub use curves::{Curve, Growth, Series};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Possible errors when drawing a graph.
#[derive(Debug, Error)]
pub enum Error {
    /// The Python library "matplotlib" was not found.
    #[error("The matplotlib library has not been found.\n\
             Please install it.  See https://matplotlib.org/")]
    NoMatplotlib,
    /// The path contains an element that is not a directory or does
    /// not exist.
    #[error("A path contains an element that is not a directory or \
             does not exist")]
    FileNotFoundError,
    /// Permission denied to access or create the filesystem path.
    #[error("Permission denied to access or create the filesystem path")]
    PermissionError,
    /// The `x` and `y` values of a line do not have the same length.
    #[error("Cannot plot {y} y-values against {x} x-values")]
    DimensionMismatch { x: usize, y: usize },
    /// Other Python errors.
    #[error("Python error: {0}")]
    Python(#[from] PyErr),
}

/// Sample the domain, evaluate both curves and render them according
/// to `config`.  Return the plotted data.
pub fn run(config: &GraphConfig) -> Result<Growth, Error> {
    let x = sampling::samples(config);
    let growth = curves::evaluate(x);
    render::render(&growth, config)?;
    Ok(growth)
}
