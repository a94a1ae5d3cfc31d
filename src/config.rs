//! Fixed parameters of a graph.

use std::path::PathBuf;

/// Name of the image written by default, relative to the current
/// directory.
pub const GRAPH_FILE: &str = "graph.png";

/// Parameters of the sampled domain and of the rendered chart.
///
/// The binary always uses [`GraphConfig::default()`]; other values
/// are meant for library users and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    /// Lower bound of the domain (included).
    pub start: f64,
    /// Upper bound of the domain (included).
    pub end: f64,
    /// Number of sample points.
    pub samples: usize,
    pub x_label: String,
    pub y_label: String,
    /// Path of the image.  The format follows the extension.
    pub output: PathBuf,
    /// Resolution of the image.  `None` keeps Matplotlib's default.
    pub dpi: Option<f64>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            start: 0.,
            end: 10.,
            samples: 50,
            x_label: "n".to_string(),
            y_label: "t".to_string(),
            output: PathBuf::from(GRAPH_FILE),
            dpi: None,
        }
    }
}

impl GraphConfig {
    /// Same parameters, writing the image to `output` instead.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = GraphConfig::default();
        assert_eq!((c.start, c.end, c.samples), (0., 10., 50));
        assert_eq!(c.x_label, "n");
        assert_eq!(c.y_label, "t");
        assert_eq!(c.output, PathBuf::from("graph.png"));
        assert_eq!(c.dpi, None);
    }

    #[test]
    fn with_output_keeps_the_rest() {
        let c = GraphConfig::default().with_output("target/other.png");
        assert_eq!(c.output, PathBuf::from("target/other.png"));
        assert_eq!(c, GraphConfig {
            output: PathBuf::from("target/other.png"),
            ..GraphConfig::default() });
    }
}
