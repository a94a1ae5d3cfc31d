//! Thin binding to the [Matplotlib][] object interface.
//!
//! Only the pieces needed to draw labeled line charts are exposed:
//! a [`Figure`] holding one set of [`Axes`], line plots built with
//! [`Axes::xy`], axis labels, a legend and [`Savefig`].
//!
//! [Matplotlib]: https://matplotlib.org/

use std::{mem::swap, path::Path};
use lazy_static::lazy_static;
use ndarray::{ArrayBase, Ix1};
use numpy::ToPyArray;
use pyo3::{
    prelude::*,
    intern,
    exceptions::{PyFileNotFoundError, PyPermissionError},
    types::PyDict,
};
use crate::Error;

lazy_static! {
    // `matplotlib.figure` does not select an interactive backend,
    // which keeps rendering usable without a display.
    static ref FIGURE: Result<Py<PyModule>, PyErr> = {
        Python::with_gil(|py| {
            PyModule::import_bound(py, "matplotlib.figure")
                .map(|m| m.unbind())
        })
    };
}

/// Return a handle to the cached module `$m`.
/// ⚠ The first use imports the module and thus locks Python's GIL.
/// Make sure it is executed outside a call to `Python::with_gil`.
macro_rules! pymod { ($m: ident) => {
    $m.as_ref().map_err(|_| Error::NoMatplotlib)
}}

/// Values that can be handed to Matplotlib as a one-dimensional
/// `numpy.ndarray`.
pub trait Data {
    /// Number of values.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool { self.len() == 0 }

    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyAny>;
}

impl Data for [f64] {
    fn len(&self) -> usize { <[f64]>::len(self) }

    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyAny> {
        self.to_pyarray_bound(py).into_any()
    }
}

impl Data for Vec<f64> {
    fn len(&self) -> usize { Vec::len(self) }

    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyAny> {
        self.as_slice().to_numpy(py)
    }
}

impl<const N: usize> Data for [f64; N] {
    fn len(&self) -> usize { N }

    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyAny> {
        self.as_slice().to_numpy(py)
    }
}

impl<S> Data for ArrayBase<S, Ix1>
where S: ndarray::Data<Elem = f64> {
    fn len(&self) -> usize { ArrayBase::len(self) }

    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyAny> {
        self.to_pyarray_bound(py).into_any()
    }
}

/// The top level container for all the plot elements.
#[derive(Debug)]
pub struct Figure {
    fig: PyObject, // instance of matplotlib.figure.Figure
}

/// A set of axes, the region of a [`Figure`] where data is drawn.
#[derive(Debug, Clone)]
pub struct Axes {
    ax: PyObject,
}

impl Figure {
    /// Return a new `Figure`.
    ///
    /// Return [`Error::NoMatplotlib`] if Matplotlib is not present on
    /// the system.
    pub fn new() -> Result<Figure, Error> {
        let figure = pymod!(FIGURE)?;
        Python::with_gil(|py| {
            let fig = figure.bind(py)
                .getattr(intern!(py, "Figure"))?
                .call0()?;
            Ok(Figure { fig: fig.unbind() })
        })
    }

    /// Add a single set of axes covering the whole figure.
    pub fn axes(&self) -> Result<Axes, Error> {
        Python::with_gil(|py| {
            let ax = self.fig.bind(py)
                .call_method0(intern!(py, "subplots"))?;
            Ok(Axes { ax: ax.unbind() })
        })
    }

    pub fn save(&self) -> Savefig {
        Savefig { fig: self.fig.clone(), dpi: None }
    }
}

/// Options to write a [`Figure`] to a file.
pub struct Savefig {
    fig: PyObject,
    dpi: Option<f64>,
}

impl Savefig {
    /// Resolution in dots per inch.  Non-positive values restore
    /// Matplotlib's default.
    pub fn dpi(&mut self, dpi: f64) -> &mut Self {
        if dpi > 0. {
            self.dpi = Some(dpi);
        } else {
            self.dpi = None;
        }
        self
    }

    /// Write the figure to `path`, replacing any existing file.  The
    /// image format is deduced from the extension.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = PyDict::new_bound(py);
            if let Some(dpi) = self.dpi {
                kwargs.set_item("dpi", dpi)?;
            }
            self.fig.bind(py).call_method(
                intern!(py, "savefig"), (path.as_ref(),), Some(&kwargs)
            ).map_err(|e| {
                if e.is_instance_of::<PyFileNotFoundError>(py) {
                    Error::FileNotFoundError
                } else if e.is_instance_of::<PyPermissionError>(py) {
                    Error::PermissionError
                } else {
                    Error::Python(e)
                }
            })?;
            Ok(())
        })
    }
}

impl Axes {
    /// Plot `y` versus `x` as lines and/or markers.
    ///
    /// Nothing is drawn until [`XY::plot`] is called.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use growth_graph::plot::Figure;
    /// let fig = Figure::new()?;
    /// let mut ax = fig.axes()?;
    /// ax.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).label("up").plot()?;
    /// fig.save().to_file("target/xy_plot.png")?;
    /// # Ok::<(), growth_graph::Error>(())
    /// ```
    #[must_use]
    pub fn xy<'a, D>(&'a mut self, x: &'a D, y: &'a D) -> XY<'a, D>
    where D: Data + ?Sized {
        // Mutably borrow `self` because the final `.plot()` mutates
        // the underlying Python object.
        XY { axes: self,
             options: PlotOptions::new(),
             data: (x, y),
             prev_data: vec![] }
    }

    pub fn set_xlabel(&mut self, label: &str) -> Result<&mut Self, Error> {
        Python::with_gil(|py| {
            self.ax.bind(py)
                .call_method1(intern!(py, "set_xlabel"), (label,))
                .map(|_| ())
        })?;
        Ok(self)
    }

    pub fn set_ylabel(&mut self, label: &str) -> Result<&mut Self, Error> {
        Python::with_gil(|py| {
            self.ax.bind(py)
                .call_method1(intern!(py, "set_ylabel"), (label,))
                .map(|_| ())
        })?;
        Ok(self)
    }

    /// Place a legend listing the labels of all plotted series.
    pub fn legend(&mut self) -> Result<&mut Self, Error> {
        Python::with_gil(|py| {
            self.ax.bind(py).call_method0(intern!(py, "legend")).map(|_| ())
        })?;
        Ok(self)
    }

    /// Labels of the legend currently attached to the axes, if any.
    pub fn legend_labels(&self) -> Result<Vec<String>, Error> {
        Python::with_gil(|py| {
            let legend = self.ax.bind(py)
                .call_method0(intern!(py, "get_legend"))?;
            if legend.is_none() {
                return Ok(vec![])
            }
            let mut labels = vec![];
            for text in legend.call_method0(intern!(py, "get_texts"))?
                .iter()? {
                labels.push(text?.call_method0(intern!(py, "get_text"))?
                            .extract()?);
            }
            Ok(labels)
        })
    }

    pub fn xlabel(&self) -> Result<String, Error> {
        Python::with_gil(|py| {
            Ok(self.ax.bind(py)
               .call_method0(intern!(py, "get_xlabel"))?.extract()?)
        })
    }

    pub fn ylabel(&self) -> Result<String, Error> {
        Python::with_gil(|py| {
            Ok(self.ax.bind(py)
               .call_method0(intern!(py, "get_ylabel"))?.extract()?)
        })
    }
}

#[derive(Clone)]
struct PlotOptions<'a> {
    fmt: &'a str,
    label: &'a str,
    linewidth: Option<f64>,
}

impl<'a> PlotOptions<'a> {
    fn new() -> PlotOptions<'static> {
        PlotOptions { fmt: "", label: "", linewidth: None }
    }

    fn kwargs<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let kwargs = PyDict::new_bound(py);
        if !self.label.is_empty() {
            kwargs.set_item("label", self.label)?
        }
        if let Some(w) = self.linewidth {
            kwargs.set_item("linewidth", w)?
        }
        Ok(kwargs)
    }

    fn plot_xy<D>(&self, py: Python<'_>, axes: &Axes, x: &D, y: &D)
                  -> Result<(), Error>
    where D: Data + ?Sized {
        let xn = x.to_numpy(py);
        let yn = y.to_numpy(py);
        axes.ax.bind(py).call_method(
            intern!(py, "plot"), (xn, yn, self.fmt),
            Some(&self.kwargs(py)?))?;
        Ok(())
    }
}

/// Builder for line plots, created by [`Axes::xy`].
pub struct XY<'a, D>
where D: ?Sized {
    axes: &'a Axes,
    // Latest data and its setting.
    options: PlotOptions<'a>,
    data: (&'a D, &'a D),
    // Previous data with their settings.
    prev_data: Vec<(PlotOptions<'a>, (&'a D, &'a D))>,
}

impl<'a, D> XY<'a, D>
where D: Data + ?Sized {
    /// Matplotlib format string such as `"r."` or `"--"`.
    #[must_use]
    pub fn fmt(mut self, fmt: &'a str) -> Self {
        self.options.fmt = fmt;
        self
    }

    /// Name of the latest dataset, shown by [`Axes::legend`].
    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.options.label = label;
        self
    }

    #[must_use]
    pub fn linewidth(mut self, w: f64) -> Self {
        self.options.linewidth = Some(w);
        self
    }

    /// Add the dataset (`x`, `y`).  It starts with the options of the
    /// previous dataset, except for the label which is not shared.
    #[must_use]
    pub fn xy(mut self, x: &'a D, y: &'a D) -> Self {
        let mut data = (x, y);
        swap(&mut data, &mut self.data);
        let options = self.options.clone();
        self.options.label = "";
        self.prev_data.push((options, data));
        self
    }

    /// Plot all datasets, in the order they were given.
    ///
    /// Return [`Error::DimensionMismatch`] without drawing anything if
    /// the `x` and `y` of some dataset differ in length.
    pub fn plot(self) -> Result<(), Error> {
        let datasets: Vec<_> = self.prev_data.iter()
            .map(|(opt, data)| (opt, data))
            .chain(std::iter::once((&self.options, &self.data)))
            .collect();
        for (_, (x, y)) in &datasets {
            if x.len() != y.len() {
                return Err(Error::DimensionMismatch {
                    x: x.len(), y: y.len() })
            }
        }
        Python::with_gil(|py| {
            for (opt, (x, y)) in datasets {
                opt.plot_xy(py, self.axes, *x, *y)?
            }
            Ok(())
        })
    }
}
