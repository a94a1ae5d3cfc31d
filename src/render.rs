//! Draw the curves of a [`Growth`] and save the chart.

use log::info;
use crate::{
    plot::{Axes, Figure},
    Error, GraphConfig, Growth,
};

/// Draw every series of `growth` against its sample points on one set
/// of axes, with axis labels and a legend.
pub fn draw(growth: &Growth, config: &GraphConfig) -> Result<(Figure, Axes), Error> {
    let fig = Figure::new()?;
    let mut ax = fig.axes()?;
    let [first, second] = &growth.series;
    ax.xy(&growth.x, &first.y).label(first.label)
        .xy(&growth.x, &second.y).label(second.label)
        .plot()?;
    ax.set_ylabel(&config.y_label)?
        .set_xlabel(&config.x_label)?
        .legend()?;
    Ok((fig, ax))
}

/// Draw `growth` and write the image to `config.output`, replacing
/// any existing file.
pub fn render(growth: &Growth, config: &GraphConfig) -> Result<(), Error> {
    let (fig, _) = draw(growth, config)?;
    let mut save = fig.save();
    if let Some(dpi) = config.dpi {
        save.dpi(dpi);
    }
    save.to_file(&config.output)?;
    info!("Wrote {}", config.output.display());
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{curves::evaluate, sampling::samples};

    #[test]
    fn labels() -> Result<(), Error> {
        let config = GraphConfig::default();
        let growth = evaluate(samples(&config));
        let (_fig, ax) = draw(&growth, &config)?;
        assert_eq!(ax.xlabel()?, "n");
        assert_eq!(ax.ylabel()?, "t");
        assert_eq!(ax.legend_labels()?,
                   ["exhaustive search", "dynamic programming"]);
        Ok(())
    }

    #[test]
    fn overwrite() -> Result<(), Error> {
        let config = GraphConfig {
            dpi: Some(40.),
            ..GraphConfig::default().with_output("target/render_overwrite.png")
        };
        std::fs::write(&config.output, b"stale").unwrap();
        let growth = evaluate(samples(&config));
        render(&growth, &config)?;
        let bytes = std::fs::read(&config.output).unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
        Ok(())
    }
}
