//! Static Chart Renderer
//! Renders a composed figure to a PNG file with plotters, mirroring the
//! interactive view: white background, light-gray grid, markers + lines,
//! legend entries for series only.

use anyhow::{Context, Result};
use plotters::prelude::*;
use std::path::Path;

use crate::charts::figure::{Element, Figure, Rgb};

pub const EXPORT_WIDTH: u32 = 1200;
pub const EXPORT_HEIGHT: u32 = 620;

const GRID: RGBColor = RGBColor(211, 211, 211);

fn rgb_color(c: Rgb) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

/// Axis ranges padded so boundary markers are not clipped. Empty figures
/// fall back to a unit range and still get title and axes.
fn padded_bounds(figure: &Figure) -> ((f64, f64), (f64, f64)) {
    let ((x_min, x_max), (y_min, y_max)) =
        figure.bounds().unwrap_or(((0.0, 1.0), (0.0, 1.0)));
    let x_pad = ((x_max - x_min) * 0.02).max(0.5);
    let y_pad = ((y_max - y_min) * 0.05).max(0.1);
    ((x_min - x_pad, x_max + x_pad), (y_min - y_pad, y_max + y_pad))
}

pub fn render_png(figure: &Figure, path: &Path) -> Result<()> {
    render_png_sized(figure, path, EXPORT_WIDTH, EXPORT_HEIGHT)
}

pub fn render_png_sized(figure: &Figure, path: &Path, width: u32, height: u32) -> Result<()> {
    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let ((x_min, x_max), (y_min, y_max)) = padded_bounds(figure);

    let mut chart = ChartBuilder::on(&root)
        .caption(&figure.title, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(42)
        .y_label_area_size(52)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(figure.x_label.as_str())
        .y_desc(figure.y_label.as_str())
        .light_line_style(GRID.mix(0.4))
        .bold_line_style(GRID)
        .x_label_formatter(&|x| format!("{x:.0}"))
        .draw()?;

    for element in &figure.elements {
        match element {
            Element::Series(series) => {
                let color = rgb_color(series.color);
                let points: Vec<(f64, f64)> = series
                    .points
                    .iter()
                    .map(|&(year, value)| (year as f64, value))
                    .collect();
                chart
                    .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?
                    .label(series.name.clone())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
                    });
                chart.draw_series(
                    points.iter().map(|&p| Circle::new(p, 3, color.filled())),
                )?;
            }
            Element::Connector(connector) => {
                let color = rgb_color(connector.color);
                let stroke = (connector.width.round() as u32).max(1);
                let points = vec![
                    (connector.from.0 as f64, connector.from.1),
                    (connector.to.0 as f64, connector.to.1),
                ];
                chart.draw_series(LineSeries::new(points, color.stroke_width(stroke)))?;
            }
        }
    }

    if figure.series().next().is_some() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .border_style(BLACK)
            .background_style(WHITE.mix(0.85))
            .draw()?;
    }

    root.present()
        .with_context(|| format!("failed to write chart image to {}", path.display()))?;
    Ok(())
}
