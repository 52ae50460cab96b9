//! Static Chart Renderer
//! Renders a scatter chart specification to a PNG file with plotters.
//!
//! Layout matches the window:
//! 1. Centered title
//! 2. Dashed vertical reference line at x = 0, full plot height
//! 3. One marker per country, name above the marker, no legend

use crate::charts::ScatterChart;
use crate::data::Highlight;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;
use std::path::Path;
use thiserror::Error;

// Fraction of the data span added on each side of the axes
const AXIS_PADDING: f64 = 0.08;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Chart drawing failed: {0}")]
    Drawing(String),
}

fn drawing_error<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Drawing(err.to_string())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render `chart` at its own canvas size to `path`.
    pub fn render_png(chart: &ScatterChart, path: &Path) -> Result<(), RenderError> {
        let root = BitMapBackend::new(path, (chart.width, chart.height)).into_drawing_area();
        root.fill(&WHITE).map_err(drawing_error)?;

        let (x_range, y_range) = Self::axis_ranges(chart);

        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, ("sans-serif", 26))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d(x_range, y_range.clone())
            .map_err(drawing_error)?;

        ctx.configure_mesh()
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .label_style(("sans-serif", 14))
            .draw()
            .map_err(drawing_error)?;

        ctx.draw_series(DashedLineSeries::new(
            vec![
                (chart.reference_x, y_range.start),
                (chart.reference_x, y_range.end),
            ],
            10,
            6,
            BLACK.stroke_width(2),
        ))
        .map_err(drawing_error)?;

        let radius = (chart.marker_size / 2.0).round() as i32;
        let label_style = TextStyle::from(("sans-serif", 14).into_font())
            .pos(Pos::new(HPos::Center, VPos::Bottom));

        ctx.draw_series(chart.points.iter().map(|p| {
            let color = Self::marker_color(p.highlight).mix(chart.marker_opacity as f64);
            EmptyElement::at((p.x, p.y))
                + Circle::new((0, 0), radius, color.filled())
                + Text::new(p.country.clone(), (0, -radius - 2), label_style.clone())
        }))
        .map_err(drawing_error)?;

        root.present().map_err(drawing_error)?;
        Ok(())
    }

    fn marker_color(highlight: Highlight) -> RGBColor {
        let (r, g, b) = highlight.rgb();
        RGBColor(r, g, b)
    }

    /// Padded axis ranges. An empty chart gets a unit box around the reference line.
    fn axis_ranges(chart: &ScatterChart) -> (Range<f64>, Range<f64>) {
        let Some((x, y)) = chart.bounds() else {
            let x0 = chart.reference_x;
            return (x0 - 1.0..x0 + 1.0, 0.0..1.0);
        };
        (Self::pad(x), Self::pad(y))
    }

    fn pad([min, max]: [f64; 2]) -> Range<f64> {
        let span = max - min;
        let pad = if span > 0.0 {
            span * AXIS_PADDING
        } else {
            1.0
        };
        (min - pad)..(max + pad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::scatter::{
        ScatterPoint, CHART_HEIGHT, CHART_WIDTH, MARKER_OPACITY, MARKER_SIZE,
    };

    fn chart(points: &[(f64, f64)]) -> ScatterChart {
        ScatterChart {
            title: "t".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            points: points
                .iter()
                .map(|&(x, y)| ScatterPoint {
                    country: "Denmark".to_string(),
                    x,
                    y,
                    highlight: Highlight::Home,
                    hover: Vec::new(),
                })
                .collect(),
            reference_x: 0.0,
            show_legend: false,
            marker_size: MARKER_SIZE,
            marker_opacity: MARKER_OPACITY,
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            level_view: false,
        }
    }

    #[test]
    fn ranges_cover_points_and_zero() {
        let (x, y) = StaticChartRenderer::axis_ranges(&chart(&[(10.0, 2.0), (20.0, 4.0)]));
        assert!(x.start < 0.0 && x.end > 20.0);
        assert!(y.start < 2.0 && y.end > 4.0);
    }

    #[test]
    fn empty_chart_has_usable_ranges() {
        let (x, y) = StaticChartRenderer::axis_ranges(&chart(&[]));
        assert_eq!(x, -1.0..1.0);
        assert_eq!(y, 0.0..1.0);
    }

    #[test]
    fn single_value_axis_is_widened() {
        let (_, y) = StaticChartRenderer::axis_ranges(&chart(&[(5.0, 3.0)]));
        assert_eq!(y, 2.0..4.0);
    }
}
