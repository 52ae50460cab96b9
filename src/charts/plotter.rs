//! Chart Plotter Module
//! Draws scatter chart specifications interactively using egui_plot.

use crate::charts::ScatterChart;
use crate::data::Highlight;
use egui::{Align2, Color32, RichText};
use egui_plot::{LineStyle, Plot, PlotPoint, Points, Text, VLine};
use std::collections::HashMap;

/// Marker color for a highlight category
pub fn highlight_color(highlight: Highlight) -> Color32 {
    let (r, g, b) = highlight.rgb();
    Color32::from_rgb(r, g, b)
}

/// Draws scatter charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw one scatter chart. Each country is its own series so the hover
    /// label can look up the country's tooltip by series name.
    pub fn draw_scatter_chart(ui: &mut egui::Ui, chart: &ScatterChart, id: usize, height: f32) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&chart.title).size(16.0).strong());
        });
        ui.add_space(4.0);

        let tooltips: HashMap<String, String> = chart
            .points
            .iter()
            .map(|p| (p.country.clone(), p.hover_text()))
            .collect();

        let reference_x = chart.reference_x;
        let radius = chart.marker_size / 2.0;
        let text_color = ui.visuals().text_color();

        Plot::new(format!("scatter_{id}"))
            .height(height)
            .x_axis_label(chart.x_label.clone())
            .y_axis_label(chart.y_label.clone())
            .include_x(reference_x)
            .allow_scroll(false)
            .label_formatter(move |name, _value| {
                tooltips.get(name).cloned().unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.vline(
                    VLine::new(reference_x)
                        .color(Color32::BLACK)
                        .width(2.0)
                        .style(LineStyle::dashed_loose()),
                );

                for point in &chart.points {
                    let color = highlight_color(point.highlight).gamma_multiply(chart.marker_opacity);

                    plot_ui.points(
                        Points::new(vec![[point.x, point.y]])
                            .radius(radius)
                            .color(color)
                            .name(&point.country),
                    );

                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(point.x, point.y),
                            RichText::new(&point.country).size(11.0),
                        )
                        .anchor(Align2::CENTER_BOTTOM)
                        .color(text_color),
                    );
                }
            });
    }
}
