//! Scatter Chart Module
//! Builds the scatter-plot specification shared by the window and the PNG export.

use crate::data::columns::{
    ALL_TER_2013, ALL_TER_2022, BA_2013, BA_2022, CHANGE_ALL_TER, CHANGE_BA, CHANGE_MA, COLOR,
    MA_2013, MA_2022,
};
use crate::data::{DataProcessor, Highlight, ProcessorError};
use polars::prelude::*;
use serde::Serialize;
use thiserror::Error;

/// Canvas size of exported charts
pub const CHART_WIDTH: u32 = 2000;
pub const CHART_HEIGHT: u32 = 600;
pub const MARKER_SIZE: f32 = 12.0;
pub const MARKER_OPACITY: f32 = 0.8;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Missing column: {0}")]
    MissingColumn(String),
}

impl From<ProcessorError> for ChartError {
    fn from(err: ProcessorError) -> Self {
        match err {
            ProcessorError::PolarsError(e) => ChartError::PolarsError(e),
            ProcessorError::MissingColumn(c) => ChartError::MissingColumn(c),
        }
    }
}

/// Column and label bindings for one chart.
#[derive(Debug, Clone)]
pub struct ScatterView {
    pub x_col: String,
    pub y_col: String,
    pub title: String,
    pub hover_first: String,
    pub hover_second: String,
    pub x_label: String,
    pub y_label: String,
    pub hover_first_label: String,
    pub hover_second_label: String,
    /// Both axes are 2022 levels rather than a change.
    pub level_view: bool,
}

const CHANGE_AXIS: &str = "Percentage change (2013-2022)";
const LEVEL_AXIS: &str = "Share of international students in 2022 (%)";
const HOVER_2013: &str = "Share of international students in 2013 (%)";
const HOVER_2022: &str = "Share of international students in 2022 (%)";

impl ScatterView {
    /// "Change vs level" binding: x is the change column, y the 2022 share.
    fn change_vs_level(level: &str, change_col: &str, col_2013: &str, col_2022: &str) -> Self {
        Self {
            x_col: change_col.to_string(),
            y_col: col_2022.to_string(),
            title: format!("International students ({level}): change (2013-2022) vs level in 2022"),
            hover_first: col_2013.to_string(),
            hover_second: col_2022.to_string(),
            x_label: CHANGE_AXIS.to_string(),
            y_label: LEVEL_AXIS.to_string(),
            hover_first_label: HOVER_2013.to_string(),
            hover_second_label: HOVER_2022.to_string(),
            level_view: false,
        }
    }
}

/// The four charts of the dashboard, in page order.
pub fn standard_views() -> Vec<ScatterView> {
    vec![
        ScatterView::change_vs_level("Master's programmes", CHANGE_MA, MA_2013, MA_2022),
        ScatterView::change_vs_level("Bachelor's programmes", CHANGE_BA, BA_2013, BA_2022),
        ScatterView::change_vs_level(
            "All tertiary education",
            CHANGE_ALL_TER,
            ALL_TER_2013,
            ALL_TER_2022,
        ),
        ScatterView {
            x_col: MA_2022.to_string(),
            y_col: BA_2022.to_string(),
            title: "Share of international students (Master's vs Bachelor's in 2022)".to_string(),
            hover_first: MA_2022.to_string(),
            hover_second: BA_2022.to_string(),
            x_label: "Share of international students in master's programmes (%)".to_string(),
            y_label: "Share of international students in bachelor's programmes (%)".to_string(),
            hover_first_label: "Share of international master's students in 2022 (%)".to_string(),
            hover_second_label: "Share of international bachelor's students in 2022 (%)"
                .to_string(),
            level_view: true,
        },
    ]
}

/// One tooltip line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverLine {
    pub label: String,
    pub value: f64,
}

impl HoverLine {
    pub fn text(&self) -> String {
        format!("{}: {:.1}", self.label, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub country: String,
    pub x: f64,
    pub y: f64,
    pub highlight: Highlight,
    pub hover: Vec<HoverLine>,
}

impl ScatterPoint {
    /// Tooltip text: country name, then one line per hover value.
    pub fn hover_text(&self) -> String {
        let mut text = self.country.clone();
        for line in &self.hover {
            text.push('\n');
            text.push_str(&line.text());
        }
        text
    }
}

/// Complete specification of one scatter plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
    /// Dashed vertical line spanning the full plot height.
    pub reference_x: f64,
    pub show_legend: bool,
    pub marker_size: f32,
    pub marker_opacity: f32,
    pub width: u32,
    pub height: u32,
    pub level_view: bool,
}

impl ScatterChart {
    /// Data bounds of the points, including the reference line.
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let first = self.points.first()?;
        let mut x = [first.x.min(self.reference_x), first.x.max(self.reference_x)];
        let mut y = [first.y, first.y];
        for p in &self.points {
            x = [x[0].min(p.x), x[1].max(p.x)];
            y = [y[0].min(p.y), y[1].max(p.y)];
        }
        Some((x, y))
    }
}

pub struct ScatterBuilder;

impl ScatterBuilder {
    /// Build a chart from a filtered, colorized table.
    ///
    /// Rows missing either coordinate are left out; missing hover values are
    /// left out of the tooltip.
    pub fn build(df: &DataFrame, view: &ScatterView) -> Result<ScatterChart, ChartError> {
        let countries = DataProcessor::countries(df)?;
        let colors = DataProcessor::text_column(df, COLOR)?;
        let xs = DataProcessor::numeric_column(df, &view.x_col)?;
        let ys = DataProcessor::numeric_column(df, &view.y_col)?;

        // A column listed twice is shown once, under its first label.
        let mut hover_cols: Vec<(&str, &str)> = Vec::new();
        for (col, label) in [
            (view.hover_first.as_str(), view.hover_first_label.as_str()),
            (view.hover_second.as_str(), view.hover_second_label.as_str()),
            (view.x_col.as_str(), view.x_label.as_str()),
        ] {
            if !hover_cols.iter().any(|(c, _)| *c == col) {
                hover_cols.push((col, label));
            }
        }
        let hover_values = hover_cols
            .iter()
            .map(|(col, _)| DataProcessor::numeric_column(df, col))
            .collect::<Result<Vec<_>, _>>()?;

        let mut points = Vec::new();
        for (row, country) in countries.into_iter().enumerate() {
            let (Some(x), Some(y)) = (xs[row], ys[row]) else {
                continue;
            };

            let highlight = colors[row]
                .as_deref()
                .and_then(Highlight::from_label)
                .unwrap_or(Highlight::Default);

            let hover = hover_cols
                .iter()
                .zip(&hover_values)
                .filter_map(|((_, label), values)| {
                    values[row].map(|value| HoverLine {
                        label: label.to_string(),
                        value,
                    })
                })
                .collect();

            points.push(ScatterPoint {
                country,
                x,
                y,
                highlight,
                hover,
            });
        }

        Ok(ScatterChart {
            title: view.title.clone(),
            x_label: view.x_label.clone(),
            y_label: view.y_label.clone(),
            points,
            reference_x: 0.0,
            show_legend: false,
            marker_size: MARKER_SIZE,
            marker_opacity: MARKER_OPACITY,
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            level_view: view.level_view,
        })
    }
}
