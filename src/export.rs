//! Chart Export Module
//! Writes the current charts as PNG images or as one JSON document.

use crate::charts::{RenderError, ScatterChart, StaticChartRenderer};
use crate::pipeline::DashboardConfig;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Render(#[from] RenderError),
    #[error("No charts to export")]
    NothingToExport,
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    config: &'a DashboardConfig,
    charts: &'a [ScatterChart],
}

pub struct ChartExporter;

impl ChartExporter {
    /// Render every chart to `dir/chart_<n>.png`. Returns the written paths.
    pub fn export_png(charts: &[ScatterChart], dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
        if charts.is_empty() {
            return Err(ExportError::NothingToExport);
        }
        fs::create_dir_all(dir)?;

        let mut written = Vec::with_capacity(charts.len());
        for (idx, chart) in charts.iter().enumerate() {
            let path = dir.join(Self::png_file_name(idx));
            StaticChartRenderer::render_png(chart, &path)?;
            written.push(path);
        }

        info!(dir = %dir.display(), files = written.len(), "charts exported as PNG");
        Ok(written)
    }

    /// Write the charts together with the toggles that produced them.
    pub fn export_json(
        charts: &[ScatterChart],
        config: &DashboardConfig,
        path: &Path,
    ) -> Result<(), ExportError> {
        if charts.is_empty() {
            return Err(ExportError::NothingToExport);
        }

        let document = ExportDocument { config, charts };
        fs::write(path, serde_json::to_string_pretty(&document)?)?;

        info!(path = %path.display(), charts = charts.len(), "charts exported as JSON");
        Ok(())
    }

    fn png_file_name(idx: usize) -> String {
        format!("chart_{}.png", idx + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{render, RenderOutcome};
    use polars::prelude::*;

    fn charts() -> Vec<ScatterChart> {
        let source = df!(
            "Country" => ["Denmark", "Sweden"],
            "BA_or_eq_2013" => [2.0, 3.0],
            "BA_or_eq_2022" => [3.0, 3.5],
            "MA_or_eq_2013" => [10.0, 20.0],
            "MA_or_eq_2022" => [15.0, 18.0],
            "DOC_or_eq_2013" => [30.0, 35.0],
            "DOC_or_eq_2022" => [40.0, 38.0],
            "ALL_TER_2013" => [5.0, 6.0],
            "ALL_TER_2022" => [6.0, 9.0]
        )
        .unwrap();

        match render(&source, &DashboardConfig::default()).unwrap() {
            RenderOutcome::Charts(rendered) => rendered.charts,
            RenderOutcome::NothingSelected => panic!("expected charts"),
        }
    }

    #[test]
    fn json_export_contains_config_and_charts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("charts.json");

        ChartExporter::export_json(&charts(), &DashboardConfig::default(), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["charts"].as_array().unwrap().len(), 4);
        assert_eq!(value["config"]["regions"]["show_nordic"], true);
        assert_eq!(value["charts"][0]["points"][0]["country"], "Denmark");
        assert_eq!(value["charts"][0]["points"][0]["highlight"], "home");
        assert_eq!(value["charts"][3]["reference_x"], 0.0);
    }

    #[test]
    fn png_export_writes_one_file_per_chart() {
        let dir = tempfile::tempdir().unwrap();

        let written = ChartExporter::export_png(&charts(), dir.path()).unwrap();

        assert_eq!(written.len(), 4);
        for (idx, path) in written.iter().enumerate() {
            assert_eq!(path, &dir.path().join(format!("chart_{}.png", idx + 1)));
            assert!(fs::metadata(path).unwrap().len() > 0);
        }
    }

    #[test]
    fn empty_export_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = ChartExporter::export_png(&[], dir.path()).unwrap_err();
        assert!(matches!(err, ExportError::NothingToExport));

        let err = ChartExporter::export_json(&[], &DashboardConfig::default(), &dir.path().join("x.json"))
            .unwrap_err();
        assert!(matches!(err, ExportError::NothingToExport));
    }

    #[test]
    fn png_names_are_numbered_from_one() {
        assert_eq!(ChartExporter::png_file_name(0), "chart_1.png");
        assert_eq!(ChartExporter::png_file_name(3), "chart_4.png");
    }
}
