//! Render Pipeline
//! One render: derive changes, select regions, filter, colorize, build the four charts.

use crate::charts::{standard_views, ChartError, ScatterBuilder, ScatterChart};
use crate::data::{
    CountryGroups, DataProcessor, HighlightToggles, ProcessorError, RegionSelector, RegionToggles,
    Selection,
};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Processing failed: {0}")]
    Processor(#[from] ProcessorError),
    #[error("Chart failed: {0}")]
    Chart(#[from] ChartError),
}

/// Everything the user can toggle, passed explicitly into each render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub regions: RegionToggles,
    pub highlights: HighlightToggles,
    pub groups: CountryGroups,
}

/// Output of a successful render.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// Filtered table with derived and `Color` columns.
    pub table: DataFrame,
    pub charts: Vec<ScatterChart>,
}

#[derive(Debug, Clone)]
pub enum RenderOutcome {
    Charts(Rendered),
    /// No region checkbox is ticked. Nothing is computed.
    NothingSelected,
}

/// Run the full pipeline on the loaded source table.
///
/// The source is never modified; every call derives a fresh working table.
pub fn render(source: &DataFrame, config: &DashboardConfig) -> Result<RenderOutcome, PipelineError> {
    let derived = DataProcessor::add_change_columns(source)?;

    let table_countries = DataProcessor::countries(&derived)?;
    let selection = RegionSelector::select(
        config.regions,
        &config.groups,
        table_countries.iter().map(String::as_str),
    );

    let Selection::Countries(countries) = selection else {
        info!("no region selected");
        return Ok(RenderOutcome::NothingSelected);
    };

    let filtered = DataProcessor::filter_countries(&derived, &countries)?;
    let table = DataProcessor::assign_colors(&filtered, config.highlights)?;
    debug!(
        selected = countries.len(),
        rows = table.height(),
        "table filtered"
    );

    let charts = standard_views()
        .iter()
        .map(|view| ScatterBuilder::build(&table, view))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        rows = table.height(),
        charts = charts.len(),
        "render complete"
    );

    Ok(RenderOutcome::Charts(Rendered { table, charts }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::columns::{CHANGE_MA, COLOR};
    use crate::data::Highlight;

    fn source() -> DataFrame {
        df!(
            "Country" => ["Denmark", "Sweden", "Germany", "Norway", "OECD total"],
            "BA_or_eq_2013" => [2.0, 3.0, 4.0, 1.0, 5.0],
            "BA_or_eq_2022" => [3.0, 3.5, 5.0, 1.5, 6.0],
            "MA_or_eq_2013" => [Some(10.0), Some(20.0), Some(12.0), Some(0.0), Some(14.0)],
            "MA_or_eq_2022" => [Some(15.0), Some(18.0), Some(13.0), Some(4.0), None],
            "DOC_or_eq_2013" => [30.0, 35.0, 10.0, 20.0, 22.0],
            "DOC_or_eq_2022" => [40.0, 38.0, 12.0, 25.0, 24.0],
            "ALL_TER_2013" => [5.0, 6.0, 8.0, 3.0, 6.0],
            "ALL_TER_2022" => [6.0, 9.0, 11.0, 3.5, 7.0]
        )
        .unwrap()
    }

    fn charts(outcome: RenderOutcome) -> Rendered {
        match outcome {
            RenderOutcome::Charts(rendered) => rendered,
            RenderOutcome::NothingSelected => panic!("expected charts"),
        }
    }

    #[test]
    fn nordic_scenario() {
        let rendered = charts(render(&source(), &DashboardConfig::default()).unwrap());

        let countries = DataProcessor::countries(&rendered.table).unwrap();
        assert_eq!(countries, vec!["Denmark", "Sweden", "Norway"]);

        let change = DataProcessor::numeric_column(&rendered.table, CHANGE_MA).unwrap();
        assert_eq!(change, vec![Some(50.0), Some(-10.0), None]);

        let colors = DataProcessor::text_column(&rendered.table, COLOR).unwrap();
        assert_eq!(colors[0].as_deref(), Some("red"));
        assert_eq!(colors[1].as_deref(), Some("orange"));

        assert_eq!(rendered.charts.len(), 4);
        // Norway has no master's change and drops out of the first chart only.
        let masters = &rendered.charts[0];
        assert_eq!(masters.points.len(), 2);
        assert_eq!(masters.points[0].highlight, Highlight::Home);
        assert_eq!(masters.points[0].x, 50.0);
        assert_eq!(rendered.charts[1].points.len(), 3);
    }

    #[test]
    fn nothing_selected_builds_no_charts() {
        let config = DashboardConfig {
            regions: RegionToggles {
                show_nordic: false,
                show_western: false,
                show_oecd: false,
                show_all: false,
            },
            ..Default::default()
        };
        let outcome = render(&source(), &config).unwrap();
        assert!(matches!(outcome, RenderOutcome::NothingSelected));
    }

    #[test]
    fn show_all_keeps_every_row() {
        let mut config = DashboardConfig::default();
        config.regions.show_all = true;
        config.highlights.oecd_eu = true;

        let rendered = charts(render(&source(), &config).unwrap());
        assert_eq!(rendered.table.height(), source().height());

        let totals = rendered.charts[1]
            .points
            .iter()
            .find(|p| p.country == "OECD total")
            .unwrap();
        assert_eq!(totals.highlight, Highlight::OecdEu);
    }

    #[test]
    fn render_is_deterministic() {
        let mut config = DashboardConfig::default();
        config.regions.show_western = true;
        let src = source();

        let first = charts(render(&src, &config).unwrap());
        let second = charts(render(&src, &config).unwrap());

        assert!(first.table.equals_missing(&second.table));
        assert_eq!(first.charts, second.charts);
        assert_eq!(
            serde_json::to_string(&first.charts).unwrap(),
            serde_json::to_string(&second.charts).unwrap()
        );
    }

    #[test]
    fn source_table_is_untouched() {
        let src = source();
        let width = src.width();
        render(&src, &DashboardConfig::default()).unwrap();
        assert_eq!(src.width(), width);
    }

    #[test]
    fn missing_source_column_fails() {
        let src = source().drop("ALL_TER_2013").unwrap();
        assert!(render(&src, &DashboardConfig::default()).is_err());
    }
}
