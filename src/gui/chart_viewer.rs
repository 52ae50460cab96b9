//! Chart Viewer Widget
//! Central scrollable panel with the page text and the four scatter charts.

use crate::charts::{ChartPlotter, ScatterChart};
use crate::data::CountryGroups;
use egui::{Color32, RichText, ScrollArea};

const CHART_SPACING: f32 = 15.0;
const CHART_HEIGHT: f32 = 450.0;

const INTRODUCTION: &str = "This page visualizes data from the report Education at a Glance 2024 \
(OECD) on international students in Denmark compared with other OECD countries, at master's and \
bachelor's level and for all tertiary education combined.";

const GUIDE: [&str; 4] = [
    "1. Choose the regions to show on the charts with the checkboxes in the left panel.",
    "2. Highlight Norway, Sweden and the OECD/EU25 totals with the highlight options.",
    "3. Denmark is shown in red on every chart.",
    "4. Hover over a country's marker to see the underlying data.",
];

const SOURCE_NOTE: &str = "Data source: OECD (2024), Chapter B4 Tables (p. 242), Education at a \
Glance 2024, and OECD Data Explorer via StatLink (p. 242), accessed 26 September 2024.";

const LEVEL_VIEW_NOTE: &str = "Finally, the share of international students at master's and \
bachelor's level in 2022 on its own. Note that the axes differ from the other charts on this page.";

/// What the central panel currently shows.
#[derive(Debug, Clone, Default)]
pub enum ViewerState {
    #[default]
    Empty,
    /// Fatal load or render failure; no charts are shown.
    Error(String),
    NothingSelected,
    Charts(Vec<ScatterChart>),
}

/// Scrollable page with the dashboard charts.
#[derive(Default)]
pub struct ChartViewer {
    pub state: ViewerState,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.state = ViewerState::Empty;
    }

    pub fn set_charts(&mut self, charts: Vec<ScatterChart>) {
        self.state = ViewerState::Charts(charts);
    }

    pub fn set_nothing_selected(&mut self) {
        self.state = ViewerState::NothingSelected;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.state = ViewerState::Error(message.into());
    }

    /// Charts currently on screen.
    pub fn charts(&self) -> &[ScatterChart] {
        match &self.state {
            ViewerState::Charts(charts) => charts.as_slice(),
            _ => &[],
        }
    }

    /// Draw the page.
    pub fn show(&self, ui: &mut egui::Ui, groups: &CountryGroups) {
        if let ViewerState::Error(message) = &self.state {
            ui.centered_and_justified(|ui| {
                ui.label(
                    RichText::new(format!("⚠ {message}"))
                        .size(18.0)
                        .color(Color32::from_rgb(220, 53, 69)),
                );
            });
            return;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Self::draw_header(ui);

                match &self.state {
                    ViewerState::Empty => {
                        ui.label(RichText::new("No Data").size(20.0));
                    }
                    ViewerState::NothingSelected => {
                        ui.label(
                            RichText::new("⚠ Select at least one category in the left panel.")
                                .size(16.0)
                                .color(Color32::from_rgb(255, 165, 0)),
                        );
                    }
                    ViewerState::Charts(charts) => Self::draw_charts(ui, charts),
                    ViewerState::Error(_) => {}
                }

                ui.add_space(CHART_SPACING);
                Self::draw_groups_note(ui, groups);
            });
    }

    fn draw_header(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("International students in Denmark - an OECD perspective")
                    .size(24.0)
                    .strong(),
            );
        });
        ui.add_space(8.0);
        ui.label(INTRODUCTION);
        ui.add_space(6.0);
        ui.label(RichText::new("How to use this page:").strong());
        for step in GUIDE {
            ui.label(step);
        }
        ui.add_space(6.0);
        ui.label(RichText::new(SOURCE_NOTE).strong());
        ui.add_space(CHART_SPACING);
    }

    fn draw_charts(ui: &mut egui::Ui, charts: &[ScatterChart]) {
        for (idx, chart) in charts.iter().enumerate() {
            if chart.level_view {
                ui.label(RichText::new(LEVEL_VIEW_NOTE).strong());
                ui.add_space(6.0);
            }

            egui::Frame::none()
                .rounding(8.0)
                .fill(ui.visuals().widgets.noninteractive.bg_fill)
                .inner_margin(12.0)
                .show(ui, |ui| {
                    ChartPlotter::draw_scatter_chart(ui, chart, idx, CHART_HEIGHT);
                });
            ui.add_space(CHART_SPACING);
        }
    }

    fn draw_groups_note(ui: &mut egui::Ui, groups: &CountryGroups) {
        ui.label(RichText::new("Country groups on this page:").size(12.0).strong());
        for (name, members) in [
            ("Nordic countries", &groups.nordic),
            ("Western European countries", &groups.western),
            ("OECD countries", &groups.oecd),
        ] {
            ui.label(RichText::new(format!("- {name}: {}", members.join(", "))).size(12.0));
        }
    }
}
