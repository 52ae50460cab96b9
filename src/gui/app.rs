//! Dashboard Main Application
//! Main window with control panel and chart viewer.

use crate::data::DataLoader;
use crate::export::ChartExporter;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::pipeline::{self, DashboardConfig, RenderOutcome};
use anyhow::Context;
use egui::SidePanel;
use std::path::Path;
use tracing::{error, warn};

/// Main application window.
pub struct DashboardApp {
    loader: DataLoader,
    config: DashboardConfig,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, dataset: &Path) -> Self {
        let mut app = Self {
            loader: DataLoader::new(),
            config: DashboardConfig::default(),
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(),
        };
        app.load_dataset(dataset);
        app
    }

    /// Load a dataset and render it. A failed load leaves no charts on screen.
    fn load_dataset(&mut self, path: &Path) {
        self.chart_viewer.clear();
        self.control_panel.dataset_path = Some(path.to_path_buf());

        let loaded = self.loader.load(path).map(|_| ());
        match loaded {
            Ok(()) => self.render(),
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to load dataset");
                self.control_panel.set_status(format!("Error: {}", e));
                self.chart_viewer.set_error(e.to_string());
            }
        }

        self.control_panel.export_enabled = !self.chart_viewer.charts().is_empty();
    }

    /// Re-run the pipeline with the current toggles.
    fn render(&mut self) {
        let Some(source) = self.loader.get_dataframe() else {
            return;
        };

        match pipeline::render(source, &self.config) {
            Ok(RenderOutcome::Charts(rendered)) => {
                self.control_panel.set_status(format!(
                    "Showing {} of {} countries",
                    rendered.table.height(),
                    self.loader.get_row_count()
                ));
                self.chart_viewer.set_charts(rendered.charts);
            }
            Ok(RenderOutcome::NothingSelected) => {
                self.control_panel.set_status("No category selected");
                self.chart_viewer.set_nothing_selected();
            }
            Err(e) => {
                error!(error = %e, "render failed");
                self.control_panel.set_status(format!("Error: {}", e));
                self.chart_viewer.set_error(e.to_string());
            }
        }

        self.control_panel.export_enabled = !self.chart_viewer.charts().is_empty();
    }

    fn handle_browse(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Spreadsheets", &["xlsx", "xls", "ods", "csv"])
            .pick_file()
        {
            self.load_dataset(&path);
        }
    }

    fn handle_export_png(&mut self) {
        let Some(dir) = rfd::FileDialog::new().pick_folder() else {
            return;
        };

        match self.export_png(&dir) {
            Ok(count) => {
                self.control_panel
                    .set_status(format!("Exported {} charts to {}", count, dir.display()));
                if let Err(e) = open::that(&dir) {
                    warn!(error = %e, "could not open export folder");
                }
            }
            Err(e) => {
                error!(error = %e, "PNG export failed");
                self.control_panel.set_status(format!("Error: {:#}", e));
            }
        }
    }

    fn export_png(&self, dir: &Path) -> anyhow::Result<usize> {
        let written = ChartExporter::export_png(self.chart_viewer.charts(), dir)
            .with_context(|| format!("exporting charts to {}", dir.display()))?;
        Ok(written.len())
    }

    fn handle_export_json(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("charts.json")
            .save_file()
        else {
            return;
        };

        let result = ChartExporter::export_json(self.chart_viewer.charts(), &self.config, &path)
            .with_context(|| format!("writing {}", path.display()));

        match result {
            Ok(()) => {
                self.control_panel
                    .set_status(format!("Exported {}", path.display()));
            }
            Err(e) => {
                error!(error = %e, "JSON export failed");
                self.control_panel.set_status(format!("Error: {:#}", e));
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui, &mut self.config);

                    match action {
                        ControlPanelAction::BrowseFile => self.handle_browse(),
                        ControlPanelAction::TogglesChanged => self.render(),
                        ControlPanelAction::ExportPng => self.handle_export_png(),
                        ControlPanelAction::ExportJson => self.handle_export_json(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui, &self.config.groups);
        });
    }
}
