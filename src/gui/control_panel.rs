//! Control Panel Widget
//! Left side panel with the dataset picker, region and highlight checkboxes and export buttons.

use crate::pipeline::DashboardConfig;
use egui::{Checkbox, Color32, RichText};
use std::path::PathBuf;

/// Left side control panel.
pub struct ControlPanel {
    pub dataset_path: Option<PathBuf>,
    pub status: String,
    pub export_enabled: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            dataset_path: None,
            status: "Ready".to_string(),
            export_enabled: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the control panel. Toggle changes are written straight into `config`.
    pub fn show(&mut self, ui: &mut egui::Ui, config: &mut DashboardConfig) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🎓 International Students")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Education at a Glance 2024")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Dataset Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .dataset_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());

                    ui.label(RichText::new(&path_text).size(12.0));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = ControlPanelAction::BrowseFile;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Region Section =====
        ui.label(RichText::new("🌍 Select at least one category").size(14.0).strong());
        ui.add_space(5.0);

        let regions = &mut config.regions;
        // Nordic countries are always shown.
        ui.add_enabled(
            false,
            Checkbox::new(&mut regions.show_nordic, "Show Nordic countries"),
        );
        let mut changed = false;
        changed |= ui
            .checkbox(&mut regions.show_western, "Show selected Western European countries")
            .changed();
        changed |= ui
            .checkbox(&mut regions.show_oecd, "Show selected OECD countries")
            .changed();
        changed |= ui.checkbox(&mut regions.show_all, "Show all countries").changed();

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Highlight Section =====
        ui.label(RichText::new("🖍 Highlight specific countries").size(14.0).strong());
        ui.add_space(5.0);

        let highlights = &mut config.highlights;
        changed |= ui
            .checkbox(&mut highlights.scandinavia, "Highlight Norway & Sweden")
            .changed();
        changed |= ui
            .checkbox(&mut highlights.oecd_eu, "Highlight OECD & EU averages")
            .changed();

        if changed {
            action = ControlPanelAction::TogglesChanged;
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export Buttons =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.export_enabled, |ui| {
                let png_button = egui::Button::new(RichText::new("🖼 Export PNG").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(png_button).clicked() {
                    action = ControlPanelAction::ExportPng;
                }

                ui.add_space(8.0);

                let json_button = egui::Button::new(RichText::new("📄 Export JSON").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(json_button).clicked() {
                    action = ControlPanelAction::ExportJson;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Set status line
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseFile,
    TogglesChanged,
    ExportPng,
    ExportJson,
}
