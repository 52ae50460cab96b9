//! International students in Denmark - an OECD perspective
//!
//! Desktop dashboard of the Education at a Glance 2024 (B4) shares of
//! international students, 2013 vs 2022.

mod charts;
mod data;
mod export;
mod gui;
mod pipeline;

use eframe::egui;
use gui::DashboardApp;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Dataset loaded at startup, relative to the working directory.
const DEFAULT_DATASET: &str = "masters.xlsx";

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1100.0, 700.0])
            .with_title("International Students - OECD"),
        ..Default::default()
    };

    let dataset = PathBuf::from(DEFAULT_DATASET);

    // Run the application
    eframe::run_native(
        "International Students",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, &dataset)))),
    )
}
