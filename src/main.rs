//! Chartsmith - Chart Authoring Studio
//!
//! Configure, preview and export bar, line, area, pie and scatter charts.

mod charts;
mod color;
mod export;
mod gui;
mod layout;
mod model;

use eframe::egui;
use gui::ChartsmithApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 860.0])
            .with_min_inner_size([1200.0, 700.0])
            .with_title("Chartsmith"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Chartsmith",
        options,
        Box::new(|cc| Ok(Box::new(ChartsmithApp::new(cc)))),
    )
}
