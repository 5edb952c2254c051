//! Refline - Reference Line Chart Viewer
//!
//! A Rust application that displays the moment/force reference diagonal as
//! an interactive line chart in a native window.

mod charts;
mod data;
mod gui;

use eframe::egui;
use gui::ReflineApp;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting refline");

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 480.0])
            .with_min_inner_size([320.0, 240.0])
            .with_title("Refline"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Refline",
        options,
        Box::new(|cc| Ok(Box::new(ReflineApp::new(cc)?))),
    )
}
