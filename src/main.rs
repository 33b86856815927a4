mod app;
mod browse;
mod data;
mod state;
mod ui;

use app::DfBrowseApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([500.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "DFBrowse – Scatter Row Browser",
        options,
        Box::new(|_cc| Ok(Box::new(DfBrowseApp::default()))),
    )
}
