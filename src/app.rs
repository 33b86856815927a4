use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct DfBrowseApp {
    pub state: AppState,
}

impl eframe::App for DfBrowseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar + selection status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Selector row: x/y variable dropdowns + reverse toggles ----
        egui::TopBottomPanel::top("selector_row").show(ctx, |ui| {
            panels::selector_row(ui, &mut self.state);
        });

        // ---- Bottom panel: captured callback output ----
        egui::TopBottomPanel::bottom("output_panel")
            .resizable(true)
            .default_height(120.0)
            .show(ctx, |ui| {
                panels::output_panel(ui, &mut self.state);
            });

        // ---- Central panel: scatter plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scatter_plot(ui, &mut self.state);
        });
    }
}
