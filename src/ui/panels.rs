use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(browser) = &state.browser {
            let name = state.source_name.as_deref().unwrap_or("dataset");
            ui.label(format!(
                "{name}: {} rows, {} numeric columns",
                browser.dataset().len(),
                browser.columns().len()
            ));
            ui.separator();
            ui.label(browser.status_text());
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Selector row – x/y variable dropdowns and reverse checkboxes
// ---------------------------------------------------------------------------

/// Render the axis-variable selectors.  Changing a dropdown reconfigures
/// the plot; the checkboxes request a display direction per axis.
pub fn selector_row(ui: &mut Ui, state: &mut AppState) {
    let Some(browser) = &mut state.browser else {
        ui.label("No dataset loaded.");
        return;
    };

    let columns = browser.columns().to_vec();
    let mut error: Option<String> = None;

    ui.horizontal(|ui: &mut Ui| {
        ui.label("x var:");
        let current_x = browser.x_column().to_string();
        egui::ComboBox::from_id_salt("x_var")
            .selected_text(&current_x)
            .show_ui(ui, |ui: &mut Ui| {
                for col in &columns {
                    if ui.selectable_label(current_x == *col, col).clicked() {
                        if let Err(e) = browser.set_x_column(col) {
                            error = Some(format!("Error: {e}"));
                        }
                    }
                }
            });

        let mut x_rev = browser.x_reversed();
        if ui.checkbox(&mut x_rev, "reverse").changed() {
            browser.set_x_reversed(x_rev);
        }

        ui.separator();

        ui.label("y var:");
        let current_y = browser.y_column().to_string();
        egui::ComboBox::from_id_salt("y_var")
            .selected_text(&current_y)
            .show_ui(ui, |ui: &mut Ui| {
                for col in &columns {
                    if ui.selectable_label(current_y == *col, col).clicked() {
                        if let Err(e) = browser.set_y_column(col) {
                            error = Some(format!("Error: {e}"));
                        }
                    }
                }
            });

        let mut y_rev = browser.y_reversed();
        if ui.checkbox(&mut y_rev, "reverse").changed() {
            browser.set_y_reversed(y_rev);
        }

        ui.separator();

        if ui.button("Reset view").clicked() {
            browser.replot();
        }
    });

    if error.is_some() {
        state.status_message = error;
    }
}

// ---------------------------------------------------------------------------
// Output panel – captured callback output
// ---------------------------------------------------------------------------

/// Render the captured-output area below the plot.
pub fn output_panel(ui: &mut Ui, state: &mut AppState) {
    let Some(browser) = &mut state.browser else {
        return;
    };

    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Output");
        if ui.small_button("Clear").clicked() {
            browser.clear_output();
        }
    });

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui: &mut Ui| {
            for line in browser.output().lines() {
                ui.monospace(line);
            }
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open tabular data")
        .add_filter("Supported files", &["parquet", "pq", "json", "csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    dataset.len(),
                    dataset.column_names()
                );
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                state.set_dataset(dataset, name);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
