use std::sync::Arc;

use crate::browse::Browser;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Selection controller (None until a dataset is loaded).
    pub browser: Option<Browser>,

    /// File name of the loaded dataset, for the top bar.
    pub source_name: Option<String>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly loaded dataset and wire up the default callback,
    /// which echoes each selected row into the output panel.
    pub fn set_dataset(&mut self, dataset: Dataset, source_name: String) {
        match Browser::new(Arc::new(dataset)) {
            Ok(mut browser) => {
                browser.set_callback(|row, out| {
                    out.push(row.to_string());
                    Ok(())
                });
                self.browser = Some(browser);
                self.source_name = Some(source_name);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Cannot browse dataset: {e}");
                self.browser = None;
                self.source_name = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
