/// UI layer: panels (menu bar, selectors, output) and the scatter plot.
pub mod panels;
pub mod plot;
