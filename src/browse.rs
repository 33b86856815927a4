use std::sync::Arc;

use thiserror::Error;

use crate::data::model::{Dataset, RowSnapshot};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum BrowseError {
    #[error("column '{0}' does not exist in the dataset")]
    UnknownColumn(String),

    #[error("column '{0}' is not numeric and cannot be plotted")]
    NotNumeric(String),

    #[error("dataset has {0} numeric column(s); at least two are required")]
    TooFewNumericColumns(usize),

    #[error("passing selected row to callback failed")]
    Callback(#[source] anyhow::Error),
}

// ---------------------------------------------------------------------------
// Captured output
// ---------------------------------------------------------------------------

/// Scoped output area for callback messages, shown below the plot.
#[derive(Debug, Default)]
pub struct OutputLog {
    lines: Vec<String>,
}

impl OutputLog {
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Invoked once per successful click with the freshly selected row.
/// Anything the callback wants to show goes through the output log.
pub type RowCallback = Box<dyn FnMut(&RowSnapshot, &mut OutputLog) -> anyhow::Result<()>>;

// ---------------------------------------------------------------------------
// Gesture state – one press-to-release pointer cycle
// ---------------------------------------------------------------------------

/// Click/drag gate.  A release only counts as a click when no motion
/// happened between press and release, so pan/zoom drags never select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Gesture {
    #[default]
    Idle,
    Pressed,
    PressedAndMoved,
}

// ---------------------------------------------------------------------------
// Axis limits
// ---------------------------------------------------------------------------

/// Visible limits of one axis in display order: `lower` is drawn at the
/// left/bottom edge, so `lower > upper` means the axis is reversed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLimits {
    pub lower: f64,
    pub upper: f64,
}

impl AxisLimits {
    /// Absolute difference between the visible limits.
    pub fn span(&self) -> f64 {
        (self.upper - self.lower).abs()
    }

    /// Current display direction, inferred from the sign of `upper - lower`.
    pub fn ascending(&self) -> bool {
        self.upper - self.lower > 0.0
    }

    fn flip(&mut self) {
        std::mem::swap(&mut self.lower, &mut self.upper);
    }
}

/// Ascending limits `[min − pad·range, max + pad·range]`, ignoring NaN.
/// A zero-range column is clamped to ±0.5 around the value; an all-NaN
/// column falls back to [0, 1].
fn padded_limits(values: &[f64], pad: f64) -> AxisLimits {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return AxisLimits {
            lower: 0.0,
            upper: 1.0,
        };
    }
    let range = max - min;
    if range == 0.0 {
        return AxisLimits {
            lower: min - 0.5,
            upper: max + 0.5,
        };
    }
    let p = range * pad;
    AxisLimits {
        lower: min - p,
        upper: max + p,
    }
}

// ---------------------------------------------------------------------------
// Browser – the selection controller
// ---------------------------------------------------------------------------

/// Fraction of the data range padded on each side of the axis limits.
pub const DEFAULT_PAD: f64 = 0.02;

/// Interactive scatter browser over a read-only [`Dataset`]: owns the axis
/// selection, the click/drag gate, nearest-point search, and the persistent
/// selection marker.  The UI layer feeds it pointer events and mirrors its
/// limits onto the plot.
pub struct Browser {
    dataset: Arc<Dataset>,
    /// Numeric columns offered in the axis selectors.
    columns: Vec<String>,

    x_col: String,
    y_col: String,
    x_reversed: bool,
    y_reversed: bool,

    /// Plotted coordinates for the current axis selection (NaN where null).
    xs: Vec<f64>,
    ys: Vec<f64>,
    x_limits: AxisLimits,
    y_limits: AxisLimits,
    pad: f64,
    /// Set when the UI must re-apply limits to the plot.
    view_dirty: bool,

    gesture: Gesture,
    selected_index: Option<usize>,
    selected_row: Option<RowSnapshot>,

    callback: Option<RowCallback>,
    output: OutputLog,
}

impl Browser {
    /// Browse the first two numeric columns of the dataset.
    pub fn new(dataset: Arc<Dataset>) -> Result<Self, BrowseError> {
        let numeric = dataset.numeric_columns();
        if numeric.len() < 2 {
            return Err(BrowseError::TooFewNumericColumns(numeric.len()));
        }
        let (x, y) = (numeric[0].clone(), numeric[1].clone());
        Self::with_columns(dataset, &x, &y)
    }

    /// Browse a specific column pair.  Fails fast on a missing or
    /// non-numeric column.
    pub fn with_columns(
        dataset: Arc<Dataset>,
        x_col: &str,
        y_col: &str,
    ) -> Result<Self, BrowseError> {
        for col in [x_col, y_col] {
            if dataset.column(col).is_none() {
                return Err(BrowseError::UnknownColumn(col.to_string()));
            }
            if !dataset.is_numeric(col) {
                return Err(BrowseError::NotNumeric(col.to_string()));
            }
        }

        let columns = dataset.numeric_columns();
        let mut browser = Browser {
            dataset,
            columns,
            x_col: x_col.to_string(),
            y_col: y_col.to_string(),
            x_reversed: false,
            y_reversed: false,
            xs: Vec::new(),
            ys: Vec::new(),
            x_limits: AxisLimits {
                lower: 0.0,
                upper: 1.0,
            },
            y_limits: AxisLimits {
                lower: 0.0,
                upper: 1.0,
            },
            pad: DEFAULT_PAD,
            view_dirty: true,
            gesture: Gesture::Idle,
            selected_index: None,
            selected_row: None,
            callback: None,
            output: OutputLog::default(),
        };
        browser.replot();
        Ok(browser)
    }

    // -- axis reconfiguration ------------------------------------------------

    /// Recompute plotted coordinates and axis limits from the current column
    /// selection, re-apply reversal flags, and flag the view for a bounds
    /// reset.  Also serves as the "reset view" (home) action.
    pub fn replot(&mut self) {
        self.xs = self.dataset.numeric_values(&self.x_col);
        self.ys = self.dataset.numeric_values(&self.y_col);
        self.x_limits = padded_limits(&self.xs, self.pad);
        self.y_limits = padded_limits(&self.ys, self.pad);
        self.apply_reversal();
        self.view_dirty = true;
    }

    pub fn set_x_column(&mut self, col: &str) -> Result<(), BrowseError> {
        self.validate_column(col)?;
        self.x_col = col.to_string();
        self.replot();
        Ok(())
    }

    pub fn set_y_column(&mut self, col: &str) -> Result<(), BrowseError> {
        self.validate_column(col)?;
        self.y_col = col.to_string();
        self.replot();
        Ok(())
    }

    fn validate_column(&self, col: &str) -> Result<(), BrowseError> {
        if self.dataset.column(col).is_none() {
            return Err(BrowseError::UnknownColumn(col.to_string()));
        }
        if !self.dataset.is_numeric(col) {
            return Err(BrowseError::NotNumeric(col.to_string()));
        }
        Ok(())
    }

    // -- axis reversal -------------------------------------------------------

    pub fn set_x_reversed(&mut self, reversed: bool) {
        self.x_reversed = reversed;
        self.apply_reversal();
        self.view_dirty = true;
    }

    pub fn set_y_reversed(&mut self, reversed: bool) {
        self.y_reversed = reversed;
        self.apply_reversal();
        self.view_dirty = true;
    }

    /// Invert an axis only when its current direction disagrees with the
    /// requested one, so repeated calls never double-invert.
    fn apply_reversal(&mut self) {
        if self.x_reversed == self.x_limits.ascending() {
            self.x_limits.flip();
        }
        if self.y_reversed == self.y_limits.ascending() {
            self.y_limits.flip();
        }
    }

    // -- view synchronization ------------------------------------------------

    /// Write pan/zoom changes from the plot back into the controller, so the
    /// reversal rule and nearest-point scales always see the live view.
    pub fn set_view_limits(&mut self, x: AxisLimits, y: AxisLimits) {
        self.x_limits = x;
        self.y_limits = y;
    }

    /// True once after each reconfiguration/reversal; the UI re-applies the
    /// stored limits to the plot on that frame.
    pub fn take_view_dirty(&mut self) -> bool {
        std::mem::take(&mut self.view_dirty)
    }

    // -- pointer gesture -----------------------------------------------------

    pub fn on_press(&mut self) {
        self.gesture = Gesture::Pressed;
    }

    pub fn on_move(&mut self) {
        if self.gesture == Gesture::Pressed {
            self.gesture = Gesture::PressedAndMoved;
        }
    }

    /// Finish a gesture.  `coords` are the release position in data space
    /// (`None` when released outside the plot area); `width`/`height` are the
    /// plot frame size in egui points.  Returns the newly selected row index
    /// when the gesture was a genuine click and a nearest point exists.
    ///
    /// A callback failure is reported as an error, but the selection commit
    /// has already happened by then and is not rolled back.
    pub fn on_release(
        &mut self,
        coords: Option<[f64; 2]>,
        width: f64,
        height: f64,
    ) -> Result<Option<usize>, BrowseError> {
        let was_click = self.gesture == Gesture::Pressed;
        self.gesture = Gesture::Idle;
        if !was_click {
            return Ok(None);
        }
        let Some([x, y]) = coords else {
            return Ok(None);
        };
        let Some(index) = self.nearest_point(x, y, width, height) else {
            // No finite candidate: leave the prior selection intact.
            return Ok(None);
        };
        self.commit_selection(index)?;
        Ok(Some(index))
    }

    // -- nearest-point lookup ------------------------------------------------

    /// Index of the point nearest to `(x, y)` in physical units, normalizing
    /// each axis by its data-units-per-point scale so the lookup is not
    /// biased toward the axis with the larger numeric range.  Rows with a
    /// non-finite plotted coordinate are never candidates.
    pub fn nearest_point(&self, x: f64, y: f64, width: f64, height: f64) -> Option<usize> {
        if !(width > 0.0 && height > 0.0) {
            return None;
        }
        let xscale = self.x_limits.span() / width;
        let yscale = self.y_limits.span() / height;
        if !(xscale.is_finite() && yscale.is_finite()) || xscale == 0.0 || yscale == 0.0 {
            return None;
        }

        let mut best: Option<(usize, f64)> = None;
        for (i, (&px, &py)) in self.xs.iter().zip(self.ys.iter()).enumerate() {
            let dx = (px - x) / xscale;
            let dy = (py - y) / yscale;
            let d2 = dx * dx + dy * dy;
            if !d2.is_finite() {
                continue;
            }
            if best.map_or(true, |(_, bd)| d2 < bd) {
                best = Some((i, d2));
            }
        }
        best.map(|(i, _)| i)
    }

    // -- selection commit ----------------------------------------------------

    fn commit_selection(&mut self, index: usize) -> Result<(), BrowseError> {
        let row = self.dataset.row(index);
        self.selected_index = Some(index);
        self.selected_row = Some(row.clone());
        log::debug!("selected row {index}");

        if let Some(cb) = self.callback.as_mut() {
            cb(&row, &mut self.output).map_err(BrowseError::Callback)?;
        }
        Ok(())
    }

    // -- callback & output ---------------------------------------------------

    pub fn set_callback(
        &mut self,
        f: impl FnMut(&RowSnapshot, &mut OutputLog) -> anyhow::Result<()> + 'static,
    ) {
        self.callback = Some(Box::new(f));
    }

    pub fn clear_callback(&mut self) {
        self.callback = None;
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    pub fn output(&self) -> &OutputLog {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut OutputLog {
        &mut self.output
    }

    // -- read-only surface ---------------------------------------------------

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Numeric columns offered in the axis selectors.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn x_column(&self) -> &str {
        &self.x_col
    }

    pub fn y_column(&self) -> &str {
        &self.y_col
    }

    pub fn x_reversed(&self) -> bool {
        self.x_reversed
    }

    pub fn y_reversed(&self) -> bool {
        self.y_reversed
    }

    pub fn x_limits(&self) -> AxisLimits {
        self.x_limits
    }

    pub fn y_limits(&self) -> AxisLimits {
        self.y_limits
    }

    /// Plotted coordinates of every row under the current axis selection.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.xs.iter().zip(self.ys.iter()).map(|(&x, &y)| [x, y])
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected_row(&self) -> Option<&RowSnapshot> {
        self.selected_row.as_ref()
    }

    /// Marker position for the selected row under the current axes, or
    /// `None` without a selection.  May be non-finite when the selected
    /// row has a null cell in a plotted column; the UI hides it then.
    pub fn marker_position(&self) -> Option<[f64; 2]> {
        let i = self.selected_index?;
        Some([
            self.xs.get(i).copied().unwrap_or(f64::NAN),
            self.ys.get(i).copied().unwrap_or(f64::NAN),
        ])
    }

    pub fn status_text(&self) -> String {
        match self.selected_index {
            Some(i) => format!("selected index: {i}"),
            None => "selected index: none".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn float_col(values: &[f64]) -> Vec<CellValue> {
        values
            .iter()
            .map(|&v| {
                if v.is_nan() {
                    CellValue::Null
                } else {
                    CellValue::Float(v)
                }
            })
            .collect()
    }

    fn dataset(cols: &[(&str, &[f64])]) -> Arc<Dataset> {
        Arc::new(
            Dataset::new(
                cols.iter()
                    .map(|(name, vals)| (name.to_string(), float_col(vals)))
                    .collect(),
            )
            .unwrap(),
        )
    }

    /// a=[0,1,2,NaN] against b=[10,9,8,7], frame 100x100pt.
    fn scenario_browser() -> Browser {
        let ds = dataset(&[
            ("a", &[0.0, 1.0, 2.0, f64::NAN]),
            ("b", &[10.0, 9.0, 8.0, 7.0]),
        ]);
        Browser::with_columns(ds, "a", "b").unwrap()
    }

    fn click(browser: &mut Browser, x: f64, y: f64) -> Option<usize> {
        browser.on_press();
        browser.on_release(Some([x, y]), 100.0, 100.0).unwrap()
    }

    #[test]
    fn construction_validates_columns() {
        let ds = dataset(&[("a", &[1.0]), ("b", &[2.0])]);
        assert!(matches!(
            Browser::with_columns(ds.clone(), "a", "nope"),
            Err(BrowseError::UnknownColumn(_))
        ));

        let mixed = Arc::new(
            Dataset::new(vec![
                ("a".into(), float_col(&[1.0, 2.0])),
                (
                    "label".into(),
                    vec![
                        CellValue::String("x".into()),
                        CellValue::String("y".into()),
                    ],
                ),
            ])
            .unwrap(),
        );
        assert!(matches!(
            Browser::with_columns(mixed.clone(), "a", "label"),
            Err(BrowseError::NotNumeric(_))
        ));
        assert!(matches!(
            Browser::new(mixed),
            Err(BrowseError::TooFewNumericColumns(1))
        ));
    }

    #[test]
    fn defaults_to_first_two_numeric_columns() {
        let browser = Browser::new(dataset(&[
            ("p", &[1.0, 2.0]),
            ("q", &[3.0, 4.0]),
            ("r", &[5.0, 6.0]),
        ]))
        .unwrap();
        assert_eq!(browser.x_column(), "p");
        assert_eq!(browser.y_column(), "q");
        assert_eq!(browser.columns().len(), 3);
    }

    #[test]
    fn replot_pads_limits() {
        let browser = scenario_browser();
        // a: [0, 2] ignoring the NaN row, pad = 0.02 * 2
        let xl = browser.x_limits();
        assert!((xl.lower - (-0.04)).abs() < 1e-12);
        assert!((xl.upper - 2.04).abs() < 1e-12);
        // b: [7, 10], pad = 0.02 * 3
        let yl = browser.y_limits();
        assert!((yl.lower - 6.94).abs() < 1e-12);
        assert!((yl.upper - 10.06).abs() < 1e-12);
    }

    #[test]
    fn reconfigure_recomputes_limits_for_new_column() {
        let mut browser = scenario_browser();
        browser.set_x_column("b").unwrap();
        let xl = browser.x_limits();
        assert!((xl.lower - 6.94).abs() < 1e-12);
        assert!((xl.upper - 10.06).abs() < 1e-12);
    }

    #[test]
    fn degenerate_range_clamps_to_minimum_span() {
        let browser = Browser::with_columns(
            dataset(&[("a", &[5.0, 5.0]), ("b", &[1.0, 2.0])]),
            "a",
            "b",
        )
        .unwrap();
        let xl = browser.x_limits();
        assert_eq!(xl.lower, 4.5);
        assert_eq!(xl.upper, 5.5);
    }

    #[test]
    fn reversal_is_idempotent() {
        let mut browser = scenario_browser();
        browser.set_x_reversed(true);
        let once = browser.x_limits();
        assert!(!once.ascending());

        // Same requested direction again: direction must not change.
        browser.set_x_reversed(true);
        assert_eq!(browser.x_limits(), once);

        browser.set_x_reversed(false);
        assert!(browser.x_limits().ascending());
    }

    #[test]
    fn replot_preserves_reversal() {
        let mut browser = scenario_browser();
        browser.set_y_reversed(true);
        browser.replot();
        let yl = browser.y_limits();
        assert!(!yl.ascending());
        assert!((yl.lower - 10.06).abs() < 1e-12);
        assert!((yl.upper - 6.94).abs() < 1e-12);
    }

    #[test]
    fn click_gate_press_release_selects_once() {
        let mut browser = scenario_browser();
        let lookups = Rc::new(RefCell::new(0));
        let n = lookups.clone();
        browser.set_callback(move |_, _| {
            *n.borrow_mut() += 1;
            Ok(())
        });

        browser.on_press();
        let idx = browser.on_release(Some([1.0, 9.0]), 100.0, 100.0).unwrap();
        assert_eq!(idx, Some(1));
        assert_eq!(*lookups.borrow(), 1);
    }

    #[test]
    fn click_gate_drag_never_selects() {
        let mut browser = scenario_browser();
        browser.on_press();
        browser.on_move();
        let idx = browser.on_release(Some([1.0, 9.0]), 100.0, 100.0).unwrap();
        assert_eq!(idx, None);
        assert_eq!(browser.selected_index(), None);

        // Gate resets: a clean click afterwards still works.
        assert_eq!(click(&mut browser, 1.0, 9.0), Some(1));
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut browser = scenario_browser();
        browser.on_move();
        browser.on_press();
        let idx = browser.on_release(Some([1.0, 9.0]), 100.0, 100.0).unwrap();
        assert_eq!(idx, Some(1));
    }

    #[test]
    fn release_outside_plot_resets_gate() {
        let mut browser = scenario_browser();
        browser.on_press();
        assert_eq!(browser.on_release(None, 100.0, 100.0).unwrap(), None);
        assert_eq!(browser.selected_index(), None);
    }

    #[test]
    fn nearest_point_uses_physical_scales() {
        // View: x 0..1000 over 200pt (5 data/pt), y 0..1 over 100pt
        // (0.01 data/pt).  Click at (500, 0.5):
        //   p0 = (500, 0.0): raw distance 0.5, physical 0.5/0.01 = 50pt
        //   p1 = (520, 0.5): raw distance 20,  physical 20/5    =  4pt
        // Raw units would pick p0; the normalized lookup must pick p1.
        let ds = dataset(&[("x", &[500.0, 520.0]), ("y", &[0.0, 0.5])]);
        let mut browser = Browser::with_columns(ds, "x", "y").unwrap();
        browser.set_view_limits(
            AxisLimits {
                lower: 0.0,
                upper: 1000.0,
            },
            AxisLimits {
                lower: 0.0,
                upper: 1.0,
            },
        );

        browser.on_press();
        let idx = browser
            .on_release(Some([500.0, 0.5]), 200.0, 100.0)
            .unwrap();
        assert_eq!(idx, Some(1));
    }

    #[test]
    fn nan_rows_are_never_selected() {
        let mut browser = scenario_browser();
        // Row 3 has a=NaN, b=7; a click right at (2, 7) must pick the
        // nearest finite row instead.
        let idx = click(&mut browser, 2.0, 7.0);
        assert_eq!(idx, Some(2));
    }

    #[test]
    fn all_nan_lookup_preserves_selection() {
        // "c" holds NaN floats (still a numeric dtype, unlike all-null).
        let ds = Arc::new(
            Dataset::new(vec![
                ("a".into(), float_col(&[1.0, 2.0])),
                ("b".into(), float_col(&[3.0, 4.0])),
                (
                    "c".into(),
                    vec![CellValue::Float(f64::NAN), CellValue::Float(f64::NAN)],
                ),
            ])
            .unwrap(),
        );
        let mut browser = Browser::with_columns(ds, "a", "b").unwrap();
        assert_eq!(click(&mut browser, 1.0, 3.0), Some(0));

        browser.set_y_column("c").unwrap();
        // Every candidate distance is now non-finite: no selection change.
        assert_eq!(click(&mut browser, 1.0, 0.0), None);
        assert_eq!(browser.selected_index(), Some(0));
        assert!(browser.selected_row().is_some());
    }

    #[test]
    fn empty_columns_fail_construction() {
        let ds = Arc::new(
            Dataset::new(vec![("a".into(), vec![]), ("b".into(), vec![])]).unwrap(),
        );
        // Zero-row columns have no numeric cells, so they are not numeric.
        assert!(Browser::with_columns(ds, "a", "b").is_err());
    }

    #[test]
    fn degenerate_frame_yields_no_selection() {
        let browser = scenario_browser();
        assert_eq!(browser.nearest_point(0.0, 0.0, 0.0, 100.0), None);
        assert_eq!(browser.nearest_point(0.0, 0.0, 100.0, 0.0), None);
    }

    #[test]
    fn callback_receives_matching_row_once() {
        let mut browser = scenario_browser();
        let seen: Rc<RefCell<Vec<RowSnapshot>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        browser.set_callback(move |row, _| {
            sink.borrow_mut().push(row.clone());
            Ok(())
        });

        click(&mut browser, 1.0, 9.0);
        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].index, 1);
        assert_eq!(seen[0].get("a"), Some(&CellValue::Float(1.0)));
        assert_eq!(seen[0].get("b"), Some(&CellValue::Float(9.0)));
    }

    #[test]
    fn failing_callback_keeps_selection_queryable() {
        let mut browser = scenario_browser();
        browser.set_callback(|_, _| anyhow::bail!("user callback exploded"));

        browser.on_press();
        let err = browser
            .on_release(Some([1.0, 9.0]), 100.0, 100.0)
            .unwrap_err();
        assert!(matches!(err, BrowseError::Callback(_)));
        // The original cause is preserved as source.
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("user callback exploded"));

        // Commit happened before the callback ran.
        assert_eq!(browser.selected_index(), Some(1));
        assert_eq!(browser.status_text(), "selected index: 1");

        // The controller keeps working.
        browser.clear_callback();
        assert_eq!(click(&mut browser, 0.0, 10.0), Some(0));
    }

    #[test]
    fn callback_output_is_captured() {
        let mut browser = scenario_browser();
        browser.set_callback(|row, out| {
            out.push(row.to_string());
            Ok(())
        });
        click(&mut browser, 2.0, 8.0);
        assert_eq!(browser.output().lines().len(), 1);
        assert!(browser.output().lines()[0].contains("a=2"));
        browser.clear_output();
        assert!(browser.output().is_empty());
    }

    #[test]
    fn marker_tracks_selection_across_reconfiguration() {
        let mut browser = scenario_browser();
        click(&mut browser, 1.0, 9.0);
        assert_eq!(browser.marker_position(), Some([1.0, 9.0]));

        // Marker re-renders at the row's coordinates under the new axes.
        browser.set_x_column("b").unwrap();
        assert_eq!(browser.marker_position(), Some([9.0, 9.0]));
    }

    #[test]
    fn status_text_reflects_selection() {
        let mut browser = scenario_browser();
        assert_eq!(browser.status_text(), "selected index: none");
        click(&mut browser, 0.0, 10.0);
        assert_eq!(browser.status_text(), "selected index: 0");
    }
}
