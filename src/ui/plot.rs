use eframe::egui::{Color32, Ui};
use egui_plot::{MarkerShape, Plot, PlotBounds, Points};

use crate::browse::AxisLimits;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// egui_plot enforces ascending bounds, so reversed axes are drawn in a
/// negated display space; tick labels and click coordinates are mapped back
/// through these two helpers.
fn to_display(v: f64, reversed: bool) -> f64 {
    if reversed { -v } else { v }
}

fn limits_from_display(dmin: f64, dmax: f64, reversed: bool) -> AxisLimits {
    if reversed {
        AxisLimits {
            lower: -dmin,
            upper: -dmax,
        }
    } else {
        AxisLimits {
            lower: dmin,
            upper: dmax,
        }
    }
}

fn fmt_tick(v: f64) -> String {
    // Trim float noise introduced by the negation transform.
    let rounded = (v * 1e9).round() / 1e9;
    format!("{rounded}")
}

/// Render the scatter plot and feed pointer gestures to the browser.
pub fn scatter_plot(ui: &mut Ui, state: &mut AppState) {
    let Some(browser) = &mut state.browser else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to browse rows  (File → Open…)");
        });
        return;
    };

    let x_rev = browser.x_reversed();
    let y_rev = browser.y_reversed();

    let points: Vec<[f64; 2]> = browser
        .points()
        .filter(|p| p[0].is_finite() && p[1].is_finite())
        .map(|p| [to_display(p[0], x_rev), to_display(p[1], y_rev)])
        .collect();

    let apply_bounds = browser.take_view_dirty();
    let (x_limits, y_limits) = (browser.x_limits(), browser.y_limits());
    let marker = browser.marker_position();

    let resp = Plot::new("browser_plot")
        .x_axis_label(browser.x_column().to_string())
        .y_axis_label(browser.y_column().to_string())
        .x_axis_formatter(move |mark, _range| fmt_tick(to_display(mark.value, x_rev)))
        .y_axis_formatter(move |mark, _range| fmt_tick(to_display(mark.value, y_rev)))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if apply_bounds {
                let dx0 = to_display(x_limits.lower, x_rev);
                let dx1 = to_display(x_limits.upper, x_rev);
                let dy0 = to_display(y_limits.lower, y_rev);
                let dy1 = to_display(y_limits.upper, y_rev);
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [dx0.min(dx1), dy0.min(dy1)],
                    [dx0.max(dx1), dy0.max(dy1)],
                ));
            }

            plot_ui.points(
                Points::new(points)
                    .color(Color32::LIGHT_BLUE)
                    .radius(2.0)
                    .shape(MarkerShape::Circle),
            );

            // Persistent marker for the selected row.
            if let Some([mx, my]) = marker {
                if mx.is_finite() && my.is_finite() {
                    plot_ui.points(
                        Points::new(vec![[to_display(mx, x_rev), to_display(my, y_rev)]])
                            .color(Color32::YELLOW.gamma_multiply(0.4))
                            .radius(8.0)
                            .shape(MarkerShape::Circle),
                    );
                }
            }
        });

    // ---- Pointer gesture feed: press / move / release ----
    let (pressed, released, moving) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.is_moving(),
        )
    });

    if pressed && resp.response.hovered() {
        browser.on_press();
    }
    if moving {
        browser.on_move();
    }
    if released {
        let frame = *resp.transform.frame();
        let coords = resp
            .response
            .hover_pos()
            .filter(|pos| frame.contains(*pos))
            .map(|pos| {
                let v = resp.transform.value_from_position(pos);
                [to_display(v.x, x_rev), to_display(v.y, y_rev)]
            });

        match browser.on_release(coords, frame.width() as f64, frame.height() as f64) {
            Ok(Some(index)) => log::info!("selected index: {index}"),
            Ok(None) => {}
            Err(e) => {
                log::error!("{e:#}");
                let msg = format!("Error: {e}");
                browser.output_mut().push(&msg);
                state.status_message = Some(msg);
            }
        }
    }

    // Mirror pan/zoom back into the controller so reversal checks and the
    // nearest-point scales always see the live view.
    let bounds = resp.transform.bounds();
    browser.set_view_limits(
        limits_from_display(bounds.min()[0], bounds.max()[0], x_rev),
        limits_from_display(bounds.min()[1], bounds.max()[1], y_rev),
    );
}
