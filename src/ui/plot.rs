use eframe::egui::{RichText, Ui};
use egui_plot::{MarkerShape, Plot, PlotBounds, PlotPoints, Points};

use crate::data::features::DiagramSeries;
use crate::theme;

// ---------------------------------------------------------------------------
// H-R scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Fixed x-axis range: color index (B−V).
const X_RANGE: (f64, f64) = (-1.0, 3.0);

/// Fixed y-axis range: absolute magnitude, inverted so that bright stars
/// (low magnitude) sit at the top.
const Y_RANGE: (f64, f64) = (10.0, -4.0);

/// Render the H-R scatter plot.
///
/// egui_plot has no inverted axis, so magnitudes are negated for plotting
/// and the tick formatter maps them back. Interactions and the cursor
/// readout stay off so the negated coordinate space is never visible.
pub fn hr_scatter(ui: &mut Ui, series: &DiagramSeries) {
    ui.visuals_mut().override_text_color = Some(theme::AXIS);

    let points: PlotPoints = series.points().map(|[x, y]| [x, -y]).collect();

    Plot::new("hr_scatter")
        .x_axis_label(RichText::new("Color index (B-V)").color(theme::ACCENT).size(theme::LABEL_SIZE))
        .y_axis_label(RichText::new("Absolute magnitude").color(theme::ACCENT).size(theme::LABEL_SIZE))
        .y_axis_formatter(|mark, _range| {
            let magnitude = if mark.value == 0.0 { 0.0 } else { -mark.value };
            format!("{magnitude}")
        })
        .show_background(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [X_RANGE.0, -Y_RANGE.0],
                [X_RANGE.1, -Y_RANGE.1],
            ));

            let stars = Points::new(points)
                .shape(MarkerShape::Circle)
                .filled(true)
                .radius(theme::MARKER_RADIUS)
                .color(theme::MARKER);

            plot_ui.points(stars);
        });
}
