// src/ui/panel.rs
//! Statistics plot panels
//!
//! Lays the four panels of a [`StatisticsPlots`] out as fixed ImGui windows
//! filling a 2×2 grid and draws each series as a polyline.

use crate::visualization::{PlotBounds, PlotPanel, StatisticsPlots};
use imgui::Condition;

const FRAME_COLOR: [f32; 4] = [0.45, 0.47, 0.52, 1.0];
const LINE_COLOR: [f32; 4] = [0.26, 0.59, 0.98, 1.0];
const TEXT_COLOR: [f32; 4] = [0.75, 0.77, 0.80, 1.0];

/// Space reserved left of the plot frame for y tick labels
const Y_LABEL_WIDTH: f32 = 90.0;

/// Panels to draw with their grid index, optionally leaving the
/// time-vs-time cell empty
pub fn visible_panels(
    plots: &StatisticsPlots,
    show_time_vs_time: bool,
) -> impl Iterator<Item = (usize, &PlotPanel)> {
    plots
        .panels
        .iter()
        .enumerate()
        .filter(move |(index, _)| show_time_vs_time || *index != StatisticsPlots::TIME_VS_TIME)
}

/// Draws the statistics panels, one per grid cell
///
/// # Arguments
/// * `ui` - ImGui UI context
/// * `plots` - Panels to draw
/// * `show_time_vs_time` - Whether the fourth cell gets its diagonal plot
pub fn statistics_panels(ui: &imgui::Ui, plots: &StatisticsPlots, show_time_vs_time: bool) {
    let display_size = ui.io().display_size;
    // Minimised windows report a zero display size
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return;
    }

    let cell_width = display_size[0] / StatisticsPlots::COLUMNS as f32;
    let cell_height = display_size[1] / StatisticsPlots::ROWS as f32;

    for (index, panel) in visible_panels(plots, show_time_vs_time) {
        let (row, column) = StatisticsPlots::cell(index);
        ui.window(&panel.title)
            .position(
                [column as f32 * cell_width, row as f32 * cell_height],
                Condition::Always,
            )
            .size([cell_width, cell_height], Condition::Always)
            .resizable(false)
            .movable(false)
            .collapsible(false)
            .build(|| render_plot(ui, panel));
    }
}

/// Renders one panel: caption, frame, tick labels and the series
fn render_plot(ui: &imgui::Ui, panel: &PlotPanel) {
    ui.text(format!(
        "{} against {}",
        panel.y_axis.label(),
        panel.x_axis.label()
    ));

    let Some(bounds) = panel.bounds().map(PlotBounds::padded) else {
        ui.text_disabled("No samples");
        return;
    };

    let origin = ui.cursor_screen_pos();
    let available = ui.content_region_avail();
    let line_height = ui.text_line_height_with_spacing();

    let frame_min = [origin[0] + Y_LABEL_WIDTH, origin[1]];
    let frame_max = [
        origin[0] + available[0],
        origin[1] + available[1] - line_height,
    ];
    let frame_width = frame_max[0] - frame_min[0];
    let frame_height = frame_max[1] - frame_min[1];
    if frame_width <= 1.0 || frame_height <= 1.0 {
        return;
    }

    let to_screen = |point: [f64; 2]| {
        let [u, v] = bounds.normalize(point);
        [
            frame_min[0] + u as f32 * frame_width,
            frame_max[1] - v as f32 * frame_height,
        ]
    };

    let points: Vec<[f32; 2]> = panel
        .points
        .iter()
        .filter(|[x, y]| x.is_finite() && y.is_finite())
        .map(|&point| to_screen(point))
        .collect();

    let draw_list = ui.get_window_draw_list();
    draw_list
        .add_rect(frame_min, frame_max, FRAME_COLOR)
        .build();

    draw_list.add_text(
        [origin[0], frame_min[1]],
        TEXT_COLOR,
        format_tick(bounds.max_y),
    );
    draw_list.add_text(
        [origin[0], frame_max[1] - line_height],
        TEXT_COLOR,
        format_tick(bounds.min_y),
    );
    draw_list.add_text(
        [frame_min[0], frame_max[1]],
        TEXT_COLOR,
        format_tick(bounds.min_x),
    );
    let max_x_label = format_tick(bounds.max_x);
    let max_x_width = ui.calc_text_size(&max_x_label)[0];
    draw_list.add_text(
        [frame_max[0] - max_x_width, frame_max[1]],
        TEXT_COLOR,
        max_x_label,
    );

    match points.len() {
        0 => {}
        1 => {
            draw_list
                .add_circle(points[0], 3.0, LINE_COLOR)
                .filled(true)
                .build();
        }
        _ => {
            draw_list
                .add_polyline(points, LINE_COLOR)
                .thickness(1.5)
                .build();
        }
    }

    ui.dummy(available);
}

/// Compact tick label: plain decimals for moderate values, scientific otherwise
fn format_tick(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-3..1e5).contains(&magnitude) {
        format!("{:.3e}", value)
    } else {
        format!("{:.3}", value)
    }
}
