use imgview_core::histogram::{log_scale, Histogram};

use crate::app::ImgViewApp;
use crate::panels::CHANNEL_COLORS;

const PANEL_HEIGHT: f32 = 200.0;
const GRID_LINES: usize = 10;
const HANDLE_COLOR: egui::Color32 = egui::Color32::YELLOW;
const HANDLE_SIZE: f32 = 6.0;
/// Room under the plot for the grid labels.
const LABEL_STRIP: f32 = 16.0;

pub fn show(ctx: &egui::Context, app: &mut ImgViewApp) {
    egui::TopBottomPanel::bottom("histogram")
        .exact_height(PANEL_HEIGHT)
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let full = response.rect;
            let plot = egui::Rect::from_min_max(
                full.min,
                egui::pos2(full.max.x, full.max.y - LABEL_STRIP),
            );
            painter.rect_filled(plot, 0.0, egui::Color32::from_gray(24));

            if app.histogram.is_none() {
                painter.text(
                    plot.center(),
                    egui::Align2::CENTER_CENTER,
                    "No histogram",
                    egui::FontId::proportional(14.0),
                    egui::Color32::from_gray(100),
                );
                return;
            }

            handle_plot_navigation(ui, &response, app, plot);
            handle_range_drag(ui, &response, app, plot);

            draw_grid(&painter, app, plot);
            if let Some(hist) = &app.histogram {
                draw_curves(&painter, app, hist, plot);
            }
            draw_handles(&painter, app, plot);
            if let Some(mouse) = response.hover_pos() {
                draw_crosshair(&painter, app, plot, mouse);
            }
        });
}

fn value_to_x(app: &ImgViewApp, plot: egui::Rect, value: f32) -> f32 {
    plot.left() + app.plot.value_to_fraction(value) * plot.width()
}

fn x_to_fraction(plot: egui::Rect, x: f32) -> f32 {
    (x - plot.left()) / plot.width().max(1.0)
}

/// Wheel zooms about the cursor, middle drag pans.
fn handle_plot_navigation(
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut ImgViewApp,
    plot: egui::Rect,
) {
    if let Some(mouse) = response.hover_pos() {
        let wheel = ui.input(|i| i.raw_scroll_delta.y);
        if wheel != 0.0 {
            app.plot.zoom_at(x_to_fraction(plot, mouse.x), wheel.signum());
        }
    }
    if response.dragged_by(egui::PointerButton::Middle) {
        app.plot
            .pan_by(response.drag_delta().x / plot.width().max(1.0));
    }
}

/// Left drag on a handle moves that end of the range; the ends never cross.
fn handle_range_drag(
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut ImgViewApp,
    plot: egui::Rect,
) {
    if response.drag_started_by(egui::PointerButton::Primary) {
        let press = ui.input(|i| i.pointer.press_origin());
        if let Some(press) = press {
            let min_x = value_to_x(app, plot, app.view.range_min);
            let max_x = value_to_x(app, plot, app.view.range_max);
            app.range_drag.begin(press.x, min_x, max_x);
        }
    }

    if app.range_drag.active.is_some() && response.dragged_by(egui::PointerButton::Primary) {
        if let Some(mouse) = response.interact_pointer_pos() {
            let value = app.plot.fraction_to_value(x_to_fraction(plot, mouse.x));
            let (min, max) = app
                .range_drag
                .update(value, app.view.range_min, app.view.range_max);
            app.set_range(min, max);
        }
    }

    if response.drag_stopped() {
        app.range_drag.end();
    }
}

fn draw_grid(painter: &egui::Painter, app: &ImgViewApp, plot: egui::Rect) {
    let stroke = egui::Stroke::new(1.0, egui::Color32::from_gray(50));
    for i in 0..=GRID_LINES {
        let frac = i as f32 / GRID_LINES as f32;
        let x = plot.left() + frac * plot.width();
        painter.vline(x, plot.y_range(), stroke);

        let align = match i {
            0 => egui::Align2::LEFT_TOP,
            GRID_LINES => egui::Align2::RIGHT_TOP,
            _ => egui::Align2::CENTER_TOP,
        };
        painter.text(
            egui::pos2(x, plot.bottom() + 2.0),
            align,
            format!("{:.2}", app.plot.fraction_to_value(frac)),
            egui::FontId::monospace(10.0),
            egui::Color32::from_gray(140),
        );
    }
}

/// One log-scaled curve per enabled channel, each point at its bin's value.
fn draw_curves(painter: &egui::Painter, app: &ImgViewApp, hist: &Histogram, plot: egui::Rect) {
    let peak = hist.log_peak();
    let clipped = painter.with_clip_rect(plot);
    for (c, enabled) in app.view.mask.enabled().into_iter().enumerate() {
        if !enabled {
            continue;
        }
        let points: Vec<egui::Pos2> = hist.bins[c]
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let x = value_to_x(app, plot, hist.bin_value(i));
                let y = plot.bottom() - log_scale(count) / peak * plot.height();
                egui::pos2(x, y)
            })
            .collect();
        clipped.add(egui::Shape::line(
            points,
            egui::Stroke::new(1.0, CHANNEL_COLORS[c]),
        ));
    }
}

fn draw_handles(painter: &egui::Painter, app: &ImgViewApp, plot: egui::Rect) {
    let clipped = painter.with_clip_rect(plot);
    let stroke = egui::Stroke::new(1.0, HANDLE_COLOR);
    for value in [app.view.range_min, app.view.range_max] {
        let x = value_to_x(app, plot, value);
        clipped.vline(x, plot.y_range(), stroke);
        clipped.add(egui::Shape::convex_polygon(
            vec![
                egui::pos2(x - HANDLE_SIZE, plot.top()),
                egui::pos2(x + HANDLE_SIZE, plot.top()),
                egui::pos2(x, plot.top() + HANDLE_SIZE * 1.5),
            ],
            HANDLE_COLOR,
            egui::Stroke::NONE,
        ));
    }
}

fn draw_crosshair(painter: &egui::Painter, app: &ImgViewApp, plot: egui::Rect, mouse: egui::Pos2) {
    if !plot.contains(mouse) {
        return;
    }
    painter.vline(
        mouse.x,
        plot.y_range(),
        egui::Stroke::new(1.0, egui::Color32::from_white_alpha(90)),
    );
    let value = app.plot.fraction_to_value(x_to_fraction(plot, mouse.x));
    let right_half = mouse.x > plot.center().x;
    let (pos, align) = if right_half {
        (egui::pos2(mouse.x - 4.0, plot.top() + 12.0), egui::Align2::RIGHT_TOP)
    } else {
        (egui::pos2(mouse.x + 4.0, plot.top() + 12.0), egui::Align2::LEFT_TOP)
    };
    painter.text(
        pos,
        align,
        format!("{value:.4}"),
        egui::FontId::monospace(11.0),
        egui::Color32::WHITE,
    );
}
