use imgview_core::consts::MAGNIFIER_CELL_SIZE;
use imgview_core::magnifier::{hex_rgba, Magnifier, MagnifierView};
use imgview_core::view::ChannelMask;

use crate::app::ImgViewApp;
use crate::convert::cell_color;
use crate::panels::{rgba_color, section_header};

/// Zoom range offered by the slider; the wheel may go further.
const SLIDER_ZOOM_RANGE: std::ops::RangeInclusive<f32> = 0.1..=10.0;

pub fn show(ctx: &egui::Context, app: &mut ImgViewApp) {
    egui::SidePanel::left("inspector")
        .default_width(260.0)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                image_section(ui, app);
                ui.separator();
                view_section(ui, app);
                ui.separator();
                range_section(ui, app);
                ui.separator();
                channel_section(ui, app);
                if app.ui_state.show_magnifier {
                    ui.separator();
                    magnifier_section(ui, app);
                }
            });
        });
}

fn info_row(ui: &mut egui::Ui, label: &str, value: impl Into<egui::WidgetText>) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).weak());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(value);
        });
    });
}

fn image_section(ui: &mut egui::Ui, app: &ImgViewApp) {
    section_header(ui, "Image", None);
    if !app.store.has_image() {
        ui.weak("No image loaded");
        return;
    }
    let image = app.store.image();
    info_row(ui, "File", &image.filename);
    info_row(ui, "Format", &image.format);
    info_row(ui, "Pixel format", &image.pixel_format);
    info_row(ui, "Size", format!("{}x{}", image.width, image.height));
    info_row(ui, "Channels", image.channels.to_string());
    info_row(ui, "Min", format!("{:.6}", image.min_value));
    info_row(ui, "Max", format!("{:.6}", image.max_value));
    if image.has_nan {
        ui.colored_label(ui.visuals().warn_fg_color, "Contains NaN/Inf samples");
    }
}

fn view_section(ui: &mut egui::Ui, app: &mut ImgViewApp) {
    section_header(ui, "View", None);
    let mut zoom = app.view.zoom;
    if ui
        .add(
            egui::Slider::new(&mut zoom, SLIDER_ZOOM_RANGE)
                .logarithmic(true)
                .text("Zoom"),
        )
        .changed()
    {
        app.view.set_zoom(zoom);
    }
    if ui.button("Reset View").clicked() {
        app.view.reset_view();
    }
}

fn range_section(ui: &mut egui::Ui, app: &mut ImgViewApp) {
    section_header(ui, "Range", None);
    let (mut min, mut max) = (app.view.range_min, app.view.range_max);
    let speed = ((max - min).abs() * 0.002).max(1e-4);

    let changed = ui
        .horizontal(|ui| {
            ui.label("Min");
            let a = ui
                .add(egui::DragValue::new(&mut min).speed(speed).max_decimals(6))
                .changed();
            ui.label("Max");
            let b = ui
                .add(egui::DragValue::new(&mut max).speed(speed).max_decimals(6))
                .changed();
            a || b
        })
        .inner;
    if changed {
        app.set_range(min, max);
    }

    ui.horizontal(|ui| {
        if ui
            .add_enabled(app.store.has_image(), egui::Button::new("Auto Range"))
            .clicked()
        {
            app.apply_auto_range();
        }
        if ui.button("0-1 Range").clicked() {
            app.apply_unit_range();
        }
    });
}

fn channel_section(ui: &mut egui::Ui, app: &mut ImgViewApp) {
    section_header(ui, "Channels", None);
    let mut mask: ChannelMask = app.view.mask;
    ui.horizontal(|ui| {
        ui.checkbox(&mut mask.r, "R");
        ui.checkbox(&mut mask.g, "G");
        ui.checkbox(&mut mask.b, "B");
    });
    app.set_mask(mask);
}

fn magnifier_section(ui: &mut egui::Ui, app: &mut ImgViewApp) {
    section_header(ui, "Magnifier", Some("right-drag to pick"));

    let Some(centre) = app.viewport.magnifier_pos.filter(|_| app.store.has_image()) else {
        ui.weak("Right-click the image to pick a pixel");
        if ui.button("Close").clicked() {
            app.ui_state.show_magnifier = false;
        }
        return;
    };

    let view = MagnifierView {
        range_min: app.view.range_min,
        range_max: app.view.range_max,
        mask: app.view.mask,
    };
    let grid = Magnifier::sample(app.store.image(), centre, app.config.magnifier_size, &view);

    let side = grid.size as f32 * MAGNIFIER_CELL_SIZE;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    for row in 0..grid.size {
        for col in 0..grid.size {
            let min = rect.min
                + egui::vec2(col as f32, row as f32) * MAGNIFIER_CELL_SIZE;
            let cell_rect = egui::Rect::from_min_size(min, egui::Vec2::splat(MAGNIFIER_CELL_SIZE));
            let fill = grid
                .cell(col, row)
                .map(cell_color)
                .unwrap_or(egui::Color32::from_gray(20));
            painter.rect_filled(cell_rect, 0.0, fill);
        }
    }
    let half = (grid.size / 2) as f32;
    let centre_rect = egui::Rect::from_min_size(
        rect.min + egui::Vec2::splat(half * MAGNIFIER_CELL_SIZE),
        egui::Vec2::splat(MAGNIFIER_CELL_SIZE),
    );
    painter.rect_stroke(
        centre_rect,
        0.0,
        egui::Stroke::new(1.5, rgba_color(app.config.crossline_color)),
        egui::StrokeKind::Inside,
    );

    if let Some(pixel) = app.store.pixel(centre.0, centre.1) {
        info_row(ui, "Pixel", format!("({}, {})", centre.0, centre.1));
        for (name, v) in ["R", "G", "B", "A"].into_iter().zip(pixel) {
            info_row(ui, name, format!("{v:.4}"));
        }
        info_row(ui, "Hex", hex_rgba(pixel));
    }

    if ui.button("Close").clicked() {
        app.ui_state.show_magnifier = false;
    }
}
