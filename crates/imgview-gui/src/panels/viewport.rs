use glam::Vec2;
use imgview_core::view::RenderParams;

use crate::app::ImgViewApp;
use crate::convert::image_to_color_image;
use crate::panels::{rgba_color, to_glam, to_pos};

/// Scroll distance egui reports for one mouse-wheel notch.
const POINTS_PER_WHEEL_NOTCH: f32 = 50.0;

pub fn show(ctx: &egui::Context, app: &mut ImgViewApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            paint_background(ui, rect);

            if !app.store.has_image() {
                show_placeholder(ui, app.ui_state.is_busy());
                return;
            }

            let image = app.store.image();
            let image_size = Vec2::new(image.width as f32, image.height as f32);
            let origin = to_glam(rect.min.to_vec2());
            let size = to_glam(rect.size());

            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
            handle_zoom(ui, &response, app, origin, size);
            handle_pan(&response, app);

            app.viewport.hovered_pixel = response.hover_pos().and_then(|p| {
                app.view
                    .screen_to_image_pixel(to_glam(p.to_vec2()), origin, size, image_size)
            });
            handle_magnifier_pick(&response, app);

            let params = app.view.render_params(image_size, size);
            refresh_texture(ctx, app, &params);

            if let Some(texture) = &app.viewport.texture {
                let (top_left, bottom_right) = params.transform.screen_rect(origin, size);
                ui.painter().with_clip_rect(rect).image(
                    texture.id(),
                    egui::Rect::from_min_max(to_pos(top_left), to_pos(bottom_right)),
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }

            if app.ui_state.show_magnifier {
                if let Some(pixel) = app.viewport.magnifier_pos {
                    draw_crossline(ui, rect, app, pixel, origin, size, image_size);
                }
            }
        });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Wheel zoom anchored at the cursor. Ignored while the cursor is elsewhere.
fn handle_zoom(
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut ImgViewApp,
    origin: Vec2,
    size: Vec2,
) {
    let notches = ui.input(|i| i.raw_scroll_delta.y) / POINTS_PER_WHEEL_NOTCH;
    if notches == 0.0 {
        return;
    }
    if let Some(mouse) = response.hover_pos() {
        app.view.zoom_at(notches, to_glam(mouse.to_vec2()), origin, size);
    }
}

fn handle_pan(response: &egui::Response, app: &mut ImgViewApp) {
    if response.dragged_by(egui::PointerButton::Middle) {
        app.view.pan_by(to_glam(response.drag_delta()));
    }
}

/// Right click or right drag moves the magnifier to the pixel under the cursor.
fn handle_magnifier_pick(response: &egui::Response, app: &mut ImgViewApp) {
    let picking = response.dragged_by(egui::PointerButton::Secondary)
        || response.clicked_by(egui::PointerButton::Secondary);
    if !picking {
        return;
    }
    if let Some(pixel) = app.viewport.hovered_pixel {
        app.viewport.magnifier_pos = Some(pixel);
        app.ui_state.show_magnifier = true;
    }
}

fn refresh_texture(ctx: &egui::Context, app: &mut ImgViewApp, params: &RenderParams) {
    if !app.viewport.texture_dirty && app.viewport.texture.is_some() {
        return;
    }
    let image = image_to_color_image(app.store.image(), params);
    match &mut app.viewport.texture {
        Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
        None => {
            app.viewport.texture =
                Some(ctx.load_texture("viewport", image, egui::TextureOptions::NEAREST));
        }
    }
    app.viewport.texture_dirty = false;
}

/// Outline the picked pixel and run lines through it across the viewport.
fn draw_crossline(
    ui: &egui::Ui,
    rect: egui::Rect,
    app: &ImgViewApp,
    pixel: (usize, usize),
    origin: Vec2,
    size: Vec2,
    image_size: Vec2,
) {
    let corner = Vec2::new(pixel.0 as f32, pixel.1 as f32);
    let top_left = app.view.image_to_screen(corner, origin, size, image_size);
    let bottom_right = app.view.image_to_screen(corner + Vec2::ONE, origin, size, image_size);
    let centre = to_pos((top_left + bottom_right) * 0.5);

    let stroke = egui::Stroke::new(1.0, rgba_color(app.config.crossline_color));
    let painter = ui.painter().with_clip_rect(rect);
    painter.hline(rect.x_range(), centre.y, stroke);
    painter.vline(centre.x, rect.y_range(), stroke);
    painter.rect_stroke(
        egui::Rect::from_min_max(to_pos(top_left), to_pos(bottom_right)),
        0.0,
        stroke,
        egui::StrokeKind::Outside,
    );
}

fn show_placeholder(ui: &mut egui::Ui, busy: bool) {
    let text = if busy {
        "Loading..."
    } else {
        "Open, paste or drop an image to begin"
    };
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
