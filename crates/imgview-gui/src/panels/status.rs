use crate::app::ImgViewApp;

pub fn show(ctx: &egui::Context, app: &mut ImgViewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if app.ui_state.is_busy() {
                ui.spinner();
                ui.separator();
            }
            if app.store.has_image() {
                let image = app.store.image();
                ui.label(format!("{}x{}", image.width, image.height));
                ui.separator();
            }
            ui.label(format!("Zoom: {:.0}%", app.view.zoom * 100.0));
            if let Some((x, y)) = app.viewport.hovered_pixel {
                ui.separator();
                match app.store.pixel(x, y) {
                    Some([r, g, b, a]) => ui.label(format!(
                        "({x}, {y})  R {r:.4}  G {g:.4}  B {b:.4}  A {a:.4}"
                    )),
                    None => ui.label(format!("({x}, {y})")),
                };
            }
        });

        ui.add_space(2.0);
    });
}
