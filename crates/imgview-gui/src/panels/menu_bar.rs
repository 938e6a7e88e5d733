use crate::app::ImgViewApp;
use crate::messages::WorkerResult;

const OPEN: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
const PASTE: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::V);
const QUIT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

pub fn show(ctx: &egui::Context, app: &mut ImgViewApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui
                    .add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&OPEN)))
                    .clicked()
                {
                    ui.close();
                    open_file(ctx, app);
                }

                if ui
                    .add(egui::Button::new("Paste").shortcut_text(ctx.format_shortcut(&PASTE)))
                    .clicked()
                {
                    ui.close();
                    app.paste();
                }

                if ui
                    .add_enabled(app.store.has_image(), egui::Button::new("Close Image"))
                    .clicked()
                {
                    ui.close();
                    app.clear_image(ctx);
                }

                ui.separator();

                if ui
                    .add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&QUIT)))
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset View").clicked() {
                    ui.close();
                    app.view.reset_view();
                }
                if ui.button("Auto Range").clicked() {
                    ui.close();
                    app.apply_auto_range();
                }
                if ui.button("0-1 Range").clicked() {
                    ui.close();
                    app.apply_unit_range();
                }
                ui.separator();
                ui.checkbox(&mut app.ui_state.show_magnifier, "Magnifier");
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&OPEN)) {
            open_file(ctx, app);
        }
        if paste_requested(ctx) {
            app.paste();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&QUIT)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Ctrl+V, either as a key press or as the text-paste event the platform
/// layer emits in its place.
fn paste_requested(ctx: &egui::Context) -> bool {
    if ctx.wants_keyboard_input() {
        return false;
    }
    ctx.input_mut(|i| {
        let shortcut = i.consume_shortcut(&PASTE);
        let event = i.events.iter().any(|e| matches!(e, egui::Event::Paste(_)));
        shortcut || event
    })
}

/// Run the native file dialog off the UI thread and hand the pick back as a
/// [`WorkerResult::FilePicked`].
fn open_file(ctx: &egui::Context, app: &ImgViewApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter(
                "Images",
                &[
                    "png", "jpg", "jpeg", "bmp", "tga", "tif", "tiff", "gif", "hdr", "exr", "dds",
                ],
            )
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = result_tx.send(WorkerResult::FilePicked { path });
            ctx.request_repaint();
        }
    });
}
