pub mod histogram;
pub mod inspector;
pub mod menu_bar;
pub mod status;
pub mod viewport;

use glam::Vec2;

/// Curve colours for the R, G and B channels.
pub(crate) const CHANNEL_COLORS: [egui::Color32; 3] = [
    egui::Color32::from_rgb(247, 118, 142),
    egui::Color32::from_rgb(158, 206, 106),
    egui::Color32::from_rgb(122, 162, 247),
];

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.strong(label);
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}

pub(crate) fn to_glam(v: egui::Vec2) -> Vec2 {
    Vec2::new(v.x, v.y)
}

pub(crate) fn to_pos(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

pub(crate) fn rgba_color(c: [f32; 4]) -> egui::Color32 {
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(to_u8(c[0]), to_u8(c[1]), to_u8(c[2]), to_u8(c[3]))
}
