use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use imgview_core::decode::decode_file;
use imgview_core::image_data::ImageData;

use crate::messages::WorkerResult;

use super::{send, send_error, send_log};

pub(super) fn handle_load_file(
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    match decode_file(path) {
        Ok(image) => {
            send_log(
                tx,
                ctx,
                format!(
                    "Decoded {} in {:.0}ms",
                    path.display(),
                    start.elapsed().as_secs_f32() * 1000.0
                ),
            );
            send_image(image, tx, ctx);
        }
        Err(e) => send_error(tx, ctx, format!("Failed to open {}: {e}", path.display())),
    }
}

#[cfg(feature = "clipboard")]
pub(super) fn handle_paste(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    match imgview_core::decode::decode_system_clipboard() {
        Ok(image) => {
            send_log(tx, ctx, format!("Pasted {}x{} image", image.width, image.height));
            send_image(image, tx, ctx);
        }
        Err(e) => send_error(tx, ctx, format!("Paste failed: {e}")),
    }
}

#[cfg(not(feature = "clipboard"))]
pub(super) fn handle_paste(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    send_error(tx, ctx, "Clipboard support was not compiled in");
}

fn send_image(image: ImageData, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    send(
        tx,
        ctx,
        WorkerResult::ImageLoaded {
            image: Box::new(image),
        },
    );
}
