use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::Result;
use imgview_core::config::ViewerConfig;
use imgview_core::histogram::{Histogram, PlotView, RangeDrag};
use imgview_core::image_data::ImageData;
use imgview_core::range::{auto_range, UNIT_RANGE};
use imgview_core::store::ImageStore;
use imgview_core::view::{ChannelMask, ViewState};
use tracing::{info, warn};

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{UIState, ViewportState};
use crate::workers;

pub struct ImgViewApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub config: ViewerConfig,
    pub store: ImageStore,
    pub view: ViewState,
    pub histogram: Option<Histogram>,
    pub plot: PlotView,
    pub range_drag: RangeDrag,
}

impl ImgViewApp {
    pub fn new(
        ctx: &egui::Context,
        config: ViewerConfig,
        dispatch: tracing::Dispatch,
        initial_file: Option<PathBuf>,
    ) -> Result<Self> {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(result_tx.clone(), ctx.clone(), dispatch)?;

        let mut app = Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            view: ViewState::with_config(&config),
            config,
            store: ImageStore::new(),
            histogram: None,
            plot: PlotView::default(),
            range_drag: RangeDrag::default(),
        };
        if let Some(path) = initial_file {
            app.open_path(path);
        }
        Ok(app)
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded { image } => {
                    self.ui_state.busy = false;
                    self.install_image(ctx, *image);
                }
                WorkerResult::FilePicked { path } => {
                    self.open_path(path);
                }
                WorkerResult::Error { message } => {
                    // The previous image and view stay as they were.
                    self.ui_state.busy = false;
                    warn!("{message}");
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Swap a freshly decoded image in and reset everything derived from it.
    fn install_image(&mut self, ctx: &egui::Context, image: ImageData) {
        let stats = self.store.load(image);
        let image = self.store.image();

        self.view.reset_for_image(image);
        self.histogram = Some(Histogram::build(
            image,
            stats.min,
            stats.max,
            self.config.histogram_bins,
        ));
        self.plot.reset(stats.min, stats.max);
        self.range_drag.end();

        self.viewport.texture_dirty = true;
        self.viewport.hovered_pixel = None;
        self.viewport.magnifier_pos = None;

        info!(
            file = %image.filename,
            width = image.width,
            height = image.height,
            "Image loaded"
        );
        let mut msg = format!(
            "Loaded {} ({}x{}, {}), range {:.4} .. {:.4}",
            image.filename, image.width, image.height, image.format, stats.min, stats.max
        );
        if stats.has_nan {
            msg.push_str(", contains NaN/Inf");
        }
        self.ui_state.add_log(msg);
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(format!(
            "ImgView - {}",
            image.filename
        )));
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    pub fn open_path(&mut self, path: PathBuf) {
        self.ui_state.busy = true;
        self.ui_state.add_log(format!("Opening {}...", path.display()));
        self.send_command(WorkerCommand::LoadFile { path });
    }

    pub fn paste(&mut self) {
        self.ui_state.busy = true;
        self.send_command(WorkerCommand::PasteClipboard);
    }

    pub fn clear_image(&mut self, ctx: &egui::Context) {
        self.store.clear();
        self.view.clear();
        self.histogram = None;
        self.plot = PlotView::default();
        self.range_drag.end();
        self.viewport.clear();
        ctx.send_viewport_cmd(egui::ViewportCommand::Title("ImgView".into()));
    }

    pub fn set_range(&mut self, min: f32, max: f32) {
        if (min, max) != (self.view.range_min, self.view.range_max) {
            self.view.set_range(min, max);
            self.viewport.texture_dirty = true;
        }
    }

    pub fn set_mask(&mut self, mask: ChannelMask) {
        if mask != self.view.mask {
            self.view.mask = mask;
            self.viewport.texture_dirty = true;
        }
    }

    /// Fit the range to the enabled channels and frame the plot on it.
    pub fn apply_auto_range(&mut self) {
        if !self.store.has_image() {
            return;
        }
        match auto_range(self.store.image(), self.view.mask) {
            Some((min, max)) => {
                self.set_range(min, max);
                self.plot.reset(min, max);
            }
            None => self
                .ui_state
                .add_log("Auto range: no finite samples in the enabled channels".into()),
        }
    }

    pub fn apply_unit_range(&mut self) {
        let (min, max) = UNIT_RANGE;
        self.set_range(min, max);
        self.plot.reset(min, max);
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .find_map(|f| f.path.clone())
        });
        if let Some(path) = dropped {
            self.open_path(path);
        }
    }
}

impl eframe::App for ImgViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.handle_dropped_files(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::histogram::show(ctx, self);
        panels::inspector::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.ui_state.show_about {
            egui::Window::new("About ImgView")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("ImgView");
                        ui.label("HDR and DDS image inspector");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picked_file_goes_through_open_path() {
        let ctx = egui::Context::default();
        let mut app = ImgViewApp::new(
            &ctx,
            ViewerConfig::default(),
            tracing::Dispatch::none(),
            None,
        )
        .unwrap();

        let path = PathBuf::from("does-not-exist.png");
        app.result_tx
            .send(WorkerResult::FilePicked { path })
            .unwrap();
        app.poll_results(&ctx);

        assert!(app
            .ui_state
            .log_messages
            .iter()
            .any(|m| m.starts_with("Opening does-not-exist.png")));
    }
}
