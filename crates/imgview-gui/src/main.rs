mod app;
mod convert;
mod logging;
mod messages;
mod panels;
mod states;
mod workers;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use imgview_core::config::ViewerConfig;

/// Log file used by `--verbose` when no `--log-file` is given.
const DEFAULT_LOG_FILE: &str = "log.txt";

#[derive(Parser)]
#[command(name = "imgview-gui", about = "Image viewer with range remap, histogram and magnifier")]
#[command(version)]
struct Args {
    /// Image to open at startup
    file: Option<PathBuf>,

    /// Write debug logs (to log.txt unless --log-file is given)
    #[arg(short, long)]
    verbose: bool,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Viewer settings (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = args
        .log_file
        .clone()
        .or_else(|| args.verbose.then(|| PathBuf::from(DEFAULT_LOG_FILE)));
    let dispatch = logging::build_dispatch(args.verbose, log_file.as_deref())?;
    let _log_guard = tracing::dispatcher::set_default(&dispatch);

    let config = ViewerConfig::load(args.config.as_deref()).context("Failed to load config")?;
    tracing::info!(?config, "Starting viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_drag_and_drop(true)
            .with_title("ImgView"),
        ..Default::default()
    };

    let initial_file = args.file;
    eframe::run_native(
        "ImgView",
        options,
        Box::new(move |cc| {
            let app = app::ImgViewApp::new(&cc.egui_ctx, config, dispatch, initial_file)?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Viewer exited with an error: {e}"))
}
