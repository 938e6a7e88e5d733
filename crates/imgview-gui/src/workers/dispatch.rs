use std::sync::mpsc;

use anyhow::{Context, Result};

use crate::messages::{WorkerCommand, WorkerResult};

use super::io;

/// Spawn the decode worker. Returns the command sender.
///
/// The worker installs `dispatch` as its own default subscriber so decode
/// logs land in the same sink as the UI thread's.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    dispatch: tracing::Dispatch,
) -> Result<mpsc::Sender<WorkerCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("imgview-decode".into())
        .spawn(move || {
            let _guard = tracing::dispatcher::set_default(&dispatch);
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .context("Failed to spawn decode worker thread")?;

    Ok(cmd_tx)
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_log(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Log {
            message: msg.into(),
        },
    );
}

pub(crate) fn send_error(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Error {
            message: msg.into(),
        },
    );
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadFile { path } => io::handle_load_file(&path, &tx, &ctx),
            WorkerCommand::PasteClipboard => io::handle_paste(&tx, &ctx),
        }
    }
    tracing::debug!("Decode worker exiting");
}
