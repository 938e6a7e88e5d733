use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

/// Build the log dispatcher: debug when verbose, info otherwise.
///
/// Not installed globally; `main` and the worker thread each set it as
/// their default.
pub fn build_dispatch(verbose: bool, log_file: Option<&Path>) -> Result<Dispatch> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into())
    };

    let dispatch = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Dispatch::new(
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .with_thread_names(true)
                    .with_writer(Mutex::new(file))
                    .finish(),
            )
        }
        None => Dispatch::new(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_thread_names(true)
                .finish(),
        ),
    };
    Ok(dispatch)
}
