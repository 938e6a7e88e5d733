pub mod config;
pub mod histogram;
pub mod info;
pub mod pixel;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use imgview_core::decode::decode_file;
use imgview_core::store::ImageStore;

/// Where the image comes from: a file or the system clipboard.
#[derive(Args)]
pub struct SourceArgs {
    /// Input image (PNG, JPEG, HDR, EXR, DDS, ...)
    #[arg(required_unless_present = "clipboard")]
    pub file: Option<PathBuf>,

    /// Read the image from the system clipboard instead of a file
    #[arg(long, conflicts_with = "file")]
    pub clipboard: bool,
}

impl SourceArgs {
    /// Decode the source and run range analysis on it.
    pub fn load(&self) -> Result<ImageStore> {
        let image = if self.clipboard {
            read_clipboard()?
        } else if let Some(path) = &self.file {
            decode_file(path).with_context(|| format!("Failed to load {}", path.display()))?
        } else {
            bail!("No input given");
        };

        let mut store = ImageStore::new();
        store.load(image);
        Ok(store)
    }
}

#[cfg(feature = "clipboard")]
fn read_clipboard() -> Result<imgview_core::image_data::ImageData> {
    imgview_core::decode::decode_system_clipboard().context("Failed to read clipboard")
}

#[cfg(not(feature = "clipboard"))]
fn read_clipboard() -> Result<imgview_core::image_data::ImageData> {
    bail!("Clipboard support was not compiled in")
}
