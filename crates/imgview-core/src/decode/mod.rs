pub mod clipboard;
mod dds;
mod generic;
mod jpeg;

use std::path::Path;

use tracing::{info, warn};

use crate::error::DecodeError;
use crate::image_data::ImageData;

pub use clipboard::{
    decode_bitmap, decode_clipboard, decode_dib, ChannelOrder, ClipboardSource, RawBitmap,
};
#[cfg(feature = "clipboard")]
pub use clipboard::{decode_system_clipboard, SystemClipboard};

/// Decoder chosen for a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Dds,
    Jpeg,
    Generic,
}

impl SourceKind {
    /// Pick a decoder from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("dds") => SourceKind::Dds,
            Some("jpg" | "jpeg") => SourceKind::Jpeg,
            _ => SourceKind::Generic,
        }
    }
}

/// Decode an image file into normalized RGBA `f32`.
///
/// The returned image has its `filename` set but range fields still at
/// their defaults; [`crate::store::ImageStore::load`] fills those in.
pub fn decode_file(path: &Path) -> Result<ImageData, DecodeError> {
    let kind = SourceKind::from_path(path);
    let result = match kind {
        SourceKind::Dds => dds::decode_dds(path),
        SourceKind::Jpeg => jpeg::decode_jpeg(path),
        SourceKind::Generic => generic::decode_generic(path),
    };

    match result {
        Ok(mut image) => {
            if image.is_empty() {
                return Err(DecodeError::IoOrFormat(format!(
                    "{} decoded to an empty image",
                    path.display()
                )));
            }
            if image.expected_len() != Some(image.pixels.len()) {
                return Err(DecodeError::IoOrFormat(format!(
                    "{} decoded {} samples for a {}x{} image",
                    path.display(),
                    image.pixels.len(),
                    image.width,
                    image.height
                )));
            }
            image.filename = display_name(path);
            info!(
                file = %image.filename,
                width = image.width,
                height = image.height,
                format = %image.format,
                pixel_format = %image.pixel_format,
                "Image decoded"
            );
            Ok(image)
        }
        Err(e) => {
            warn!(path = %path.display(), ?kind, "Decode failed: {e}");
            Err(e)
        }
    }
}

/// Last path segment, used as the display name.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Uppercased extension, used as the container label of generic images.
fn extension_label(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_uppercase())
        .unwrap_or_default()
}
