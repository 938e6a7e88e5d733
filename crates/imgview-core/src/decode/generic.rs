use std::path::Path;

use image::{ImageFormat, ImageReader};
use tracing::debug;

use crate::error::DecodeError;
use crate::image_data::{unorm8_to_f32, ImageData};

use super::extension_label;

/// Formats that carry floating-point samples and skip 8-bit quantization.
fn is_hdr_capable(format: Option<ImageFormat>) -> bool {
    matches!(format, Some(ImageFormat::Hdr | ImageFormat::OpenExr))
}

/// Decode any format the `image` crate understands.
///
/// HDR-capable sources keep their float samples; everything else goes
/// through 8-bit RGBA and is divided by 255.
pub(super) fn decode_generic(path: &Path) -> Result<ImageData, DecodeError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format();
    let img = reader.decode()?;

    let width = img.width() as usize;
    let height = img.height() as usize;
    if width == 0 || height == 0 {
        return Err(DecodeError::IoOrFormat(format!(
            "{} has no pixel data",
            path.display()
        )));
    }
    let channels = img.color().channel_count();

    let mut data = if is_hdr_capable(format) {
        debug!(?format, width, height, "Decoding as float");
        let mut data = ImageData::from_rgba(width, height, img.to_rgba32f().into_raw());
        data.format = match format {
            Some(ImageFormat::OpenExr) => "EXR".to_string(),
            _ => "HDR".to_string(),
        };
        data.pixel_format = "RGBA32F".to_string();
        data
    } else {
        let bytes = img.to_rgba8().into_raw();
        let pixels: Vec<f32> = bytes.iter().map(|&b| unorm8_to_f32(b)).collect();
        let mut data = ImageData::from_rgba(width, height, pixels);
        data.format = extension_label(path);
        data.pixel_format = "RGBA8".to_string();
        data
    };

    data.channels = channels;
    Ok(data)
}
