use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use jpeg_decoder::{Decoder, PixelFormat};
use tracing::debug;

use crate::consts::RGBA_CHANNELS;
use crate::error::DecodeError;
use crate::image_data::{unorm8_to_f32, ImageData};

/// Decode a baseline or progressive JPEG.
///
/// Library failures come back as values and map to `IoOrFormat`; the file
/// is closed when the reader drops, on success and failure alike.
pub(super) fn decode_jpeg(path: &Path) -> Result<ImageData, DecodeError> {
    debug!(path = %path.display(), "Loading JPEG");
    let file = File::open(path)?;
    let mut decoder = Decoder::new(BufReader::new(file));

    let raw = decoder
        .decode()
        .map_err(|e| DecodeError::IoOrFormat(format!("JPEG decode failed: {e}")))?;
    let info = decoder
        .info()
        .ok_or_else(|| DecodeError::IoOrFormat("JPEG header missing".into()))?;

    let components = match info.pixel_format {
        PixelFormat::L8 => 1,
        PixelFormat::RGB24 => 3,
        other => {
            return Err(DecodeError::UnsupportedChannelLayout(format!(
                "JPEG pixel format {other:?}"
            )))
        }
    };

    let width = info.width as usize;
    let height = info.height as usize;
    let pixels = expand_scanlines(&raw, width, height, components)?;

    let mut data = ImageData::from_rgba(width, height, pixels);
    data.format = "JPEG".to_string();
    data.pixel_format = "RGBA8".to_string();
    debug!(width, height, components, "JPEG loaded");
    Ok(data)
}

/// Expand interleaved 8-bit scanlines (gray or RGB) to RGBA `f32`, one row
/// at a time. Alpha is always 1.
pub(crate) fn expand_scanlines(
    raw: &[u8],
    width: usize,
    height: usize,
    components: usize,
) -> Result<Vec<f32>, DecodeError> {
    if !matches!(components, 1 | 3) {
        return Err(DecodeError::UnsupportedChannelLayout(format!(
            "{components} components"
        )));
    }
    let row_stride = width * components;
    if raw.len() < row_stride * height {
        return Err(DecodeError::IoOrFormat(format!(
            "JPEG data truncated: {} bytes for {width}x{height}x{components}",
            raw.len()
        )));
    }

    let mut pixels = vec![0.0f32; width * height * RGBA_CHANNELS];
    if width == 0 {
        return Ok(pixels);
    }
    for (src_row, dst_row) in raw
        .chunks_exact(row_stride)
        .zip(pixels.chunks_exact_mut(width * RGBA_CHANNELS))
    {
        for (src, dst) in src_row
            .chunks_exact(components)
            .zip(dst_row.chunks_exact_mut(RGBA_CHANNELS))
        {
            if components == 3 {
                dst[0] = unorm8_to_f32(src[0]);
                dst[1] = unorm8_to_f32(src[1]);
                dst[2] = unorm8_to_f32(src[2]);
            } else {
                let v = unorm8_to_f32(src[0]);
                dst[0] = v;
                dst[1] = v;
                dst[2] = v;
            }
            dst[3] = 1.0;
        }
    }
    Ok(pixels)
}
