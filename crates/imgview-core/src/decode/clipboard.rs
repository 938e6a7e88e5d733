use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};
use tracing::{debug, warn};

use crate::consts::RGBA_CHANNELS;
use crate::error::DecodeError;
use crate::image_data::{unorm8_to_f32, ImageData};

const BI_RGB: u32 = 0;
const BI_BITFIELDS: u32 = 3;
const INFO_HEADER_SIZE: u32 = 40;

/// Byte order of a 32-bit clipboard bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelOrder {
    Bgra,
    Rgba,
}

/// A 32-bit, top-down bitmap handed over by the OS (e.g. a screenshot).
#[derive(Clone, Debug)]
pub struct RawBitmap {
    pub width: usize,
    pub height: usize,
    pub order: ChannelOrder,
    pub bytes: Vec<u8>,
}

/// Where clipboard image data comes from.
///
/// Implementations must not hold the clipboard open beyond each call.
pub trait ClipboardSource {
    /// Packed device-independent bitmap: `BITMAPINFOHEADER`, optional colour
    /// table, then pixel rows.
    fn device_independent_bitmap(&mut self) -> Option<Vec<u8>>;

    /// Fallback bitmap, already expanded to 32 bits per pixel, top-down.
    fn bitmap(&mut self) -> Option<RawBitmap>;
}

/// Read an image from a clipboard source, preferring the DIB format.
pub fn decode_clipboard(source: &mut dyn ClipboardSource) -> Result<ImageData, DecodeError> {
    if let Some(dib) = source.device_independent_bitmap() {
        match decode_dib(&dib) {
            Ok(image) => return Ok(image),
            Err(e) => warn!("Clipboard DIB unusable: {e}"),
        }
    }

    if let Some(bitmap) = source.bitmap() {
        match decode_bitmap(&bitmap) {
            Ok(image) => return Ok(image),
            Err(e) => warn!("Clipboard bitmap unusable: {e}"),
        }
    }

    Err(DecodeError::NoClipboardImage)
}

struct DibHeader {
    size: u32,
    width: i32,
    height: i32,
    bit_count: u16,
    compression: u32,
    clr_used: u32,
}

fn read_dib_header(bytes: &[u8]) -> std::io::Result<DibHeader> {
    let mut cur = Cursor::new(bytes);
    let size = cur.read_u32::<LittleEndian>()?;
    let width = cur.read_i32::<LittleEndian>()?;
    let height = cur.read_i32::<LittleEndian>()?;
    let _planes = cur.read_u16::<LittleEndian>()?;
    let bit_count = cur.read_u16::<LittleEndian>()?;
    let compression = cur.read_u32::<LittleEndian>()?;
    let _size_image = cur.read_u32::<LittleEndian>()?;
    let _x_ppm = cur.read_i32::<LittleEndian>()?;
    let _y_ppm = cur.read_i32::<LittleEndian>()?;
    let clr_used = cur.read_u32::<LittleEndian>()?;
    Ok(DibHeader {
        size,
        width,
        height,
        bit_count,
        compression,
        clr_used,
    })
}

/// Decode a packed DIB with 24 or 32 bits per pixel.
///
/// Rows are padded to 4 bytes. A positive height means rows are stored
/// bottom-up. 24-bit sources get alpha 1.
pub fn decode_dib(bytes: &[u8]) -> Result<ImageData, DecodeError> {
    let header = read_dib_header(bytes)
        .map_err(|e| DecodeError::IoOrFormat(format!("DIB header: {e}")))?;

    if header.bit_count != 24 && header.bit_count != 32 {
        return Err(DecodeError::UnsupportedChannelLayout(format!(
            "{} bits per pixel",
            header.bit_count
        )));
    }
    if header.compression != BI_RGB && header.compression != BI_BITFIELDS {
        return Err(DecodeError::IoOrFormat(format!(
            "compressed DIB (type {})",
            header.compression
        )));
    }
    if header.width <= 0 || header.height == 0 {
        return Err(DecodeError::IoOrFormat(format!(
            "DIB dimensions {}x{}",
            header.width, header.height
        )));
    }

    let width = header.width as usize;
    let height = header.height.unsigned_abs() as usize;
    let top_down = header.height < 0;
    let bytes_pp = (header.bit_count / 8) as usize;
    let stride = (width * header.bit_count as usize).div_ceil(32) * 4;

    let mut offset = header.size as usize + header.clr_used as usize * 4;
    if header.compression == BI_BITFIELDS && header.size == INFO_HEADER_SIZE {
        // Three DWORD channel masks follow a plain info header.
        offset += 12;
    }
    let pixel_bytes = bytes
        .get(offset..)
        .filter(|p| p.len() >= stride * (height - 1) + width * bytes_pp)
        .ok_or_else(|| DecodeError::IoOrFormat("DIB pixel data truncated".into()))?;

    let mut pixels = vec![0.0f32; width * height * RGBA_CHANNELS];
    for (y, dst_row) in pixels.chunks_exact_mut(width * RGBA_CHANNELS).enumerate() {
        let src_y = if top_down { y } else { height - 1 - y };
        let src_row = &pixel_bytes[src_y * stride..];
        for (src, dst) in src_row
            .chunks_exact(bytes_pp)
            .take(width)
            .zip(dst_row.chunks_exact_mut(RGBA_CHANNELS))
        {
            dst[0] = unorm8_to_f32(src[2]);
            dst[1] = unorm8_to_f32(src[1]);
            dst[2] = unorm8_to_f32(src[0]);
            dst[3] = if bytes_pp == 4 {
                unorm8_to_f32(src[3])
            } else {
                1.0
            };
        }
    }

    debug!(width, height, bits = header.bit_count, top_down, "Clipboard DIB decoded");
    let mut data = ImageData::from_rgba(width, height, pixels);
    data.channels = bytes_pp as u8;
    data.format = "Clipboard".to_string();
    data.pixel_format = "RGBA8".to_string();
    data.filename = "Clipboard Image".to_string();
    Ok(data)
}

/// Decode the fallback bitmap. Alpha is forced to 1, screenshots are opaque.
pub fn decode_bitmap(bitmap: &RawBitmap) -> Result<ImageData, DecodeError> {
    let RawBitmap {
        width,
        height,
        order,
        ref bytes,
    } = *bitmap;
    if width == 0 || height == 0 || bytes.len() < width * height * 4 {
        return Err(DecodeError::IoOrFormat(format!(
            "clipboard bitmap {width}x{height} with {} bytes",
            bytes.len()
        )));
    }

    let pixels: Vec<f32> = bytes
        .chunks_exact(4)
        .take(width * height)
        .flat_map(|p| {
            let (r, g, b) = match order {
                ChannelOrder::Bgra => (p[2], p[1], p[0]),
                ChannelOrder::Rgba => (p[0], p[1], p[2]),
            };
            [unorm8_to_f32(r), unorm8_to_f32(g), unorm8_to_f32(b), 1.0]
        })
        .collect();

    let mut data = ImageData::from_rgba(width, height, pixels);
    data.format = "Clipboard (Bitmap)".to_string();
    data.pixel_format = "RGBA8".to_string();
    data.filename = "Clipboard Screenshot".to_string();
    Ok(data)
}

/// The operating system clipboard.
///
/// Every call opens the clipboard and releases it before returning.
#[cfg(feature = "clipboard")]
#[derive(Default)]
pub struct SystemClipboard;

#[cfg(feature = "clipboard")]
impl ClipboardSource for SystemClipboard {
    #[cfg(windows)]
    fn device_independent_bitmap(&mut self) -> Option<Vec<u8>> {
        use clipboard_win::{formats, get_clipboard};
        get_clipboard(formats::RawData(formats::CF_DIB)).ok()
    }

    #[cfg(not(windows))]
    fn device_independent_bitmap(&mut self) -> Option<Vec<u8>> {
        None
    }

    fn bitmap(&mut self) -> Option<RawBitmap> {
        let mut clipboard = match arboard::Clipboard::new() {
            Ok(c) => c,
            Err(e) => {
                warn!("Clipboard unavailable: {e}");
                return None;
            }
        };
        let image = clipboard.get_image().ok()?;
        Some(RawBitmap {
            width: image.width,
            height: image.height,
            order: ChannelOrder::Rgba,
            bytes: image.bytes.into_owned(),
        })
    }
}

/// Read whatever image the OS clipboard currently holds.
#[cfg(feature = "clipboard")]
pub fn decode_system_clipboard() -> Result<ImageData, DecodeError> {
    decode_clipboard(&mut SystemClipboard)
}
