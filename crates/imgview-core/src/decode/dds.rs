use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ddsfile::{D3DFormat, Dds, DxgiFormat, FourCC};
use half::f16;
use tracing::debug;

use crate::consts::RGBA_CHANNELS;
use crate::error::DecodeError;
use crate::image_data::{unorm8_to_f32, ImageData};

/// Pixel layout of the top-level DDS surface.
///
/// Channels missing from a layout decode as 0, missing alpha as 1.
/// Luminance layouts replicate into R, G and B.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SurfaceFormat {
    Rgba8,
    Rgbx8,
    Bgra8,
    Bgrx8,
    R8,
    Rg8,
    L8,
    A8,
    Rgba16,
    Rg16,
    R16,
    L16,
    Rgba16F,
    Rg16F,
    R16F,
    Rgba32F,
    Rgb32F,
    Rg32F,
    R32F,
    Rgb10A2,
    Rg11B10F,
    Rgb9E5,
    B5G6R5,
    Bc1,
    Bc2,
    Bc3,
    Bc4,
    Bc4S,
    Bc5,
    Bc5S,
    Bc6H,
    Bc6HS,
    Bc7,
    Unknown,
}

impl SurfaceFormat {
    pub(crate) fn label(self) -> &'static str {
        match self {
            SurfaceFormat::Rgba8 => "RGBA8",
            SurfaceFormat::Rgbx8 => "RGBX8",
            SurfaceFormat::Bgra8 => "BGRA8",
            SurfaceFormat::Bgrx8 => "BGRX8",
            SurfaceFormat::R8 => "R8",
            SurfaceFormat::Rg8 => "RG8",
            SurfaceFormat::L8 => "L8",
            SurfaceFormat::A8 => "A8",
            SurfaceFormat::Rgba16 => "RGBA16",
            SurfaceFormat::Rg16 => "RG16",
            SurfaceFormat::R16 => "R16",
            SurfaceFormat::L16 => "L16",
            SurfaceFormat::Rgba16F => "RGBA16F",
            SurfaceFormat::Rg16F => "RG16F",
            SurfaceFormat::R16F => "R16F",
            SurfaceFormat::Rgba32F => "RGBA32F",
            SurfaceFormat::Rgb32F => "RGB32F",
            SurfaceFormat::Rg32F => "RG32F",
            SurfaceFormat::R32F => "R32F",
            SurfaceFormat::Rgb10A2 => "RGB10A2",
            SurfaceFormat::Rg11B10F => "RG11B10F",
            SurfaceFormat::Rgb9E5 => "RGB9E5",
            SurfaceFormat::B5G6R5 => "B5G6R5",
            SurfaceFormat::Bc1 => "BC1",
            SurfaceFormat::Bc2 => "BC2",
            SurfaceFormat::Bc3 => "BC3",
            SurfaceFormat::Bc4 => "BC4",
            SurfaceFormat::Bc4S => "BC4S",
            SurfaceFormat::Bc5 => "BC5",
            SurfaceFormat::Bc5S => "BC5S",
            SurfaceFormat::Bc6H => "BC6H",
            SurfaceFormat::Bc6HS => "BC6HS",
            SurfaceFormat::Bc7 => "BC7",
            SurfaceFormat::Unknown => "Unknown",
        }
    }

    fn block_bytes(self) -> Option<usize> {
        match self {
            SurfaceFormat::Bc1 | SurfaceFormat::Bc4 | SurfaceFormat::Bc4S => Some(8),
            SurfaceFormat::Bc2
            | SurfaceFormat::Bc3
            | SurfaceFormat::Bc5
            | SurfaceFormat::Bc5S
            | SurfaceFormat::Bc6H
            | SurfaceFormat::Bc6HS
            | SurfaceFormat::Bc7 => Some(16),
            _ => None,
        }
    }

    fn texel_bytes(self) -> Option<usize> {
        let bytes = match self {
            SurfaceFormat::R8 | SurfaceFormat::L8 | SurfaceFormat::A8 => 1,
            SurfaceFormat::Rg8
            | SurfaceFormat::R16
            | SurfaceFormat::L16
            | SurfaceFormat::R16F
            | SurfaceFormat::B5G6R5 => 2,
            SurfaceFormat::Rgba8
            | SurfaceFormat::Rgbx8
            | SurfaceFormat::Bgra8
            | SurfaceFormat::Bgrx8
            | SurfaceFormat::Rg16
            | SurfaceFormat::Rg16F
            | SurfaceFormat::R32F
            | SurfaceFormat::Rgb10A2
            | SurfaceFormat::Rg11B10F
            | SurfaceFormat::Rgb9E5 => 4,
            SurfaceFormat::Rgba16 | SurfaceFormat::Rgba16F | SurfaceFormat::Rg32F => 8,
            SurfaceFormat::Rgb32F => 12,
            SurfaceFormat::Rgba32F => 16,
            _ => return None,
        };
        Some(bytes)
    }

    fn is_compressed(self) -> bool {
        self.block_bytes().is_some()
    }

    /// Byte size of a `width` x `height` surface.
    ///
    /// Fails for layouts without a converter and for dimensions whose size
    /// does not fit in memory.
    fn surface_bytes(self, width: usize, height: usize) -> Result<usize, DecodeError> {
        let (columns, rows, unit) = match (self.block_bytes(), self.texel_bytes()) {
            (Some(block), _) => (width.div_ceil(4), height.div_ceil(4), block),
            (None, Some(texel)) => (width, height, texel),
            (None, None) => {
                return Err(DecodeError::IoOrFormat(format!(
                    "cannot convert DDS format {} to RGBA32F",
                    self.label()
                )))
            }
        };
        columns
            .checked_mul(rows)
            .and_then(|n| n.checked_mul(unit))
            .ok_or_else(|| too_large(width, height))
    }

    /// One uncompressed texel as RGBA.
    fn texel(self, p: &[u8]) -> [f32; 4] {
        let u8n = unorm8_to_f32;
        match self {
            SurfaceFormat::Rgba8 => rgba8(p),
            SurfaceFormat::Rgbx8 => [u8n(p[0]), u8n(p[1]), u8n(p[2]), 1.0],
            SurfaceFormat::Bgra8 => [u8n(p[2]), u8n(p[1]), u8n(p[0]), u8n(p[3])],
            SurfaceFormat::Bgrx8 => [u8n(p[2]), u8n(p[1]), u8n(p[0]), 1.0],
            SurfaceFormat::R8 => [u8n(p[0]), 0.0, 0.0, 1.0],
            SurfaceFormat::Rg8 => [u8n(p[0]), u8n(p[1]), 0.0, 1.0],
            SurfaceFormat::L8 => luminance(u8n(p[0])),
            SurfaceFormat::A8 => [0.0, 0.0, 0.0, u8n(p[0])],
            SurfaceFormat::Rgba16 => [
                unorm16(p, 0),
                unorm16(p, 1),
                unorm16(p, 2),
                unorm16(p, 3),
            ],
            SurfaceFormat::Rg16 => [unorm16(p, 0), unorm16(p, 1), 0.0, 1.0],
            SurfaceFormat::R16 => [unorm16(p, 0), 0.0, 0.0, 1.0],
            SurfaceFormat::L16 => luminance(unorm16(p, 0)),
            SurfaceFormat::Rgba16F => [half(p, 0), half(p, 1), half(p, 2), half(p, 3)],
            SurfaceFormat::Rg16F => [half(p, 0), half(p, 1), 0.0, 1.0],
            SurfaceFormat::R16F => [half(p, 0), 0.0, 0.0, 1.0],
            SurfaceFormat::Rgba32F => [float(p, 0), float(p, 1), float(p, 2), float(p, 3)],
            SurfaceFormat::Rgb32F => [float(p, 0), float(p, 1), float(p, 2), 1.0],
            SurfaceFormat::Rg32F => [float(p, 0), float(p, 1), 0.0, 1.0],
            SurfaceFormat::R32F => [float(p, 0), 0.0, 0.0, 1.0],
            SurfaceFormat::Rgb10A2 => {
                let bits = packed(p);
                [
                    (bits & 0x3FF) as f32 / 1023.0,
                    ((bits >> 10) & 0x3FF) as f32 / 1023.0,
                    ((bits >> 20) & 0x3FF) as f32 / 1023.0,
                    (bits >> 30) as f32 / 3.0,
                ]
            }
            SurfaceFormat::Rg11B10F => {
                let bits = packed(p);
                [
                    small_float(bits & 0x7FF, 6),
                    small_float((bits >> 11) & 0x7FF, 6),
                    small_float(bits >> 22, 5),
                    1.0,
                ]
            }
            SurfaceFormat::Rgb9E5 => {
                let bits = packed(p);
                let scale = 2f32.powi((bits >> 27) as i32 - 15 - 9);
                [
                    (bits & 0x1FF) as f32 * scale,
                    ((bits >> 9) & 0x1FF) as f32 * scale,
                    ((bits >> 18) & 0x1FF) as f32 * scale,
                    1.0,
                ]
            }
            SurfaceFormat::B5G6R5 => {
                let bits = u16::from_le_bytes([p[0], p[1]]);
                [
                    (bits >> 11) as f32 / 31.0,
                    ((bits >> 5) & 0x3F) as f32 / 63.0,
                    (bits & 0x1F) as f32 / 31.0,
                    1.0,
                ]
            }
            _ => [0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Decompress one 4x4 block into row-major RGBA texels.
    fn decode_block(self, block: &[u8], out: &mut [[f32; 4]; 16]) {
        match self {
            SurfaceFormat::Bc1 | SurfaceFormat::Bc2 | SurfaceFormat::Bc3 | SurfaceFormat::Bc7 => {
                let decode: fn(&[u8], &mut [u8], usize) = match self {
                    SurfaceFormat::Bc1 => bcdec_rs::bc1,
                    SurfaceFormat::Bc2 => bcdec_rs::bc2,
                    SurfaceFormat::Bc3 => bcdec_rs::bc3,
                    _ => bcdec_rs::bc7,
                };
                let mut rgba = [0u8; 16 * RGBA_CHANNELS];
                decode(block, &mut rgba, 4 * RGBA_CHANNELS);
                for (texel, src) in out.iter_mut().zip(rgba.chunks_exact(RGBA_CHANNELS)) {
                    *texel = rgba8(src);
                }
            }
            SurfaceFormat::Bc4 | SurfaceFormat::Bc4S => {
                let mut red = [0f32; 16];
                bcdec_rs::bc4_float(block, &mut red, 4, self == SurfaceFormat::Bc4S);
                for (texel, &r) in out.iter_mut().zip(&red) {
                    *texel = [r, 0.0, 0.0, 1.0];
                }
            }
            SurfaceFormat::Bc5 | SurfaceFormat::Bc5S => {
                let mut rg = [0f32; 32];
                bcdec_rs::bc5_float(block, &mut rg, 8, self == SurfaceFormat::Bc5S);
                for (texel, src) in out.iter_mut().zip(rg.chunks_exact(2)) {
                    *texel = [src[0], src[1], 0.0, 1.0];
                }
            }
            SurfaceFormat::Bc6H | SurfaceFormat::Bc6HS => {
                let mut rgb = [0f32; 48];
                bcdec_rs::bc6h_float(block, &mut rgb, 12, self == SurfaceFormat::Bc6HS);
                for (texel, src) in out.iter_mut().zip(rgb.chunks_exact(3)) {
                    *texel = [src[0], src[1], src[2], 1.0];
                }
            }
            _ => {}
        }
    }
}

fn rgba8(p: &[u8]) -> [f32; 4] {
    [
        unorm8_to_f32(p[0]),
        unorm8_to_f32(p[1]),
        unorm8_to_f32(p[2]),
        unorm8_to_f32(p[3]),
    ]
}

fn luminance(l: f32) -> [f32; 4] {
    [l, l, l, 1.0]
}

fn unorm16(p: &[u8], i: usize) -> f32 {
    u16::from_le_bytes([p[2 * i], p[2 * i + 1]]) as f32 / 65535.0
}

fn half(p: &[u8], i: usize) -> f32 {
    f16::from_le_bytes([p[2 * i], p[2 * i + 1]]).to_f32()
}

fn float(p: &[u8], i: usize) -> f32 {
    f32::from_le_bytes([p[4 * i], p[4 * i + 1], p[4 * i + 2], p[4 * i + 3]])
}

fn packed(p: &[u8]) -> u32 {
    u32::from_le_bytes([p[0], p[1], p[2], p[3]])
}

/// Unsigned float with a 5-bit exponent, widened to a half float.
fn small_float(bits: u32, mantissa_bits: u32) -> f32 {
    let exponent = (bits >> mantissa_bits) & 0x1F;
    let mantissa = bits & ((1 << mantissa_bits) - 1);
    f16::from_bits(((exponent << 10) | (mantissa << (10 - mantissa_bits))) as u16).to_f32()
}

fn too_large(width: usize, height: usize) -> DecodeError {
    DecodeError::IoOrFormat(format!("DDS surface {width}x{height} is too large"))
}

fn surface_format(dds: &Dds) -> SurfaceFormat {
    if let Some(dxgi) = dds.get_dxgi_format() {
        return match dxgi {
            DxgiFormat::R8G8B8A8_UNorm | DxgiFormat::R8G8B8A8_UNorm_sRGB => SurfaceFormat::Rgba8,
            DxgiFormat::B8G8R8A8_UNorm | DxgiFormat::B8G8R8A8_UNorm_sRGB => SurfaceFormat::Bgra8,
            DxgiFormat::B8G8R8X8_UNorm | DxgiFormat::B8G8R8X8_UNorm_sRGB => SurfaceFormat::Bgrx8,
            DxgiFormat::R8_UNorm => SurfaceFormat::R8,
            DxgiFormat::R8G8_UNorm => SurfaceFormat::Rg8,
            DxgiFormat::A8_UNorm => SurfaceFormat::A8,
            DxgiFormat::R16G16B16A16_UNorm => SurfaceFormat::Rgba16,
            DxgiFormat::R16G16_UNorm => SurfaceFormat::Rg16,
            DxgiFormat::R16_UNorm => SurfaceFormat::R16,
            DxgiFormat::R16G16B16A16_Float => SurfaceFormat::Rgba16F,
            DxgiFormat::R16G16_Float => SurfaceFormat::Rg16F,
            DxgiFormat::R16_Float => SurfaceFormat::R16F,
            DxgiFormat::R32G32B32A32_Float => SurfaceFormat::Rgba32F,
            DxgiFormat::R32G32B32_Float => SurfaceFormat::Rgb32F,
            DxgiFormat::R32G32_Float => SurfaceFormat::Rg32F,
            DxgiFormat::R32_Float => SurfaceFormat::R32F,
            DxgiFormat::R10G10B10A2_UNorm => SurfaceFormat::Rgb10A2,
            DxgiFormat::R11G11B10_Float => SurfaceFormat::Rg11B10F,
            DxgiFormat::R9G9B9E5_SharedExp => SurfaceFormat::Rgb9E5,
            DxgiFormat::B5G6R5_UNorm => SurfaceFormat::B5G6R5,
            DxgiFormat::BC1_UNorm | DxgiFormat::BC1_UNorm_sRGB => SurfaceFormat::Bc1,
            DxgiFormat::BC2_UNorm | DxgiFormat::BC2_UNorm_sRGB => SurfaceFormat::Bc2,
            DxgiFormat::BC3_UNorm | DxgiFormat::BC3_UNorm_sRGB => SurfaceFormat::Bc3,
            DxgiFormat::BC4_UNorm => SurfaceFormat::Bc4,
            DxgiFormat::BC4_SNorm => SurfaceFormat::Bc4S,
            DxgiFormat::BC5_UNorm => SurfaceFormat::Bc5,
            DxgiFormat::BC5_SNorm => SurfaceFormat::Bc5S,
            DxgiFormat::BC6H_UF16 => SurfaceFormat::Bc6H,
            DxgiFormat::BC6H_SF16 => SurfaceFormat::Bc6HS,
            DxgiFormat::BC7_UNorm | DxgiFormat::BC7_UNorm_sRGB => SurfaceFormat::Bc7,
            _ => SurfaceFormat::Unknown,
        };
    }
    let legacy = match dds.get_d3d_format() {
        Some(D3DFormat::DXT1) => SurfaceFormat::Bc1,
        Some(D3DFormat::DXT2 | D3DFormat::DXT3) => SurfaceFormat::Bc2,
        Some(D3DFormat::DXT4 | D3DFormat::DXT5) => SurfaceFormat::Bc3,
        Some(D3DFormat::A8B8G8R8) => SurfaceFormat::Rgba8,
        Some(D3DFormat::X8B8G8R8) => SurfaceFormat::Rgbx8,
        Some(D3DFormat::A8R8G8B8) => SurfaceFormat::Bgra8,
        Some(D3DFormat::X8R8G8B8) => SurfaceFormat::Bgrx8,
        Some(D3DFormat::L8) => SurfaceFormat::L8,
        Some(D3DFormat::L16) => SurfaceFormat::L16,
        Some(D3DFormat::A8) => SurfaceFormat::A8,
        Some(D3DFormat::R5G6B5) => SurfaceFormat::B5G6R5,
        Some(D3DFormat::A2B10G10R10) => SurfaceFormat::Rgb10A2,
        Some(D3DFormat::G16R16) => SurfaceFormat::Rg16,
        Some(D3DFormat::A16B16G16R16) => SurfaceFormat::Rgba16,
        Some(D3DFormat::R16F) => SurfaceFormat::R16F,
        Some(D3DFormat::G16R16F) => SurfaceFormat::Rg16F,
        Some(D3DFormat::A16B16G16R16F) => SurfaceFormat::Rgba16F,
        Some(D3DFormat::R32F) => SurfaceFormat::R32F,
        Some(D3DFormat::G32R32F) => SurfaceFormat::Rg32F,
        Some(D3DFormat::A32B32G32R32F) => SurfaceFormat::Rgba32F,
        _ => SurfaceFormat::Unknown,
    };
    if legacy != SurfaceFormat::Unknown {
        return legacy;
    }
    // One- and two-channel block formats only have FourCC codes.
    match dds.header.spf.fourcc.as_ref().map(|cc| cc.0) {
        Some(FourCC::ATI1 | FourCC::BC4_UNORM) => SurfaceFormat::Bc4,
        Some(FourCC::BC4_SNORM) => SurfaceFormat::Bc4S,
        Some(FourCC::ATI2) => SurfaceFormat::Bc5,
        Some(FourCC::BC5_SNORM) => SurfaceFormat::Bc5S,
        _ => SurfaceFormat::Unknown,
    }
}

/// Decode the first mip of the first array layer of a DDS file.
pub(super) fn decode_dds(path: &Path) -> Result<ImageData, DecodeError> {
    let mut reader = BufReader::new(File::open(path)?);
    let dds = Dds::read(&mut reader)
        .map_err(|e| DecodeError::IoOrFormat(format!("DDS load failed: {e}")))?;
    drop(reader);

    let width = dds.get_width() as usize;
    let height = dds.get_height() as usize;
    let format = surface_format(&dds);
    debug!(width, height, ?format, "DDS header read");

    let pixels = decode_surface(format, &dds.data, width, height)?;

    let mut data = ImageData::from_rgba(width, height, pixels);
    data.format = "DDS".to_string();
    data.pixel_format = format.label().to_string();
    data.channels = RGBA_CHANNELS as u8;
    Ok(data)
}

/// Convert raw surface bytes to RGBA `f32`, decompressing block formats.
///
/// The result always holds exactly `width * height * 4` samples.
pub(crate) fn decode_surface(
    format: SurfaceFormat,
    bytes: &[u8],
    width: usize,
    height: usize,
) -> Result<Vec<f32>, DecodeError> {
    let needed = format.surface_bytes(width, height)?;
    let sample_count = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(RGBA_CHANNELS))
        .ok_or_else(|| too_large(width, height))?;
    let surface = bytes.get(..needed).ok_or_else(|| {
        DecodeError::IoOrFormat(format!(
            "DDS surface truncated: {} of {needed} bytes",
            bytes.len()
        ))
    })?;

    let pixels = if format.is_compressed() {
        decompress_blocks(format, surface, width, height, sample_count)
    } else {
        let texel = format.texel_bytes().unwrap_or(RGBA_CHANNELS);
        surface
            .chunks_exact(texel)
            .flat_map(|p| format.texel(p))
            .collect::<Vec<f32>>()
    };

    if pixels.len() != sample_count {
        return Err(DecodeError::IoOrFormat(format!(
            "DDS {} surface decoded to {} of {sample_count} samples",
            format.label(),
            pixels.len()
        )));
    }
    Ok(pixels)
}

/// Decompress 4x4 blocks into an RGBA surface, clipping partial edge blocks.
fn decompress_blocks(
    format: SurfaceFormat,
    surface: &[u8],
    width: usize,
    height: usize,
    sample_count: usize,
) -> Vec<f32> {
    let block_bytes = format.block_bytes().unwrap_or(16);
    let blocks_x = width.div_ceil(4);
    let row_pitch = width * RGBA_CHANNELS;
    let mut out = vec![0f32; sample_count];
    let mut texels = [[0f32; 4]; 16];

    for (i, block) in surface.chunks_exact(block_bytes).enumerate() {
        format.decode_block(block, &mut texels);

        let bx = (i % blocks_x) * 4;
        let by = (i / blocks_x) * 4;
        let cols = 4.min(width - bx);
        for row in 0..4 {
            let y = by + row;
            if y >= height {
                break;
            }
            let dst_start = y * row_pitch + bx * RGBA_CHANNELS;
            let dst = &mut out[dst_start..dst_start + cols * RGBA_CHANNELS];
            for (d, texel) in dst.chunks_exact_mut(RGBA_CHANNELS).zip(&texels[row * 4..]) {
                d.copy_from_slice(texel);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bc1_solid_white_block() {
        let block = [0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0];
        let pixels = decode_surface(SurfaceFormat::Bc1, &block, 4, 4).unwrap();
        assert_eq!(pixels.len(), 64);
        assert!(pixels.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn partial_edge_block_is_clipped() {
        let block = [0xFF, 0xFF, 0x00, 0x00, 0, 0, 0, 0];
        let pixels = decode_surface(SurfaceFormat::Bc1, &block, 3, 2).unwrap();
        assert_eq!(pixels.len(), 3 * 2 * 4);
    }

    #[test]
    fn bgra_is_swizzled() {
        let pixels = decode_surface(SurfaceFormat::Bgra8, &[0, 0, 255, 255], 1, 1).unwrap();
        assert_eq!(pixels, vec![1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn single_channel_layouts_fill_missing_channels() {
        let r8 = decode_surface(SurfaceFormat::R8, &[255], 1, 1).unwrap();
        assert_eq!(r8, vec![1.0, 0.0, 0.0, 1.0]);
        let l8 = decode_surface(SurfaceFormat::L8, &[255], 1, 1).unwrap();
        assert_eq!(l8, vec![1.0, 1.0, 1.0, 1.0]);
        let a8 = decode_surface(SurfaceFormat::A8, &[255], 1, 1).unwrap();
        assert_eq!(a8, vec![0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn packed_layouts_unpack() {
        // R = 1023, G = 0, B = 1023, A = 3
        let bits: u32 = 0x3FF | (0x3FF << 20) | (3 << 30);
        let rgb10a2 = decode_surface(SurfaceFormat::Rgb10A2, &bits.to_le_bytes(), 1, 1).unwrap();
        assert_eq!(rgb10a2, vec![1.0, 0.0, 1.0, 1.0]);

        // 1.0 in 11/10-bit floats: exponent 15, mantissa 0.
        let one11 = 15u32 << 6;
        let one10 = 15u32 << 5;
        let bits = one11 | (one11 << 11) | (one10 << 22);
        let rg11b10 = decode_surface(SurfaceFormat::Rg11B10F, &bits.to_le_bytes(), 1, 1).unwrap();
        assert_eq!(rg11b10, vec![1.0, 1.0, 1.0, 1.0]);

        // Shared exponent 16 scales mantissas by 2^-8: 256 -> 1.0, 128 -> 0.5.
        let bits: u32 = 256 | (128 << 9) | (16 << 27);
        let rgb9e5 = decode_surface(SurfaceFormat::Rgb9E5, &bits.to_le_bytes(), 1, 1).unwrap();
        assert_eq!(rgb9e5, vec![1.0, 0.5, 0.0, 1.0]);

        let b5g6r5 = decode_surface(SurfaceFormat::B5G6R5, &0xF800u16.to_le_bytes(), 1, 1).unwrap();
        assert_eq!(b5g6r5, vec![1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn bc5_block_fills_red_and_green() {
        let mut block = [0u8; 16];
        block[0] = 255;
        block[8] = 255;
        let pixels = decode_surface(SurfaceFormat::Bc5, &block, 4, 4).unwrap();
        assert_eq!(pixels.len(), 64);
        for texel in pixels.chunks_exact(4) {
            assert_eq!(texel, [1.0, 1.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn bc6h_zero_block_is_opaque_black() {
        let pixels = decode_surface(SurfaceFormat::Bc6H, &[0; 16], 4, 4).unwrap();
        assert_eq!(pixels.len(), 64);
        for texel in pixels.chunks_exact(4) {
            assert_eq!(texel[3], 1.0);
            assert!(texel[..3].iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn unknown_format_fails_conversion() {
        let err = decode_surface(SurfaceFormat::Unknown, &[0; 16], 1, 1).unwrap_err();
        assert!(matches!(err, DecodeError::IoOrFormat(_)));
    }

    #[test]
    fn truncated_surface_is_rejected() {
        let err = decode_surface(SurfaceFormat::Rgba32F, &[0; 8], 1, 1).unwrap_err();
        assert!(matches!(err, DecodeError::IoOrFormat(_)));
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let huge = usize::MAX / 2;
        let err = decode_surface(SurfaceFormat::Rgba32F, &[0; 16], huge, huge).unwrap_err();
        assert!(matches!(err, DecodeError::IoOrFormat(_)));
        let err = decode_surface(SurfaceFormat::Bc1, &[0; 8], huge, huge).unwrap_err();
        assert!(matches!(err, DecodeError::IoOrFormat(_)));
    }
}
