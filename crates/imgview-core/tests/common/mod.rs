#![allow(dead_code)]

use std::path::{Path, PathBuf};

use imgview_core::image_data::ImageData;

const DDSD_CAPS: u32 = 0x1;
const DDSD_HEIGHT: u32 = 0x2;
const DDSD_WIDTH: u32 = 0x4;
const DDSD_PIXELFORMAT: u32 = 0x1000;
const DDPF_ALPHAPIXELS: u32 = 0x1;
const DDPF_FOURCC: u32 = 0x4;
const DDPF_RGB: u32 = 0x40;
const DDSCAPS_TEXTURE: u32 = 0x1000;

/// DXGI format codes used by the tests.
pub const DXGI_R32G32B32A32_FLOAT: u32 = 2;
pub const DXGI_R16G16B16A16_FLOAT: u32 = 10;
pub const DXGI_R16G16B16A16_UNORM: u32 = 11;
pub const DXGI_R10G10B10A2_UNORM: u32 = 24;
pub const DXGI_R11G11B10_FLOAT: u32 = 26;
pub const DXGI_R8_UNORM: u32 = 61;
pub const DXGI_BC4_UNORM: u32 = 80;
pub const DXGI_BC5_UNORM: u32 = 83;
pub const DXGI_B8G8R8A8_UNORM: u32 = 87;

/// Pixel format block of a DDS header.
pub enum DdsPixelFormat {
    FourCc([u8; 4]),
    /// 32-bit uncompressed with R in the low byte (A8B8G8R8).
    Rgba8,
}

/// Build a DDS file: magic, 124-byte header, optional DX10 header, surface.
pub fn build_dds(
    width: u32,
    height: u32,
    format: DdsPixelFormat,
    dxgi: Option<u32>,
    surface: &[u8],
) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"DDS ");

    // Header
    buf.extend_from_slice(&124u32.to_le_bytes());
    let flags = DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT;
    buf.extend_from_slice(&flags.to_le_bytes());
    buf.extend_from_slice(&height.to_le_bytes());
    buf.extend_from_slice(&width.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes()); // pitch / linear size
    buf.extend_from_slice(&0u32.to_le_bytes()); // depth
    buf.extend_from_slice(&0u32.to_le_bytes()); // mip count
    buf.extend_from_slice(&[0u8; 44]); // reserved1

    // Pixel format (32 bytes)
    buf.extend_from_slice(&32u32.to_le_bytes());
    let fourcc = match dxgi {
        Some(_) => *b"DX10",
        None => match format {
            DdsPixelFormat::FourCc(cc) => cc,
            DdsPixelFormat::Rgba8 => [0; 4],
        },
    };
    match (&format, dxgi) {
        (DdsPixelFormat::Rgba8, None) => {
            buf.extend_from_slice(&(DDPF_RGB | DDPF_ALPHAPIXELS).to_le_bytes());
            buf.extend_from_slice(&[0u8; 4]);
            buf.extend_from_slice(&32u32.to_le_bytes());
            buf.extend_from_slice(&0x0000_00FFu32.to_le_bytes());
            buf.extend_from_slice(&0x0000_FF00u32.to_le_bytes());
            buf.extend_from_slice(&0x00FF_0000u32.to_le_bytes());
            buf.extend_from_slice(&0xFF00_0000u32.to_le_bytes());
        }
        _ => {
            buf.extend_from_slice(&DDPF_FOURCC.to_le_bytes());
            buf.extend_from_slice(&fourcc);
            buf.extend_from_slice(&[0u8; 20]);
        }
    }

    // Caps
    buf.extend_from_slice(&DDSCAPS_TEXTURE.to_le_bytes());
    buf.extend_from_slice(&[0u8; 12]); // caps2..caps4
    buf.extend_from_slice(&[0u8; 4]); // reserved2
    assert_eq!(buf.len(), 4 + 124);

    if let Some(code) = dxgi {
        buf.extend_from_slice(&code.to_le_bytes());
        buf.extend_from_slice(&3u32.to_le_bytes()); // TEXTURE2D
        buf.extend_from_slice(&0u32.to_le_bytes()); // misc flag
        buf.extend_from_slice(&1u32.to_le_bytes()); // array size
        buf.extend_from_slice(&0u32.to_le_bytes()); // misc flags 2
    }

    buf.extend_from_slice(surface);
    buf
}

/// One BC1 block filling 4x4 pixels with `color0` (RGB565), opaque.
pub fn bc1_solid_block(color0: u16, color1: u16, indices: u8) -> [u8; 8] {
    let c0 = color0.to_le_bytes();
    let c1 = color1.to_le_bytes();
    [c0[0], c0[1], c1[0], c1[1], indices, indices, indices, indices]
}

/// Build a packed DIB (`BITMAPINFOHEADER` + pixels) from top-down rows of
/// BGR(A) bytes. Rows are padded to 4 bytes and stored bottom-up unless
/// `top_down` is set.
pub fn build_dib(
    width: u32,
    bpp: u16,
    top_down: bool,
    rows: &[Vec<u8>],
    compression: u32,
    palette_entries: u32,
) -> Vec<u8> {
    let height = rows.len() as i32;
    let stride = ((width as usize * bpp as usize + 31) / 32) * 4;

    let mut buf = Vec::new();
    buf.extend_from_slice(&40u32.to_le_bytes());
    buf.extend_from_slice(&(width as i32).to_le_bytes());
    let h = if top_down { -height } else { height };
    buf.extend_from_slice(&h.to_le_bytes());
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&bpp.to_le_bytes());
    buf.extend_from_slice(&compression.to_le_bytes());
    buf.extend_from_slice(&((stride * rows.len()) as u32).to_le_bytes());
    buf.extend_from_slice(&2835i32.to_le_bytes());
    buf.extend_from_slice(&2835i32.to_le_bytes());
    buf.extend_from_slice(&palette_entries.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes());
    assert_eq!(buf.len(), 40);

    if compression == 3 {
        // Channel masks; contents are not interpreted by the decoder.
        buf.extend_from_slice(&0x00FF_0000u32.to_le_bytes());
        buf.extend_from_slice(&0x0000_FF00u32.to_le_bytes());
        buf.extend_from_slice(&0x0000_00FFu32.to_le_bytes());
    }
    // Palette entries filled with a marker that would show up as 0xEE pixels.
    buf.extend(std::iter::repeat(0xEEu8).take(palette_entries as usize * 4));

    let ordered: Vec<&Vec<u8>> = if top_down {
        rows.iter().collect()
    } else {
        rows.iter().rev().collect()
    };
    for row in ordered {
        let mut padded = row.clone();
        padded.resize(stride, 0);
        buf.extend_from_slice(&padded);
    }
    buf
}

/// Write raw bytes to `dir/name` and return the path.
pub fn write_bytes(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("write fixture");
    path
}

/// Save an 8-bit RGBA image through the `image` crate; format follows the
/// extension of `name`.
pub fn write_rgba8(dir: &Path, name: &str, width: u32, height: u32, rgba: Vec<u8>) -> PathBuf {
    let path = dir.join(name);
    let img = image::RgbaImage::from_raw(width, height, rgba).expect("buffer size");
    img.save(&path).expect("save fixture");
    path
}

pub fn write_rgb8(dir: &Path, name: &str, width: u32, height: u32, rgb: Vec<u8>) -> PathBuf {
    let path = dir.join(name);
    let img = image::RgbImage::from_raw(width, height, rgb).expect("buffer size");
    img.save(&path).expect("save fixture");
    path
}

pub fn write_gray8(dir: &Path, name: &str, width: u32, height: u32, luma: Vec<u8>) -> PathBuf {
    let path = dir.join(name);
    let img = image::GrayImage::from_raw(width, height, luma).expect("buffer size");
    img.save(&path).expect("save fixture");
    path
}

/// Write a Radiance HDR file from RGB float triples.
pub fn write_hdr(dir: &Path, name: &str, width: usize, height: usize, rgb: &[[f32; 3]]) -> PathBuf {
    use image::codecs::hdr::HdrEncoder;
    let path = dir.join(name);
    let file = std::fs::File::create(&path).expect("create hdr");
    let pixels: Vec<image::Rgb<f32>> = rgb.iter().map(|&p| image::Rgb(p)).collect();
    HdrEncoder::new(std::io::BufWriter::new(file))
        .encode(&pixels, width, height)
        .expect("encode hdr");
    path
}

/// Write an OpenEXR file from RGBA float samples.
pub fn write_exr(dir: &Path, name: &str, width: u32, height: u32, rgba: Vec<f32>) -> PathBuf {
    let path = dir.join(name);
    let img = image::Rgba32FImage::from_raw(width, height, rgba).expect("buffer size");
    image::DynamicImage::ImageRgba32F(img)
        .save(&path)
        .expect("save exr");
    path
}

/// In-memory RGBA image.
pub fn rgba_image(width: usize, height: usize, pixels: Vec<f32>) -> ImageData {
    ImageData::from_rgba(width, height, pixels)
}

/// Image with every channel of every pixel set to `value`.
pub fn uniform_image(width: usize, height: usize, value: f32) -> ImageData {
    ImageData::from_rgba(width, height, vec![value; width * height * 4])
}

/// `width * height` gray ramp from 0 to 1 (alpha 1).
pub fn ramp_image(width: usize, height: usize) -> ImageData {
    let n = width * height;
    let mut pixels = Vec::with_capacity(n * 4);
    for i in 0..n {
        let v = if n > 1 { i as f32 / (n - 1) as f32 } else { 0.0 };
        pixels.extend_from_slice(&[v, v, v, 1.0]);
    }
    ImageData::from_rgba(width, height, pixels)
}
