use crate::consts::RGBA_CHANNELS;

/// A decoded image, expanded to 4-channel `f32` storage.
///
/// Created by a decoder and replaced wholesale on every load; never
/// mutated in place once it reaches the store.
#[derive(Clone, Debug)]
pub struct ImageData {
    /// RGBA samples, row-major, `width * height * 4` long.
    pub pixels: Vec<f32>,
    pub width: usize,
    pub height: usize,
    /// Channel count of the source (1-4). Storage is always RGBA.
    pub channels: u8,
    /// Source container label, e.g. "PNG", "HDR", "DDS".
    pub format: String,
    /// Representation before expansion, e.g. "RGBA8", "BC7".
    pub pixel_format: String,
    /// Display name (last path segment).
    pub filename: String,
    pub min_value: f32,
    pub max_value: f32,
    pub has_nan: bool,
}

impl Default for ImageData {
    fn default() -> Self {
        Self {
            pixels: Vec::new(),
            width: 0,
            height: 0,
            channels: 0,
            format: String::new(),
            pixel_format: String::new(),
            filename: String::new(),
            min_value: 0.0,
            max_value: 1.0,
            has_nan: false,
        }
    }
}

impl ImageData {
    /// Wrap an RGBA buffer. Range fields keep their defaults until the
    /// store analyzes the image.
    pub fn from_rgba(width: usize, height: usize, pixels: Vec<f32>) -> Self {
        debug_assert_eq!(pixels.len(), width * height * RGBA_CHANNELS);
        Self {
            pixels,
            width,
            height,
            channels: RGBA_CHANNELS as u8,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// RGBA value at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * RGBA_CHANNELS;
        let p = self.pixels.get(i..i + RGBA_CHANNELS)?;
        Some([p[0], p[1], p[2], p[3]])
    }

    /// Pixel at signed coordinates; negative values are out of bounds.
    pub fn pixel_at(&self, x: i64, y: i64) -> Option<[f32; 4]> {
        if x < 0 || y < 0 {
            return None;
        }
        self.pixel(x as usize, y as usize)
    }

    /// Sample count a `width` x `height` RGBA buffer must hold, or `None`
    /// when it does not fit in `usize`.
    pub fn expected_len(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)?
            .checked_mul(RGBA_CHANNELS)
    }
}

/// Convert 8-bit unorm samples to `f32` in [0, 1].
pub fn unorm8_to_f32(v: u8) -> f32 {
    v as f32 / 255.0
}
