use rayon::prelude::*;
use tracing::debug;

use crate::consts::{PARALLEL_PIXEL_THRESHOLD, RGBA_CHANNELS};
use crate::image_data::ImageData;

/// Result of scanning a buffer for its finite value range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeStats {
    pub min: f32,
    pub max: f32,
    pub has_nan: bool,
}

impl RangeStats {
    /// Range used when a buffer holds no finite samples.
    pub const EMPTY: RangeStats = RangeStats {
        min: 0.0,
        max: 1.0,
        has_nan: false,
    };
}

/// Running accumulator for min/max over finite samples.
#[derive(Clone, Copy)]
struct Accum {
    min: f32,
    max: f32,
    non_finite: bool,
}

impl Accum {
    const IDENTITY: Accum = Accum {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
        non_finite: false,
    };

    fn push(mut self, v: f32) -> Self {
        if v.is_finite() {
            self.min = self.min.min(v);
            self.max = self.max.max(v);
        } else {
            self.non_finite = true;
        }
        self
    }

    fn merge(self, other: Accum) -> Self {
        Accum {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
            non_finite: self.non_finite || other.non_finite,
        }
    }

    fn finish(self) -> RangeStats {
        if self.min > self.max {
            RangeStats {
                has_nan: self.non_finite,
                ..RangeStats::EMPTY
            }
        } else {
            RangeStats {
                min: self.min,
                max: self.max,
                has_nan: self.non_finite,
            }
        }
    }
}

/// Scan every sample (alpha included) for the finite min/max.
///
/// Any non-finite sample sets `has_nan`. A buffer with no finite samples
/// collapses to `[0, 1]`.
pub fn analyze_range(pixels: &[f32]) -> RangeStats {
    let pixel_count = pixels.len() / RGBA_CHANNELS;
    let acc = if pixel_count >= PARALLEL_PIXEL_THRESHOLD {
        pixels
            .par_chunks(RGBA_CHANNELS * 1024)
            .map(|chunk| chunk.iter().fold(Accum::IDENTITY, |a, &v| a.push(v)))
            .reduce(|| Accum::IDENTITY, Accum::merge)
    } else {
        pixels.iter().fold(Accum::IDENTITY, |a, &v| a.push(v))
    };
    acc.finish()
}

/// Owner of the currently displayed image.
///
/// Loading swaps the whole `ImageData`; readers borrow it through
/// [`ImageStore::image`] and never see a half-replaced image.
#[derive(Default)]
pub struct ImageStore {
    image: ImageData,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current image and fill in its range fields.
    pub fn load(&mut self, mut image: ImageData) -> RangeStats {
        let stats = analyze_range(&image.pixels);
        image.min_value = stats.min;
        image.max_value = stats.max;
        image.has_nan = stats.has_nan;
        debug!(
            file = %image.filename,
            min = stats.min,
            max = stats.max,
            has_nan = stats.has_nan,
            "Image range analyzed"
        );
        self.image = image;
        stats
    }

    /// Re-run range analysis on the held image.
    pub fn analyze_range(&self) -> RangeStats {
        analyze_range(&self.image.pixels)
    }

    pub fn clear(&mut self) {
        self.image = ImageData::default();
    }

    pub fn image(&self) -> &ImageData {
        &self.image
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[f32; 4]> {
        self.image.pixel(x, y)
    }
}
