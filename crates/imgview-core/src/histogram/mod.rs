pub mod plot;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::consts::{PARALLEL_PIXEL_THRESHOLD, RGBA_CHANNELS};
use crate::image_data::ImageData;

pub use plot::{DragHandle, PlotView, RangeDrag};

/// Per-channel (R, G, B) counts over `[min, max]`.
///
/// Built fresh for every rebuild; never updated incrementally.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Histogram {
    pub bins: [Vec<u64>; 3],
    pub min: f32,
    pub max: f32,
}

impl Histogram {
    /// Bin the finite R, G and B samples of `image`.
    ///
    /// Each sample lands in `round((v - min) / (max - min) * (n - 1))`,
    /// clamped to the valid bins, so values outside the range pile up at
    /// the ends. A range with `max <= min` is widened to `[min, min + 1]`.
    pub fn build(image: &ImageData, range_min: f32, range_max: f32, bin_count: usize) -> Self {
        let n = bin_count.max(1);
        let min = range_min;
        let max = if range_max <= range_min {
            range_min + 1.0
        } else {
            range_max
        };
        let scale = (n - 1) as f32 / (max - min);

        let bin_chunk = |chunk: &[f32]| -> [Vec<u64>; 3] {
            let mut bins = [vec![0u64; n], vec![0u64; n], vec![0u64; n]];
            for px in chunk.chunks_exact(RGBA_CHANNELS) {
                for (c, counts) in bins.iter_mut().enumerate() {
                    let v = px[c];
                    if !v.is_finite() {
                        continue;
                    }
                    let b = ((v - min) * scale).round().clamp(0.0, (n - 1) as f32) as usize;
                    counts[b] += 1;
                }
            }
            bins
        };

        let bins = if image.pixel_count() >= PARALLEL_PIXEL_THRESHOLD {
            image
                .pixels
                .par_chunks(RGBA_CHANNELS * 4096)
                .map(bin_chunk)
                .reduce(
                    || [vec![0u64; n], vec![0u64; n], vec![0u64; n]],
                    |mut a, b| {
                        for (dst, src) in a.iter_mut().zip(b.iter()) {
                            for (d, s) in dst.iter_mut().zip(src) {
                                *d += s;
                            }
                        }
                        a
                    },
                )
        } else {
            bin_chunk(&image.pixels)
        };

        debug!(bins = n, min, max, "Histogram built");
        Self { bins, min, max }
    }

    pub fn bin_count(&self) -> usize {
        self.bins[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins[0].is_empty()
    }

    /// Total count of one channel.
    pub fn total(&self, channel: usize) -> u64 {
        self.bins[channel].iter().sum()
    }

    /// Value at the centre of bin `i`.
    pub fn bin_value(&self, i: usize) -> f32 {
        let n = self.bin_count();
        if n <= 1 {
            return self.min;
        }
        self.min + i as f32 / (n - 1) as f32 * (self.max - self.min)
    }

    /// Largest `log_scale` over all bins and channels, never below `ln 2`.
    pub fn log_peak(&self) -> f32 {
        self.bins
            .iter()
            .flatten()
            .map(|&c| log_scale(c))
            .fold(std::f32::consts::LN_2, f32::max)
    }

    /// Bar heights in `[0, 1]` for one channel on the log scale.
    pub fn normalized(&self, channel: usize) -> Vec<f32> {
        let peak = self.log_peak();
        self.bins[channel]
            .iter()
            .map(|&c| log_scale(c) / peak)
            .collect()
    }
}

/// Display height of a bin: `ln(count + 1)`, zero for empty bins.
pub fn log_scale(count: u64) -> f32 {
    (count as f32 + 1.0).ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_scale_of_empty_bin_is_zero() {
        assert_eq!(log_scale(0), 0.0);
        assert!((log_scale(1) - std::f32::consts::LN_2).abs() < 1e-6);
    }

    #[test]
    fn single_bin_holds_everything() {
        let image = ImageData::from_rgba(1, 2, vec![0.2, 0.4, 0.6, 1.0, -3.0, 9.0, 0.5, 1.0]);
        let h = Histogram::build(&image, 0.0, 1.0, 1);
        assert_eq!(h.bins[0], vec![2]);
        assert_eq!(h.bin_value(0), 0.0);
    }
}
