use rayon::prelude::*;
use tracing::debug;

use crate::consts::{PARALLEL_PIXEL_THRESHOLD, RGBA_CHANNELS};
use crate::image_data::ImageData;
use crate::view::ChannelMask;

/// Display range fitted to the channels currently shown.
///
/// All channels on: the image's analyzed global range. All off: `[0, 1]`.
/// Otherwise the finite min/max over the enabled channels; `None` when they
/// hold no finite sample, in which case the caller keeps its range.
pub fn auto_range(image: &ImageData, mask: ChannelMask) -> Option<(f32, f32)> {
    if mask.is_all() {
        return Some((image.min_value, image.max_value));
    }
    if mask.is_none() {
        return Some(UNIT_RANGE);
    }

    let enabled = mask.enabled();
    let scan = |chunk: &[f32]| -> (f32, f32) {
        let mut lo = f32::INFINITY;
        let mut hi = f32::NEG_INFINITY;
        for px in chunk.chunks_exact(RGBA_CHANNELS) {
            for c in (0..3).filter(|&c| enabled[c]) {
                let v = px[c];
                if v.is_finite() {
                    lo = lo.min(v);
                    hi = hi.max(v);
                }
            }
        }
        (lo, hi)
    };
    let merge = |a: (f32, f32), b: (f32, f32)| (a.0.min(b.0), a.1.max(b.1));

    let (lo, hi) = if image.pixel_count() >= PARALLEL_PIXEL_THRESHOLD {
        image
            .pixels
            .par_chunks(RGBA_CHANNELS * 4096)
            .map(scan)
            .reduce(|| (f32::INFINITY, f32::NEG_INFINITY), merge)
    } else {
        scan(&image.pixels)
    };

    debug!(?mask, min = lo, max = hi, "Auto range scanned");
    (lo <= hi).then_some((lo, hi))
}

/// The "0-1" preset.
pub const UNIT_RANGE: (f32, f32) = (0.0, 1.0);
