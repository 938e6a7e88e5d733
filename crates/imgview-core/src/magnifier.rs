use crate::image_data::ImageData;
use crate::view::ChannelMask;

/// Display colour of one magnifier cell, RGBA in `[0, 1]`.
pub type Cell = [f32; 4];

/// A `size` x `size` neighbourhood around a centre pixel, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct MagnifierGrid {
    pub size: usize,
    pub centre: (usize, usize),
    /// `None` where the neighbourhood leaves the image.
    pub cells: Vec<Option<Cell>>,
}

impl MagnifierGrid {
    pub fn cell(&self, col: usize, row: usize) -> Option<Cell> {
        if col >= self.size || row >= self.size {
            return None;
        }
        self.cells[row * self.size + col]
    }

    pub fn centre_cell(&self) -> Option<Cell> {
        let half = self.size / 2;
        self.cell(half, half)
    }
}

/// Display range and channel selection the magnifier mirrors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnifierView {
    pub range_min: f32,
    pub range_max: f32,
    pub mask: ChannelMask,
}

impl MagnifierView {
    /// Remap one channel value into `[0, 1]`. A non-positive span counts
    /// as 1.
    fn remap(&self, v: f32) -> f32 {
        let mut span = self.range_max - self.range_min;
        if span <= 0.0 {
            span = 1.0;
        }
        ((v - self.range_min) / span).clamp(0.0, 1.0)
    }
}

pub struct Magnifier;

impl Magnifier {
    /// Sample the neighbourhood around `centre`. Masked channels read 0 and
    /// alpha is forced to 1 so every in-bounds cell is visible.
    pub fn sample(
        image: &ImageData,
        centre: (usize, usize),
        size: usize,
        view: &MagnifierView,
    ) -> MagnifierGrid {
        let half = (size / 2) as i64;
        let (cx, cy) = (centre.0 as i64, centre.1 as i64);
        let enabled = view.mask.enabled();

        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size as i64 {
            for col in 0..size as i64 {
                let cell = image.pixel_at(cx + col - half, cy + row - half).map(|p| {
                    let mut rgba = [0.0, 0.0, 0.0, 1.0];
                    for c in 0..3 {
                        if enabled[c] {
                            rgba[c] = view.remap(p[c]);
                        }
                    }
                    rgba
                });
                cells.push(cell);
            }
        }

        MagnifierGrid {
            size,
            centre,
            cells,
        }
    }
}

/// Raw pixel packed as `#RRGGBBAA`, each channel clamped to `[0, 1]`.
/// Non-finite channels read as 0.
pub fn hex_rgba(pixel: [f32; 4]) -> String {
    let byte = |v: f32| -> u8 {
        if v.is_finite() {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        } else {
            0
        }
    };
    format!(
        "#{:02X}{:02X}{:02X}{:02X}",
        byte(pixel[0]),
        byte(pixel[1]),
        byte(pixel[2]),
        byte(pixel[3])
    )
}
