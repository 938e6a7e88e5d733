use rayon::prelude::*;

use imgview_core::consts::RGBA_CHANNELS;
use imgview_core::image_data::ImageData;
use imgview_core::view::RenderParams;

/// Remap an image through the range and channel mask into an opaque
/// `ColorImage`, one texel per image pixel.
pub fn image_to_color_image(image: &ImageData, params: &RenderParams) -> egui::ColorImage {
    let to_u8 = |v: f32| (v * 255.0).round() as u8;
    let mut pixels = vec![egui::Color32::BLACK; image.pixel_count()];

    let width = image.width.max(1);
    pixels
        .par_chunks_mut(width)
        .zip(image.pixels.par_chunks(width * RGBA_CHANNELS))
        .for_each(|(out, row)| {
            for (dst, src) in out.iter_mut().zip(row.chunks_exact(RGBA_CHANNELS)) {
                let [r, g, b, _] = params.shade([src[0], src[1], src[2], src[3]]);
                *dst = egui::Color32::from_rgb(to_u8(r), to_u8(g), to_u8(b));
            }
        });

    egui::ColorImage {
        size: [image.width, image.height],
        pixels,
        source_size: Default::default(),
    }
}

/// Displayed colour of a magnifier cell.
pub fn cell_color(cell: [f32; 4]) -> egui::Color32 {
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgb(to_u8(cell[0]), to_u8(cell[1]), to_u8(cell[2]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use imgview_core::view::{ChannelMask, ViewState};

    #[test]
    fn remaps_and_masks_into_opaque_texels() {
        let image = ImageData::from_rgba(
            2,
            1,
            vec![2.0, 4.0, 6.0, 0.0, f32::NAN, 10.0, -1.0, 0.5],
        );
        let mut view = ViewState::new();
        view.set_range(2.0, 6.0);
        view.mask = ChannelMask {
            r: true,
            g: true,
            b: false,
        };
        let params = view.render_params(Vec2::new(2.0, 1.0), Vec2::splat(100.0));

        let out = image_to_color_image(&image, &params);
        assert_eq!(out.size, [2, 1]);
        assert_eq!(out.pixels[0], egui::Color32::from_rgb(0, 128, 0));
        assert_eq!(out.pixels[1], egui::Color32::from_rgb(0, 255, 0));
    }
}
