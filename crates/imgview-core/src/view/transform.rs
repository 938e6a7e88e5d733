//! Mapping between image pixels, the unit display quad and screen space.
//!
//! The renderer draws a `[-1, 1]` quad in normalized device coordinates
//! (Y up) through [`DisplayTransform`]. Hit-testing works in screen pixels
//! (Y down) and derives the image placement on its own; both derivations
//! must place the image at the same screen rectangle.

use glam::{Affine2, Mat4, Vec2, Vec4};

/// Placement of the unit image quad inside the viewport, in NDC.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayTransform {
    pub affine: Affine2,
}

impl DisplayTransform {
    /// Quad scale (x, y) relative to the viewport.
    pub fn scale(&self) -> Vec2 {
        Vec2::new(self.affine.matrix2.x_axis.x, self.affine.matrix2.y_axis.y)
    }

    /// Quad translation in NDC.
    pub fn translation(&self) -> Vec2 {
        self.affine.translation
    }

    pub fn apply(&self, ndc: Vec2) -> Vec2 {
        self.affine.transform_point2(ndc)
    }

    /// Column-major 4x4 form for a vertex shader constant buffer.
    pub fn to_mat4(&self) -> Mat4 {
        let m = self.affine.matrix2;
        let t = self.affine.translation;
        Mat4::from_cols(
            Vec4::new(m.x_axis.x, m.x_axis.y, 0.0, 0.0),
            Vec4::new(m.y_axis.x, m.y_axis.y, 0.0, 0.0),
            Vec4::Z,
            Vec4::new(t.x, t.y, 0.0, 1.0),
        )
    }

    /// Screen-space rectangle `(top_left, bottom_right)` covered by the quad.
    pub fn screen_rect(&self, viewport_origin: Vec2, viewport_size: Vec2) -> (Vec2, Vec2) {
        let top_left =
            ndc_to_screen(self.apply(Vec2::new(-1.0, 1.0)), viewport_origin, viewport_size);
        let bottom_right =
            ndc_to_screen(self.apply(Vec2::new(1.0, -1.0)), viewport_origin, viewport_size);
        (top_left, bottom_right)
    }
}

/// Build the quad transform for an image shown at `zoom` with `pan` offset
/// (screen pixels, Y down) inside a viewport.
///
/// Scale first, then translate; the Y translation is negated because NDC
/// points up.
pub fn compute_transform(
    image_size: Vec2,
    viewport_size: Vec2,
    zoom: f32,
    pan: Vec2,
) -> DisplayTransform {
    let viewport = viewport_size.max(Vec2::ONE);
    let scale = image_size * zoom / viewport;
    let translation = Vec2::new(2.0 * pan.x / viewport.x, -2.0 * pan.y / viewport.y);
    DisplayTransform {
        affine: Affine2::from_scale_angle_translation(scale, 0.0, translation),
    }
}

pub fn ndc_to_screen(ndc: Vec2, viewport_origin: Vec2, viewport_size: Vec2) -> Vec2 {
    Vec2::new(
        viewport_origin.x + (ndc.x + 1.0) * 0.5 * viewport_size.x,
        viewport_origin.y + (1.0 - ndc.y) * 0.5 * viewport_size.y,
    )
}

/// Offset of the image's top-left corner from the viewport origin.
pub fn image_offset(image_size: Vec2, viewport_size: Vec2, zoom: f32, pan: Vec2) -> Vec2 {
    (viewport_size - image_size * zoom) * 0.5 + pan
}

/// Continuous image coordinates under a screen point. May lie outside the image.
pub fn screen_to_image(
    mouse: Vec2,
    viewport_origin: Vec2,
    viewport_size: Vec2,
    image_size: Vec2,
    zoom: f32,
    pan: Vec2,
) -> Vec2 {
    let offset = image_offset(image_size, viewport_size, zoom, pan);
    (mouse - viewport_origin - offset) / zoom
}

/// Integer pixel under a screen point, or `None` outside `[0, w) x [0, h)`.
pub fn screen_to_image_pixel(
    mouse: Vec2,
    viewport_origin: Vec2,
    viewport_size: Vec2,
    image_size: Vec2,
    zoom: f32,
    pan: Vec2,
) -> Option<(usize, usize)> {
    let p = screen_to_image(mouse, viewport_origin, viewport_size, image_size, zoom, pan);
    let inside = p.x >= 0.0 && p.y >= 0.0 && p.x < image_size.x && p.y < image_size.y;
    inside.then(|| (p.x as usize, p.y as usize))
}

/// Screen position of an image-space point (a pixel's top-left corner for
/// integer input).
pub fn image_to_screen(
    pixel: Vec2,
    viewport_origin: Vec2,
    viewport_size: Vec2,
    image_size: Vec2,
    zoom: f32,
    pan: Vec2,
) -> Vec2 {
    viewport_origin + image_offset(image_size, viewport_size, zoom, pan) + pixel * zoom
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_when_image_fills_viewport() {
        let t = compute_transform(
            Vec2::new(800.0, 600.0),
            Vec2::new(800.0, 600.0),
            1.0,
            Vec2::ZERO,
        );
        assert_eq!(t.scale(), Vec2::ONE);
        assert_eq!(t.translation(), Vec2::ZERO);
    }

    #[test]
    fn pan_down_moves_quad_down_in_ndc() {
        let t = compute_transform(
            Vec2::splat(100.0),
            Vec2::splat(200.0),
            1.0,
            Vec2::new(0.0, 50.0),
        );
        assert!(t.translation().y < 0.0);
        assert_eq!(t.translation().y, -0.5);
    }

    #[test]
    fn mat4_matches_affine() {
        let t = compute_transform(
            Vec2::new(64.0, 32.0),
            Vec2::new(320.0, 240.0),
            2.5,
            Vec2::new(7.0, -3.0),
        );
        let p = Vec2::new(0.25, -0.75);
        let via_mat = t.to_mat4().transform_point3(p.extend(0.0));
        let via_affine = t.apply(p);
        assert!((via_mat.x - via_affine.x).abs() < 1e-6);
        assert!((via_mat.y - via_affine.y).abs() < 1e-6);
    }
}
