pub mod transform;

use glam::Vec2;
use tracing::debug;

use crate::config::ViewerConfig;
use crate::consts::{MAX_ZOOM, MIN_RANGE_SPAN, MIN_ZOOM, WHEEL_ZOOM_STEP};
use crate::image_data::ImageData;

pub use transform::{compute_transform, DisplayTransform};

/// Which colour channels are displayed. Alpha is never masked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelMask {
    pub r: bool,
    pub g: bool,
    pub b: bool,
}

impl Default for ChannelMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl ChannelMask {
    pub const ALL: ChannelMask = ChannelMask {
        r: true,
        g: true,
        b: true,
    };
    pub const NONE: ChannelMask = ChannelMask {
        r: false,
        g: false,
        b: false,
    };

    pub fn enabled(&self) -> [bool; 3] {
        [self.r, self.g, self.b]
    }

    pub fn is_all(&self) -> bool {
        *self == Self::ALL
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderParams {
    pub transform: DisplayTransform,
    pub range_min: f32,
    pub range_max: f32,
    pub mask: ChannelMask,
}

impl RenderParams {
    /// Display colour of one stored sample: remap RGB from the range to
    /// `[0, 1]`, zero masked channels, saturate. Spans at or below
    /// `MIN_RANGE_SPAN` leave values unmapped. Alpha passes through.
    pub fn shade(&self, rgba: [f32; 4]) -> [f32; 4] {
        let span = self.range_max - self.range_min;
        let mut out = rgba;
        for (c, on) in self.mask.enabled().into_iter().enumerate() {
            let v = if span > MIN_RANGE_SPAN {
                (rgba[c] - self.range_min) / span
            } else {
                rgba[c]
            };
            out[c] = if on { v.clamp(0.0, 1.0) } else { 0.0 };
        }
        out
    }
}

/// Interactive view over the current image: zoom, pan, display range and
/// channel mask.
///
/// `pan` is in screen pixels relative to the viewport centre, Y down.
#[derive(Clone, Debug)]
pub struct ViewState {
    pub zoom: f32,
    pub pan: Vec2,
    pub range_min: f32,
    pub range_max: f32,
    pub mask: ChannelMask,
    min_zoom: f32,
    max_zoom: f32,
    wheel_step: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
            range_min: 0.0,
            range_max: 1.0,
            mask: ChannelMask::ALL,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            wheel_step: WHEEL_ZOOM_STEP,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// View with zoom limits and wheel step taken from the config.
    pub fn with_config(config: &ViewerConfig) -> Self {
        Self {
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            wheel_step: config.wheel_zoom_step,
            ..Self::default()
        }
    }

    pub fn zoom_limits(&self) -> (f32, f32) {
        (self.min_zoom, self.max_zoom)
    }

    /// Fit the display range to a freshly loaded image and reset zoom/pan.
    pub fn reset_for_image(&mut self, image: &ImageData) {
        self.range_min = image.min_value;
        self.range_max = image.max_value;
        self.reset_view();
    }

    /// Zoom 1, no pan.
    pub fn reset_view(&mut self) {
        self.zoom = 1.0;
        self.pan = Vec2::ZERO;
    }

    /// Back to the empty-document view. The display range is left alone.
    pub fn clear(&mut self) {
        self.reset_view();
    }

    /// Programmatic zoom (slider, menu). Not limited to the wheel range;
    /// non-positive or non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom.is_finite() && zoom > 0.0 {
            self.zoom = zoom;
        }
    }

    pub fn set_range(&mut self, min: f32, max: f32) {
        self.range_min = min;
        self.range_max = max;
    }

    /// Wheel zoom anchored at the mouse: the image point under `mouse` stays
    /// under it. Returns whether the view changed.
    pub fn zoom_at(
        &mut self,
        wheel: f32,
        mouse: Vec2,
        viewport_origin: Vec2,
        viewport_size: Vec2,
    ) -> bool {
        let old = self.zoom;
        let new = (old * (1.0 + wheel * self.wheel_step)).clamp(self.min_zoom, self.max_zoom);
        let ratio = new / old;
        if ratio == 1.0 || !ratio.is_finite() {
            return false;
        }

        let centre = viewport_origin + viewport_size * 0.5;
        let rel = mouse - centre;
        self.pan = self.pan * ratio + rel * (1.0 - ratio);
        self.zoom = new;
        debug!(zoom = new, pan_x = self.pan.x, pan_y = self.pan.y, "Zoomed");
        true
    }

    /// Drag pan by a screen-space delta.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    pub fn transform(&self, image_size: Vec2, viewport_size: Vec2) -> DisplayTransform {
        compute_transform(image_size, viewport_size, self.zoom, self.pan)
    }

    pub fn render_params(&self, image_size: Vec2, viewport_size: Vec2) -> RenderParams {
        RenderParams {
            transform: self.transform(image_size, viewport_size),
            range_min: self.range_min,
            range_max: self.range_max,
            mask: self.mask,
        }
    }

    /// Pixel under the mouse, if it is over the image.
    pub fn screen_to_image_pixel(
        &self,
        mouse: Vec2,
        viewport_origin: Vec2,
        viewport_size: Vec2,
        image_size: Vec2,
    ) -> Option<(usize, usize)> {
        transform::screen_to_image_pixel(
            mouse,
            viewport_origin,
            viewport_size,
            image_size,
            self.zoom,
            self.pan,
        )
    }

    /// Continuous image coordinates under the mouse.
    pub fn screen_to_image(
        &self,
        mouse: Vec2,
        viewport_origin: Vec2,
        viewport_size: Vec2,
        image_size: Vec2,
    ) -> Vec2 {
        transform::screen_to_image(
            mouse,
            viewport_origin,
            viewport_size,
            image_size,
            self.zoom,
            self.pan,
        )
    }

    /// Screen position of an image-space point.
    pub fn image_to_screen(
        &self,
        pixel: Vec2,
        viewport_origin: Vec2,
        viewport_size: Vec2,
        image_size: Vec2,
    ) -> Vec2 {
        transform::image_to_screen(
            pixel,
            viewport_origin,
            viewport_size,
            image_size,
            self.zoom,
            self.pan,
        )
    }
}
