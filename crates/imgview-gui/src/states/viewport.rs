/// Viewport display state.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Range, mask or image changed since the texture was last built.
    pub texture_dirty: bool,
    /// Pixel under the cursor this frame.
    pub hovered_pixel: Option<(usize, usize)>,
    /// Pixel picked by right-drag for the magnifier.
    pub magnifier_pos: Option<(usize, usize)>,
}

impl ViewportState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
