//! Interaction state of the histogram plot: the visible value window and
//! dragging of the display-range handles.

use crate::consts::{HANDLE_GRAB_DISTANCE, MIN_PLOT_SPAN, PLOT_ZOOM_IN_FACTOR, PLOT_ZOOM_OUT_FACTOR};

/// Visible X window of the histogram plot, in sample values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotView {
    pub min: f32,
    pub max: f32,
}

impl Default for PlotView {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl PlotView {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Width of the window; collapsed windows count as 1.
    pub fn span(&self) -> f32 {
        let span = self.max - self.min;
        if span < MIN_PLOT_SPAN {
            1.0
        } else {
            span
        }
    }

    pub fn reset(&mut self, min: f32, max: f32) {
        self.min = min;
        self.max = max;
    }

    /// Wheel zoom. `mouse_frac` is the cursor position across the plot in
    /// `[0, 1]`; the value under it stays put.
    pub fn zoom_at(&mut self, mouse_frac: f32, wheel: f32) {
        if wheel == 0.0 {
            return;
        }
        let factor = if wheel > 0.0 {
            PLOT_ZOOM_IN_FACTOR
        } else {
            PLOT_ZOOM_OUT_FACTOR
        };
        let span = self.span();
        let anchor = self.min + mouse_frac * span;
        let new_span = span * factor;
        self.min = anchor - mouse_frac * new_span;
        self.max = anchor + (1.0 - mouse_frac) * new_span;
    }

    /// Drag pan. `dx_frac` is the mouse movement as a fraction of the plot
    /// width; dragging right moves the window towards lower values.
    pub fn pan_by(&mut self, dx_frac: f32) {
        let dv = dx_frac * self.span();
        self.min -= dv;
        self.max -= dv;
    }

    pub fn value_to_fraction(&self, value: f32) -> f32 {
        (value - self.min) / self.span()
    }

    pub fn fraction_to_value(&self, frac: f32) -> f32 {
        self.min + frac * self.span()
    }
}

/// Which range handle is being dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragHandle {
    Min,
    Max,
}

/// Drag of the display-range handles on the plot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RangeDrag {
    pub active: Option<DragHandle>,
}

impl RangeDrag {
    /// Handle within grab distance of `mouse_x`, closest first. On a tie the
    /// max handle wins only when the min handle is out of reach.
    pub fn pick(mouse_x: f32, min_x: f32, max_x: f32) -> Option<DragHandle> {
        let dist_min = (mouse_x - min_x).abs();
        let dist_max = (mouse_x - max_x).abs();
        if dist_min < HANDLE_GRAB_DISTANCE && dist_min <= dist_max {
            Some(DragHandle::Min)
        } else if dist_max < HANDLE_GRAB_DISTANCE {
            Some(DragHandle::Max)
        } else {
            None
        }
    }

    /// Start a drag if nothing is grabbed yet. Returns the active handle.
    pub fn begin(&mut self, mouse_x: f32, min_x: f32, max_x: f32) -> Option<DragHandle> {
        if self.active.is_none() {
            self.active = Self::pick(mouse_x, min_x, max_x);
        }
        self.active
    }

    pub fn end(&mut self) {
        self.active = None;
    }

    /// New `(min, max)` range with the active handle moved to `value`.
    pub fn update(&self, value: f32, range_min: f32, range_max: f32) -> (f32, f32) {
        match self.active {
            Some(DragHandle::Min) => (drag_min(value, range_max), range_max),
            Some(DragHandle::Max) => (range_min, drag_max(value, range_min)),
            None => (range_min, range_max),
        }
    }
}

/// Min handle position; never passes the max handle.
pub fn drag_min(value: f32, range_max: f32) -> f32 {
    value.min(range_max)
}

/// Max handle position; never passes the min handle.
pub fn drag_max(value: f32, range_min: f32) -> f32 {
    value.max(range_min)
}
