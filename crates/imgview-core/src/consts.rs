/// Minimum pixel count (w*h) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Samples per stored pixel (R, G, B, A).
pub const RGBA_CHANNELS: usize = 4;

/// Lower bound for interactive (wheel) zoom.
pub const MIN_ZOOM: f32 = 0.1;

/// Upper bound for interactive (wheel) zoom.
pub const MAX_ZOOM: f32 = 50.0;

/// Relative zoom change per wheel notch.
pub const WHEEL_ZOOM_STEP: f32 = 0.1;

/// Bin count for a plain histogram rebuild.
pub const DEFAULT_HISTOGRAM_BINS: usize = 256;

/// Bin count used by the interactive histogram plot.
pub const PLOT_HISTOGRAM_BINS: usize = 2048;

/// Histogram plot spans narrower than this are treated as a unit span.
pub const MIN_PLOT_SPAN: f32 = 1e-5;

/// Plot span multiplier for one wheel notch towards the user (zoom in).
pub const PLOT_ZOOM_IN_FACTOR: f32 = 0.9;

/// Plot span multiplier for one wheel notch away from the user (zoom out).
pub const PLOT_ZOOM_OUT_FACTOR: f32 = 1.1;

/// Screen distance (px) within which a range handle can be grabbed.
pub const HANDLE_GRAB_DISTANCE: f32 = 10.0;

/// Side length of the magnifier grid, in image pixels.
pub const DEFAULT_MAGNIFIER_SIZE: usize = 13;

/// Display ranges at or below this span are shown unmapped.
pub const MIN_RANGE_SPAN: f32 = 1e-4;

/// Screen size (px) of one magnifier cell.
pub const MAGNIFIER_CELL_SIZE: f32 = 15.0;
