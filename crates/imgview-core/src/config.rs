use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_MAGNIFIER_SIZE, MAX_ZOOM, MIN_ZOOM, PLOT_HISTOGRAM_BINS, WHEEL_ZOOM_STEP,
};
use crate::error::{ImgViewError, Result};

/// Viewer settings. Read-only: loaded from defaults or a TOML file, never
/// written back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Bins of the interactive histogram plot.
    pub histogram_bins: usize,
    /// Side of the magnifier grid in image pixels. Must be odd.
    pub magnifier_size: usize,
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Relative zoom change per wheel notch.
    pub wheel_zoom_step: f32,
    /// Hover crosshair colour, RGBA in `[0, 1]`.
    pub crossline_color: [f32; 4],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            histogram_bins: PLOT_HISTOGRAM_BINS,
            magnifier_size: DEFAULT_MAGNIFIER_SIZE,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            wheel_zoom_step: WHEEL_ZOOM_STEP,
            crossline_color: [1.0, 1.0, 0.0, 0.5],
        }
    }
}

impl ViewerConfig {
    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: ViewerConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Defaults, or the given file when there is one.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_toml_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.histogram_bins < 2 {
            return Err(ImgViewError::Config(format!(
                "histogram_bins must be at least 2, got {}",
                self.histogram_bins
            )));
        }
        if self.magnifier_size == 0 || self.magnifier_size % 2 == 0 {
            return Err(ImgViewError::Config(format!(
                "magnifier_size must be odd, got {}",
                self.magnifier_size
            )));
        }
        if !(self.min_zoom > 0.0 && self.min_zoom < self.max_zoom && self.max_zoom.is_finite()) {
            return Err(ImgViewError::Config(format!(
                "zoom limits must satisfy 0 < min < max, got {}..{}",
                self.min_zoom, self.max_zoom
            )));
        }
        if !(self.wheel_zoom_step > 0.0 && self.wheel_zoom_step < 1.0) {
            return Err(ImgViewError::Config(format!(
                "wheel_zoom_step must be in (0, 1), got {}",
                self.wheel_zoom_step
            )));
        }
        if self.crossline_color.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(ImgViewError::Config(
                "crossline_color components must be in [0, 1]".into(),
            ));
        }
        Ok(())
    }
}
