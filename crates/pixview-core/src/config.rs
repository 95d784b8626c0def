use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    ACCEPTED_EXTENSIONS, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MAX_FIT_SCALE, ZOOM_STEP,
};
use crate::error::{PixviewError, Result};

/// Viewer settings, read from an optional TOML file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Factor applied per zoom step. Must be greater than 1.
    pub zoom_step: f32,
    /// Upper bound for fit-to-screen.
    pub max_fit_scale: f32,
    /// Upper bound for zooming in. Unbounded when absent.
    pub max_scale: Option<f32>,
    pub accepted_extensions: Vec<String>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom_step: ZOOM_STEP,
            max_fit_scale: MAX_FIT_SCALE,
            max_scale: None,
            accepted_extensions: ACCEPTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl ViewerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.zoom_step.is_finite() || self.zoom_step <= 1.0 {
            return Err(PixviewError::InvalidConfig(format!(
                "zoom_step must be greater than 1, got {}",
                self.zoom_step
            )));
        }
        if !self.max_fit_scale.is_finite() || self.max_fit_scale <= 0.0 {
            return Err(PixviewError::InvalidConfig(format!(
                "max_fit_scale must be positive, got {}",
                self.max_fit_scale
            )));
        }
        if let Some(max) = self.max_scale {
            if !max.is_finite() || max <= 0.0 {
                return Err(PixviewError::InvalidConfig(format!(
                    "max_scale must be positive, got {max}"
                )));
            }
            if max < self.max_fit_scale {
                return Err(PixviewError::InvalidConfig(format!(
                    "max_scale ({max}) must not be below max_fit_scale ({})",
                    self.max_fit_scale
                )));
            }
        }
        if self.window_width <= 0.0 || self.window_height <= 0.0 {
            return Err(PixviewError::InvalidConfig(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        Ok(())
    }
}
