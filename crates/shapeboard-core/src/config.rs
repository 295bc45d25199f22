//! Canvas configuration.
//!
//! Shared object defaults are passed explicitly when a host is constructed
//! instead of being patched into a global, so two canvases never observe
//! each other's settings.

use crate::shapes::SerializableColor;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default logical canvas size.
pub const DEFAULT_CANVAS_SIZE: f64 = 600.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Canvas size must be positive, got {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// Shape of the selection corner handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerStyle {
    Rect,
    #[default]
    Circle,
}

/// Which selection control handles are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsVisibility {
    pub tl: bool,
    pub tr: bool,
    pub bl: bool,
    pub br: bool,
    pub ml: bool,
    pub mt: bool,
    pub mr: bool,
    pub mb: bool,
    pub mtr: bool,
}

impl Default for ControlsVisibility {
    fn default() -> Self {
        // Middle handles are hidden so scaling is always proportional.
        Self {
            tl: true,
            tr: true,
            bl: true,
            br: true,
            ml: false,
            mt: false,
            mr: false,
            mb: false,
            mtr: true,
        }
    }
}

/// Interaction defaults applied to every object on a canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionDefaults {
    pub no_scale_cache: bool,
    pub corner_style: CornerStyle,
    pub transparent_corners: bool,
    pub corner_size: f64,
    /// Negative scale factors are folded to their absolute value.
    pub lock_scaling_flip: bool,
    pub lock_skewing_x: bool,
    pub lock_skewing_y: bool,
    pub centered_rotation: bool,
    pub centered_scaling: bool,
    pub has_borders: bool,
    pub controls: ControlsVisibility,
}

impl Default for InteractionDefaults {
    fn default() -> Self {
        Self {
            no_scale_cache: false,
            corner_style: CornerStyle::Circle,
            transparent_corners: false,
            corner_size: 10.0,
            lock_scaling_flip: true,
            lock_skewing_x: true,
            lock_skewing_y: true,
            centered_rotation: true,
            centered_scaling: true,
            has_borders: true,
            controls: ControlsVisibility::default(),
        }
    }
}

/// Configuration of a canvas host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    pub background: SerializableColor,
    pub interaction: InteractionDefaults,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE,
            height: DEFAULT_CANVAS_SIZE,
            background: SerializableColor::transparent(),
            interaction: InteractionDefaults::default(),
        }
    }
}

impl CanvasConfig {
    /// Parse a configuration, filling omitted fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configured size is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
