//! Application configuration.

use serde::{Deserialize, Serialize};
use shapeboard_core::{CanvasConfig, ConfigError, RenderTarget};
use std::path::Path;
use thiserror::Error;

/// Errors loading an [`AppConfig`].
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid JSON in configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Canvas(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    /// Id of the `<canvas>` element to bind to in the browser.
    pub canvas_element_id: String,
    pub canvas: CanvasConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Shapeboard".to_string(),
            canvas_element_id: "shapeboard".to_string(),
            canvas: CanvasConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, AppConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.canvas.validate()?;
        Ok(config)
    }

    /// The fixed-size target the canvas element is sized to.
    pub fn render_target(&self) -> RenderTarget {
        RenderTarget::new(self.canvas.width, self.canvas.height)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| AppConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}
