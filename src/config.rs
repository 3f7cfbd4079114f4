//! Toolkit configuration, loaded from an optional JSON file.
//!
//! Every field has a default, so an empty object (or no file at all) yields a
//! working desktop setup.
//!
//! ```json
//! {
//!   "backend": "console",
//!   "window": { "title": "Demo", "width": 1280, "height": 720 },
//!   "theme": "dark",
//!   "tap_tolerance": 12.0
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::touch::MAX_DELTA_MOVEMENT;
use crate::types::ThemeVariant;

/// Platform implementation selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// eframe/egui window.
    #[default]
    Desktop,
    /// Console services (simulated when not running on the console).
    Console,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "trellis".to_owned(),
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    pub backend: Backend,
    pub window: WindowConfig,
    /// Forces a theme variant instead of the host preference.
    pub theme: Option<ThemeVariant>,
    /// Forces a locale instead of the host one.
    pub locale: Option<String>,
    /// Tap movement tolerance in logical units.
    pub tap_tolerance: f32,
    /// Status indicators are refreshed every N frames.
    pub status_refresh_frames: u64,
    /// Desktop telemetry probe period.
    pub telemetry_interval_ms: u64,
    /// Extra font loaded ahead of the built-in ones (desktop only).
    pub font_path: Option<PathBuf>,
    /// Default `env_logger` filter, overridden by `RUST_LOG`.
    pub log_filter: String,
    /// Headless console runs stop after this many frames.
    pub max_frames: Option<u64>,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Desktop,
            window: WindowConfig::default(),
            theme: None,
            locale: None,
            tap_tolerance: MAX_DELTA_MOVEMENT,
            status_refresh_frames: 60,
            telemetry_interval_ms: 5_000,
            font_path: None,
            log_filter: "info".to_owned(),
            max_frames: None,
        }
    }
}

impl ToolkitConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = ToolkitConfig::from_json("{}").unwrap();
        assert_eq!(config, ToolkitConfig::default());
        assert_eq!(config.tap_tolerance, 10.0);
        assert_eq!(config.backend, Backend::Desktop);
    }

    #[test]
    fn partial_override() {
        let config = ToolkitConfig::from_json(
            r#"{ "backend": "console", "theme": "dark", "window": { "width": 800 } }"#,
        )
        .unwrap();
        assert_eq!(config.backend, Backend::Console);
        assert_eq!(config.theme, Some(ThemeVariant::Dark));
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 720);
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert!(ToolkitConfig::from_json(r#"{ "backend": "toaster" }"#).is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ToolkitConfig::load("/nonexistent/trellis.json").unwrap_err();
        assert!(matches!(err, crate::error::ToolkitError::Io(_)));
    }
}
