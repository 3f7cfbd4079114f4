//! Toolkit-level error types.
//!
//! Only hard initialisation failures (window / video context) and config
//! loading cross the platform boundary as errors. Telemetry and host-action
//! failures are absorbed by the backends and logged.

use thiserror::Error;

/// Errors that can abort toolkit startup.
#[derive(Debug, Error)]
pub enum ToolkitError {
    #[error("invalid window size {width}x{height}: both dimensions must be non-zero")]
    InvalidWindowSize { width: u32, height: u32 },

    #[error("the window has already been created")]
    WindowAlreadyCreated,

    #[error("{0} requested before the window was created")]
    NotInitialized(&'static str),

    #[error("unable to acquire a display surface: {0}")]
    DisplayUnavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config deserialisation error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("eframe error: {0}")]
    Eframe(#[from] eframe::Error),
}

/// Convenience alias for `Result<T, ToolkitError>`.
pub type Result<T> = std::result::Result<T, ToolkitError>;
