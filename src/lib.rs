//! Touch gesture recognition and platform abstraction for a cross-platform
//! UI toolkit.
//!
//! - [`touch`]: the recognizer contract, tap recognition and phase tracking.
//! - [`platform`]: the capability set a host provides, with console and
//!   desktop backends.
//! - [`toolkit`]: the frame loop tying input, gestures and telemetry together.

pub mod config;
pub mod error;
pub mod platform;
pub mod toolkit;
pub mod touch;
pub mod types;
pub mod ui;
pub mod utils;

pub use error::{Result, ToolkitError};
pub use platform::Platform;
pub use toolkit::Toolkit;
pub use types::{Point, Rect, ThemeVariant, TouchPhase, TouchState};
