//! Platform layer: the capability set a host environment provides to the
//! toolkit, and the concrete backends.
//!
//! Exactly one `Platform` exists per process. It exclusively owns its
//! subsystem handles (video context, audio player, input manager, font
//! loader) and releases them when dropped.
//!
//! To add a backend:
//! 1. Implement the four subsystem traits for the host.
//! 2. Implement `Platform`, overriding the probes the host can answer.
//! 3. Select it in `main` from `config::Backend`.

pub mod console;
pub mod desktop;

use egui::Color32;

use crate::error::Result;
use crate::types::{ThemeVariant, TouchState};

/// Locale reported when the host cannot provide one.
pub const LOCALE_DEFAULT: &str = "en-US";

// ── Subsystems ─────────────────────────────────────────────────────────────────

/// Rendering surface created by [`Platform::create_window`].
pub trait VideoContext {
    fn window_size(&self) -> (u32, u32);

    /// Background clear colour, fixed when the context is created.
    fn clear_color(&self) -> Color32;

    fn begin_frame(&self) {}

    fn end_frame(&self) {}
}

/// UI sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    FocusChange,
    FocusError,
    ClickError,
    FocusSidebar,
    Click,
}

pub trait AudioPlayer {
    /// Preload a sound. Returns false if the host cannot provide it.
    fn load(&mut self, sound: Sound) -> bool;

    /// Play a sound, loading it first if needed. Returns false on failure.
    fn play(&mut self, sound: Sound) -> bool;
}

pub trait InputManager {
    /// Append this frame's touch samples to `out`, in host order.
    fn update_touch_states(&mut self, out: &mut Vec<TouchState>);
}

/// Font bytes handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFont {
    pub name: String,
    pub data: Vec<u8>,
}

pub trait FontLoader {
    /// All fonts the host provides, in fallback priority order. May be empty,
    /// in which case the renderer keeps its built-in fonts.
    fn load_fonts(&self) -> Vec<LoadedFont>;
}

// ── Platform ───────────────────────────────────────────────────────────────────

/// Host capabilities the toolkit core depends on.
///
/// Telemetry probes are best-effort: default implementations return the
/// "unsupported" sentinel (`false`, `0`, empty string) and backends fall back
/// to the same sentinel when a host query fails. Host actions are
/// fire-and-forget; failures are logged by the backend.
pub trait Platform {
    /// Backend display name (e.g. "Console", "Desktop").
    fn name(&self) -> &str;

    /// Create the window and its video context. Must be called exactly once,
    /// before rendering. Failure is fatal to startup.
    fn create_window(&mut self, title: &str, width: u32, height: u32) -> Result<()>;

    /// Poll host liveness. Called once per frame; false means shut down.
    fn main_loop_iteration(&mut self) -> bool;

    /// Fails with `NotInitialized` before [`Platform::create_window`].
    fn video_context(&self) -> Result<&dyn VideoContext>;

    fn audio_player(&mut self) -> &mut dyn AudioPlayer;

    fn input_manager(&mut self) -> &mut dyn InputManager;

    fn font_loader(&self) -> &dyn FontLoader;

    fn locale(&self) -> &str;

    fn theme_variant(&self) -> ThemeVariant;

    /// Affects frames rendered from now on; draw state captured earlier
    /// (e.g. the video context clear colour) keeps the old variant.
    fn set_theme_variant(&mut self, variant: ThemeVariant);

    // ── Telemetry probes ───────────────────────────────────────────────────

    fn can_show_battery_level(&self) -> bool {
        false
    }

    /// Battery charge in percent, 0 when unknown.
    fn battery_level(&self) -> u8 {
        0
    }

    fn is_battery_charging(&self) -> bool {
        false
    }

    fn has_wireless_connection(&self) -> bool {
        false
    }

    /// Signal strength in bars (0..=3), 0 when unknown.
    fn wireless_level(&self) -> u8 {
        0
    }

    fn ip_address(&self) -> String {
        String::new()
    }

    /// Primary and secondary DNS servers separated by a newline.
    fn dns_server(&self) -> String {
        String::new()
    }

    fn is_application_mode(&self) -> bool {
        false
    }

    // ── Host actions ───────────────────────────────────────────────────────

    fn exit_to_home_mode(&mut self, _value: bool) {}

    fn force_enable_gameplay_recording(&mut self) {}

    fn open_browser(&mut self, url: &str) {
        log::warn!("{}: open_browser({url}) is not supported", self.name());
    }
}

/// Reject empty windows before asking the host for a surface.
pub(crate) fn validate_window_size(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(crate::error::ToolkitError::InvalidWindowSize { width, height });
    }
    Ok(())
}
