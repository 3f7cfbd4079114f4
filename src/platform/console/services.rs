//! Native console service bindings consumed by [`super::ConsolePlatform`].
//!
//! A console build implements `HorizonServices` over the system's IPC
//! services; [`super::SimulatedHorizon`] implements it in-process.

use thiserror::Error;

use crate::platform::Sound;
use crate::touch::RawContact;

/// Raw host result code of a failed service call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("service call failed with result code {0:#x}")]
pub struct ServiceError(pub u32);

/// System colour set selected in the console settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSetId {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargerType {
    Unconnected,
    EnoughPower,
    LowPower,
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppletType {
    Application,
    SystemApplet,
    LibraryApplet,
    OverlayApplet,
    SystemApplication,
}

/// Current IPv4 configuration, every address as a little-endian word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IpConfig {
    pub ip: u32,
    pub mask: u32,
    pub gateway: u32,
    pub dns1: u32,
    pub dns2: u32,
}

/// Shared system fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharedFont {
    Standard,
    ChineseSimplified,
    ExtChineseSimplified,
    ChineseTraditional,
    Korean,
    NintendoExtended,
}

impl SharedFont {
    pub const ALL: [SharedFont; 6] = [
        SharedFont::Standard,
        SharedFont::ChineseSimplified,
        SharedFont::ExtChineseSimplified,
        SharedFont::ChineseTraditional,
        SharedFont::Korean,
        SharedFont::NintendoExtended,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SharedFont::Standard => "standard",
            SharedFont::ChineseSimplified => "chinese-simplified",
            SharedFont::ExtChineseSimplified => "ext-chinese-simplified",
            SharedFont::ChineseTraditional => "chinese-traditional",
            SharedFont::Korean => "korean",
            SharedFont::NintendoExtended => "nintendo-extended",
        }
    }
}

/// Subsystems whose native resources are released on platform teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subsystem {
    Input,
    Audio,
    Font,
    Video,
}

/// Opaque native display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayHandle(pub u32);

pub trait HorizonServices {
    // ── Settings ───────────────────────────────────────────────────────────
    fn color_set_id(&self) -> Result<ColorSetId, ServiceError>;
    fn system_language_code(&self) -> Result<u64, ServiceError>;

    // ── Power ──────────────────────────────────────────────────────────────
    fn battery_charge_percentage(&self) -> Result<u32, ServiceError>;
    fn charger_type(&self) -> Result<ChargerType, ServiceError>;

    // ── Network ────────────────────────────────────────────────────────────
    fn is_wireless_communication_enabled(&self) -> Result<bool, ServiceError>;
    /// Wi-Fi signal strength in bars.
    fn wifi_signal(&self) -> Result<u32, ServiceError>;
    fn current_ip_address(&self) -> Result<u32, ServiceError>;
    fn current_ip_config(&self) -> Result<IpConfig, ServiceError>;

    // ── Applet ─────────────────────────────────────────────────────────────
    fn applet_type(&self) -> AppletType;
    /// False once the system asked the application to exit.
    fn applet_main_loop(&self) -> bool;
    /// False while the applet is in the background (home menu, overlay).
    fn has_focus(&self) -> bool;
    fn initialize_gameplay_recording(&self) -> Result<(), ServiceError>;
    /// Open the web applet on `url`, restricted to `whitelist`.
    fn show_web_page(&self, url: &str, whitelist: &str) -> Result<(), ServiceError>;
    /// Consumed by the host's shutdown path.
    fn set_applet_exit_mode(&self, to_home: bool);

    // ── Display / HID / audio / fonts ──────────────────────────────────────
    fn acquire_display(&self, title: &str, width: u32, height: u32)
    -> Result<DisplayHandle, ServiceError>;
    fn present(&self, display: DisplayHandle);
    fn touch_screen_contacts(&self) -> Vec<RawContact>;
    fn play_system_sound(&self, sound: Sound) -> Result<(), ServiceError>;
    fn load_system_sound(&self, sound: Sound) -> Result<(), ServiceError>;
    fn shared_font(&self, font: SharedFont) -> Result<Vec<u8>, ServiceError>;

    /// Release the native resources backing `subsystem`.
    fn release(&self, subsystem: Subsystem);
}
