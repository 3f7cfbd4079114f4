//! In-process console services: scripted touch frames and configurable
//! telemetry. Drives the headless console run mode and the platform tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use super::services::{
    AppletType, ChargerType, ColorSetId, DisplayHandle, HorizonServices, IpConfig, ServiceError,
    SharedFont, Subsystem,
};
use crate::platform::Sound;
use crate::touch::RawContact;
use crate::utils::encode_language_code;

/// Result code returned by every call of an unsupported service.
pub const NOT_SUPPORTED: ServiceError = ServiceError(0x2_0a02);

/// Host-side effects observed by the simulator. Shared through an `Rc` so
/// it stays readable after the platform (and its services) are dropped.
#[derive(Debug, Default)]
pub struct ServiceLog {
    releases: RefCell<Vec<Subsystem>>,
    exit_mode: Cell<Option<bool>>,
    releases_at_exit: Cell<Option<usize>>,
    opened_urls: RefCell<Vec<String>>,
    played_sounds: RefCell<Vec<Sound>>,
    presented_frames: Cell<u64>,
    recording_enabled: Cell<bool>,
}

impl ServiceLog {
    pub fn releases(&self) -> Vec<Subsystem> {
        self.releases.borrow().clone()
    }

    /// Exit mode set on shutdown, `None` while the platform is alive.
    pub fn exit_mode(&self) -> Option<bool> {
        self.exit_mode.get()
    }

    /// How many subsystems had been released when the exit mode was set.
    pub fn releases_at_exit(&self) -> Option<usize> {
        self.releases_at_exit.get()
    }

    pub fn opened_urls(&self) -> Vec<String> {
        self.opened_urls.borrow().clone()
    }

    pub fn played_sounds(&self) -> Vec<Sound> {
        self.played_sounds.borrow().clone()
    }

    pub fn presented_frames(&self) -> u64 {
        self.presented_frames.get()
    }

    pub fn recording_enabled(&self) -> bool {
        self.recording_enabled.get()
    }
}

/// Simulated console. Fields are the values each service call returns.
pub struct SimulatedHorizon {
    pub color_set: Result<ColorSetId, ServiceError>,
    pub language_code: Result<u64, ServiceError>,
    pub battery_charge: Result<u32, ServiceError>,
    pub charger: Result<ChargerType, ServiceError>,
    pub wireless_enabled: Result<bool, ServiceError>,
    pub wifi_signal: Result<u32, ServiceError>,
    pub ip_config: Result<IpConfig, ServiceError>,
    pub applet_type: AppletType,
    pub display: Result<DisplayHandle, ServiceError>,
    pub recording: Result<(), ServiceError>,
    pub web_applet: Result<(), ServiceError>,
    pub audio: Result<(), ServiceError>,
    pub fonts: Result<Vec<u8>, ServiceError>,

    touch_frames: RefCell<VecDeque<Vec<RawContact>>>,
    /// `applet_main_loop` turns false after this many calls; `None` runs forever.
    frames_left: Cell<Option<u64>>,
    focus: Cell<bool>,
    log: Rc<ServiceLog>,
}

impl Default for SimulatedHorizon {
    fn default() -> Self {
        Self {
            color_set: Ok(ColorSetId::Light),
            language_code: Ok(encode_language_code("en-US")),
            battery_charge: Ok(80),
            charger: Ok(ChargerType::Unconnected),
            wireless_enabled: Ok(true),
            wifi_signal: Ok(3),
            ip_config: Ok(IpConfig {
                ip: u32::from_le_bytes([192, 168, 1, 42]),
                mask: u32::from_le_bytes([255, 255, 255, 0]),
                gateway: u32::from_le_bytes([192, 168, 1, 1]),
                dns1: u32::from_le_bytes([1, 1, 1, 1]),
                dns2: u32::from_le_bytes([8, 8, 8, 8]),
            }),
            applet_type: AppletType::Application,
            display: Ok(DisplayHandle(1)),
            recording: Ok(()),
            web_applet: Ok(()),
            audio: Ok(()),
            fonts: Ok(vec![0u8; 16]),
            touch_frames: RefCell::new(VecDeque::new()),
            frames_left: Cell::new(None),
            focus: Cell::new(true),
            log: Rc::new(ServiceLog::default()),
        }
    }
}

impl SimulatedHorizon {
    pub fn new() -> Self {
        Self::default()
    }

    /// A console where every fallible service call fails.
    pub fn unsupported() -> Self {
        Self {
            color_set: Err(NOT_SUPPORTED),
            language_code: Err(NOT_SUPPORTED),
            battery_charge: Err(NOT_SUPPORTED),
            charger: Err(NOT_SUPPORTED),
            wireless_enabled: Err(NOT_SUPPORTED),
            wifi_signal: Err(NOT_SUPPORTED),
            ip_config: Err(NOT_SUPPORTED),
            applet_type: AppletType::LibraryApplet,
            display: Err(NOT_SUPPORTED),
            recording: Err(NOT_SUPPORTED),
            web_applet: Err(NOT_SUPPORTED),
            audio: Err(NOT_SUPPORTED),
            fonts: Err(NOT_SUPPORTED),
            ..Self::default()
        }
    }

    /// Queue one touch-screen frame per entry, consumed in order.
    pub fn with_touch_frames(self, frames: impl IntoIterator<Item = Vec<RawContact>>) -> Self {
        self.touch_frames.borrow_mut().extend(frames);
        self
    }

    /// Stop the main loop after `frames` iterations.
    pub fn with_frame_limit(self, frames: u64) -> Self {
        self.frames_left.set(Some(frames));
        self
    }

    pub fn set_focus(&self, focused: bool) {
        self.focus.set(focused);
    }

    pub fn log(&self) -> Rc<ServiceLog> {
        self.log.clone()
    }
}

impl HorizonServices for SimulatedHorizon {
    fn color_set_id(&self) -> Result<ColorSetId, ServiceError> {
        self.color_set
    }

    fn system_language_code(&self) -> Result<u64, ServiceError> {
        self.language_code
    }

    fn battery_charge_percentage(&self) -> Result<u32, ServiceError> {
        self.battery_charge
    }

    fn charger_type(&self) -> Result<ChargerType, ServiceError> {
        self.charger
    }

    fn is_wireless_communication_enabled(&self) -> Result<bool, ServiceError> {
        self.wireless_enabled
    }

    fn wifi_signal(&self) -> Result<u32, ServiceError> {
        self.wifi_signal
    }

    fn current_ip_address(&self) -> Result<u32, ServiceError> {
        self.ip_config.map(|c| c.ip)
    }

    fn current_ip_config(&self) -> Result<IpConfig, ServiceError> {
        self.ip_config
    }

    fn applet_type(&self) -> AppletType {
        self.applet_type
    }

    fn applet_main_loop(&self) -> bool {
        match self.frames_left.get() {
            None => true,
            Some(0) => false,
            Some(n) => {
                self.frames_left.set(Some(n - 1));
                true
            }
        }
    }

    fn has_focus(&self) -> bool {
        self.focus.get()
    }

    fn initialize_gameplay_recording(&self) -> Result<(), ServiceError> {
        self.recording?;
        self.log.recording_enabled.set(true);
        Ok(())
    }

    fn show_web_page(&self, url: &str, _whitelist: &str) -> Result<(), ServiceError> {
        self.web_applet?;
        self.log.opened_urls.borrow_mut().push(url.to_owned());
        Ok(())
    }

    fn set_applet_exit_mode(&self, to_home: bool) {
        self.log.exit_mode.set(Some(to_home));
        self.log
            .releases_at_exit
            .set(Some(self.log.releases.borrow().len()));
    }

    fn acquire_display(
        &self,
        _title: &str,
        _width: u32,
        _height: u32,
    ) -> Result<DisplayHandle, ServiceError> {
        self.display
    }

    fn present(&self, _display: DisplayHandle) {
        self.log.presented_frames.set(self.log.presented_frames.get() + 1);
    }

    fn touch_screen_contacts(&self) -> Vec<RawContact> {
        self.touch_frames.borrow_mut().pop_front().unwrap_or_default()
    }

    fn play_system_sound(&self, sound: Sound) -> Result<(), ServiceError> {
        self.audio?;
        self.log.played_sounds.borrow_mut().push(sound);
        Ok(())
    }

    fn load_system_sound(&self, _sound: Sound) -> Result<(), ServiceError> {
        self.audio
    }

    fn shared_font(&self, _font: SharedFont) -> Result<Vec<u8>, ServiceError> {
        self.fonts.clone()
    }

    fn release(&self, subsystem: Subsystem) {
        self.log.releases.borrow_mut().push(subsystem);
    }
}
