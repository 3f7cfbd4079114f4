//! Desktop backend: an eframe window, egui input, and host telemetry probed
//! in the background.

pub mod subsystems;
pub mod telemetry;

pub use subsystems::{
    DesktopFontLoader, DesktopInputManager, EguiVideoContext, NullAudioPlayer, POINTER_TOUCH_ID,
};
pub use telemetry::{BatteryStatus, TelemetrySnapshot};

use std::process::Command;
use std::sync::Arc;
use std::sync::mpsc::{self as std_mpsc, Receiver as StdReceiver};
use std::time::Duration;

use eframe::egui;

use crate::config::ToolkitConfig;
use crate::error::{Result, ToolkitError};
use crate::platform::{
    AudioPlayer, FontLoader, InputManager, LOCALE_DEFAULT, Platform, VideoContext,
    validate_window_size,
};
use crate::types::ThemeVariant;
use crate::ui::colors::theme_for;

pub struct DesktopPlatform {
    // Field order is drop order, video context last.
    input_manager: DesktopInputManager,
    audio_player: NullAudioPlayer,
    font_loader: DesktopFontLoader,
    video_context: Option<EguiVideoContext>,

    theme_variant: ThemeVariant,
    /// No theme was configured; adopt the system one once egui reports it.
    theme_from_host: bool,
    locale: String,

    telemetry_rx: StdReceiver<TelemetrySnapshot>,
    telemetry: TelemetrySnapshot,
}

impl DesktopPlatform {
    pub fn new(config: &ToolkitConfig) -> Self {
        let (tx, telemetry_rx) = std_mpsc::channel();
        telemetry::spawn_probe_thread(tx, Duration::from_millis(config.telemetry_interval_ms));

        let locale = config
            .locale
            .clone()
            .or_else(host_locale)
            .unwrap_or_else(|| LOCALE_DEFAULT.to_owned());
        let theme_variant = config.theme.unwrap_or_default();
        log::info!("desktop: locale {locale}, theme {theme_variant}");

        Self {
            input_manager: DesktopInputManager::default(),
            audio_player: NullAudioPlayer,
            font_loader: DesktopFontLoader::new(config.font_path.clone()),
            video_context: None,
            theme_variant,
            theme_from_host: config.theme.is_none(),
            locale,
            telemetry_rx,
            telemetry: TelemetrySnapshot::default(),
        }
    }

    /// eframe options for the window created by `create_window`.
    pub fn native_options(&self) -> Result<eframe::NativeOptions> {
        let video = self
            .video_context
            .as_ref()
            .ok_or(ToolkitError::NotInitialized("video context"))?;
        Ok(eframe::NativeOptions {
            viewport: video.viewport(),
            ..Default::default()
        })
    }

    /// Hand the live egui context to the subsystems. Called once from the
    /// eframe creation context, before the first frame.
    pub fn attach(&mut self, ctx: &egui::Context) {
        if self.theme_from_host {
            if let Some(theme) = ctx.system_theme() {
                self.theme_variant = match theme {
                    egui::Theme::Dark => ThemeVariant::Dark,
                    egui::Theme::Light => ThemeVariant::Light,
                };
                log::info!("desktop: system theme is {}", self.theme_variant);
            }
        }
        apply_visuals(ctx, self.theme_variant);

        let fonts = self.font_loader.load_fonts();
        if !fonts.is_empty() {
            let mut defs = egui::FontDefinitions::default();
            // Reverse so that the first loaded font ends up first in the family.
            for font in fonts.into_iter().rev() {
                defs.font_data.insert(
                    font.name.clone(),
                    Arc::new(egui::FontData::from_owned(font.data)),
                );
                for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                    defs.families.entry(family).or_default().insert(0, font.name.clone());
                }
            }
            ctx.set_fonts(defs);
        }

        self.input_manager.attach(ctx.clone());
        if let Some(video) = self.video_context.as_mut() {
            video.attach(ctx.clone());
        }
    }

    /// Most recent telemetry received from the probe thread.
    pub fn telemetry(&self) -> &TelemetrySnapshot {
        &self.telemetry
    }
}

impl Platform for DesktopPlatform {
    fn name(&self) -> &str {
        "Desktop"
    }

    fn create_window(&mut self, title: &str, width: u32, height: u32) -> Result<()> {
        validate_window_size(width, height)?;
        if self.video_context.is_some() {
            return Err(ToolkitError::WindowAlreadyCreated);
        }
        let clear_color = theme_for(self.theme_variant).background;
        self.video_context = Some(EguiVideoContext::new(title, width, height, clear_color));
        log::info!("desktop: window \"{title}\" {width}x{height}");
        Ok(())
    }

    fn main_loop_iteration(&mut self) -> bool {
        while let Ok(snapshot) = self.telemetry_rx.try_recv() {
            self.telemetry = snapshot;
        }
        !self
            .video_context
            .as_ref()
            .is_some_and(EguiVideoContext::close_requested)
    }

    fn video_context(&self) -> Result<&dyn VideoContext> {
        self.video_context
            .as_ref()
            .map(|v| v as &dyn VideoContext)
            .ok_or(ToolkitError::NotInitialized("video context"))
    }

    fn audio_player(&mut self) -> &mut dyn AudioPlayer {
        &mut self.audio_player
    }

    fn input_manager(&mut self) -> &mut dyn InputManager {
        &mut self.input_manager
    }

    fn font_loader(&self) -> &dyn FontLoader {
        &self.font_loader
    }

    fn locale(&self) -> &str {
        &self.locale
    }

    fn theme_variant(&self) -> ThemeVariant {
        self.theme_variant
    }

    fn set_theme_variant(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.theme_from_host = false;
        if let Some(ctx) = self.video_context.as_ref().and_then(EguiVideoContext::context) {
            apply_visuals(ctx, variant);
        }
    }

    fn can_show_battery_level(&self) -> bool {
        self.telemetry.battery.is_some()
    }

    fn battery_level(&self) -> u8 {
        self.telemetry.battery.map_or(0, |b| b.level)
    }

    fn is_battery_charging(&self) -> bool {
        self.telemetry.battery.is_some_and(|b| b.charging)
    }

    fn has_wireless_connection(&self) -> bool {
        self.telemetry.wireless_level.is_some()
    }

    fn wireless_level(&self) -> u8 {
        self.telemetry.wireless_level.unwrap_or(0)
    }

    fn ip_address(&self) -> String {
        self.telemetry.ip_address.clone().unwrap_or_default()
    }

    fn dns_server(&self) -> String {
        self.telemetry
            .dns_servers
            .iter()
            .take(2)
            .cloned()
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn is_application_mode(&self) -> bool {
        true
    }

    fn open_browser(&mut self, url: &str) {
        match browser_command(url).spawn() {
            Ok(_) => log::info!("desktop: opened {url}"),
            Err(e) => log::error!("desktop: unable to open {url}: {e}"),
        }
    }
}

fn apply_visuals(ctx: &egui::Context, variant: ThemeVariant) {
    ctx.set_visuals(match variant {
        ThemeVariant::Dark => egui::Visuals::dark(),
        ThemeVariant::Light => egui::Visuals::light(),
    });
}

#[cfg(target_os = "windows")]
fn browser_command(url: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    cmd
}

#[cfg(target_os = "macos")]
fn browser_command(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn browser_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

/// Locale from the POSIX environment (`LC_ALL`, `LC_MESSAGES`, `LANG`),
/// e.g. `en_GB.UTF-8` -> `en-GB`.
fn host_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| posix_to_locale(&value))
}

pub(crate) fn posix_to_locale(value: &str) -> Option<String> {
    let name = value.split(['.', '@']).next()?.trim();
    if name.is_empty() || name == "C" || name == "POSIX" {
        return None;
    }
    Some(name.replace('_', "-"))
}
