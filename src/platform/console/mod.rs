//! Console backend: binds the platform capabilities to the console's native
//! services through [`HorizonServices`].

pub mod services;
pub mod simulator;
pub mod subsystems;

pub use services::{
    AppletType, ChargerType, ColorSetId, DisplayHandle, HorizonServices, IpConfig, ServiceError,
    SharedFont, Subsystem,
};
pub use simulator::SimulatedHorizon;
pub use subsystems::{ConsoleAudioPlayer, ConsoleFontLoader, ConsoleInputManager, ConsoleVideoContext};

use std::rc::Rc;

use crate::error::{Result, ToolkitError};
use crate::platform::{
    AudioPlayer, FontLoader, InputManager, LOCALE_DEFAULT, Platform, VideoContext,
    validate_window_size,
};
use crate::types::ThemeVariant;
use crate::ui::colors::theme_for;
use crate::utils::{decode_language_code, format_ipv4_le};

/// Web applet URL whitelist used by [`Platform::open_browser`].
const BROWSER_WHITELIST: &str = "^http*";

pub struct ConsolePlatform<S: HorizonServices + 'static> {
    // Field order is drop order: input, audio, fonts, then video. Video goes
    // last because the other subsystems may still reference it on teardown.
    // The exit mode is handed over only after all of them are gone.
    input_manager: ConsoleInputManager<S>,
    audio_player: ConsoleAudioPlayer<S>,
    font_loader: ConsoleFontLoader<S>,
    video_context: Option<ConsoleVideoContext<S>>,
    exit_handoff: ExitHandoff<S>,

    services: Rc<S>,
    theme_variant: ThemeVariant,
    locale: String,
}

/// Tells the host where to go when the applet exits, on drop.
struct ExitHandoff<S: HorizonServices> {
    services: Rc<S>,
    to_home: bool,
}

impl<S: HorizonServices> Drop for ExitHandoff<S> {
    fn drop(&mut self) {
        log::info!("console: shut down (exit to home: {})", self.to_home);
        self.services.set_applet_exit_mode(self.to_home);
    }
}

impl<S: HorizonServices + 'static> ConsolePlatform<S> {
    pub fn new(services: S) -> Self {
        let services = Rc::new(services);

        // The clear colour is fixed when the video context is created, so the
        // theme has to be known before `create_window`.
        let theme_variant = match services.color_set_id() {
            Ok(ColorSetId::Dark) => ThemeVariant::Dark,
            Ok(ColorSetId::Light) => ThemeVariant::Light,
            Err(e) => {
                log::error!("console: unable to get the system color set ({e}), using light");
                ThemeVariant::Light
            }
        };
        log::info!("console: using theme {theme_variant}");

        let input_manager = ConsoleInputManager::new(services.clone());
        let audio_player = ConsoleAudioPlayer::new(services.clone());
        let font_loader = ConsoleFontLoader::new(services.clone());

        let locale = match services.system_language_code() {
            Ok(code) => decode_language_code(code).unwrap_or_else(|| {
                log::error!("console: undecodable language code {code:#x}, using {LOCALE_DEFAULT}");
                LOCALE_DEFAULT.to_owned()
            }),
            Err(e) => {
                log::error!("console: unable to get system language ({e}), using {LOCALE_DEFAULT}");
                LOCALE_DEFAULT.to_owned()
            }
        };

        Self {
            input_manager,
            audio_player,
            font_loader,
            video_context: None,
            exit_handoff: ExitHandoff {
                services: services.clone(),
                to_home: false,
            },
            services,
            theme_variant,
            locale,
        }
    }

    pub fn services(&self) -> &S {
        &self.services
    }

    /// Exit mode handed to the host on drop.
    pub fn exits_to_home(&self) -> bool {
        self.exit_handoff.to_home
    }
}

impl<S: HorizonServices + 'static> Platform for ConsolePlatform<S> {
    fn name(&self) -> &str {
        "Console"
    }

    fn create_window(&mut self, title: &str, width: u32, height: u32) -> Result<()> {
        validate_window_size(width, height)?;
        if self.video_context.is_some() {
            return Err(ToolkitError::WindowAlreadyCreated);
        }

        let display = self
            .services
            .acquire_display(title, width, height)
            .map_err(|e| ToolkitError::DisplayUnavailable(e.to_string()))?;
        let clear_color = theme_for(self.theme_variant).background;

        self.video_context = Some(ConsoleVideoContext::new(
            self.services.clone(),
            display,
            width,
            height,
            clear_color,
        ));
        log::info!("console: created {width}x{height} display for \"{title}\"");
        Ok(())
    }

    fn main_loop_iteration(&mut self) -> bool {
        self.services.applet_main_loop()
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
    }

    fn can_show_battery_level(&self) -> bool {
        true
    }

    fn battery_level(&self) -> u8 {
        match self.services.battery_charge_percentage() {
            Ok(charge) => charge.min(100) as u8,
            Err(e) => {
                log::warn!("console: battery level unavailable: {e}");
                0
            }
        }
    }

    fn is_battery_charging(&self) -> bool {
        match self.services.charger_type() {
            Ok(t) => matches!(t, ChargerType::EnoughPower | ChargerType::LowPower),
            Err(e) => {
                log::warn!("console: charger type unavailable: {e}");
                false
            }
        }
    }

    fn has_wireless_connection(&self) -> bool {
        self.services
            .is_wireless_communication_enabled()
            .unwrap_or_else(|e| {
                log::warn!("console: wireless state unavailable: {e}");
                false
            })
    }

    fn wireless_level(&self) -> u8 {
        match self.services.wifi_signal() {
            Ok(bars) => bars.min(3) as u8,
            Err(e) => {
                log::warn!("console: wireless level unavailable: {e}");
                0
            }
        }
    }

    fn ip_address(&self) -> String {
        match self.services.current_ip_address() {
            Ok(ip) => format_ipv4_le(ip),
            Err(e) => {
                log::warn!("console: IP address unavailable: {e}");
                String::new()
            }
        }
    }

    fn dns_server(&self) -> String {
        match self.services.current_ip_config() {
            Ok(cfg) => format!("{}\n{}", format_ipv4_le(cfg.dns1), format_ipv4_le(cfg.dns2)),
            Err(e) => {
                log::warn!("console: IP configuration unavailable: {e}");
                String::new()
            }
        }
    }

    fn is_application_mode(&self) -> bool {
        matches!(
            self.services.applet_type(),
            AppletType::Application | AppletType::SystemApplication
        )
    }

    fn exit_to_home_mode(&mut self, value: bool) {
        self.exit_handoff.to_home = value;
    }

    fn force_enable_gameplay_recording(&mut self) {
        if let Err(e) = self.services.initialize_gameplay_recording() {
            log::error!("console: unable to enable gameplay recording: {e}");
        }
    }

    fn open_browser(&mut self, url: &str) {
        if let Err(e) = self.services.show_web_page(url, BROWSER_WHITELIST) {
            log::error!("console: unable to open {url}: {e}");
        }
    }
}
