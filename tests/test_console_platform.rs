use trellis::ToolkitError;
use trellis::platform::console::{
    AppletType, ChargerType, ColorSetId, ConsolePlatform, SimulatedHorizon, Subsystem,
};
use trellis::platform::{LOCALE_DEFAULT, Platform, Sound};
use trellis::touch::RawContact;
use trellis::types::{ThemeVariant, TouchPhase};
use trellis::ui::colors::theme_for;
use trellis::utils::encode_language_code;

#[test]
fn test_construction_caches_theme_and_locale() {
    let mut services = SimulatedHorizon::new();
    services.color_set = Ok(ColorSetId::Dark);
    services.language_code = Ok(encode_language_code("fr-CA"));

    let platform = ConsolePlatform::new(services);
    assert_eq!(platform.theme_variant(), ThemeVariant::Dark);
    assert_eq!(platform.locale(), "fr-CA");
    assert_eq!(platform.name(), "Console");
}

#[test]
fn test_locale_falls_back_to_default() {
    let platform = ConsolePlatform::new(SimulatedHorizon::unsupported());
    assert_eq!(platform.locale(), LOCALE_DEFAULT);
    assert_eq!(platform.theme_variant(), ThemeVariant::Light);
}

#[test]
fn test_zero_width_window_is_fatal() {
    let mut platform = ConsolePlatform::new(SimulatedHorizon::new());
    for _ in 0..2 {
        let err = platform.create_window("demo", 0, 720).unwrap_err();
        assert!(matches!(
            err,
            ToolkitError::InvalidWindowSize {
                width: 0,
                height: 720
            }
        ));
    }
    assert!(matches!(
        platform.video_context(),
        Err(ToolkitError::NotInitialized(_))
    ));
}

#[test]
fn test_display_failure_is_fatal() {
    let mut services = SimulatedHorizon::new();
    services.display = Err(trellis::platform::console::ServiceError(0x1234));
    let mut platform = ConsolePlatform::new(services);

    let err = platform.create_window("demo", 1280, 720).unwrap_err();
    assert!(matches!(err, ToolkitError::DisplayUnavailable(_)));
    assert!(err.to_string().contains("0x1234"));
}

#[test]
fn test_window_is_created_once() {
    let mut platform = ConsolePlatform::new(SimulatedHorizon::new());
    platform.create_window("demo", 1280, 720).unwrap();
    assert!(matches!(
        platform.create_window("demo", 1280, 720),
        Err(ToolkitError::WindowAlreadyCreated)
    ));
    assert_eq!(platform.video_context().unwrap().window_size(), (1280, 720));
}

#[test]
fn test_theme_change_keeps_window_clear_color() {
    let mut platform = ConsolePlatform::new(SimulatedHorizon::new());
    platform.create_window("demo", 1280, 720).unwrap();

    platform.set_theme_variant(ThemeVariant::Dark);
    assert_eq!(platform.theme_variant(), ThemeVariant::Dark);
    assert_eq!(
        platform.video_context().unwrap().clear_color(),
        theme_for(ThemeVariant::Light).background
    );
}

#[test]
fn test_subsystems_available_after_init() {
    let mut platform = ConsolePlatform::new(SimulatedHorizon::new());
    platform.create_window("demo", 1280, 720).unwrap();

    assert!(platform.video_context().is_ok());
    assert!(!platform.font_loader().load_fonts().is_empty());
    assert!(platform.audio_player().play(Sound::Click));
    assert!(!platform.locale().is_empty());
    assert_eq!(platform.services().log().played_sounds(), vec![Sound::Click]);
}

#[test]
fn test_telemetry_probes() {
    let mut services = SimulatedHorizon::new();
    services.charger = Ok(ChargerType::LowPower);
    let platform = ConsolePlatform::new(services);

    assert!(platform.can_show_battery_level());
    assert_eq!(platform.battery_level(), 80);
    assert!(platform.is_battery_charging());
    assert!(platform.has_wireless_connection());
    assert_eq!(platform.wireless_level(), 3);
    assert_eq!(platform.ip_address(), "192.168.1.42");
    assert_eq!(platform.dns_server(), "1.1.1.1\n8.8.8.8");
    assert!(platform.is_application_mode());
}

#[test]
fn test_unsupported_telemetry_returns_stable_sentinels() {
    let platform = ConsolePlatform::new(SimulatedHorizon::unsupported());
    for _ in 0..3 {
        assert_eq!(platform.battery_level(), 0);
        assert!(!platform.is_battery_charging());
        assert!(!platform.has_wireless_connection());
        assert_eq!(platform.wireless_level(), 0);
        assert_eq!(platform.ip_address(), "");
        assert_eq!(platform.dns_server(), "");
        assert!(!platform.is_application_mode());
    }
}

#[test]
fn test_system_application_counts_as_application_mode() {
    let mut services = SimulatedHorizon::new();
    services.applet_type = AppletType::SystemApplication;
    assert!(ConsolePlatform::new(services).is_application_mode());
}

#[test]
fn test_host_action_failures_are_absorbed() {
    let mut platform = ConsolePlatform::new(SimulatedHorizon::unsupported());
    let log = platform.services().log();
    platform.open_browser("https://example.org");
    platform.force_enable_gameplay_recording();
    assert!(!platform.audio_player().play(Sound::FocusChange));
    assert!(log.opened_urls().is_empty());
    assert!(!log.recording_enabled());
}

#[test]
fn test_host_actions_reach_the_services() {
    let mut platform = ConsolePlatform::new(SimulatedHorizon::new());
    let log = platform.services().log();
    platform.open_browser("https://example.org");
    platform.force_enable_gameplay_recording();
    assert_eq!(log.opened_urls(), vec!["https://example.org"]);
    assert!(log.recording_enabled());
}

#[test]
fn test_main_loop_follows_applet() {
    let mut platform = ConsolePlatform::new(SimulatedHorizon::new().with_frame_limit(2));
    assert!(platform.main_loop_iteration());
    assert!(platform.main_loop_iteration());
    assert!(!platform.main_loop_iteration());
}

#[test]
fn test_touch_screen_phases() {
    let contact = |x: f32| vec![RawContact { id: 5, x, y: 10.0 }];
    let services = SimulatedHorizon::new().with_touch_frames([contact(10.0), contact(12.0), vec![]]);
    let mut platform = ConsolePlatform::new(services);

    let mut samples = Vec::new();
    for _ in 0..3 {
        platform.input_manager().update_touch_states(&mut samples);
    }
    let phases: Vec<TouchPhase> = samples.iter().map(|s| s.phase).collect();
    assert_eq!(
        phases,
        vec![TouchPhase::Began, TouchPhase::Moved, TouchPhase::Ended]
    );
}

#[test]
fn test_focus_loss_cancels_touches() {
    let services =
        SimulatedHorizon::new().with_touch_frames([vec![RawContact { id: 1, x: 4.0, y: 4.0 }]]);
    let mut platform = ConsolePlatform::new(services);

    let mut samples = Vec::new();
    platform.input_manager().update_touch_states(&mut samples);
    platform.services().set_focus(false);
    platform.input_manager().update_touch_states(&mut samples);

    assert_eq!(samples.len(), 2);
    assert_eq!(samples[1].phase, TouchPhase::Cancelled);
}

#[test]
fn test_teardown_order_and_exit_mode() {
    let services = SimulatedHorizon::new();
    let log = services.log();
    let mut platform = ConsolePlatform::new(services);
    platform.create_window("demo", 1280, 720).unwrap();
    platform.exit_to_home_mode(true);
    assert!(platform.exits_to_home());
    assert_eq!(log.exit_mode(), None);

    drop(platform);
    assert_eq!(log.exit_mode(), Some(true));
    assert_eq!(log.releases_at_exit(), Some(4), "exit mode is set after teardown");
    assert_eq!(
        log.releases(),
        vec![
            Subsystem::Input,
            Subsystem::Audio,
            Subsystem::Font,
            Subsystem::Video
        ]
    );
}

#[test]
fn test_teardown_without_window() {
    let services = SimulatedHorizon::new();
    let log = services.log();
    drop(ConsolePlatform::new(services));
    assert_eq!(log.exit_mode(), Some(false));
    assert_eq!(log.releases_at_exit(), Some(3));
    assert_eq!(
        log.releases(),
        vec![Subsystem::Input, Subsystem::Audio, Subsystem::Font]
    );
}
