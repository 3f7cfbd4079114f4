use std::cell::Cell;
use std::rc::Rc;

use trellis::Toolkit;
use trellis::config::ToolkitConfig;
use trellis::platform::Platform;
use trellis::platform::console::{ConsolePlatform, SimulatedHorizon};
use trellis::touch::RawContact;
use trellis::types::Rect;
use trellis::ui::element::Element;
use trellis::ui::status::BatteryIndicator;

fn contact(id: u64, x: f32, y: f32) -> Vec<RawContact> {
    vec![RawContact { id, x, y }]
}

fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    (count, move || c.set(c.get() + 1))
}

#[test]
fn test_run_until_applet_exits() {
    let services = SimulatedHorizon::new().with_frame_limit(5);
    let log = services.log();
    let mut platform = ConsolePlatform::new(services);
    platform.create_window("demo", 1280, 720).unwrap();

    let mut toolkit = Toolkit::new(Box::new(platform), &ToolkitConfig::default());
    assert_eq!(toolkit.run(), 5);
    assert_eq!(log.presented_frames(), 5);
}

#[test]
fn test_scripted_taps_reach_the_right_element() {
    let frames = [
        contact(0, 10.0, 10.0),
        vec![],
        contact(1, 210.0, 10.0),
        vec![],
        contact(2, 210.0, 12.0),
        vec![],
    ];
    let services = SimulatedHorizon::new()
        .with_touch_frames(frames)
        .with_frame_limit(10);
    let mut platform = ConsolePlatform::new(services);
    platform.create_window("demo", 1280, 720).unwrap();

    let mut toolkit = Toolkit::new(Box::new(platform), &ToolkitConfig::default());
    let (left_taps, on_left) = counter();
    let (right_double, on_right) = counter();
    let left = toolkit.tap_recognizer(on_left, 1);
    let right = toolkit.tap_recognizer(on_right, 2);
    toolkit.add_element(Element::new("left", Rect::new(0.0, 0.0, 100.0, 100.0)).with_recognizer(left));
    toolkit.add_element(
        Element::new("right", Rect::new(200.0, 0.0, 100.0, 100.0)).with_recognizer(right),
    );

    toolkit.run();
    assert_eq!(left_taps.get(), 1);
    assert_eq!(right_double.get(), 1);
}

#[test]
fn test_single_and_double_taps_on_separate_halves() {
    let frames = [
        contact(0, 100.0, 100.0),
        vec![],
        contact(0, 102.0, 101.0),
        vec![],
        contact(0, 960.0, 200.0),
        vec![],
    ];
    let services = SimulatedHorizon::new()
        .with_touch_frames(frames)
        .with_frame_limit(8);
    let mut toolkit = Toolkit::new(
        Box::new(ConsolePlatform::new(services)),
        &ToolkitConfig::default(),
    );
    let (doubles, on_double) = counter();
    let (singles, on_single) = counter();
    let double = toolkit.tap_recognizer(on_double, 2);
    let single = toolkit.tap_recognizer(on_single, 1);
    toolkit.add_element(Element::new("double", Rect::new(0.0, 0.0, 640.0, 720.0)).with_recognizer(double));
    toolkit.add_element(Element::new("single", Rect::new(640.0, 0.0, 640.0, 720.0)).with_recognizer(single));

    toolkit.run();
    assert_eq!(doubles.get(), 1);
    assert_eq!(singles.get(), 1);
}

#[test]
fn test_single_tap_behind_double_tap_is_locked_out() {
    let frames = [contact(0, 100.0, 100.0), vec![]];
    let services = SimulatedHorizon::new()
        .with_touch_frames(frames)
        .with_frame_limit(3);
    let mut toolkit = Toolkit::new(
        Box::new(ConsolePlatform::new(services)),
        &ToolkitConfig::default(),
    );
    let (singles, on_single) = counter();
    let (_, on_double) = counter();
    let double = toolkit.tap_recognizer(on_double, 2);
    let single = toolkit.tap_recognizer(on_single, 1);
    toolkit.add_element(
        Element::new("screen", Rect::new(0.0, 0.0, 1280.0, 720.0))
            .with_recognizer(double)
            .with_recognizer(single),
    );

    toolkit.run();
    assert_eq!(singles.get(), 0);
}

#[test]
fn test_drag_is_not_a_tap() {
    let frames = [contact(0, 10.0, 10.0), contact(0, 40.0, 10.0), vec![]];
    let services = SimulatedHorizon::new()
        .with_touch_frames(frames)
        .with_frame_limit(4);
    let mut toolkit = Toolkit::new(
        Box::new(ConsolePlatform::new(services)),
        &ToolkitConfig::default(),
    );
    let (taps, on_tap) = counter();
    let tap = toolkit.tap_recognizer(on_tap, 1);
    toolkit.add_element(Element::new("screen", Rect::new(0.0, 0.0, 1280.0, 720.0)).with_recognizer(tap));

    toolkit.run();
    assert_eq!(taps.get(), 0);
}

#[test]
fn test_configured_tolerance_applies() {
    let frames = [contact(0, 10.0, 10.0), contact(0, 30.0, 10.0), vec![]];
    let services = SimulatedHorizon::new()
        .with_touch_frames(frames)
        .with_frame_limit(4);
    let config = ToolkitConfig {
        tap_tolerance: 25.0,
        ..ToolkitConfig::default()
    };
    let mut toolkit = Toolkit::new(Box::new(ConsolePlatform::new(services)), &config);
    let (taps, on_tap) = counter();
    let tap = toolkit.tap_recognizer(on_tap, 1);
    toolkit.add_element(Element::new("screen", Rect::new(0.0, 0.0, 1280.0, 720.0)).with_recognizer(tap));

    toolkit.run();
    assert_eq!(taps.get(), 1);
}

#[test]
fn test_status_refreshes_on_schedule() {
    let config = ToolkitConfig {
        status_refresh_frames: 3,
        ..ToolkitConfig::default()
    };
    let services = SimulatedHorizon::new().with_frame_limit(3);
    let mut toolkit = Toolkit::new(Box::new(ConsolePlatform::new(services)), &config);

    // Filled at construction.
    assert_eq!(
        toolkit.status().battery,
        Some(BatteryIndicator {
            level: 80,
            charging: false
        })
    );
    assert_eq!(toolkit.status().wireless, Some(3));
    assert_eq!(toolkit.status().summary(), "80% | wifi 3/3 | 192.168.1.42");

    toolkit.run();
    assert_eq!(toolkit.frame_count(), 3);
}

#[test]
fn test_unsupported_host_hides_indicators() {
    let toolkit = Toolkit::new(
        Box::new(ConsolePlatform::new(SimulatedHorizon::unsupported())),
        &ToolkitConfig::default(),
    );
    // Console always shows the battery, at the 0 sentinel.
    assert_eq!(toolkit.status().battery.map(|b| b.level), Some(0));
    assert_eq!(toolkit.status().wireless, None);
    assert_eq!(toolkit.status().ip_address, "");
}

#[test]
fn test_theme_follows_platform() {
    let mut toolkit = Toolkit::new(
        Box::new(ConsolePlatform::new(SimulatedHorizon::new())),
        &ToolkitConfig::default(),
    );
    let light = toolkit.theme().background;
    toolkit
        .platform_mut()
        .set_theme_variant(trellis::ThemeVariant::Dark);
    assert_ne!(toolkit.theme().background, light);
    assert_eq!(toolkit.platform().name(), "Console");
}
