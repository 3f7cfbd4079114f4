use std::cell::Cell;
use std::env;
use std::process::ExitCode;
use std::rc::Rc;

use trellis::config::{Backend, ToolkitConfig};
use trellis::platform::Platform;
use trellis::platform::console::{ConsolePlatform, SimulatedHorizon};
use trellis::platform::desktop::DesktopPlatform;
use trellis::touch::RawContact;
use trellis::types::Rect;
use trellis::ui::app::DesktopApp;
use trellis::ui::element::Element;
use trellis::{Result, Toolkit};

fn main() -> ExitCode {
    // Optional config file path as the first argument.
    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => match ToolkitConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("unable to load config {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => ToolkitConfig::default(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter.as_str()),
    )
    .init();

    let result = match config.backend {
        Backend::Desktop => run_desktop(config),
        Backend::Console => run_console(config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_desktop(config: ToolkitConfig) -> Result<()> {
    let mut platform = DesktopPlatform::new(&config);
    platform.create_window(&config.window.title, config.window.width, config.window.height)?;
    let options = platform.native_options()?;
    let title = config.window.title.clone();

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            platform.attach(&cc.egui_ctx);
            let toolkit = Toolkit::new(Box::new(platform), &config);
            Ok(Box::new(DesktopApp::new(toolkit)))
        }),
    )?;
    Ok(())
}

/// Headless run against the simulated console: replays a double tap on the
/// left half, a single tap on the right half, and a drag.
fn run_console(config: ToolkitConfig) -> Result<()> {
    let services = SimulatedHorizon::new()
        .with_touch_frames(demo_touch_script(config.window.width as f32))
        .with_frame_limit(config.max_frames.unwrap_or(120));

    let mut platform = ConsolePlatform::new(services);
    if let Some(theme) = config.theme {
        platform.set_theme_variant(theme);
    }
    platform.create_window(&config.window.title, config.window.width, config.window.height)?;

    let mut toolkit = Toolkit::new(Box::new(platform), &config);
    let taps = Rc::new(Cell::new(0u32));
    let double_taps = Rc::new(Cell::new(0u32));

    let (t, d) = (taps.clone(), double_taps.clone());
    let half = config.window.width as f32 / 2.0;
    let height = config.window.height as f32;
    let left = Element::new("double", Rect::new(0.0, 0.0, half, height))
        .with_recognizer(toolkit.tap_recognizer(move || d.set(d.get() + 1), 2));
    let right = Element::new("single", Rect::new(half, 0.0, half, height))
        .with_recognizer(toolkit.tap_recognizer(move || t.set(t.get() + 1), 1));
    toolkit.add_element(left);
    toolkit.add_element(right);

    let frames = toolkit.run();
    log::info!(
        "console: {frames} frames, {} double taps, {} taps, status [{}]",
        double_taps.get(),
        taps.get(),
        toolkit.status().summary()
    );
    Ok(())
}

fn demo_touch_script(width: f32) -> Vec<Vec<RawContact>> {
    let at = |x: f32, y: f32| vec![RawContact { id: 0, x, y }];
    vec![
        // Double tap.
        at(100.0, 100.0),
        vec![],
        at(102.0, 101.0),
        vec![],
        // Single tap on the right half.
        at(width * 0.75, 200.0),
        vec![],
        // Drag: never recognised as a tap.
        at(300.0, 300.0),
        at(340.0, 300.0),
        vec![],
    ]
}
