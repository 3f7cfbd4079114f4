//! Desktop implementations of the platform subsystems, on top of egui.

use std::collections::BTreeSet;
use std::path::PathBuf;

use eframe::egui;
use egui::Color32;

use crate::platform::{AudioPlayer, FontLoader, InputManager, LoadedFont, Sound, VideoContext};
use crate::types::{Point, TouchId, TouchPhase, TouchState};

/// Touch id used for mouse input emulating a single finger.
pub const POINTER_TOUCH_ID: TouchId = u64::MAX;

// ── Video ──────────────────────────────────────────────────────────────────────

pub struct EguiVideoContext {
    title: String,
    width: u32,
    height: u32,
    clear_color: Color32,
    ctx: Option<egui::Context>,
}

impl EguiVideoContext {
    pub(crate) fn new(title: &str, width: u32, height: u32, clear_color: Color32) -> Self {
        Self {
            title: title.to_owned(),
            width,
            height,
            clear_color,
            ctx: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn viewport(&self) -> egui::ViewportBuilder {
        egui::ViewportBuilder::default()
            .with_title(self.title.clone())
            .with_inner_size([self.width as f32, self.height as f32])
    }

    pub(crate) fn attach(&mut self, ctx: egui::Context) {
        self.ctx = Some(ctx);
    }

    pub fn context(&self) -> Option<&egui::Context> {
        self.ctx.as_ref()
    }

    pub fn close_requested(&self) -> bool {
        self.ctx
            .as_ref()
            .is_some_and(|ctx| ctx.input(|i| i.viewport().close_requested()))
    }
}

impl VideoContext for EguiVideoContext {
    fn window_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear_color(&self) -> Color32 {
        self.clear_color
    }
}

impl Drop for EguiVideoContext {
    fn drop(&mut self) {
        log::debug!("desktop: releasing video context");
    }
}

// ── Audio ──────────────────────────────────────────────────────────────────────

/// Desktop builds have no UI sounds.
#[derive(Debug, Default)]
pub struct NullAudioPlayer;

impl AudioPlayer for NullAudioPlayer {
    fn load(&mut self, _sound: Sound) -> bool {
        false
    }

    fn play(&mut self, sound: Sound) -> bool {
        log::trace!("desktop: no audio output for {sound:?}");
        false
    }
}

// ── Input ──────────────────────────────────────────────────────────────────────

/// Translates egui input events into touch samples.
///
/// Touch screens deliver `Event::Touch` directly. The primary mouse button
/// emulates a single contact with [`POINTER_TOUCH_ID`]. Pointer events are
/// dropped while a real touch is down, because egui also synthesises them
/// from touches.
#[derive(Default)]
pub struct DesktopInputManager {
    ctx: Option<egui::Context>,
    active_touches: BTreeSet<u64>,
    pointer_down: bool,
    last_pointer: Point,
}

impl DesktopInputManager {
    pub(crate) fn attach(&mut self, ctx: egui::Context) {
        self.ctx = Some(ctx);
    }

    pub fn translate(&mut self, events: &[egui::Event], out: &mut Vec<TouchState>) {
        for event in events {
            match event {
                egui::Event::Touch { id, phase, pos, .. } => {
                    match phase {
                        egui::TouchPhase::Start => {
                            self.active_touches.insert(id.0);
                        }
                        egui::TouchPhase::End | egui::TouchPhase::Cancel => {
                            self.active_touches.remove(&id.0);
                        }
                        egui::TouchPhase::Move => {}
                    }
                    let phase = match phase {
                        egui::TouchPhase::Start => TouchPhase::Began,
                        egui::TouchPhase::Move => TouchPhase::Moved,
                        egui::TouchPhase::End => TouchPhase::Ended,
                        egui::TouchPhase::Cancel => TouchPhase::Cancelled,
                    };
                    out.push(TouchState::new(id.0, pos.x, pos.y, phase));
                }
                _ if !self.active_touches.is_empty() => {}
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    self.last_pointer = Point::new(pos.x, pos.y);
                    if *pressed && !self.pointer_down {
                        self.pointer_down = true;
                        out.push(TouchState::began(POINTER_TOUCH_ID, pos.x, pos.y));
                    } else if !*pressed && self.pointer_down {
                        self.pointer_down = false;
                        out.push(TouchState::ended(POINTER_TOUCH_ID, pos.x, pos.y));
                    }
                }
                egui::Event::PointerMoved(pos) => {
                    self.last_pointer = Point::new(pos.x, pos.y);
                    if self.pointer_down {
                        out.push(TouchState::moved(POINTER_TOUCH_ID, pos.x, pos.y));
                    }
                }
                egui::Event::PointerGone if self.pointer_down => {
                    self.pointer_down = false;
                    let p = self.last_pointer;
                    out.push(TouchState::cancelled(POINTER_TOUCH_ID, p.x, p.y));
                }
                _ => {}
            }
        }
    }
}

impl InputManager for DesktopInputManager {
    fn update_touch_states(&mut self, out: &mut Vec<TouchState>) {
        let Some(events) = self.ctx.as_ref().map(|ctx| ctx.input(|i| i.events.clone())) else {
            return;
        };
        self.translate(&events, out);
    }
}

impl Drop for DesktopInputManager {
    fn drop(&mut self) {
        log::debug!("desktop: releasing input manager");
    }
}

// ── Fonts ──────────────────────────────────────────────────────────────────────

/// Loads an optional user font; egui's built-in fonts stay as fallback.
#[derive(Debug, Default)]
pub struct DesktopFontLoader {
    path: Option<PathBuf>,
}

impl DesktopFontLoader {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl FontLoader for DesktopFontLoader {
    fn load_fonts(&self) -> Vec<LoadedFont> {
        let Some(path) = &self.path else {
            return Vec::new();
        };
        match std::fs::read(path) {
            Ok(data) => {
                let name = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "user".to_owned());
                vec![LoadedFont { name, data }]
            }
            Err(e) => {
                log::warn!("desktop: unable to load font {}: {e}", path.display());
                Vec::new()
            }
        }
    }
}
