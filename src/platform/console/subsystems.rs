//! Console implementations of the platform subsystems.
//!
//! Every handle reports its teardown to [`HorizonServices::release`] when
//! dropped, so the native resources follow the platform's field drop order.

use std::collections::HashSet;
use std::rc::Rc;

use egui::Color32;

use super::services::{DisplayHandle, HorizonServices, SharedFont, Subsystem};
use crate::platform::{AudioPlayer, FontLoader, InputManager, LoadedFont, Sound, VideoContext};
use crate::touch::TouchTracker;
use crate::types::TouchState;

// ── Video ──────────────────────────────────────────────────────────────────────

pub struct ConsoleVideoContext<S: HorizonServices> {
    services: Rc<S>,
    display: DisplayHandle,
    width: u32,
    height: u32,
    clear_color: Color32,
}

impl<S: HorizonServices> ConsoleVideoContext<S> {
    pub(crate) fn new(
        services: Rc<S>,
        display: DisplayHandle,
        width: u32,
        height: u32,
        clear_color: Color32,
    ) -> Self {
        Self {
            services,
            display,
            width,
            height,
            clear_color,
        }
    }
}

impl<S: HorizonServices> VideoContext for ConsoleVideoContext<S> {
    fn window_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear_color(&self) -> Color32 {
        self.clear_color
    }

    fn end_frame(&self) {
        self.services.present(self.display);
    }
}

impl<S: HorizonServices> Drop for ConsoleVideoContext<S> {
    fn drop(&mut self) {
        log::debug!("console: releasing video context");
        self.services.release(Subsystem::Video);
    }
}

// ── Audio ──────────────────────────────────────────────────────────────────────

pub struct ConsoleAudioPlayer<S: HorizonServices> {
    services: Rc<S>,
    loaded: HashSet<Sound>,
}

impl<S: HorizonServices> ConsoleAudioPlayer<S> {
    pub(crate) fn new(services: Rc<S>) -> Self {
        Self {
            services,
            loaded: HashSet::new(),
        }
    }
}

impl<S: HorizonServices> AudioPlayer for ConsoleAudioPlayer<S> {
    fn load(&mut self, sound: Sound) -> bool {
        if self.loaded.contains(&sound) {
            return true;
        }
        match self.services.load_system_sound(sound) {
            Ok(()) => {
                self.loaded.insert(sound);
                true
            }
            Err(e) => {
                log::warn!("console: unable to load sound {sound:?}: {e}");
                false
            }
        }
    }

    fn play(&mut self, sound: Sound) -> bool {
        if !self.load(sound) {
            return false;
        }
        match self.services.play_system_sound(sound) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("console: unable to play sound {sound:?}: {e}");
                false
            }
        }
    }
}

impl<S: HorizonServices> Drop for ConsoleAudioPlayer<S> {
    fn drop(&mut self) {
        log::debug!("console: releasing audio player");
        self.services.release(Subsystem::Audio);
    }
}

// ── Input ──────────────────────────────────────────────────────────────────────

pub struct ConsoleInputManager<S: HorizonServices> {
    services: Rc<S>,
    tracker: TouchTracker,
}

impl<S: HorizonServices> ConsoleInputManager<S> {
    pub(crate) fn new(services: Rc<S>) -> Self {
        Self {
            services,
            tracker: TouchTracker::new(),
        }
    }
}

impl<S: HorizonServices> InputManager for ConsoleInputManager<S> {
    fn update_touch_states(&mut self, out: &mut Vec<TouchState>) {
        // Contacts in flight when the applet loses focus never get a release.
        if !self.services.has_focus() {
            self.tracker.cancel_all(out);
            return;
        }
        let contacts = self.services.touch_screen_contacts();
        self.tracker.update(&contacts, out);
    }
}

impl<S: HorizonServices> Drop for ConsoleInputManager<S> {
    fn drop(&mut self) {
        log::debug!("console: releasing input manager");
        self.services.release(Subsystem::Input);
    }
}

// ── Fonts ──────────────────────────────────────────────────────────────────────

pub struct ConsoleFontLoader<S: HorizonServices> {
    services: Rc<S>,
}

impl<S: HorizonServices> ConsoleFontLoader<S> {
    pub(crate) fn new(services: Rc<S>) -> Self {
        Self { services }
    }
}

impl<S: HorizonServices> FontLoader for ConsoleFontLoader<S> {
    fn load_fonts(&self) -> Vec<LoadedFont> {
        SharedFont::ALL
            .iter()
            .filter_map(|&font| match self.services.shared_font(font) {
                Ok(data) => Some(LoadedFont {
                    name: font.name().to_owned(),
                    data,
                }),
                Err(e) => {
                    log::warn!("console: shared font {} unavailable: {e}", font.name());
                    None
                }
            })
            .collect()
    }
}

impl<S: HorizonServices> Drop for ConsoleFontLoader<S> {
    fn drop(&mut self) {
        log::debug!("console: releasing font loader");
        self.services.release(Subsystem::Font);
    }
}
