//! Frame-driven toolkit core: owns the platform and the interactive elements.
//!
//! One frame, all on the calling thread:
//! 1. `main_loop_iteration` (false ends the loop).
//! 2. Poll the input manager and route every touch sample to its element.
//! 3. Begin/end the frame on the video context, if a window exists.
//! 4. Refresh the status indicators every `status_refresh_frames` frames.

use crate::config::ToolkitConfig;
use crate::platform::Platform;
use crate::touch::TapGestureRecognizer;
use crate::types::TouchState;
use crate::ui::colors::{Theme, theme_for};
use crate::ui::element::{Element, ElementId, ElementSet};
use crate::ui::status::StatusIndicators;

pub struct Toolkit {
    platform: Box<dyn Platform>,
    elements: ElementSet,
    status: StatusIndicators,
    touch_buf: Vec<TouchState>,

    tap_tolerance: f32,
    status_refresh_frames: u64,
    frame_counter: u64,
}

impl Toolkit {
    pub fn new(platform: Box<dyn Platform>, config: &ToolkitConfig) -> Self {
        let mut status = StatusIndicators::default();
        status.refresh(platform.as_ref());
        log::info!(
            "toolkit: running on {} (locale {}, theme {})",
            platform.name(),
            platform.locale(),
            platform.theme_variant()
        );

        Self {
            platform,
            elements: ElementSet::new(),
            status,
            touch_buf: Vec::with_capacity(16),
            tap_tolerance: config.tap_tolerance,
            status_refresh_frames: config.status_refresh_frames.max(1),
            frame_counter: 0,
        }
    }

    pub fn platform(&self) -> &dyn Platform {
        self.platform.as_ref()
    }

    pub fn platform_mut(&mut self) -> &mut dyn Platform {
        self.platform.as_mut()
    }

    pub fn add_element(&mut self, element: Element) -> ElementId {
        self.elements.add(element)
    }

    pub fn elements(&self) -> &ElementSet {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut ElementSet {
        &mut self.elements
    }

    /// Tap recognizer using the configured movement tolerance.
    pub fn tap_recognizer(&self, respond: impl FnMut() + 'static, taps: u32) -> TapGestureRecognizer {
        TapGestureRecognizer::new(respond, taps).with_tolerance(self.tap_tolerance)
    }

    /// Colour table for the platform's current theme variant.
    pub fn theme(&self) -> &'static Theme {
        theme_for(self.platform.theme_variant())
    }

    pub fn status(&self) -> &StatusIndicators {
        &self.status
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_counter
    }

    /// Run one frame. Returns false once the host asked to shut down.
    pub fn run_frame(&mut self) -> bool {
        if !self.platform.main_loop_iteration() {
            log::info!("toolkit: main loop finished after {} frames", self.frame_counter);
            return false;
        }

        if let Ok(video) = self.platform.video_context() {
            video.begin_frame();
        }

        self.touch_buf.clear();
        self.platform.input_manager().update_touch_states(&mut self.touch_buf);
        for touch in &self.touch_buf {
            self.elements.route(touch);
        }

        if let Ok(video) = self.platform.video_context() {
            video.end_frame();
        }

        self.frame_counter += 1;
        if self.frame_counter % self.status_refresh_frames == 0 {
            self.status.refresh(self.platform.as_ref());
        }
        true
    }

    /// Run frames until the platform stops the loop. Returns the frame count.
    pub fn run(&mut self) -> u64 {
        while self.run_frame() {}
        self.frame_counter
    }
}
