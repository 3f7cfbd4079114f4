//! Desktop demo application: drives the [`Toolkit`] from eframe's frame loop
//! and paints a few tap targets plus the status bar.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use eframe::egui;
use egui::{Align2, FontId, Pos2, Vec2};

use crate::platform::Sound;
use crate::toolkit::Toolkit;
use crate::types::{Rect, ThemeVariant};
use crate::ui::element::Element;

/// Status indicators only change on telemetry, not on input.
const IDLE_REPAINT: Duration = Duration::from_millis(250);

struct TapTarget {
    label: &'static str,
    frame: Rect,
    count: Rc<Cell<u32>>,
}

/// The top-level desktop application, implementing [`eframe::App`].
pub struct DesktopApp {
    toolkit: Toolkit,
    targets: Vec<TapTarget>,
    /// Set by tap callbacks, consumed after the frame to play the click sound.
    pending_click: Rc<Cell<bool>>,
}

impl DesktopApp {
    pub fn new(mut toolkit: Toolkit) -> Self {
        let pending_click = Rc::new(Cell::new(false));

        // label, taps required, frame
        let layout = [
            ("Tap", 1, Rect::new(40.0, 80.0, 200.0, 120.0)),
            ("Double tap", 2, Rect::new(280.0, 80.0, 200.0, 120.0)),
            ("Triple tap", 3, Rect::new(520.0, 80.0, 200.0, 120.0)),
        ];

        let mut targets = Vec::with_capacity(layout.len());
        for (label, taps, frame) in layout {
            let count = Rc::new(Cell::new(0));
            let (c, click) = (count.clone(), pending_click.clone());
            let tap = toolkit.tap_recognizer(
                move || {
                    c.set(c.get() + 1);
                    click.set(true);
                },
                taps,
            );
            toolkit.add_element(Element::new(label, frame).with_recognizer(tap));
            targets.push(TapTarget {
                label,
                frame,
                count,
            });
        }

        Self {
            toolkit,
            targets,
            pending_click,
        }
    }
}

fn to_egui(rect: Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        Pos2::new(rect.origin.x, rect.origin.y),
        Vec2::new(rect.width, rect.height),
    )
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── 1. Toolkit frame: liveness, input, gestures ───────────────────────
        if !self.toolkit.run_frame() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }
        if self.pending_click.replace(false) {
            self.toolkit.platform_mut().audio_player().play(Sound::Click);
        }

        let theme = self.toolkit.theme();

        // ── 2. Status bar ─────────────────────────────────────────────────────
        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.toolkit.platform().name());
                ui.separator();
                ui.label(self.toolkit.status().summary());
                ui.separator();
                ui.label(self.toolkit.platform().locale());

                if ui.button("Toggle theme").clicked() {
                    let next = match self.toolkit.platform().theme_variant() {
                        ThemeVariant::Light => ThemeVariant::Dark,
                        ThemeVariant::Dark => ThemeVariant::Light,
                    };
                    self.toolkit.platform_mut().set_theme_variant(next);
                }
            });
        });

        // ── 3. Tap targets ────────────────────────────────────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(theme.background))
            .show(ctx, |ui| {
                let painter = ui.painter();
                for target in &self.targets {
                    let rect = to_egui(target.frame);
                    painter.rect_filled(rect, 6.0, theme.highlight_background);
                    painter.text(
                        rect.center(),
                        Align2::CENTER_CENTER,
                        format!("{} ({})", target.label, target.count.get()),
                        FontId::proportional(18.0),
                        theme.text,
                    );
                }
            });

        ctx.request_repaint_after(IDLE_REPAINT);
    }
}
