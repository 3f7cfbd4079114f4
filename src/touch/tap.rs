//! Tap recognizer: single or multi-tap detection with a movement tolerance.
//!
//! Movement is measured as the Euclidean distance from the touch-down anchor.
//! A distance of exactly the tolerance still counts as the same tap.
//!
//! There is no inter-tap timeout: a multi-tap sequence waits for the next
//! touch-down until it completes, is cancelled, or drifts out of tolerance.

use crate::touch::GestureRecognizer;
use crate::types::{Point, TouchId, TouchPhase, TouchState};

/// Default drift allowed between touch-down and touch-up, in logical units.
pub const MAX_DELTA_MOVEMENT: f32 = 10.0;

/// Callback fired when the configured number of taps completes.
pub type TapGestureRespond = Box<dyn FnMut()>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapState {
    /// No tap in progress.
    Idle,
    /// Touch-down observed, waiting for the release.
    Pressed { id: TouchId, anchor: Point },
    /// At least one tap counted, waiting for the next touch-down.
    AwaitingNextTap,
}

pub struct TapGestureRecognizer {
    respond: TapGestureRespond,
    state: TapState,
    counter: u32,
    target: u32,
    tolerance: f32,
}

impl TapGestureRecognizer {
    /// `target` is the number of taps that completes the gesture; values
    /// below 1 are treated as 1.
    pub fn new(respond: impl FnMut() + 'static, target: u32) -> Self {
        Self {
            respond: Box::new(respond),
            state: TapState::Idle,
            counter: 0,
            target: target.max(1),
            tolerance: MAX_DELTA_MOVEMENT,
        }
    }

    /// Override the movement tolerance (non-negative, logical units).
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance.max(0.0);
        self
    }

    pub fn state(&self) -> TapState {
        self.state
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    fn reset(&mut self) {
        self.state = TapState::Idle;
        self.counter = 0;
    }

    fn within_tolerance(&self, anchor: Point, p: Point) -> bool {
        anchor.distance(p) <= self.tolerance
    }
}

impl GestureRecognizer for TapGestureRecognizer {
    fn recognition_loop(&mut self, touch: &TouchState, locked: bool) -> bool {
        if locked {
            return false;
        }

        match (self.state, touch.phase) {
            // Any touch-down (re)anchors the tap, even over a press whose
            // release was never seen.
            (_, TouchPhase::Began) => {
                self.state = TapState::Pressed {
                    id: touch.id,
                    anchor: touch.position,
                };
                true
            }
            (TapState::Idle, _) => false,
            // Another contact; keep following the anchored one.
            (TapState::Pressed { id, .. }, _) if id != touch.id => true,
            (_, TouchPhase::Cancelled) => {
                self.reset();
                false
            }
            (TapState::AwaitingNextTap, _) => true,
            (TapState::Pressed { anchor, .. }, TouchPhase::Moved) => {
                if self.within_tolerance(anchor, touch.position) {
                    true
                } else {
                    self.reset();
                    false
                }
            }
            (TapState::Pressed { anchor, .. }, TouchPhase::Ended) => {
                if !self.within_tolerance(anchor, touch.position) {
                    self.reset();
                    return false;
                }
                self.counter += 1;
                if self.counter >= self.target {
                    self.reset();
                    (self.respond)();
                } else {
                    self.state = TapState::AwaitingNextTap;
                }
                // The sample that completes or advances the gesture is claimed.
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting(target: u32) -> (TapGestureRecognizer, Rc<Cell<u32>>) {
        let fired = Rc::new(Cell::new(0));
        let f = fired.clone();
        (TapGestureRecognizer::new(move || f.set(f.get() + 1), target), fired)
    }

    #[test]
    fn single_tap_fires_once() {
        let (mut tap, fired) = counting(1);
        assert!(tap.recognition_loop(&TouchState::began(0, 10.0, 10.0), false));
        assert!(tap.recognition_loop(&TouchState::ended(0, 10.0, 10.0), false));
        assert_eq!(fired.get(), 1);
        assert_eq!(tap.state(), TapState::Idle);
        assert_eq!(tap.counter(), 0);
    }

    #[test]
    fn double_tap_fires_after_second_release() {
        let (mut tap, fired) = counting(2);
        tap.recognition_loop(&TouchState::began(0, 0.0, 0.0), false);
        tap.recognition_loop(&TouchState::ended(0, 0.0, 0.0), false);
        assert_eq!(fired.get(), 0);
        assert_eq!(tap.counter(), 1);
        assert_eq!(tap.state(), TapState::AwaitingNextTap);

        tap.recognition_loop(&TouchState::began(1, 1.0, 1.0), false);
        assert_eq!(
            tap.state(),
            TapState::Pressed {
                id: 1,
                anchor: Point::new(1.0, 1.0)
            }
        );
        tap.recognition_loop(&TouchState::ended(1, 1.0, 1.0), false);
        assert_eq!(fired.get(), 1);
        assert_eq!(tap.counter(), 0);
    }

    #[test]
    fn drift_beyond_tolerance_resets() {
        let (mut tap, fired) = counting(1);
        tap.recognition_loop(&TouchState::began(0, 0.0, 0.0), false);
        assert!(!tap.recognition_loop(&TouchState::moved(0, 20.0, 0.0), false));
        assert_eq!(tap.state(), TapState::Idle);
        assert_eq!(tap.counter(), 0);
        assert!(!tap.recognition_loop(&TouchState::ended(0, 20.0, 0.0), false));
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn tolerance_is_euclidean_on_both_axes() {
        let (mut tap, _) = counting(1);
        tap.recognition_loop(&TouchState::began(0, 0.0, 0.0), false);
        assert!(tap.recognition_loop(&TouchState::moved(0, 0.0, 10.0), false));
        assert!(tap.recognition_loop(&TouchState::moved(0, 10.0, 0.0), false));
        // 8 and 8 on each axis stays under 10 per axis but is ~11.3 away.
        assert!(!tap.recognition_loop(&TouchState::moved(0, 8.0, 8.0), false));
        assert_eq!(tap.state(), TapState::Idle);
    }

    #[test]
    fn custom_tolerance() {
        let (tap, _) = counting(1);
        let mut tap = tap.with_tolerance(2.0);
        tap.recognition_loop(&TouchState::began(0, 0.0, 0.0), false);
        assert!(!tap.recognition_loop(&TouchState::moved(0, 3.0, 0.0), false));
    }

    #[test]
    fn other_contacts_are_ignored_while_pressed() {
        let (mut tap, fired) = counting(1);
        tap.recognition_loop(&TouchState::began(0, 0.0, 0.0), false);
        assert!(tap.recognition_loop(&TouchState::moved(7, 90.0, 90.0), false));
        assert!(tap.recognition_loop(&TouchState::ended(7, 90.0, 90.0), false));
        assert_eq!(fired.get(), 0);
        tap.recognition_loop(&TouchState::ended(0, 0.0, 0.0), false);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn new_touch_down_reanchors_a_stale_press() {
        let (mut tap, fired) = counting(1);
        tap.recognition_loop(&TouchState::began(0, 0.0, 0.0), false);
        // Release of id 0 never arrives.
        assert!(tap.recognition_loop(&TouchState::began(3, 50.0, 50.0), false));
        assert_eq!(
            tap.state(),
            TapState::Pressed {
                id: 3,
                anchor: Point::new(50.0, 50.0)
            }
        );
        tap.recognition_loop(&TouchState::ended(3, 50.0, 50.0), false);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn stray_samples_while_idle_are_not_claimed() {
        let (mut tap, fired) = counting(1);
        assert!(!tap.recognition_loop(&TouchState::moved(0, 1.0, 1.0), false));
        assert!(!tap.recognition_loop(&TouchState::ended(0, 1.0, 1.0), false));
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn zero_target_is_clamped() {
        let (tap, _) = counting(0);
        assert_eq!(tap.target(), 1);
    }
}
