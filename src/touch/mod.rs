//! Gesture recognition: the recognizer contract, the per-element registry and
//! the raw-contact phase tracker.
//!
//! Each frame every touch sample is offered to the recognizers of the element
//! that owns the touch, in registration order. The first recognizer that
//! claims a sample locks it for the remaining ones in that frame.

pub mod tap;
pub mod tracker;

pub use tap::{MAX_DELTA_MOVEMENT, TapGestureRecognizer};
pub use tracker::{RawContact, TouchTracker};

use crate::types::TouchState;

/// A stateful reducer over per-frame touch samples.
///
/// Malformed sequences (an `Ended` without a `Began`, ...) are never an
/// error; they just leave the gesture unrecognised.
pub trait GestureRecognizer {
    /// Consume one sample.
    ///
    /// `locked` is true when a higher-priority recognizer already claimed the
    /// sample this cycle; a locked recognizer must not change state or fire.
    ///
    /// Returns true to claim (or keep owning) the touch sequence.
    fn recognition_loop(&mut self, touch: &TouchState, locked: bool) -> bool;
}

/// Ordered set of recognizers attached to one interactive element.
#[derive(Default)]
pub struct RecognizerChain {
    recognizers: Vec<Box<dyn GestureRecognizer>>,
}

impl RecognizerChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a recognizer. Earlier registrations have higher priority.
    pub fn add(&mut self, recognizer: Box<dyn GestureRecognizer>) {
        self.recognizers.push(recognizer);
    }

    pub fn len(&self) -> usize {
        self.recognizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recognizers.is_empty()
    }

    /// Offer one sample to every recognizer. Returns true if any claimed it.
    pub fn feed(&mut self, touch: &TouchState) -> bool {
        let mut locked = false;
        for r in &mut self.recognizers {
            if r.recognition_loop(touch, locked) {
                locked = true;
            }
        }
        locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records the `locked` flag it was called with and claims every sample.
    struct Greedy(Rc<RefCell<Vec<bool>>>);

    impl GestureRecognizer for Greedy {
        fn recognition_loop(&mut self, _touch: &TouchState, locked: bool) -> bool {
            self.0.borrow_mut().push(locked);
            !locked
        }
    }

    #[test]
    fn first_claim_locks_later_recognizers() {
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));

        let mut chain = RecognizerChain::new();
        chain.add(Box::new(Greedy(first.clone())));
        chain.add(Box::new(Greedy(second.clone())));

        assert!(chain.feed(&TouchState::began(0, 1.0, 1.0)));
        assert_eq!(*first.borrow(), vec![false]);
        assert_eq!(*second.borrow(), vec![true]);
    }

    #[test]
    fn empty_chain_claims_nothing() {
        let mut chain = RecognizerChain::new();
        assert!(chain.is_empty());
        assert!(!chain.feed(&TouchState::began(0, 1.0, 1.0)));
    }
}
