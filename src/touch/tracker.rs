//! Phase tracking for hosts that only report the contacts currently down.

use std::collections::BTreeMap;

use crate::types::{Point, TouchId, TouchState};

/// One contact as reported by a touch screen for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawContact {
    pub id: TouchId,
    pub x: f32,
    pub y: f32,
}

/// Derives phased [`TouchState`] samples from successive contact lists.
///
/// New id -> `Began`, id still present -> `Moved`, id gone -> `Ended` at the
/// last known position.
#[derive(Debug, Default)]
pub struct TouchTracker {
    active: BTreeMap<TouchId, Point>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contacts currently down.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Diff `contacts` against the previous frame, appending samples to `out`.
    /// Releases are emitted after the began/moved samples, in id order.
    pub fn update(&mut self, contacts: &[RawContact], out: &mut Vec<TouchState>) {
        for c in contacts {
            let pos = Point::new(c.x, c.y);
            let sample = match self.active.insert(c.id, pos) {
                Some(_) => TouchState::moved(c.id, c.x, c.y),
                None => TouchState::began(c.id, c.x, c.y),
            };
            out.push(sample);
        }

        let released: Vec<TouchId> = self
            .active
            .keys()
            .copied()
            .filter(|id| !contacts.iter().any(|c| c.id == *id))
            .collect();
        for id in released {
            if let Some(p) = self.active.remove(&id) {
                out.push(TouchState::ended(id, p.x, p.y));
            }
        }
    }

    /// Cancel every tracked contact (focus loss, applet suspended).
    pub fn cancel_all(&mut self, out: &mut Vec<TouchState>) {
        for (id, p) in std::mem::take(&mut self.active) {
            out.push(TouchState::cancelled(id, p.x, p.y));
        }
    }
}
