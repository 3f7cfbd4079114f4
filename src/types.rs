//! Shared data-model types: touch samples, geometry and the theme variant.
//!
//! # Coordinates
//!
//! All positions are logical units in the window's coordinate space, origin
//! top-left. Hosts that report physical pixels scale before building a
//! [`TouchState`].

use serde::{Deserialize, Serialize};
use std::fmt;

// ── Geometry ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned rectangle, `origin` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    /// Edges are inclusive on the top-left and exclusive on the bottom-right.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x < self.origin.x + self.width
            && p.y < self.origin.y + self.height
    }
}

// ── Touch ──────────────────────────────────────────────────────────────────────

/// Identifier distinguishing concurrent touch points.
pub type TouchId = u64;

/// Lifecycle stage of a single touch contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

/// One per-frame touch sample. Produced by the input manager and consumed
/// immediately by the recognizer chains; never stored across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchState {
    pub id: TouchId,
    pub position: Point,
    pub phase: TouchPhase,
}

impl TouchState {
    pub fn new(id: TouchId, x: f32, y: f32, phase: TouchPhase) -> Self {
        Self {
            id,
            position: Point::new(x, y),
            phase,
        }
    }

    pub fn began(id: TouchId, x: f32, y: f32) -> Self {
        Self::new(id, x, y, TouchPhase::Began)
    }

    pub fn moved(id: TouchId, x: f32, y: f32) -> Self {
        Self::new(id, x, y, TouchPhase::Moved)
    }

    pub fn ended(id: TouchId, x: f32, y: f32) -> Self {
        Self::new(id, x, y, TouchPhase::Ended)
    }

    pub fn cancelled(id: TouchId, x: f32, y: f32) -> Self {
        Self::new(id, x, y, TouchPhase::Cancelled)
    }

    /// `Ended` or `Cancelled`: the contact is gone after this sample.
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, TouchPhase::Ended | TouchPhase::Cancelled)
    }
}

// ── Theme variant ──────────────────────────────────────────────────────────────

/// Light/dark colour-scheme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeVariant::Light => f.write_str("light"),
            ThemeVariant::Dark => f.write_str("dark"),
        }
    }
}
