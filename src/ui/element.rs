//! Interactive elements and touch routing.
//!
//! A touch belongs to the element it began on: the topmost element whose
//! frame contains the `Began` point captures the touch id and receives every
//! later sample of that id until it ends, even outside its frame.

use std::collections::HashMap;

use crate::touch::{GestureRecognizer, RecognizerChain};
use crate::types::{Rect, TouchId, TouchPhase, TouchState};

/// Index of an element in its [`ElementSet`].
pub type ElementId = usize;

pub struct Element {
    name: String,
    frame: Rect,
    recognizers: RecognizerChain,
}

impl Element {
    pub fn new(name: impl Into<String>, frame: Rect) -> Self {
        Self {
            name: name.into(),
            frame,
            recognizers: RecognizerChain::new(),
        }
    }

    /// Builder form of [`Element::add_recognizer`].
    pub fn with_recognizer(mut self, recognizer: impl GestureRecognizer + 'static) -> Self {
        self.add_recognizer(recognizer);
        self
    }

    pub fn add_recognizer(&mut self, recognizer: impl GestureRecognizer + 'static) {
        self.recognizers.add(Box::new(recognizer));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}

/// Elements in paint order (last added is on top) plus the live captures.
#[derive(Default)]
pub struct ElementSet {
    elements: Vec<Element>,
    captures: HashMap<TouchId, ElementId>,
}

impl ElementSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        self.elements.len() - 1
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element currently owning `touch`, if any.
    pub fn captured_by(&self, touch: TouchId) -> Option<ElementId> {
        self.captures.get(&touch).copied()
    }

    /// Deliver one sample. Returns the receiving element and whether one of
    /// its recognizers claimed the sample.
    pub fn route(&mut self, touch: &TouchState) -> Option<(ElementId, bool)> {
        let target = if touch.phase == TouchPhase::Began {
            self.hit_test(touch)
        } else {
            self.captures.get(&touch.id).copied()
        };
        let target = target?;

        let claimed = self.elements[target].recognizers.feed(touch);
        if touch.is_terminal() {
            self.captures.remove(&touch.id);
        }
        Some((target, claimed))
    }

    /// Capture `touch` for the topmost element under it.
    fn hit_test(&mut self, touch: &TouchState) -> Option<ElementId> {
        let hit = self
            .elements
            .iter()
            .rposition(|e| e.frame.contains(touch.position));
        match hit {
            Some(idx) => {
                self.captures.insert(touch.id, idx);
            }
            None => {
                self.captures.remove(&touch.id);
            }
        }
        hit
    }
}
