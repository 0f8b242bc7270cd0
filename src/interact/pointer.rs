//! Latest-value pointer state
//!
//! Event handlers overwrite this record as events arrive; the frame loop
//! reads it once per tick and then calls [`PointerState::end_frame`].

use glam::Vec2;

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left mouse button (or pen/touch contact)
    Primary,
    Middle,
    Secondary,
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` code
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => PointerButton::Middle,
            2 => PointerButton::Secondary,
            _ => PointerButton::Primary,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Surface-local position
    pub position: Vec2,
    /// Movement reported by the latest move event this frame
    pub frame_delta: Vec2,
    /// Primary button held
    pub button_down: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_move(&mut self, position: Vec2) {
        self.frame_delta = position - self.position;
        self.position = position;
    }

    pub fn on_down(&mut self, button: PointerButton) {
        if button == PointerButton::Primary {
            self.button_down = true;
            log::debug!("pointer down at {:?}", self.position);
        }
    }

    pub fn on_up(&mut self, button: PointerButton) {
        if button == PointerButton::Primary {
            self.button_down = false;
            log::debug!("pointer up at {:?}", self.position);
        }
    }

    /// Reset per-frame data once the tick has consumed it
    pub fn end_frame(&mut self) {
        self.frame_delta = Vec2::ZERO;
    }
}
