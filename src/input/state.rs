//! Input state management
//!
//! Polls mouse, touch and keyboard through macroquad once per frame and
//! folds them into the action-based API the game reads.

use macroquad::prelude::*;
use super::Action;

/// Snapshot of one frame's raw input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawInput {
    pub mouse_down: bool,
    pub mouse_pressed: bool,
    /// Any touch currently on the screen
    pub touch_active: bool,
    /// A touch started this frame
    pub touch_started: bool,
    pub advance_key_down: bool,
    pub confirm_key_pressed: bool,
}

impl RawInput {
    /// Read the current frame from macroquad
    pub fn capture() -> Self {
        let touches = touches();
        Self {
            mouse_down: is_mouse_button_down(MouseButton::Left),
            mouse_pressed: is_mouse_button_pressed(MouseButton::Left),
            touch_active: touches.iter().any(|t| {
                matches!(t.phase, TouchPhase::Started | TouchPhase::Moved | TouchPhase::Stationary)
            }),
            touch_started: touches.iter().any(|t| matches!(t.phase, TouchPhase::Started)),
            advance_key_down: is_key_down(KeyCode::Space) || is_key_down(KeyCode::Right),
            confirm_key_pressed: is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::Space),
        }
    }
}

/// Unified input state for mouse, touch and keyboard
#[derive(Debug, Default)]
pub struct InputState {
    current: RawInput,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call once per frame before checking actions
    pub fn poll(&mut self) {
        self.set_raw(RawInput::capture());
    }

    /// Replace the frame snapshot directly
    pub fn set_raw(&mut self, raw: RawInput) {
        self.current = raw;
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        let raw = &self.current;
        match action {
            Action::Advance => raw.mouse_down || raw.touch_active || raw.advance_key_down,
            Action::Confirm => self.action_pressed(Action::Confirm),
        }
    }

    /// Check if action was just pressed this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        let raw = &self.current;
        match action {
            Action::Advance => raw.mouse_pressed || raw.touch_started,
            Action::Confirm => raw.mouse_pressed || raw.touch_started || raw.confirm_key_pressed,
        }
    }
}
