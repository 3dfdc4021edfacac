//! Keyboard input latching
//!
//! Key handlers only flip flags here; the tick samples them once per frame.

use crate::sim::TickInput;

/// What a physical key means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    MoveLeft,
    MoveRight,
    /// Start or restart a run
    Start,
    /// Show or hide particle bursts
    ToggleParticles,
    ToggleMute,
}

impl KeyAction {
    /// Map a `KeyboardEvent.code` value
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "KeyA" => Some(KeyAction::MoveLeft),
            "ArrowRight" | "KeyD" => Some(KeyAction::MoveRight),
            "Space" | "Enter" => Some(KeyAction::Start),
            "KeyP" => Some(KeyAction::ToggleParticles),
            "KeyM" => Some(KeyAction::ToggleMute),
            _ => None,
        }
    }
}

/// Currently held movement keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    left: bool,
    right: bool,
}

impl InputState {
    /// Latch a key press. Movement is held; any other action is returned
    /// for the host to handle once.
    pub fn key_down(&mut self, code: &str) -> Option<KeyAction> {
        match KeyAction::from_code(code)? {
            KeyAction::MoveLeft => self.left = true,
            KeyAction::MoveRight => self.right = true,
            action => return Some(action),
        }
        None
    }

    pub fn key_up(&mut self, code: &str) {
        match KeyAction::from_code(code) {
            Some(KeyAction::MoveLeft) => self.left = false,
            Some(KeyAction::MoveRight) => self.right = false,
            _ => {}
        }
    }

    /// Drop all held keys (e.g. window lost focus)
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            move_left: self.left,
            move_right: self.right,
        }
    }
}
