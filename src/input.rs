//! Translation of physical controls into game inputs
//!
//! Debouncing happens before this layer; here we only map controller
//! buttons and keys onto canonical buttons and session requests.

use serde::{Deserialize, Serialize};

use crate::sim::Button;

/// One discrete input for the frame driver, in the order it was received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    ButtonDown(Button),
    Quit,
    Restart,
}

/// Mapping from raw joystick button numbers of a dance mat to canonical buttons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DanceMat {
    pub mapping: Vec<(u8, Button)>,
}

impl Default for DanceMat {
    /// Layout of the mat the game was built around
    fn default() -> Self {
        Self {
            mapping: vec![
                (6, Button::Cross),
                (2, Button::Up),
                (7, Button::Circle),
                (3, Button::Right),
                (5, Button::Square),
                (1, Button::Down),
                (4, Button::Triangle),
                (0, Button::Left),
            ],
        }
    }
}

impl DanceMat {
    /// Canonical button for a raw button number; unmapped buttons yield nothing
    pub fn button(&self, raw: u8) -> Option<Button> {
        self.mapping
            .iter()
            .find(|(r, _)| *r == raw)
            .map(|(_, button)| *button)
    }

    pub fn input(&self, raw: u8) -> Option<Input> {
        self.button(raw).map(Input::ButtonDown)
    }
}

/// Keyboard keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Char(char),
    ArrowLeft,
    ArrowRight,
}

/// Map a key press; arrow keys stand in for the mat only with `debug_keys`
pub fn key_input(key: Key, debug_keys: bool) -> Option<Input> {
    match key {
        Key::Escape | Key::Char('q') => Some(Input::Quit),
        Key::Char('r') => Some(Input::Restart),
        Key::ArrowLeft if debug_keys => Some(Input::ButtonDown(Button::Left)),
        Key::ArrowRight if debug_keys => Some(Input::ButtonDown(Button::Right)),
        _ => None,
    }
}
