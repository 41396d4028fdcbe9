//! Game events
//!
//! Events are plain values. The queue owns them until they are dispatched.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Abstract buttons, not tied to a concrete controller.
///
/// Numbered clockwise around the mat, starting with the upper-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Cross = 0,
    Up = 1,
    Circle = 2,
    Right = 3,
    Square = 4,
    Down = 5,
    Triangle = 6,
    Left = 7,
}

impl Button {
    pub const ALL: [Button; 8] = [
        Button::Cross,
        Button::Up,
        Button::Circle,
        Button::Right,
        Button::Square,
        Button::Down,
        Button::Triangle,
        Button::Left,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Button::Cross => "CROSS",
            Button::Up => "UP",
            Button::Circle => "CIRCLE",
            Button::Right => "RIGHT",
            Button::Square => "SQUARE",
            Button::Down => "DOWN",
            Button::Triangle => "TRIANGLE",
            Button::Left => "LEFT",
        }
    }

    /// The opposite foot for LEFT and RIGHT, `None` for every other button
    pub fn other_foot(&self) -> Option<Button> {
        match self {
            Button::Left => Some(Button::Right),
            Button::Right => Some(Button::Left),
            _ => None,
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOverKind {
    /// The runaway cleared the last level
    HappyEnd,
    /// The chaser caught the runaway
    Busted,
}

/// Everything the dispatcher reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// The simulation clock advanced
    Tick,
    /// A button was pressed on the mat
    ButtonDown(Button),
    /// A step gesture completed; only ever produced by the dispatcher
    MakeStep,
    /// The session ended
    GameOver(GameOverKind),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Tick => f.write_str("Tick"),
            Event::ButtonDown(button) => write!(f, "ButtonDown({button})"),
            Event::MakeStep => f.write_str("MakeStep"),
            Event::GameOver(_) => f.write_str("GameOver"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_follow_the_circle() {
        for (i, button) in Button::ALL.iter().enumerate() {
            assert_eq!(*button as usize, i);
        }
    }

    #[test]
    fn test_only_feet_have_an_other_foot() {
        assert_eq!(Button::Left.other_foot(), Some(Button::Right));
        assert_eq!(Button::Right.other_foot(), Some(Button::Left));
        assert!(Button::ALL
            .iter()
            .filter(|b| !matches!(b, Button::Left | Button::Right))
            .all(|b| b.other_foot().is_none()));
    }

    #[test]
    fn test_event_display() {
        assert_eq!(Event::Tick.to_string(), "Tick");
        assert_eq!(Event::ButtonDown(Button::Left).to_string(), "ButtonDown(LEFT)");
        assert_eq!(Event::MakeStep.to_string(), "MakeStep");
        assert_eq!(Event::GameOver(GameOverKind::Busted).to_string(), "GameOver");
    }
}
