use serde::{Deserialize, Serialize};

use crate::team::Side;

/// A key the simulation understands. Everything else on the keyboard is
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Sprint,
    Kick,
}

impl Key {
    /// Map a raw key code (DOM-style `KeyboardEvent.key` values) to a
    /// simulation key. Unknown codes return `None` and are dropped by the
    /// input resolver.
    pub fn from_code(code: &str) -> Option<Key> {
        match code {
            "ArrowUp" | "w" | "W" => Some(Key::Up),
            "ArrowDown" | "s" | "S" => Some(Key::Down),
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            "Shift" => Some(Key::Sprint),
            " " | "Space" => Some(Key::Kick),
            _ => None,
        }
    }
}

/// A discrete input event from the presentation/input collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// A mapped key changed state. `pressed` is true on key-down.
    Key { key: Key, pressed: bool },
    /// Flip the paused flag. Works regardless of game-over.
    PauseToggle,
    /// Presentation-only toggle; the simulation relays it as a signal and
    /// changes no state.
    FullscreenToggle,
    /// Restore the initial match state (applied between ticks).
    Reset,
    /// Set a cosmetic team name (length-capped on store).
    SetTeamName { side: Side, name: String },
}

impl InputEvent {
    /// Convenience constructor for a key-down event.
    pub fn key_down(key: Key) -> Self {
        InputEvent::Key { key, pressed: true }
    }

    /// Convenience constructor for a key-up event.
    pub fn key_up(key: Key) -> Self {
        InputEvent::Key {
            key,
            pressed: false,
        }
    }
}
