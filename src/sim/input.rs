//! Input vocabulary shared by every input origin
//!
//! Keyboard arrows and the on-screen touch buttons both produce a
//! [`DirectionalInput`], so the gameplay screen never knows where an input
//! came from.

use serde::{Deserialize, Serialize};

/// Key code the browser reports for the left arrow
pub const LEFT_ARROW: u32 = 37;
/// Key code the browser reports for the right arrow
pub const RIGHT_ARROW: u32 = 39;

/// A lateral movement request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirectionalInput {
    Left,
    Right,
}

impl DirectionalInput {
    /// Map a legacy numeric key code. Unknown codes yield `None`.
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            LEFT_ARROW => Some(DirectionalInput::Left),
            RIGHT_ARROW => Some(DirectionalInput::Right),
            _ => None,
        }
    }

    /// Map a `KeyboardEvent.key` name. Unknown names yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(DirectionalInput::Left),
            "ArrowRight" | "Right" => Some(DirectionalInput::Right),
            _ => None,
        }
    }

    /// The key code a keyboard would have produced for this input
    pub fn key_code(self) -> u32 {
        match self {
            DirectionalInput::Left => LEFT_ARROW,
            DirectionalInput::Right => RIGHT_ARROW,
        }
    }
}

/// Whether the host currently sees sustained contact.
///
/// A press is only routed to gameplay while a key or a pointer is held down,
/// which filters synthetic presses that outlive the real contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputActivity {
    /// A keyboard key is down
    pub key_held: bool,
    /// A mouse button or touch point is down
    pub pointer_held: bool,
}

impl InputActivity {
    pub const IDLE: Self = Self {
        key_held: false,
        pointer_held: false,
    };

    pub const fn key() -> Self {
        Self {
            key_held: true,
            pointer_held: false,
        }
    }

    pub const fn pointer() -> Self {
        Self {
            key_held: false,
            pointer_held: true,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.key_held || self.pointer_held
    }
}
