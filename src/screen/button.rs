//! On-screen touch targets
//!
//! A touch button stands in for an arrow key: pressing it yields the same
//! [`DirectionalInput`] the keyboard would, releasing it yields a key release.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{DirectionalInput, Rect};

/// Which arrow a touch button stands in for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonKind {
    Left,
    Right,
}

/// What a touch button asks the screen to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    /// Behave as if the arrow key went down
    Pressed(DirectionalInput),
    /// Behave as if the arrow key went up
    Released,
}

/// A tappable region that synthesizes arrow key input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonTarget {
    pub rect: Rect,
    pub kind: ButtonKind,
    #[serde(skip)]
    pressed: bool,
}

impl ButtonTarget {
    pub fn new(rect: Rect, kind: ButtonKind) -> Self {
        Self {
            rect,
            kind,
            pressed: false,
        }
    }

    /// The input a press of this button synthesizes
    pub fn input(&self) -> DirectionalInput {
        match self.kind {
            ButtonKind::Left => DirectionalInput::Left,
            ButtonKind::Right => DirectionalInput::Right,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Hit test a touch; a hit presses the button
    pub fn click(&mut self, point: Vec2) -> Option<ButtonEvent> {
        if !self.rect.contains(point) {
            return None;
        }
        self.pressed = true;
        Some(ButtonEvent::Pressed(self.input()))
    }

    /// Touch ended anywhere on screen
    pub fn click_released(&mut self) -> ButtonEvent {
        self.pressed = false;
        ButtonEvent::Released
    }
}

/// The menu's play trigger. Removed for good once used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayControl {
    pub rect: Rect,
    removed: bool,
}

impl PlayControl {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            removed: false,
        }
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    pub fn remove(&mut self) {
        self.removed = true;
    }
}
