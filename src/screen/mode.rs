//! Top-level screen mode

use serde::{Deserialize, Serialize};

/// Which screen owns rendering and input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Title screen with the play control
    #[default]
    Menu,
    /// Active gameplay
    Playing,
}

/// Things that can move the mode machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeEvent {
    /// The menu's play control was used
    PlayActivated,
}

impl Mode {
    /// Next mode for an event. Unhandled pairs keep the current mode.
    pub fn on_event(self, event: ModeEvent) -> Mode {
        match (self, event) {
            (Mode::Menu, ModeEvent::PlayActivated) => Mode::Playing,
            (Mode::Playing, ModeEvent::PlayActivated) => Mode::Playing,
        }
    }

    pub fn is_playing(&self) -> bool {
        *self == Mode::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_activation_is_one_way() {
        let mode = Mode::default();
        assert_eq!(mode, Mode::Menu);
        let mode = mode.on_event(ModeEvent::PlayActivated);
        assert_eq!(mode, Mode::Playing);
        assert_eq!(mode.on_event(ModeEvent::PlayActivated), Mode::Playing);
    }
}
