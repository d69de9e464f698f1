//! Brickbreak - a single-screen brick breaker for the browser
//!
//! Core modules:
//! - `sim`: Paddle movement, input vocabulary, play area geometry
//! - `screen`: Menu/Playing mode state machine and input routing
//! - `layout`: Screen layout (game area, touch buttons, play control)
//! - `renderer`: Drawing surface abstraction and command recording
//! - `settings`: Tunable constants persisted in LocalStorage

pub mod layout;
pub mod renderer;
pub mod screen;
pub mod settings;
pub mod sim;

pub use layout::{Layout, ScreenLayout};
pub use screen::{GameplayScreen, Mode, PaddleScreen, ScreenModeController};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Player speed numerator, scaled by game area width
    pub const PLAYER_SPEED: f32 = 12.0;
    /// Reference height the player speed is tuned against
    pub const GAME_AREA_HEIGHT_REFERENCE: f32 = 800.0;

    /// Fraction of the window height taken by the score header
    pub const SCORE_DISPLAY_HEIGHT: f32 = 0.08;
    /// Fraction of the window height taken by the touch button strip
    pub const BUTTON_STRIP_HEIGHT: f32 = 0.12;

    /// Menu play button width as a fraction of the window width
    pub const BTN_WIDTH: f32 = 0.4;
    /// Menu play button aspect ratio (horizontal : vertical)
    pub const BTN_ASPECT_RATIO_H: f32 = 4.0;
    /// Vertical share of the play button aspect ratio
    pub const BTN_ASPECT_RATIO_V: f32 = 1.0;

    /// Paddle width as a fraction of the game area width
    pub const PLAYER_WIDTH_RATIO: f32 = 0.18;
    /// Paddle height as a fraction of the game area height
    pub const PLAYER_HEIGHT_RATIO: f32 = 0.025;
    /// Paddle distance from the bottom of the game area, relative to its height
    pub const PLAYER_BOTTOM_OFFSET: f32 = 0.05;

    /// Title shown on the menu
    pub const GAME_TITLE: &str = "BRICK BREAKER";
    /// Label of the menu play button
    pub const PLAY_BTN_LABEL: &str = "PLAY";
    /// Sprite key of the paddle image
    pub const PLAYER_SPRITE: &str = "img/player0.png";
}

/// Top-left corner that centers an object of the given size inside a window
#[inline]
pub fn center_item(window: Vec2, object: Vec2) -> Vec2 {
    (window - object) * 0.5
}
