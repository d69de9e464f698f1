//! Game settings and tuning
//!
//! Read from LocalStorage on the web; defaults come from [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable layout and movement constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Movement ===
    /// Paddle speed numerator (scaled by game area width)
    pub player_speed: f32,
    /// Height the paddle speed is tuned against
    pub game_area_height_reference: f32,

    // === Layout ===
    /// Score header height as a fraction of the window height
    pub score_display_height: f32,
    /// Touch button strip height as a fraction of the window height
    pub button_strip_height: f32,
    /// Menu play button width as a fraction of the window width
    pub play_button_width: f32,
    /// Menu play button aspect ratio (horizontal, vertical)
    pub play_button_aspect: (f32, f32),
    /// Paddle width as a fraction of the game area width
    pub player_width_ratio: f32,
    /// Paddle height as a fraction of the game area height
    pub player_height_ratio: f32,

    // === HUD ===
    /// Draw the on-screen touch buttons while playing
    pub show_buttons: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            game_area_height_reference: GAME_AREA_HEIGHT_REFERENCE,

            score_display_height: SCORE_DISPLAY_HEIGHT,
            button_strip_height: BUTTON_STRIP_HEIGHT,
            play_button_width: BTN_WIDTH,
            play_button_aspect: (BTN_ASPECT_RATIO_H, BTN_ASPECT_RATIO_V),
            player_width_ratio: PLAYER_WIDTH_RATIO,
            player_height_ratio: PLAYER_HEIGHT_RATIO,

            show_buttons: true,
        }
    }
}

impl Settings {
    /// Replace degenerate values with their defaults
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        let fraction = |v: f32| v.is_finite() && v > 0.0 && v < 1.0;

        if !(self.player_speed.is_finite() && self.player_speed >= 0.0) {
            log::warn!("Invalid player_speed {}, using default", self.player_speed);
            self.player_speed = defaults.player_speed;
        }
        if !(self.game_area_height_reference.is_finite() && self.game_area_height_reference > 0.0) {
            log::warn!(
                "Invalid game_area_height_reference {}, using default",
                self.game_area_height_reference
            );
            self.game_area_height_reference = defaults.game_area_height_reference;
        }
        if !fraction(self.score_display_height) {
            self.score_display_height = defaults.score_display_height;
        }
        if !fraction(self.button_strip_height) {
            self.button_strip_height = defaults.button_strip_height;
        }
        // Header and button strip must leave room for the game area
        if self.score_display_height + self.button_strip_height >= 1.0 {
            self.score_display_height = defaults.score_display_height;
            self.button_strip_height = defaults.button_strip_height;
        }
        if !fraction(self.play_button_width) {
            self.play_button_width = defaults.play_button_width;
        }
        let (h, v) = self.play_button_aspect;
        if !(h.is_finite() && v.is_finite() && h > 0.0 && v > 0.0) {
            self.play_button_aspect = defaults.play_button_aspect;
        }
        if !fraction(self.player_width_ratio) {
            self.player_width_ratio = defaults.player_width_ratio;
        }
        if !fraction(self.player_height_ratio) {
            self.player_height_ratio = defaults.player_height_ratio;
        }
        self
    }

    /// Parse settings JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings.validated(),
            Err(e) => {
                log::warn!("Ignoring corrupt settings: {}", e);
                Self::default()
            }
        }
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "brickbreak_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        log::debug!("No LocalStorage on native, using default settings ({})", Self::STORAGE_KEY);
        Self::default()
    }
}
