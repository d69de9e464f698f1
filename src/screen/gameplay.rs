//! The gameplay sub-screen
//!
//! [`GameplayScreen`] is the seam the mode controller routes input into.
//! [`PaddleScreen`] is the paddle-only implementation; ball and brick physics
//! plug in behind the same trait.

use glam::Vec2;

use crate::consts::PLAYER_BOTTOM_OFFSET;
use crate::renderer::Surface;
use crate::settings::Settings;
use crate::sim::{DirectionalInput, GameArea, Player};

/// Input and render contract of the screen shown while playing
pub trait GameplayScreen {
    fn handle_key_pressed(&mut self, input: DirectionalInput);
    fn handle_key_released(&mut self);
    fn handle_touch_started(&mut self, point: Vec2);
    fn handle_touch_released(&mut self);
    /// Draw one frame. Called exactly once per frame while playing.
    fn render(&mut self, surface: &mut dyn Surface);
}

/// Gameplay screen that owns the player paddle
#[derive(Debug, Clone)]
pub struct PaddleScreen {
    pub player: Player,
    area: GameArea,
}

impl PaddleScreen {
    /// Place a configured paddle centered near the bottom of the area
    pub fn new(area: GameArea, settings: &Settings) -> Self {
        let width = area.width * settings.player_width_ratio;
        let height = area.height * settings.player_height_ratio;
        let pos = Vec2::new(
            area.x + (area.width - width) / 2.0,
            area.bottom() - height - area.height * PLAYER_BOTTOM_OFFSET,
        );

        let mut player = Player::new(pos, width, height)
            .with_tuning(settings.player_speed, settings.game_area_height_reference);
        player.configure(area);

        Self { player, area }
    }

    pub fn area(&self) -> GameArea {
        self.area
    }
}

impl GameplayScreen for PaddleScreen {
    fn handle_key_pressed(&mut self, input: DirectionalInput) {
        self.player.control_inputs(input);
    }

    fn handle_key_released(&mut self) {
        self.player.key_released();
    }

    fn handle_touch_started(&mut self, point: Vec2) {
        // Touch buttons already arrive as key presses
        log::trace!("Touch at ({}, {})", point.x, point.y);
    }

    fn handle_touch_released(&mut self) {}

    fn render(&mut self, surface: &mut dyn Surface) {
        self.player.render(surface);
    }
}
