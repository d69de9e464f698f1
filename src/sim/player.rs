//! The player paddle
//!
//! Input decides the velocity; `render` is the only place the position moves,
//! once per frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::area::{GameArea, Rect};
use super::input::DirectionalInput;
use crate::consts::{GAME_AREA_HEIGHT_REFERENCE, PLAYER_SPEED, PLAYER_SPRITE};
use crate::renderer::Surface;

/// Current lateral heading of the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    Neutral,
    Right,
}

/// What kind of entity took part in a collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Ball,
    Brick,
    Unknown,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Player => "Player",
            EntityKind::Ball => "Ball",
            EntityKind::Brick => "Brick",
            EntityKind::Unknown => "Unknown",
        }
    }
}

/// Collision-facing view of an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityDescriptor {
    pub kind: EntityKind,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Heading, for entities that have one
    pub direction: Option<Direction>,
}

impl EntityDescriptor {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    /// Either `(±speed, 0)` or zero
    pub vel: Vec2,
    /// Pixels per frame; zero until [`Player::configure`] runs
    pub speed: f32,
    pub direction: Direction,
    pub width: f32,
    pub height: f32,
    /// Speed per unit of game area width
    speed_factor: f32,
    /// Area the paddle must stay inside
    area: GameArea,
}

impl Player {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            speed: 0.0,
            direction: Direction::Neutral,
            width,
            height,
            speed_factor: PLAYER_SPEED / GAME_AREA_HEIGHT_REFERENCE,
            area: GameArea::default(),
        }
    }

    /// Override the speed tuning used by [`Player::configure`]
    pub fn with_tuning(mut self, player_speed: f32, height_reference: f32) -> Self {
        if height_reference > 0.0 {
            self.speed_factor = player_speed.max(0.0) / height_reference;
        }
        self
    }

    /// Bind the paddle to a game area and derive its speed from the area
    /// width, so crossing the area takes the same time at any resolution.
    pub fn configure(&mut self, area: GameArea) {
        self.area = area;
        self.speed = area.width * self.speed_factor;
        self.sync_velocity();
        log::debug!("Player configured: speed {:.2} for area width {}", self.speed, area.width);
    }

    pub fn area(&self) -> GameArea {
        self.area
    }

    /// Turn an accepted input into a velocity.
    ///
    /// The boundary checks run against the position settled by the last
    /// render, and nothing here moves the paddle, so several calls inside one
    /// frame have the same effect as one. A rejected request leaves the
    /// velocity as it was.
    pub fn control_inputs(&mut self, input: DirectionalInput) {
        match input {
            DirectionalInput::Right if self.can_move_right() => self.move_to_right(),
            DirectionalInput::Left if self.can_move_left() => self.move_to_left(),
            _ => log::debug!("Player cannot move {:?} from x={}", input, self.pos.x),
        }
    }

    fn move_to_right(&mut self) {
        self.vel = Vec2::new(self.speed, 0.0);
        self.direction = Direction::Right;
    }

    fn move_to_left(&mut self) {
        self.vel = Vec2::new(-self.speed, 0.0);
        self.direction = Direction::Left;
    }

    /// Stop moving. Safe to call any number of times.
    pub fn key_released(&mut self) {
        self.vel = Vec2::ZERO;
        self.direction = Direction::Neutral;
    }

    /// Rightmost x the paddle's left edge may reach
    #[inline]
    fn max_x(&self) -> f32 {
        self.area.x + self.area.width - self.width
    }

    pub fn can_move_left(&self) -> bool {
        self.pos.x - self.speed >= self.area.x
    }

    pub fn can_move_right(&self) -> bool {
        self.pos.x + self.speed <= self.max_x()
    }

    /// Apply this frame's velocity. A step that would leave the area is
    /// skipped rather than clamped.
    pub fn advance(&mut self) {
        let next_x = self.pos.x + self.vel.x;
        let allowed = if self.vel.x > 0.0 {
            next_x <= self.max_x()
        } else if self.vel.x < 0.0 {
            next_x >= self.area.x
        } else {
            true
        };

        if allowed {
            self.pos += self.vel;
        } else {
            log::debug!("Player step to x={} blocked by area edge", next_x);
        }
    }

    /// Advance once and draw. Call exactly once per frame.
    pub fn render(&mut self, surface: &mut dyn Surface) {
        self.advance();
        surface.image(PLAYER_SPRITE, self.bounds());
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    pub fn descriptor(&self) -> EntityDescriptor {
        EntityDescriptor {
            kind: EntityKind::Player,
            pos: self.pos,
            width: self.width,
            height: self.height,
            direction: Some(self.direction),
        }
    }

    /// Collision hook; the paddle itself does not react
    pub fn on_collision(&mut self, other: &EntityDescriptor) {
        log::info!("Player collided with {}", other.kind.as_str());
    }

    /// Raise the speed by `delta` (uncapped; never below zero). A paddle
    /// already in motion keeps its heading at the new speed.
    pub fn increase_speed(&mut self, delta: f32) {
        self.speed = (self.speed + delta).max(0.0);
        self.sync_velocity();
    }

    /// Match the velocity to the current heading and speed
    fn sync_velocity(&mut self) {
        self.vel = match self.direction {
            Direction::Right => Vec2::new(self.speed, 0.0),
            Direction::Left => Vec2::new(-self.speed, 0.0),
            Direction::Neutral => Vec2::ZERO,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList};
    use proptest::prelude::*;

    const AREA: GameArea = GameArea::new(0.0, 0.0, 500.0, 800.0);

    fn player_at(x: f32) -> Player {
        let mut player = Player::new(Vec2::new(x, 700.0), 50.0, 20.0);
        player.configure(AREA);
        player.speed = 10.0;
        player
    }

    #[test]
    fn test_configure_scales_with_width() {
        let mut player = Player::new(Vec2::ZERO, 50.0, 20.0).with_tuning(12.0, 800.0);
        player.configure(AREA);
        assert!((player.speed - 7.5).abs() < 1e-5);

        player.configure(GameArea::new(0.0, 0.0, 1000.0, 800.0));
        assert!((player.speed - 15.0).abs() < 1e-5);
    }

    #[test]
    fn test_unconfigured_player_is_stationary() {
        let mut player = Player::new(Vec2::new(100.0, 0.0), 50.0, 20.0);
        player.control_inputs(DirectionalInput::Right);
        player.advance();
        assert_eq!(player.pos.x, 100.0);
        assert_eq!(player.vel, Vec2::ZERO);
    }

    #[test]
    fn test_walk_right_to_edge() {
        let mut player = player_at(0.0);
        let mut list = DrawList::new();
        for _ in 0..44 {
            player.control_inputs(DirectionalInput::Right);
            player.render(&mut list);
        }
        assert_eq!(player.pos.x, 440.0);
        assert_eq!(player.direction, Direction::Right);
    }

    #[test]
    fn test_blocked_near_edge() {
        let mut player = player_at(445.0);
        assert!(!player.can_move_right());
        player.control_inputs(DirectionalInput::Right);
        assert_eq!(player.vel, Vec2::ZERO);
        player.render(&mut DrawList::new());
        assert_eq!(player.pos.x, 445.0);
    }

    #[test]
    fn test_rejected_input_keeps_velocity() {
        let mut player = player_at(5.0);
        player.control_inputs(DirectionalInput::Right);
        assert_eq!(player.vel, Vec2::new(10.0, 0.0));
        // 5 - 10 < 0, so turning left is refused and the old heading stays
        player.control_inputs(DirectionalInput::Left);
        assert_eq!(player.vel, Vec2::new(10.0, 0.0));
        assert_eq!(player.direction, Direction::Right);
    }

    #[test]
    fn test_same_frame_inputs_are_idempotent() {
        let mut player = player_at(100.0);
        for _ in 0..5 {
            player.control_inputs(DirectionalInput::Left);
        }
        assert_eq!(player.pos.x, 100.0);
        player.advance();
        assert_eq!(player.pos.x, 90.0);
    }

    #[test]
    fn test_held_key_stops_at_edge() {
        let mut player = player_at(420.0);
        player.control_inputs(DirectionalInput::Right);
        // No further input events while the key stays down
        for _ in 0..10 {
            player.advance();
        }
        assert_eq!(player.pos.x, 450.0);
    }

    #[test]
    fn test_key_released_idempotent() {
        let mut player = player_at(100.0);
        player.control_inputs(DirectionalInput::Right);
        player.key_released();
        let once = (player.vel, player.direction);
        player.key_released();
        assert_eq!((player.vel, player.direction), once);
        assert_eq!(once, (Vec2::ZERO, Direction::Neutral));
    }

    #[test]
    fn test_area_offset_respected() {
        let mut player = Player::new(Vec2::new(20.0, 0.0), 50.0, 20.0);
        player.configure(GameArea::new(20.0, 40.0, 300.0, 500.0));
        player.speed = 10.0;
        assert!(!player.can_move_left());
        player.pos.x = 260.0;
        assert!(player.can_move_right());
        player.pos.x = 261.0;
        assert!(!player.can_move_right());
    }

    #[test]
    fn test_render_draws_sprite_after_moving() {
        let mut player = player_at(100.0);
        player.control_inputs(DirectionalInput::Right);
        let mut list = DrawList::new();
        player.render(&mut list);
        assert_eq!(
            list.commands(),
            &[DrawCommand::Image {
                sprite: PLAYER_SPRITE.to_string(),
                rect: Rect::new(110.0, 700.0, 50.0, 20.0),
            }]
        );
    }

    #[test]
    fn test_collision_is_diagnostic_only() {
        let mut player = player_at(100.0);
        player.control_inputs(DirectionalInput::Left);
        let before = player.descriptor();
        let ball = EntityDescriptor {
            kind: EntityKind::Ball,
            pos: Vec2::new(110.0, 690.0),
            width: 8.0,
            height: 8.0,
            direction: None,
        };
        player.on_collision(&ball);
        assert_eq!(player.descriptor(), before);
        assert_eq!(before.direction, Some(Direction::Left));
    }

    #[test]
    fn test_increase_speed() {
        let mut player = player_at(100.0);
        player.increase_speed(2.5);
        assert_eq!(player.speed, 12.5);
        player.increase_speed(1000.0);
        assert_eq!(player.speed, 1012.5);
        player.increase_speed(-5000.0);
        assert_eq!(player.speed, 0.0);
    }

    #[test]
    fn test_increase_speed_while_moving() {
        let mut player = player_at(100.0);
        player.control_inputs(DirectionalInput::Right);
        player.increase_speed(2.5);
        assert_eq!(player.vel, Vec2::new(12.5, 0.0));

        player.control_inputs(DirectionalInput::Left);
        player.increase_speed(-2.5);
        assert_eq!(player.vel, Vec2::new(-10.0, 0.0));

        player.key_released();
        player.increase_speed(5.0);
        assert_eq!(player.vel, Vec2::ZERO);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Press(DirectionalInput),
        Release,
        Render,
        IncreaseSpeed(f32),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Press(DirectionalInput::Left)),
            Just(Op::Press(DirectionalInput::Right)),
            Just(Op::Release),
            Just(Op::Render),
            (-5.0f32..5.0).prop_map(Op::IncreaseSpeed),
        ]
    }

    proptest! {
        #[test]
        fn prop_stays_inside_area(
            start in 0.0f32..=450.0,
            speed in 0.0f32..60.0,
            ops in prop::collection::vec(op(), 0..200),
        ) {
            let mut player = player_at(start);
            player.speed = speed;
            for op in ops {
                match op {
                    Op::Press(input) => player.control_inputs(input),
                    Op::Release => player.key_released(),
                    Op::Render => player.advance(),
                    Op::IncreaseSpeed(delta) => player.increase_speed(delta),
                }
            }
            player.advance();
            prop_assert!(player.pos.x >= AREA.x);
            prop_assert!(player.pos.x <= AREA.x + AREA.width - player.width);
        }

        #[test]
        fn prop_predicates_are_pure(start in 0.0f32..=450.0, speed in 0.0f32..60.0) {
            let mut player = player_at(start);
            player.speed = speed;
            let before = player.descriptor();
            let left = player.can_move_left();
            let right = player.can_move_right();
            for _ in 0..3 {
                prop_assert_eq!(player.can_move_left(), left);
                prop_assert_eq!(player.can_move_right(), right);
            }
            prop_assert_eq!(player.descriptor(), before);
        }

        #[test]
        fn prop_velocity_shape(
            ops in prop::collection::vec(op(), 0..100),
        ) {
            let mut player = player_at(200.0);
            for op in ops {
                match op {
                    Op::Press(input) => player.control_inputs(input),
                    Op::Release => player.key_released(),
                    Op::Render => player.advance(),
                    Op::IncreaseSpeed(delta) => player.increase_speed(delta),
                }
                prop_assert_eq!(player.vel.y, 0.0);
                prop_assert!(player.vel.x == 0.0 || player.vel.x.abs() == player.speed);
            }
        }
    }
}
