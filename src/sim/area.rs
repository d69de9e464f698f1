//! Axis-aligned rectangles for the play area and touch targets

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in canvas pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rightmost x coordinate
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom y coordinate
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Hit test, edges inclusive
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

/// The playable region of the canvas, below the score header.
///
/// Produced by the layout and consumed read-only by the paddle.
pub type GameArea = Rect;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges_inclusive() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(Vec2::new(10.0, 20.0)));
        assert!(r.contains(Vec2::new(110.0, 70.0)));
        assert!(r.contains(Vec2::new(60.0, 45.0)));
        assert!(!r.contains(Vec2::new(9.9, 45.0)));
        assert!(!r.contains(Vec2::new(60.0, 70.1)));
    }

    #[test]
    fn test_edges() {
        let r = Rect::new(5.0, 5.0, 20.0, 30.0);
        assert_eq!(r.right(), 25.0);
        assert_eq!(r.bottom(), 35.0);
        assert_eq!(r.size(), Vec2::new(20.0, 30.0));
    }
}
