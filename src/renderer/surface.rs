//! Drawing surface abstraction

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// Opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string for Canvas 2D fill styles
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Colors for screen elements
pub mod colors {
    use super::Color;

    pub const MENU_BACKGROUND: Color = Color::rgb(0, 0, 0);
    pub const MENU_TITLE: Color = Color::rgb(254, 254, 254);
    pub const TOUCH_BUTTON: Color = Color::rgb(60, 60, 60);
    pub const PLAYER: Color = Color::rgb(255, 255, 255);
}

/// Primitive drawing operations the screens issue each frame.
///
/// Coordinates are canvas pixels with y growing downward.
pub trait Surface {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw text centered on `pos`
    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);

    /// Blit a sprite, identified by its asset path, scaled into `rect`
    fn image(&mut self, sprite: &str, rect: Rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css() {
        assert_eq!(Color::rgb(60, 60, 60).to_css(), "rgb(60, 60, 60)");
    }
}
