//! Recorded draw commands
//!
//! Used by the headless native build and by tests to observe what a frame
//! would have drawn.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::surface::{Color, Surface};
use crate::sim::Rect;

/// One recorded drawing operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear(Color),
    FillRect { rect: Rect, color: Color },
    Text { text: String, pos: Vec2, size: f32, color: Color },
    Image { sprite: String, rect: Rect },
}

/// A [`Surface`] that records instead of drawing
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drain the recorded commands (call once per frame)
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for DrawList {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }

    fn image(&mut self, sprite: &str, rect: Rect) {
        self.commands.push(DrawCommand::Image {
            sprite: sprite.to_string(),
            rect,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut list = DrawList::new();
        list.clear(Color::rgb(0, 0, 0));
        list.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::rgb(1, 2, 3));
        list.text("hi", Vec2::new(5.0, 5.0), 12.0, Color::rgb(9, 9, 9));

        assert_eq!(list.commands()[0], DrawCommand::Clear(Color::rgb(0, 0, 0)));
        assert!(matches!(list.commands()[2], DrawCommand::Text { .. }));

        assert_eq!(list.take().len(), 3);
        assert!(list.is_empty());
    }
}
