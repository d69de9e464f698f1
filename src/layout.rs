//! Screen layout
//!
//! Splits the window into a score header, the game area and a strip of touch
//! buttons, and places the menu's play control.

use glam::Vec2;

use crate::center_item;
use crate::screen::{ButtonKind, ButtonTarget};
use crate::settings::Settings;
use crate::sim::{GameArea, Rect};

/// Geometry the screens read. Never mutated by them.
pub trait Layout {
    fn game_area(&self) -> GameArea;
    fn buttons(&self) -> Vec<ButtonTarget>;
    fn window_size(&self) -> Vec2;
    /// Where the menu's play control sits
    fn play_control(&self) -> Rect;
}

/// Fixed proportional layout for one window size
#[derive(Debug, Clone)]
pub struct ScreenLayout {
    window: Vec2,
    game_area: GameArea,
    buttons: Vec<ButtonTarget>,
    play_control: Rect,
}

impl ScreenLayout {
    pub fn new(window_width: f32, window_height: f32, settings: &Settings) -> Self {
        let w = window_width.max(1.0);
        let h = window_height.max(1.0);

        let header = (h * settings.score_display_height).floor();
        let strip = (h * settings.button_strip_height).floor();
        let game_area = GameArea::new(0.0, header, w, h - header - strip);

        let gap = (w * 0.02).round();
        let strip_y = h - strip;
        let btn_w = w / 2.0 - gap * 1.5;
        let btn_h = (strip - gap * 2.0).max(1.0);
        let buttons = vec![
            ButtonTarget::new(Rect::new(gap, strip_y + gap, btn_w, btn_h), ButtonKind::Left),
            ButtonTarget::new(
                Rect::new(w / 2.0 + gap * 0.5, strip_y + gap, btn_w, btn_h),
                ButtonKind::Right,
            ),
        ];

        let (aspect_h, aspect_v) = settings.play_button_aspect;
        let play_w = w * settings.play_button_width;
        let play_h = play_w * aspect_v / aspect_h;
        let corner = center_item(Vec2::new(w, h), Vec2::new(play_w, play_h));
        // Sits one button height below the window center
        let play_control = Rect::new(corner.x, corner.y + play_h, play_w, play_h);

        log::info!(
            "Layout {}x{}: game area {:?}, {} touch buttons",
            w,
            h,
            game_area,
            buttons.len()
        );

        Self {
            window: Vec2::new(w, h),
            game_area,
            buttons,
            play_control,
        }
    }
}

impl Layout for ScreenLayout {
    fn game_area(&self) -> GameArea {
        self.game_area
    }

    fn buttons(&self) -> Vec<ButtonTarget> {
        self.buttons.clone()
    }

    fn window_size(&self) -> Vec2 {
        self.window
    }

    fn play_control(&self) -> Rect {
        self.play_control
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_do_not_overlap() {
        let layout = ScreenLayout::new(500.0, 1000.0, &Settings::default());
        let area = layout.game_area();
        assert_eq!(area.y, 80.0);
        assert_eq!(area.width, 500.0);
        assert!(area.height > 0.0);

        for btn in layout.buttons() {
            assert!(btn.rect.y >= area.bottom());
            assert!(btn.rect.bottom() <= 1000.0);
        }
    }

    #[test]
    fn test_buttons_left_then_right() {
        let layout = ScreenLayout::new(400.0, 800.0, &Settings::default());
        let buttons = layout.buttons();
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].kind, ButtonKind::Left);
        assert_eq!(buttons[1].kind, ButtonKind::Right);
        assert!(buttons[0].rect.right() < buttons[1].rect.x);
    }

    #[test]
    fn test_play_control_centered() {
        let layout = ScreenLayout::new(500.0, 1000.0, &Settings::default());
        let play = layout.play_control();
        assert!((play.x + play.width / 2.0 - 250.0).abs() < 1e-3);
        assert!((play.width - 200.0).abs() < 1e-3);
        assert!((play.height - 50.0).abs() < 1e-3);
        assert!(play.y > 500.0 - play.height);
    }
}
