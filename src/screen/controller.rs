//! Screen mode controller
//!
//! Single entry point for every host input event. Keyboard arrows and touch
//! buttons are normalized to [`DirectionalInput`] here, and the result only
//! reaches the gameplay screen while the mode allows it.

use glam::Vec2;

use super::button::{ButtonEvent, ButtonTarget, PlayControl};
use super::gameplay::GameplayScreen;
use super::mode::{Mode, ModeEvent};
use crate::consts::GAME_TITLE;
use crate::layout::Layout;
use crate::renderer::{Surface, colors};
use crate::sim::{DirectionalInput, InputActivity};

/// Title text size relative to the window width
const TITLE_SIZE_RATIO: f32 = 0.07;

/// Owns the Menu/Playing mode and routes input to the active screen
pub struct ScreenModeController<G: GameplayScreen> {
    mode: Mode,
    gameplay: G,
    buttons: Vec<ButtonTarget>,
    play_control: PlayControl,
    window: Vec2,
    /// Baseline of the menu title
    title_y: f32,
    /// Draw the touch button overlay while playing
    show_buttons: bool,
}

impl<G: GameplayScreen> ScreenModeController<G> {
    /// Start on the menu. Layout geometry is read once here.
    pub fn new(layout: &dyn Layout, gameplay: G) -> Self {
        let window = layout.window_size();
        Self {
            mode: Mode::Menu,
            gameplay,
            buttons: layout.buttons(),
            play_control: PlayControl::new(layout.play_control()),
            window,
            title_y: layout.game_area().y * 4.0,
            show_buttons: true,
        }
    }

    /// Toggle the touch button overlay. Buttons stay tappable either way.
    pub fn with_button_overlay(mut self, show: bool) -> Self {
        self.show_buttons = show;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn gameplay(&self) -> &G {
        &self.gameplay
    }

    pub fn gameplay_mut(&mut self) -> &mut G {
        &mut self.gameplay
    }

    pub fn buttons(&self) -> &[ButtonTarget] {
        &self.buttons
    }

    pub fn play_control(&self) -> &PlayControl {
        &self.play_control
    }

    /// Draw one frame for the current mode
    pub fn render(&mut self, surface: &mut dyn Surface) {
        match self.mode {
            Mode::Menu => self.render_menu(surface),
            Mode::Playing => {
                self.gameplay.render(surface);
                if self.show_buttons {
                    self.render_buttons(surface);
                }
            }
        }
    }

    fn render_menu(&self, surface: &mut dyn Surface) {
        surface.clear(colors::MENU_BACKGROUND);
        surface.text(
            GAME_TITLE,
            Vec2::new(self.window.x / 2.0, self.title_y),
            self.window.x * TITLE_SIZE_RATIO,
            colors::MENU_TITLE,
        );
    }

    fn render_buttons(&self, surface: &mut dyn Surface) {
        for btn in &self.buttons {
            surface.fill_rect(btn.rect, colors::TOUCH_BUTTON);
        }
    }

    /// The menu's play control was used. Returns whether the mode changed;
    /// the control is gone afterwards so later calls do nothing.
    pub fn on_play_activated(&mut self) -> bool {
        if self.play_control.is_removed() {
            log::debug!("Play control already removed");
            return false;
        }

        let next = self.mode.on_event(ModeEvent::PlayActivated);
        let changed = next != self.mode;
        self.mode = next;
        self.play_control.remove();

        if changed {
            log::info!("Mode changed to {:?}", self.mode);
        }
        changed
    }

    /// Route a directional press. Dropped unless a key or pointer is
    /// currently held and the game is being played.
    pub fn handle_key_pressed(&mut self, input: DirectionalInput, activity: InputActivity) {
        if !activity.is_active() {
            log::trace!("Ignoring {:?}: no key or pointer held", input);
            return;
        }
        if !self.mode.is_playing() {
            log::trace!("Ignoring {:?} in {:?}", input, self.mode);
            return;
        }
        self.gameplay.handle_key_pressed(input);
    }

    /// Route a `KeyboardEvent.key` name; keys other than the arrows are ignored
    pub fn handle_raw_key(&mut self, key: &str, activity: InputActivity) {
        match DirectionalInput::from_key(key) {
            Some(input) => self.handle_key_pressed(input, activity),
            None => log::trace!("Ignoring key {:?}", key),
        }
    }

    /// Route a legacy numeric key code; codes other than the arrows are ignored
    pub fn handle_key_code(&mut self, code: u32, activity: InputActivity) {
        match DirectionalInput::from_key_code(code) {
            Some(input) => self.handle_key_pressed(input, activity),
            None => log::trace!("Ignoring key code {}", code),
        }
    }

    pub fn handle_key_released(&mut self) {
        self.gameplay.handle_key_released();
    }

    /// Touch or mouse down at `point` (canvas pixels)
    pub fn handle_touch_started(&mut self, point: Vec2, activity: InputActivity) {
        if self.mode == Mode::Menu {
            return;
        }

        let events: Vec<ButtonEvent> = self
            .buttons
            .iter_mut()
            .filter_map(|btn| btn.click(point))
            .collect();
        for event in events {
            self.dispatch(event, activity);
        }

        self.gameplay.handle_touch_started(point);
    }

    /// Touch or mouse up anywhere. Releases every button.
    pub fn handle_touch_released(&mut self) {
        let events: Vec<ButtonEvent> = self
            .buttons
            .iter_mut()
            .map(|btn| btn.click_released())
            .collect();
        for event in events {
            self.dispatch(event, InputActivity::IDLE);
        }

        self.gameplay.handle_touch_released();
    }

    /// The host lost track of held input (window blur, cancelled touch).
    /// Releases everything as if every key and touch had ended.
    pub fn reset_input(&mut self) {
        log::debug!("Resetting held input");
        self.handle_key_released();
        self.handle_touch_released();
    }

    /// Feed a synthesized button event through the keyboard path
    fn dispatch(&mut self, event: ButtonEvent, activity: InputActivity) {
        match event {
            ButtonEvent::Pressed(input) => self.handle_key_pressed(input, activity),
            ButtonEvent::Released => self.handle_key_released(),
        }
    }
}
