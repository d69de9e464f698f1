//! Screens and input routing
//!
//! The mode controller decides which screen is live and turns keyboard and
//! touch events into one directional input stream for it.

pub mod button;
pub mod controller;
pub mod gameplay;
pub mod mode;

pub use button::{ButtonEvent, ButtonKind, ButtonTarget, PlayControl};
pub use controller::ScreenModeController;
pub use gameplay::{GameplayScreen, PaddleScreen};
pub use mode::{Mode, ModeEvent};
