//! Simulation module
//!
//! Gameplay state that does not depend on the host:
//! - Play area geometry
//! - The shared directional input vocabulary
//! - The player paddle and its boundary rules

pub mod area;
pub mod input;
pub mod player;

pub use area::{GameArea, Rect};
pub use input::{DirectionalInput, InputActivity, LEFT_ARROW, RIGHT_ARROW};
pub use player::{Direction, EntityDescriptor, EntityKind, Player};
