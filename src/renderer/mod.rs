//! Rendering module
//!
//! Screens draw through the [`Surface`] trait. On the web the surface is a
//! Canvas 2D context; elsewhere draw commands are recorded into a [`DrawList`].

pub mod draw_list;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use draw_list::{DrawCommand, DrawList};
pub use surface::{Color, Surface, colors};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
