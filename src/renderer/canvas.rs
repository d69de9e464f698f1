//! Canvas 2D surface for the browser

use std::collections::HashMap;

use glam::Vec2;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::surface::{Color, Surface, colors};
use crate::sim::Rect;

/// Draws onto a `CanvasRenderingContext2d`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    /// Sprites by asset path, loaded lazily on first use
    images: HashMap<String, HtmlImageElement>,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        // Pixel art sprites
        ctx.set_image_smoothing_enabled(false);
        Self {
            ctx,
            width,
            height,
            images: HashMap::new(),
        }
    }

    fn sprite(&mut self, path: &str) -> Option<&HtmlImageElement> {
        if !self.images.contains_key(path) {
            match HtmlImageElement::new() {
                Ok(img) => {
                    img.set_src(path);
                    log::info!("Loading sprite {}", path);
                    self.images.insert(path.to_string(), img);
                }
                Err(e) => {
                    log::warn!("Could not create image element for {}: {:?}", path, e);
                    return None;
                }
            }
        }
        self.images.get(path)
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(&format!("{}px monospace", size.round()));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }

    fn image(&mut self, sprite: &str, rect: Rect) {
        let ready = self.sprite(sprite).filter(|img| img.complete()).cloned();
        match ready {
            Some(img) => {
                let drawn = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    &img,
                    rect.x as f64,
                    rect.y as f64,
                    rect.width as f64,
                    rect.height as f64,
                );
                if let Err(e) = drawn {
                    log::warn!("draw_image failed for {}: {:?}", sprite, e);
                }
            }
            // Still loading
            None => self.fill_rect(rect, colors::PLAYER),
        }
    }
}
