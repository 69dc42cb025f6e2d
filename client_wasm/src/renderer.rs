//! Canvas 2D surface

use game_core::render::{Align, Color, Surface};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{describe, ClientError};

const FONT_FAMILY: &str = "monospace";

/// Paints draw lists onto a canvas, scaling the fixed arena to the canvas size
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    logical: (f32, f32),
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, logical: (f32, f32)) -> Result<Self, ClientError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| ClientError::CanvasContext(describe(&e)))?
            .ok_or_else(|| ClientError::CanvasContext("no 2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ClientError::CanvasContext("unexpected context type".to_string()))?;
        Ok(Self {
            canvas,
            ctx,
            logical,
        })
    }

    /// Resizing a canvas resets its context state, so the scale is set every frame
    fn fit_to_canvas(&self) {
        let sx = self.canvas.width() as f64 / self.logical.0 as f64;
        let sy = self.canvas.height() as f64 / self.logical.1 as f64;
        if let Err(e) = self.ctx.set_transform(sx, 0.0, 0.0, sy, 0.0, 0.0) {
            log::warn!("set_transform failed: {}", describe(&e));
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, color: Color) {
        self.fit_to_canvas();
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(0.0, 0.0, self.logical.0 as f64, self.logical.1 as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn point(&mut self, x: f32, y: f32, color: Color) {
        self.fill_rect(x, y, 1.0, 1.0, color);
    }

    fn text(&mut self, x: f32, y: f32, text: &str, size: f32, align: Align, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.set_font(&format!("{}px {}", size, FONT_FAMILY));
        self.ctx.set_text_baseline("middle");
        self.ctx.set_text_align(match align {
            Align::Left => "left",
            Align::Center => "center",
        });
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {}", describe(&e));
        }
    }
}
