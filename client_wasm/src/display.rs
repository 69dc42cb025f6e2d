//! Canvas size and fullscreen control

use game_core::Resolution;
use web_sys::{Document, HtmlCanvasElement};

use crate::error::describe;

pub struct Display {
    canvas: HtmlCanvasElement,
    document: Document,
}

impl Display {
    pub fn new(canvas: HtmlCanvasElement, document: Document) -> Self {
        Self { canvas, document }
    }

    pub fn apply(&self, resolution: Resolution, fullscreen: bool) {
        let (width, height) = resolution.size();
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        log::info!("canvas resized to {}", resolution.label());

        let is_fullscreen = self.document.fullscreen_element().is_some();
        if fullscreen && !is_fullscreen {
            if let Err(e) = self.canvas.request_fullscreen() {
                log::warn!("fullscreen refused: {}", describe(&e));
            }
        } else if !fullscreen && is_fullscreen {
            self.document.exit_fullscreen();
        }
    }
}
