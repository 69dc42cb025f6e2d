//! Browser client for Pong
//!
//! Owns a [`GameState`] and drives it from the page's `requestAnimationFrame`
//! loop: key events go in, a Canvas 2D frame and host requests come out.

mod error;
mod input;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod display;
#[cfg(target_arch = "wasm32")]
mod host;
#[cfg(target_arch = "wasm32")]
mod renderer;

pub use error::ClientError;
pub use input::{key_event, map_key};

#[cfg(target_arch = "wasm32")]
pub use web::Client;

#[cfg(target_arch = "wasm32")]
mod web {
    use game_core::render::build_frame;
    use game_core::{Config, FrameClock, GameRng, GameState};
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use crate::audio::WebAudio;
    use crate::display::Display;
    use crate::error::ClientError;
    use crate::host::WebHost;
    use crate::input::key_event;
    use crate::renderer::CanvasSurface;

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    #[wasm_bindgen]
    pub struct Client {
        game: GameState,
        surface: CanvasSurface,
        host: WebHost,
        clock: FrameClock,
    }

    #[wasm_bindgen]
    impl Client {
        /// Bind to `canvas` and load sounds from `sound_base_url`
        #[wasm_bindgen(constructor)]
        pub fn new(canvas: HtmlCanvasElement, sound_base_url: &str) -> Result<Client, JsValue> {
            Self::create(canvas, sound_base_url).map_err(|e| {
                log::error!("client init failed: {}", e);
                JsValue::from(e)
            })
        }

        /// Returns true if the key belongs to the game, so the page can suppress scrolling
        pub fn key_down(&mut self, event: &KeyboardEvent) -> bool {
            self.push(&event.key(), true, event.repeat())
        }

        pub fn key_up(&mut self, event: &KeyboardEvent) -> bool {
            self.push(&event.key(), false, false)
        }

        /// Advance and paint one frame. Returns false once the game asked to exit.
        pub fn frame(&mut self, now_ms: f64) -> bool {
            let dt = self.clock.tick(now_ms);
            self.game.update(dt);
            build_frame(&self.game).paint(&mut self.surface);
            self.game.dispatch(&mut self.host);
            !self.host.exit_requested()
        }
    }

    impl Client {
        fn create(canvas: HtmlCanvasElement, sound_base_url: &str) -> Result<Client, ClientError> {
            let window = web_sys::window().ok_or(ClientError::NoWindow)?;
            let document = window.document().ok_or(ClientError::NoDocument)?;

            let config = Config::default();
            let (width, height) = config.resolution.size();
            canvas.set_width(width);
            canvas.set_height(height);

            let surface =
                CanvasSurface::new(canvas.clone(), (config.arena_width, config.arena_height))?;
            let audio = WebAudio::new(sound_base_url)?;
            let host = WebHost::new(audio, Display::new(canvas, document));

            log::info!("client ready at {}", config.resolution.label());
            Ok(Client {
                game: GameState::new(config, GameRng::from_entropy()),
                surface,
                host,
                clock: FrameClock::new(),
            })
        }

        fn push(&mut self, key: &str, pressed: bool, repeat: bool) -> bool {
            match key_event(key, pressed, repeat) {
                Some(event) => {
                    self.game.push_key(event);
                    true
                }
                None => false,
            }
        }
    }
}
