use game_core::host::{Host, Sound};
use game_core::Resolution;

use crate::audio::WebAudio;
use crate::display::Display;

/// Browser services driven by the game
pub struct WebHost {
    pub audio: WebAudio,
    pub display: Display,
    exit_requested: bool,
}

impl WebHost {
    pub fn new(audio: WebAudio, display: Display) -> Self {
        Self {
            audio,
            display,
            exit_requested: false,
        }
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

impl Host for WebHost {
    fn play(&mut self, sound: Sound) {
        self.audio.play(sound);
    }

    fn loop_music(&mut self, sound: Sound) {
        self.audio.loop_music(sound);
    }

    fn set_audio_paused(&mut self, paused: bool) {
        self.audio.set_paused(paused);
    }

    fn apply_display(&mut self, resolution: Resolution, fullscreen: bool) {
        self.display.apply(resolution, fullscreen);
    }

    fn request_exit(&mut self) {
        log::info!("exit requested; stopping frame loop");
        self.exit_requested = true;
    }
}
