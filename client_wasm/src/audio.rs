//! HTMLAudioElement sound sink

use std::collections::HashMap;

use game_core::host::Sound;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use crate::error::{describe, ClientError};

pub struct WebAudio {
    clips: HashMap<Sound, HtmlAudioElement>,
    music: Option<Sound>,
    paused: bool,
}

impl WebAudio {
    /// Create one element per clip, loading from `base_url`
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut clips = HashMap::new();
        for sound in Sound::ALL {
            let url = format!("{}/{}", base_url.trim_end_matches('/'), sound.file_name());
            let element = HtmlAudioElement::new_with_src(&url).map_err(|e| ClientError::AudioLoad {
                clip: sound.file_name(),
                reason: describe(&e),
            })?;
            clips.insert(sound, element);
        }
        Ok(Self {
            clips,
            music: None,
            paused: false,
        })
    }

    pub fn play(&mut self, sound: Sound) {
        if self.paused {
            return;
        }
        if let Some(clip) = self.clips.get(&sound) {
            clip.set_current_time(0.0);
            start(clip, sound);
        }
    }

    pub fn loop_music(&mut self, sound: Sound) {
        self.music = Some(sound);
        if let Some(clip) = self.clips.get(&sound) {
            clip.set_loop(true);
            if !self.paused {
                start(clip, sound);
            }
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        let Some(sound) = self.music else {
            return;
        };
        let Some(clip) = self.clips.get(&sound) else {
            return;
        };
        if paused {
            if let Err(e) = clip.pause() {
                log::warn!("pausing {:?} failed: {}", sound, describe(&e));
            }
        } else {
            start(clip, sound);
        }
    }
}

/// Start playback. Autoplay refusals are logged and otherwise ignored
fn start(clip: &HtmlAudioElement, sound: Sound) {
    match clip.play() {
        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("{:?} did not play: {}", sound, describe(&e));
            }
        }),
        Err(e) => log::warn!("{:?} did not play: {}", sound, describe(&e)),
    }
}
