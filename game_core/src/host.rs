//! Boundary between the simulation and the platform it runs on.
//!
//! The core never touches audio devices or windows. It queues [`HostRequest`]s,
//! which the platform layer replays through its [`Host`] implementation.

use crate::Resolution;

/// Sound clips the game asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    Score,
    MenuMove,
    MenuSelect,
    Music,
}

impl Sound {
    pub const ALL: [Sound; 4] = [Sound::Score, Sound::MenuMove, Sound::MenuSelect, Sound::Music];

    /// Asset file name, relative to the sounds directory
    pub fn file_name(self) -> &'static str {
        match self {
            Sound::Score => "score.wav",
            Sound::MenuMove => "menu_move.wav",
            Sound::MenuSelect => "menu_select.wav",
            Sound::Music => "music.ogg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostRequest {
    /// Fire-and-forget one-shot clip
    Play(Sound),
    /// Keep a clip playing continuously
    LoopMusic(Sound),
    SetAudioPaused(bool),
    ApplyDisplay {
        resolution: Resolution,
        fullscreen: bool,
    },
    Exit,
}

/// Platform services the game drives. Failures are the host's to log; none of
/// these report back into the simulation.
pub trait Host {
    fn play(&mut self, sound: Sound);
    /// Register the looping clip; while paused it waits for `set_audio_paused(false)`
    fn loop_music(&mut self, sound: Sound);
    fn set_audio_paused(&mut self, paused: bool);
    fn apply_display(&mut self, resolution: Resolution, fullscreen: bool);
    fn request_exit(&mut self);
}

impl HostRequest {
    pub fn dispatch<H: Host + ?Sized>(self, host: &mut H) {
        match self {
            HostRequest::Play(sound) => host.play(sound),
            HostRequest::LoopMusic(sound) => host.loop_music(sound),
            HostRequest::SetAudioPaused(paused) => host.set_audio_paused(paused),
            HostRequest::ApplyDisplay {
                resolution,
                fullscreen,
            } => host.apply_display(resolution, fullscreen),
            HostRequest::Exit => host.request_exit(),
        }
    }
}

/// Host that records every call, for tests and headless runs
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostRequest>,
}

impl Host for RecordingHost {
    fn play(&mut self, sound: Sound) {
        self.calls.push(HostRequest::Play(sound));
    }

    fn loop_music(&mut self, sound: Sound) {
        self.calls.push(HostRequest::LoopMusic(sound));
    }

    fn set_audio_paused(&mut self, paused: bool) {
        self.calls.push(HostRequest::SetAudioPaused(paused));
    }

    fn apply_display(&mut self, resolution: Resolution, fullscreen: bool) {
        self.calls.push(HostRequest::ApplyDisplay {
            resolution,
            fullscreen,
        });
    }

    fn request_exit(&mut self) {
        self.calls.push(HostRequest::Exit);
    }
}
