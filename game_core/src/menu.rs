//! Menu State Machine
//!
//! Decides which screen is active and turns discrete key presses into
//! screen changes, option edits and host requests.

use crate::config::cycle;
use crate::host::{HostRequest, Sound};
use crate::input::{InputState, Key, KeyEvent};
use crate::{Config, OptionsDraft};

/// Main menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play,
    Options,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Play, MenuItem::Options, MenuItem::Quit];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Play => "Play",
            MenuItem::Options => "Options",
            MenuItem::Quit => "Quit",
        }
    }

    fn step(self, delta: isize) -> Self {
        Self::ALL[cycle(self as usize, Self::ALL.len(), delta)]
    }
}

/// Options screen entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionItem {
    Resolution,
    Fullscreen,
    Audio,
    BallSpeed,
    PaddleSpeed,
    Apply,
    Back,
}

impl OptionItem {
    pub const ALL: [OptionItem; 7] = [
        OptionItem::Resolution,
        OptionItem::Fullscreen,
        OptionItem::Audio,
        OptionItem::BallSpeed,
        OptionItem::PaddleSpeed,
        OptionItem::Apply,
        OptionItem::Back,
    ];

    fn step(self, delta: isize) -> Self {
        Self::ALL[cycle(self as usize, Self::ALL.len(), delta)]
    }
}

/// Active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu { highlighted: MenuItem },
    OptionsMenu { highlighted: OptionItem },
    InGame,
}

/// Screen state plus the option values staged on the options screen.
///
/// The draft outlives the options screen: leaving with Back keeps it until it is
/// overwritten or applied.
#[derive(Debug, Clone)]
pub struct MenuStateMachine {
    state: MenuState,
    draft: OptionsDraft,
    start_timer: Option<f32>, // seconds left before Play takes effect
}

impl MenuStateMachine {
    pub fn new(config: &Config) -> Self {
        Self {
            state: MenuState::MainMenu {
                highlighted: MenuItem::Play,
            },
            draft: OptionsDraft::from_config(config),
            start_timer: None,
        }
    }

    /// Get current state
    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn draft(&self) -> &OptionsDraft {
        &self.draft
    }

    pub fn is_in_game(&self) -> bool {
        self.state == MenuState::InGame
    }

    /// Play was chosen and the game is about to start
    pub fn is_starting(&self) -> bool {
        self.start_timer.is_some()
    }

    /// Handle one key event. Only fresh key-downs drive the menus; the game
    /// screen also honors repeats and key-ups for paddle control.
    pub fn handle_key(
        &mut self,
        event: KeyEvent,
        config: &mut Config,
        input: &mut InputState,
        requests: &mut Vec<HostRequest>,
    ) {
        if event.pressed && !event.repeat && event.key == Key::Escape {
            log::info!("exit requested from {:?}", self.state);
            requests.push(HostRequest::Exit);
            return;
        }

        match self.state {
            MenuState::InGame => {
                if event.pressed {
                    input.press(event.key);
                } else {
                    input.release(event.key);
                }
            }
            _ if !event.pressed || event.repeat || self.is_starting() => {}
            MenuState::MainMenu { highlighted } => {
                self.handle_main(highlighted, event.key, config, requests)
            }
            MenuState::OptionsMenu { highlighted } => {
                self.handle_options(highlighted, event.key, config, requests)
            }
        }
    }

    /// Count down a pending start. Returns true on the frame the game begins.
    pub fn update(&mut self, dt: f32) -> bool {
        let Some(remaining) = self.start_timer else {
            return false;
        };
        let remaining = remaining - dt;
        if remaining > 0.0 {
            self.start_timer = Some(remaining);
            return false;
        }
        self.start_timer = None;
        self.transition(MenuState::InGame);
        true
    }

    fn handle_main(
        &mut self,
        highlighted: MenuItem,
        key: Key,
        config: &Config,
        requests: &mut Vec<HostRequest>,
    ) {
        match key {
            Key::Up | Key::Down => {
                let delta = if key == Key::Up { -1 } else { 1 };
                self.state = MenuState::MainMenu {
                    highlighted: highlighted.step(delta),
                };
                play(requests, config, Sound::MenuMove);
            }
            Key::Enter => {
                play(requests, config, Sound::MenuSelect);
                match highlighted {
                    MenuItem::Play => self.start_timer = Some(config.start_delay),
                    MenuItem::Options => self.transition(MenuState::OptionsMenu {
                        highlighted: OptionItem::Resolution,
                    }),
                    MenuItem::Quit => {
                        log::info!("quit selected");
                        requests.push(HostRequest::Exit);
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_options(
        &mut self,
        highlighted: OptionItem,
        key: Key,
        config: &mut Config,
        requests: &mut Vec<HostRequest>,
    ) {
        match key {
            Key::Up | Key::Down => {
                let delta = if key == Key::Up { -1 } else { 1 };
                self.state = MenuState::OptionsMenu {
                    highlighted: highlighted.step(delta),
                };
                play(requests, config, Sound::MenuMove);
            }
            Key::Left | Key::Right => {
                if self.adjust(highlighted, key == Key::Right) {
                    play(requests, config, Sound::MenuMove);
                }
            }
            Key::Enter => match highlighted {
                OptionItem::Apply => {
                    play(requests, config, Sound::MenuSelect);
                    self.apply(config, requests);
                }
                OptionItem::Back => {
                    play(requests, config, Sound::MenuSelect);
                    self.transition(MenuState::MainMenu {
                        highlighted: MenuItem::Options,
                    });
                }
                _ => {}
            },
            _ => {}
        }
    }

    /// Change the staged value of an option. Returns whether anything changed.
    ///
    /// Toggles treat Left as on and Right as off rather than cycling.
    fn adjust(&mut self, item: OptionItem, forward: bool) -> bool {
        let before = self.draft;
        let draft = &mut self.draft;
        match item {
            OptionItem::Resolution => {
                draft.resolution = if forward {
                    draft.resolution.next()
                } else {
                    draft.resolution.prev()
                }
            }
            OptionItem::Fullscreen => draft.fullscreen = !forward,
            OptionItem::Audio => draft.audio_enabled = !forward,
            OptionItem::BallSpeed => {
                draft.ball_speed = if forward {
                    draft.ball_speed.next()
                } else {
                    draft.ball_speed.prev()
                }
            }
            OptionItem::PaddleSpeed => {
                draft.paddle_speed = if forward {
                    draft.paddle_speed.next()
                } else {
                    draft.paddle_speed.prev()
                }
            }
            OptionItem::Apply | OptionItem::Back => {}
        }
        self.draft != before
    }

    fn apply(&mut self, config: &mut Config, requests: &mut Vec<HostRequest>) {
        let display_changed =
            config.resolution != self.draft.resolution || config.fullscreen != self.draft.fullscreen;
        let audio_changed = config.audio_enabled != self.draft.audio_enabled;

        config.apply(&self.draft);
        log::info!(
            "applied options: {} fullscreen={} audio={} ball={} paddle={}",
            config.resolution.label(),
            config.fullscreen,
            config.audio_enabled,
            config.ball_speed_multiplier,
            config.paddle_speed_multiplier
        );

        if display_changed {
            requests.push(HostRequest::ApplyDisplay {
                resolution: config.resolution,
                fullscreen: config.fullscreen,
            });
        }
        if audio_changed {
            requests.push(HostRequest::SetAudioPaused(!config.audio_enabled));
        }
    }

    fn transition(&mut self, next: MenuState) {
        log::info!("screen {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

fn play(requests: &mut Vec<HostRequest>, config: &Config, sound: Sound) {
    if config.audio_enabled {
        requests.push(HostRequest::Play(sound));
    }
}
