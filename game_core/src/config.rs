use crate::Params;

/// Window resolution presets offered by the options screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    #[default]
    R640x480,
    R800x600,
    R1024x768,
    R1280x720,
    R1280x1024,
    R1600x900,
    R1920x1080,
    R2560x1440,
}

impl Resolution {
    pub const ALL: [Resolution; 8] = [
        Resolution::R640x480,
        Resolution::R800x600,
        Resolution::R1024x768,
        Resolution::R1280x720,
        Resolution::R1280x1024,
        Resolution::R1600x900,
        Resolution::R1920x1080,
        Resolution::R2560x1440,
    ];

    pub fn size(self) -> (u32, u32) {
        match self {
            Resolution::R640x480 => (640, 480),
            Resolution::R800x600 => (800, 600),
            Resolution::R1024x768 => (1024, 768),
            Resolution::R1280x720 => (1280, 720),
            Resolution::R1280x1024 => (1280, 1024),
            Resolution::R1600x900 => (1600, 900),
            Resolution::R1920x1080 => (1920, 1080),
            Resolution::R2560x1440 => (2560, 1440),
        }
    }

    pub fn label(self) -> String {
        let (w, h) = self.size();
        format!("{}x{}", w, h)
    }

    pub fn next(self) -> Self {
        Self::ALL[cycle(self.index(), Self::ALL.len(), 1)]
    }

    pub fn prev(self) -> Self {
        Self::ALL[cycle(self.index(), Self::ALL.len(), -1)]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }
}

/// Three-step speed setting for ball and paddles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedLevel {
    Low,
    Medium,
    High,
}

impl SpeedLevel {
    pub const ALL: [SpeedLevel; 3] = [SpeedLevel::Low, SpeedLevel::Medium, SpeedLevel::High];

    pub fn multiplier(self) -> f32 {
        match self {
            SpeedLevel::Low => 0.3,
            SpeedLevel::Medium => 0.6,
            SpeedLevel::High => 1.0,
        }
    }

    /// Nearest level for a multiplier
    pub fn from_multiplier(multiplier: f32) -> Self {
        let mut best = SpeedLevel::High;
        for level in Self::ALL {
            if (level.multiplier() - multiplier).abs() < (best.multiplier() - multiplier).abs() {
                best = level;
            }
        }
        best
    }

    pub fn label(self) -> &'static str {
        match self {
            SpeedLevel::Low => "Low",
            SpeedLevel::Medium => "Medium",
            SpeedLevel::High => "High",
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[cycle(self as usize, Self::ALL.len(), 1)]
    }

    pub fn prev(self) -> Self {
        Self::ALL[cycle(self as usize, Self::ALL.len(), -1)]
    }
}

/// Step `index` by `delta` within `len` items, wrapping at both ends
pub fn cycle(index: usize, len: usize, delta: isize) -> usize {
    let len = len as isize;
    (((index as isize + delta) % len + len) % len) as usize
}

/// Game configuration
///
/// Tuning values come from [`Params`]; the settings block at the bottom is what the
/// options screen edits.
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin_x: f32,
    pub player_paddle_speed: f32,
    pub cpu_paddle_speed: f32,
    pub hit_band_inset: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub score_slack: f32,
    pub start_delay: f32,

    // Settings
    pub resolution: Resolution,
    pub fullscreen: bool,
    pub audio_enabled: bool,
    pub ball_speed_multiplier: f32,
    pub paddle_speed_multiplier: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin_x: Params::PADDLE_MARGIN_X,
            player_paddle_speed: Params::PLAYER_PADDLE_SPEED,
            cpu_paddle_speed: Params::CPU_PADDLE_SPEED,
            hit_band_inset: Params::HIT_BAND_INSET,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            score_slack: Params::SCORE_SLACK,
            start_delay: Params::START_DELAY,
            resolution: Resolution::default(),
            fullscreen: false,
            audio_enabled: true,
            ball_speed_multiplier: SpeedLevel::High.multiplier(),
            paddle_speed_multiplier: SpeedLevel::High.multiplier(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for a paddle's left edge
    pub fn paddle_x(&self, side: crate::Side) -> f32 {
        match side {
            crate::Side::Player => self.paddle_margin_x,
            crate::Side::Cpu => self.arena_width - self.paddle_margin_x,
        }
    }

    /// Lowest top-edge position a paddle may rest at
    pub fn paddle_bound_max(&self) -> f32 {
        self.arena_height - self.paddle_height
    }

    pub fn player_speed(&self) -> f32 {
        self.player_paddle_speed * self.paddle_speed_multiplier
    }

    pub fn cpu_speed(&self) -> f32 {
        self.cpu_paddle_speed * self.paddle_speed_multiplier
    }

    /// Commit staged option values
    pub fn apply(&mut self, draft: &OptionsDraft) {
        self.resolution = draft.resolution;
        self.fullscreen = draft.fullscreen;
        self.audio_enabled = draft.audio_enabled;
        self.ball_speed_multiplier = draft.ball_speed.multiplier();
        self.paddle_speed_multiplier = draft.paddle_speed.multiplier();
    }
}

/// Option values edited on the options screen but not yet applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionsDraft {
    pub resolution: Resolution,
    pub fullscreen: bool,
    pub audio_enabled: bool,
    pub ball_speed: SpeedLevel,
    pub paddle_speed: SpeedLevel,
}

impl OptionsDraft {
    pub fn from_config(config: &Config) -> Self {
        Self {
            resolution: config.resolution,
            fullscreen: config.fullscreen,
            audio_enabled: config.audio_enabled,
            ball_speed: SpeedLevel::from_multiplier(config.ball_speed_multiplier),
            paddle_speed: SpeedLevel::from_multiplier(config.paddle_speed_multiplier),
        }
    }
}
