/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (logical pixels, independent of the window resolution)
    pub const ARENA_WIDTH: f32 = 640.0;
    pub const ARENA_HEIGHT: f32 = 480.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 60.0;
    pub const PADDLE_MARGIN_X: f32 = 20.0; // distance of each paddle from its edge
    pub const PADDLE_START_Y: f32 = 100.0;
    pub const PLAYER_PADDLE_SPEED: f32 = 300.0; // px per second
    pub const CPU_PADDLE_SPEED: f32 = 250.0;
    pub const HIT_BAND_INSET: f32 = 4.0;

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED: f32 = 400.0; // total px per second split between axes
    pub const SPEED_FRACTION_MIN: f32 = 0.3;
    pub const SPEED_FRACTION_MAX: f32 = 0.7;
    pub const SCORE_SLACK: f32 = 20.0; // distance past the edge before a point counts

    // Menu
    pub const START_DELAY: f32 = 0.6; // length of the menu select clip

    // Physics
    pub const FIXED_DT: f32 = 0.0166; // ~60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
