pub mod components;
pub mod config;
pub mod game;
pub mod host;
pub mod input;
pub mod map;
pub mod menu;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use input::{InputState, Key, KeyEvent};
pub use map::*;
pub use menu::*;
pub use params::*;
pub use resources::*;

use systems::*;

/// Run the in-game simulation for `time.dt` seconds
#[allow(clippy::too_many_arguments)]
pub fn step(
    paddles: &mut [Paddle],
    ball: &mut Ball,
    time: &mut Time,
    arena: &Arena,
    config: &Config,
    input: &InputState,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(Params::MAX_DT);

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        // 1. Move paddles (player input, CPU patrol)
        move_paddles(paddles, input, step_dt, config);

        // 2. Move ball, bounce, score (points are reported through `events`)
        let _scored = advance_ball(ball, paddles, arena, step_dt, config, score, events, rng);
    }

    // Update time
    time.now += clamped_dt;
}
