use crate::{Ball, Config, Direction, GameRng, InputState, Paddle, Params, Side};

/// Apply paddle movement: the player's follows input, the CPU's patrols
pub fn move_paddles(paddles: &mut [Paddle], input: &InputState, dt: f32, config: &Config) {
    let bound_max = config.paddle_bound_max();
    for paddle in paddles.iter_mut() {
        match paddle.side {
            Side::Player => advance_player_paddle(
                paddle,
                input.direction,
                dt,
                config.player_speed(),
                bound_max,
            ),
            Side::Cpu => advance_cpu_paddle(paddle, dt, config.cpu_speed(), bound_max),
        }
    }
}

/// Move the player's paddle by its input direction, resting at the rails
pub fn advance_player_paddle(
    paddle: &mut Paddle,
    direction: Direction,
    dt: f32,
    speed: f32,
    bound_max: f32,
) {
    let y = (paddle.y - speed * direction.sign() * dt).clamp(0.0, bound_max);
    // a paddle pinned at a rail is not moving, whatever the input says
    paddle.direction = if y != paddle.y { direction } else { Direction::Zero };
    paddle.y = y;
}

/// Patrol the CPU paddle between the rails.
///
/// Integration is unclamped; the direction flips once the paddle is past a rail.
pub fn advance_cpu_paddle(paddle: &mut Paddle, dt: f32, speed: f32, bound_max: f32) {
    paddle.y -= speed * paddle.direction.sign() * dt;

    if paddle.y < 0.0 {
        paddle.direction = Direction::Down;
    }
    if paddle.y > bound_max {
        paddle.direction = Direction::Up;
    }
}

/// Resample the speed split if it has drifted toward an axis
pub fn stabilize_speed_fraction(ball: &mut Ball, rng: &mut GameRng) {
    let fx = ball.speed_fraction_x;
    if fx <= Params::SPEED_FRACTION_MIN || fx >= Params::SPEED_FRACTION_MAX {
        ball.speed_fraction_x = rng.speed_fraction();
    }
}

/// Move ball along its current directions
pub fn move_ball(ball: &mut Ball, dt: f32, base_speed: f32, multiplier: f32) {
    let speed = base_speed * dt * multiplier;
    ball.pos.x -= speed * ball.direction_x.sign() * ball.speed_fraction_x;
    ball.pos.y -= speed * ball.direction_y.sign() * ball.speed_fraction_y();
}
