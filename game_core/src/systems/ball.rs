use super::{check_collisions, check_scoring, move_ball, stabilize_speed_fraction};
use crate::{Arena, Ball, Config, Events, GameRng, Paddle, Score, Side};

/// Advance the ball one step: integrate, bounce, then check for a point.
#[allow(clippy::too_many_arguments)]
pub fn advance_ball(
    ball: &mut Ball,
    paddles: &[Paddle],
    arena: &Arena,
    dt: f32,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    stabilize_speed_fraction(ball, rng);
    move_ball(ball, dt, config.ball_speed, config.ball_speed_multiplier);
    check_collisions(ball, paddles, arena, config.hit_band_inset, events);
    check_scoring(ball, arena, config.score_slack, score, events, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;
    use glam::Vec2;

    fn paddles(config: &Config) -> [Paddle; 2] {
        [
            Paddle::new(Side::Player, config.paddle_x(Side::Player), 100.0, 10.0, 60.0),
            Paddle::new(Side::Cpu, config.paddle_x(Side::Cpu), 100.0, 10.0, 60.0),
        ]
    }

    #[test]
    fn test_ball_past_left_edge_gives_cpu_a_point() {
        let config = Config::new();
        let arena = Arena::from(&config);
        let mut score = Score::new();
        let mut events = Events::new();
        let mut rng = GameRng::new(42);
        let mut ball = Ball::new(Vec2::new(-21.0, 240.0), 10.0, 0.5);
        ball.direction_x = Direction::Up;

        let scored = advance_ball(
            &mut ball,
            &paddles(&config),
            &arena,
            0.0,
            &config,
            &mut score,
            &mut events,
            &mut rng,
        );

        assert_eq!(scored, Some(Side::Cpu));
        assert_eq!(score.cpu, 1);
        assert_eq!(score.player, 0);
        assert_eq!(ball.pos.x, 320.0);
        assert_eq!(ball.direction_x, Direction::Up);
    }

    #[test]
    fn test_rally_off_player_paddle() {
        let config = Config::new();
        let arena = Arena::from(&config);
        let mut score = Score::new();
        let mut events = Events::new();
        let mut rng = GameRng::new(42);
        let mut ball = Ball::new(Vec2::new(35.0, 130.0), 10.0, 0.5);
        ball.direction_x = Direction::Up;
        ball.direction_y = Direction::Zero;

        // 0.05s at 200px/s on x reaches the paddle face at x=30
        advance_ball(
            &mut ball,
            &paddles(&config),
            &arena,
            0.05,
            &config,
            &mut score,
            &mut events,
            &mut rng,
        );

        assert!(events.ball_hit_paddle);
        assert_eq!(ball.direction_x, Direction::Down);
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_scoring_is_exclusive_per_step() {
        let config = Config::new();
        let arena = Arena::from(&config);
        let mut score = Score::new();
        let mut rng = GameRng::new(9);
        let mut ball = Ball::new(arena.center(), 10.0, 0.5);

        for _ in 0..20_000 {
            let mut events = Events::new();
            let before = score;
            advance_ball(
                &mut ball,
                &paddles(&config),
                &arena,
                0.016,
                &config,
                &mut score,
                &mut events,
                &mut rng,
            );
            assert!(!(events.player_scored && events.cpu_scored));
            let gained = (score.player - before.player) + (score.cpu - before.cpu);
            assert!(gained <= 1);
            assert!((0.0..1.0).contains(&ball.speed_fraction_x));
        }
    }
}
