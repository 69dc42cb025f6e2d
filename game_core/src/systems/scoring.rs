use crate::{Arena, Ball, Events, GameRng, Score, Side};

/// Check if ball left the arena (scoring)
///
/// At most one side scores per call; the ball is re-served from the center.
pub fn check_scoring(
    ball: &mut Ball,
    arena: &Arena,
    slack: f32,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    let scorer = if arena.exited_left(ball.pos.x, slack) {
        Side::Cpu
    } else if arena.exited_right(ball.pos.x, slack) {
        Side::Player
    } else {
        return None;
    };

    score.record(scorer);
    match scorer {
        Side::Player => events.player_scored = true,
        Side::Cpu => events.cpu_scored = true,
    }
    log::debug!(
        "{:?} scored, now {}-{}",
        scorer,
        score.player,
        score.cpu
    );

    ball.reset(arena.width, arena.height, rng);
    Some(scorer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;
    use glam::Vec2;

    fn setup() -> (Arena, Score, Events, GameRng) {
        (
            Arena::default(),
            Score::new(),
            Events::new(),
            GameRng::new(12345), // Fixed seed for deterministic tests
        )
    }

    #[test]
    fn test_cpu_scores_when_ball_exits_left() {
        let (arena, mut score, mut events, mut rng) = setup();
        let mut ball = Ball::new(Vec2::new(-21.0, 240.0), 10.0, 0.5);

        let scored = check_scoring(&mut ball, &arena, 20.0, &mut score, &mut events, &mut rng);

        assert_eq!(scored, Some(Side::Cpu));
        assert_eq!(score.cpu, 1, "CPU should score");
        assert_eq!(score.player, 0, "Player should not score");
        assert!(events.cpu_scored);
    }

    #[test]
    fn test_player_scores_when_ball_exits_right() {
        let (arena, mut score, mut events, mut rng) = setup();
        let mut ball = Ball::new(Vec2::new(661.0, 240.0), 10.0, 0.5);

        let scored = check_scoring(&mut ball, &arena, 20.0, &mut score, &mut events, &mut rng);

        assert_eq!(scored, Some(Side::Player));
        assert_eq!(score.player, 1);
        assert_eq!(score.cpu, 0);
        assert!(events.player_scored);
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (arena, mut score, mut events, mut rng) = setup();
        let mut ball = Ball::new(Vec2::new(700.0, 12.0), 10.0, 0.5);
        ball.direction_x = Direction::Down;

        check_scoring(&mut ball, &arena, 20.0, &mut score, &mut events, &mut rng);

        assert_eq!(ball.pos.x, arena.width / 2.0);
        assert!((0.0..arena.height).contains(&ball.pos.y));
        assert_eq!(ball.direction_x, Direction::Up);
    }

    #[test]
    fn test_no_scoring_inside_slack() {
        let (arena, mut score, mut events, mut rng) = setup();
        for x in [-20.0, -5.0, 0.0, 320.0, 640.0, 660.0] {
            let mut ball = Ball::new(Vec2::new(x, 240.0), 10.0, 0.5);
            let scored =
                check_scoring(&mut ball, &arena, 20.0, &mut score, &mut events, &mut rng);
            assert_eq!(scored, None, "x={} should not score", x);
        }
        assert_eq!(score, Score::new());
        assert_eq!(events.scored(), None);
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (arena, mut score, mut events, mut rng) = setup();
        for _ in 0..3 {
            let mut ball = Ball::new(Vec2::new(-50.0, 240.0), 10.0, 0.5);
            check_scoring(&mut ball, &arena, 20.0, &mut score, &mut events, &mut rng);
            events.clear();
        }
        assert_eq!(score.cpu, 3, "Scores should accumulate");
        assert_eq!(score.player, 0);
    }
}
