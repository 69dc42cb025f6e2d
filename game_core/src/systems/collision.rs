use crate::{Arena, Ball, Direction, Events, Paddle, Side};

/// Bounce the ball off a paddle if it reached the paddle's face inside the hit-band.
///
/// The ball takes the paddle's vertical direction when the paddle is moving.
pub fn check_paddle_collision(ball: &mut Ball, paddle: &Paddle, inset: f32) -> bool {
    let (band_top, band_bottom) = paddle.hit_band(inset);
    if ball.pos.y < band_top || ball.pos.y > band_bottom {
        return false;
    }

    let reached = match paddle.side {
        Side::Player => ball.pos.x <= paddle.x + paddle.width,
        Side::Cpu => ball.pos.x + ball.size >= paddle.x,
    };
    if !reached {
        return false;
    }

    ball.direction_x = match paddle.side {
        Side::Player => Direction::Down, // send it right
        Side::Cpu => Direction::Up,      // send it left
    };
    if paddle.direction.is_moving() {
        ball.direction_y = paddle.direction;
    }
    true
}

/// Force the ball's vertical direction back into the arena.
///
/// Sets the sign rather than inverting it, so repeated calls while still outside agree.
pub fn check_wall_collision(ball: &mut Ball, arena: &Arena) -> bool {
    if ball.pos.y <= 0.0 {
        ball.direction_y = Direction::Down;
        true
    } else if ball.pos.y >= arena.height {
        ball.direction_y = Direction::Up;
        true
    } else {
        false
    }
}

/// Check ball collisions with paddles, then walls
pub fn check_collisions(
    ball: &mut Ball,
    paddles: &[Paddle],
    arena: &Arena,
    inset: f32,
    events: &mut Events,
) {
    for paddle in paddles {
        if check_paddle_collision(ball, paddle, inset) {
            log::debug!("ball hit {:?} paddle at y={:.1}", paddle.side, ball.pos.y);
            events.ball_hit_paddle = true;
        }
    }

    if check_wall_collision(ball, arena) {
        events.ball_hit_wall = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const INSET: f32 = 4.0;

    fn left_paddle() -> Paddle {
        Paddle::new(Side::Player, 20.0, 100.0, 10.0, 60.0)
    }

    fn right_paddle() -> Paddle {
        Paddle::new(Side::Cpu, 620.0, 100.0, 10.0, 60.0)
    }

    fn ball_at(x: f32, y: f32) -> Ball {
        let mut ball = Ball::new(Vec2::new(x, y), 10.0, 0.5);
        ball.direction_y = Direction::Up;
        ball
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let mut ball = ball_at(29.0, 130.0);
        ball.direction_x = Direction::Up; // moving left

        assert!(check_paddle_collision(&mut ball, &left_paddle(), INSET));
        assert_eq!(ball.direction_x, Direction::Down, "Ball should bounce right");
        assert_eq!(ball.direction_y, Direction::Up, "Still paddle keeps y direction");
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let mut ball = ball_at(611.0, 130.0);
        ball.direction_x = Direction::Down; // moving right

        assert!(check_paddle_collision(&mut ball, &right_paddle(), INSET));
        assert_eq!(ball.direction_x, Direction::Up, "Ball should bounce left");
    }

    #[test]
    fn test_moving_paddle_steers_ball() {
        let mut paddle = left_paddle();
        paddle.direction = Direction::Down;
        let mut ball = ball_at(25.0, 130.0);

        check_paddle_collision(&mut ball, &paddle, INSET);
        assert_eq!(ball.direction_y, Direction::Down);
    }

    #[test]
    fn test_hit_band_edges_are_inclusive() {
        let paddle = left_paddle();
        let mut top = ball_at(25.0, 104.0);
        let mut bottom = ball_at(25.0, 156.0);
        assert!(check_paddle_collision(&mut top, &paddle, INSET));
        assert!(check_paddle_collision(&mut bottom, &paddle, INSET));
    }

    #[test]
    fn test_grazing_hit_outside_band_misses() {
        let paddle = left_paddle();
        let mut above = ball_at(25.0, 103.0);
        let mut below = ball_at(25.0, 157.0);
        assert!(!check_paddle_collision(&mut above, &paddle, INSET));
        assert!(!check_paddle_collision(&mut below, &paddle, INSET));
        assert_eq!(above.direction_x, Direction::Up);
    }

    #[test]
    fn test_zero_inset_uses_full_paddle() {
        let paddle = left_paddle();
        let mut ball = ball_at(25.0, 101.0);
        assert!(check_paddle_collision(&mut ball, &paddle, 0.0));
    }

    #[test]
    fn test_ball_short_of_paddle_face_misses() {
        let mut ball = ball_at(31.0, 130.0);
        assert!(!check_paddle_collision(&mut ball, &left_paddle(), INSET));

        let mut ball = ball_at(609.0, 130.0);
        assert!(!check_paddle_collision(&mut ball, &right_paddle(), INSET));
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let arena = Arena::default();
        let mut ball = ball_at(320.0, -1.0);
        ball.direction_y = Direction::Up;

        assert!(check_wall_collision(&mut ball, &arena));
        assert_eq!(ball.direction_y, Direction::Down);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let arena = Arena::default();
        let mut ball = ball_at(320.0, 480.0);
        ball.direction_y = Direction::Down;

        assert!(check_wall_collision(&mut ball, &arena));
        assert_eq!(ball.direction_y, Direction::Up);
    }

    #[test]
    fn test_wall_bounce_is_idempotent() {
        let arena = Arena::default();
        let mut ball = ball_at(320.0, -3.0);
        ball.direction_y = Direction::Up;

        check_wall_collision(&mut ball, &arena);
        let once = ball.direction_y;
        check_wall_collision(&mut ball, &arena);
        assert_eq!(ball.direction_y, once);
        assert_eq!(ball.direction_y, Direction::Down);
    }

    #[test]
    fn test_wall_wins_over_paddle_in_same_step() {
        let arena = Arena::default();
        let mut paddle = Paddle::new(Side::Player, 20.0, -4.0, 10.0, 60.0);
        paddle.direction = Direction::Up;
        let mut ball = ball_at(25.0, 0.0);
        let mut events = Events::new();

        check_collisions(&mut ball, &[paddle], &arena, INSET, &mut events);

        assert!(events.ball_hit_paddle);
        assert!(events.ball_hit_wall);
        assert_eq!(ball.direction_x, Direction::Down);
        assert_eq!(ball.direction_y, Direction::Down, "Wall is applied last");
    }

    #[test]
    fn test_no_events_in_open_court() {
        let arena = Arena::default();
        let mut ball = ball_at(320.0, 240.0);
        let mut events = Events::new();

        check_collisions(
            &mut ball,
            &[left_paddle(), right_paddle()],
            &arena,
            INSET,
            &mut events,
        );

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
