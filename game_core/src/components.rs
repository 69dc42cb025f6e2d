use glam::Vec2;

/// Vertical intent shared by paddles, ball axes and player input.
///
/// `Up` moves toward smaller coordinates: position updates subtract
/// `speed * sign() * dt`. On the ball's x axis that means `Up` travels left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Zero,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => 1.0,
            Direction::Down => -1.0,
            Direction::Zero => 0.0,
        }
    }

    pub fn is_moving(self) -> bool {
        self != Direction::Zero
    }
}

/// Which side of the court something belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player, // left
    Cpu,    // right
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // fixed per side
    pub y: f32, // top edge
    pub width: f32,
    pub height: f32,
    pub direction: Direction,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            side,
            x,
            y,
            width,
            height,
            direction: Direction::Zero,
        }
    }

    /// Vertical span that registers a hit, inset by `inset` on both ends
    pub fn hit_band(&self, inset: f32) -> (f32, f32) {
        (self.y + inset, self.y + self.height - inset)
    }
}

/// Ball component - the pong ball
///
/// Speed is split between the axes: x gets `speed_fraction_x` of the total,
/// y gets the rest, so the ball's travel angle varies while total speed stays fixed.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub size: f32,
    pub direction_x: Direction,
    pub direction_y: Direction,
    pub speed_fraction_x: f32,
}

impl Ball {
    pub fn new(pos: Vec2, size: f32, speed_fraction_x: f32) -> Self {
        Self {
            pos,
            size,
            direction_x: Direction::Up,
            direction_y: Direction::Down,
            speed_fraction_x,
        }
    }

    pub fn speed_fraction_y(&self) -> f32 {
        1.0 - self.speed_fraction_x
    }

    /// Put the ball back in play after a point
    pub fn reset(&mut self, arena_width: f32, arena_height: f32, rng: &mut crate::GameRng) {
        self.pos = Vec2::new(arena_width / 2.0, rng.spawn_y(arena_height));
        self.speed_fraction_x = rng.speed_fraction();
        self.direction_x = Direction::Up;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Up.sign(), 1.0);
        assert_eq!(Direction::Down.sign(), -1.0);
        assert_eq!(Direction::Zero.sign(), 0.0);
        assert!(!Direction::Zero.is_moving());
    }

    #[test]
    fn test_hit_band_is_inset() {
        let paddle = Paddle::new(Side::Player, 20.0, 100.0, 10.0, 60.0);
        assert_eq!(paddle.hit_band(4.0), (104.0, 156.0));
        assert_eq!(paddle.hit_band(0.0), (100.0, 160.0));
    }

    #[test]
    fn test_speed_fractions_sum_to_one() {
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::ZERO, 10.0, 0.5);
        for _ in 0..100 {
            ball.reset(640.0, 480.0, &mut rng);
            assert!((0.0..=1.0).contains(&ball.speed_fraction_x));
            assert_eq!(ball.speed_fraction_x + ball.speed_fraction_y(), 1.0);
        }
    }

    #[test]
    fn test_reset_centers_ball_and_serves_left() {
        let mut rng = GameRng::new(1);
        let mut ball = Ball::new(Vec2::new(-30.0, 5.0), 10.0, 0.5);
        ball.direction_x = Direction::Down;
        ball.reset(640.0, 480.0, &mut rng);
        assert_eq!(ball.pos.x, 320.0);
        assert!((0.0..480.0).contains(&ball.pos.y));
        assert_eq!(ball.direction_x, Direction::Up);
    }
}
