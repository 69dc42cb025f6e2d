use glam::Vec2;

/// Playing field in logical pixels, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Ball exited past the left edge by more than `slack`
    pub fn exited_left(&self, x: f32, slack: f32) -> bool {
        x < -slack
    }

    /// Ball exited past the right edge by more than `slack`
    pub fn exited_right(&self, x: f32, slack: f32) -> bool {
        x > self.width + slack
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(crate::Params::ARENA_WIDTH, crate::Params::ARENA_HEIGHT)
    }
}

impl From<&crate::Config> for Arena {
    fn from(config: &crate::Config) -> Self {
        Self::new(config.arena_width, config.arena_height)
    }
}
