//! Keyboard events and the player's directional intent

use crate::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
}

/// A single key transition as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub pressed: bool,
    pub repeat: bool, // auto-repeat while held
}

impl KeyEvent {
    pub fn down(key: Key) -> Self {
        Self {
            key,
            pressed: true,
            repeat: false,
        }
    }

    pub fn repeat(key: Key) -> Self {
        Self {
            key,
            pressed: true,
            repeat: true,
        }
    }

    pub fn up(key: Key) -> Self {
        Self {
            key,
            pressed: false,
            repeat: false,
        }
    }
}

/// Current directional intent of the human player
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub direction: Direction,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::Up => self.direction = Direction::Up,
            Key::Down => self.direction = Direction::Down,
            _ => {}
        }
    }

    /// Releasing a key only stops the paddle if that key is what moves it
    pub fn release(&mut self, key: Key) {
        let held = match key {
            Key::Up => Direction::Up,
            Key::Down => Direction::Down,
            _ => return,
        };
        if self.direction == held {
            self.direction = Direction::Zero;
        }
    }

    pub fn clear(&mut self) {
        self.direction = Direction::Zero;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_sets_direction() {
        let mut input = InputState::new();
        input.press(Key::Up);
        assert_eq!(input.direction, Direction::Up);
        input.press(Key::Down);
        assert_eq!(input.direction, Direction::Down);
        input.press(Key::Enter);
        assert_eq!(input.direction, Direction::Down);
    }

    #[test]
    fn test_release_of_held_key_stops() {
        let mut input = InputState::new();
        input.press(Key::Down);
        input.release(Key::Down);
        assert_eq!(input.direction, Direction::Zero);
    }

    #[test]
    fn test_release_of_other_key_keeps_direction() {
        let mut input = InputState::new();
        input.press(Key::Up);
        input.press(Key::Down);
        input.release(Key::Up);
        assert_eq!(input.direction, Direction::Down);
    }
}
