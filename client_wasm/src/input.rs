//! Keyboard input handling

use game_core::{Key, KeyEvent};

/// Map a DOM `KeyboardEvent.key` value to a game key
pub fn map_key(key: &str) -> Option<Key> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Key::Up),
        "ArrowDown" | "s" | "S" => Some(Key::Down),
        "ArrowLeft" | "a" | "A" => Some(Key::Left),
        "ArrowRight" | "d" | "D" => Some(Key::Right),
        "Enter" => Some(Key::Enter),
        "Escape" => Some(Key::Escape),
        _ => None,
    }
}

/// Build a key event from DOM event fields; None for keys the game ignores
pub fn key_event(key: &str, pressed: bool, repeat: bool) -> Option<KeyEvent> {
    map_key(key).map(|key| KeyEvent {
        key,
        pressed,
        repeat: pressed && repeat,
    })
}
