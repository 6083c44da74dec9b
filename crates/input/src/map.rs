//! Key mapping from terminal events to commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a command.
///
/// Arrows plus `q`/`w` for rotation, with WASD and vim-style alternatives.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    let KeyCode::Char(ch) = key.code else {
        return match key.code {
            KeyCode::Left => Some(Command::MoveLeft),
            KeyCode::Right => Some(Command::MoveRight),
            KeyCode::Down => Some(Command::SoftDrop),
            KeyCode::Up => Some(Command::RotateCw),
            _ => None,
        };
    };

    // Ctrl-modified letters are reserved (Ctrl-C quits).
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match ch.to_ascii_lowercase() {
        'a' | 'h' => Some(Command::MoveLeft),
        'd' | 'l' => Some(Command::MoveRight),
        's' | 'j' => Some(Command::SoftDrop),
        'q' | 'z' => Some(Command::RotateCcw),
        'w' | 'x' | 'k' => Some(Command::RotateCw),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
