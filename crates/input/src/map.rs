//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

fn is_down_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S')
    )
}

/// Map a key press (or terminal auto-repeat) to a command.
pub fn map_key_press(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::MoveRight)
        }
        code if is_down_key(code) => Some(Command::SoftDropBegin),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Command::Rotate),

        // Lifecycle
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::TogglePause),
        KeyCode::Enter => Some(Command::Start),

        _ => None,
    }
}

/// Map a key release to a command. Only the down key cares.
pub fn map_key_release(key: KeyEvent) -> Option<Command> {
    if is_down_key(key.code) {
        Some(Command::SoftDropEnd)
    } else {
        None
    }
}

/// Map any key event, dispatching on its kind.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => map_key_press(key),
        KeyEventKind::Release => map_key_release(key),
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
