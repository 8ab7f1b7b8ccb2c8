//! Key mapping from terminal events to session actions.

use crate::types::{KeyAction, Move};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to a session action.
///
/// Auto-repeat counts as a press; releases (on terminals that report them)
/// map to nothing.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(KeyAction::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Left => Some(KeyAction::Move(Move::Left)),
        KeyCode::Right => Some(KeyAction::Move(Move::Right)),
        KeyCode::Down => Some(KeyAction::Move(Move::Down)),
        KeyCode::Char(' ') => Some(KeyAction::Move(Move::HardDrop)),

        // Rotation
        KeyCode::Up => Some(KeyAction::Move(Move::RotateRight)),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(KeyAction::Move(Move::RotateLeft)),

        // Session
        KeyCode::Char('p') | KeyCode::Char('P') => Some(KeyAction::Pause),
        KeyCode::Esc => Some(KeyAction::Escape),
        KeyCode::Enter => Some(KeyAction::Play),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
