//! Key mapping from terminal events to engine actions.
//!
//! Letter keys follow the classic layout (a/d/s to move, w to drop, j/k to
//! rotate, l to hold); arrow keys and a few alternates map to the same actions.

use crate::types::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to an engine action.
pub fn handle_key_event(key: KeyEvent) -> Option<Action> {
    if is_ctrl_c(key) {
        return None;
    }
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::MoveDown),

        // Rotation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(Action::RotateCw),
        KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('z') | KeyCode::Char('Z') => {
            Some(Action::RotateCcw)
        }

        // Actions
        KeyCode::Char(' ') | KeyCode::Char('w') | KeyCode::Char('W') => Some(Action::HardDrop),
        KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('c') | KeyCode::Char('C') => {
            Some(Action::Hold)
        }

        _ => None,
    }
}

/// Key that starts a new episode (from the title or game-over screen).
pub fn is_start_key(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N')
    )
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) || is_ctrl_c(key)
}

/// Whether the event is a press (or auto-repeat) rather than a release.
///
/// Terminals with the kitty protocol report releases too; those are ignored.
pub fn is_press(key: KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Left)), Some(Action::MoveLeft));
        assert_eq!(handle_key_event(key(KeyCode::Right)), Some(Action::MoveRight));
        assert_eq!(handle_key_event(key(KeyCode::Down)), Some(Action::MoveDown));

        assert_eq!(handle_key_event(key(KeyCode::Char('a'))), Some(Action::MoveLeft));
        assert_eq!(handle_key_event(key(KeyCode::Char('D'))), Some(Action::MoveRight));
        assert_eq!(handle_key_event(key(KeyCode::Char('s'))), Some(Action::MoveDown));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Up)), Some(Action::RotateCw));
        assert_eq!(handle_key_event(key(KeyCode::Char('k'))), Some(Action::RotateCw));
        assert_eq!(handle_key_event(key(KeyCode::Char('j'))), Some(Action::RotateCcw));
        assert_eq!(handle_key_event(key(KeyCode::Char('Z'))), Some(Action::RotateCcw));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char(' '))), Some(Action::HardDrop));
        assert_eq!(handle_key_event(key(KeyCode::Char('w'))), Some(Action::HardDrop));
        assert_eq!(handle_key_event(key(KeyCode::Char('l'))), Some(Action::Hold));
        assert_eq!(handle_key_event(key(KeyCode::Char('c'))), Some(Action::Hold));
        assert_eq!(handle_key_event(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_start_keys() {
        assert!(is_start_key(key(KeyCode::Enter)));
        assert!(is_start_key(key(KeyCode::Char('n'))));
        assert!(!is_start_key(key(KeyCode::Char('s'))));
    }

    #[test]
    fn test_quit_keys() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(should_quit(key(KeyCode::Char('q'))));
        assert!(should_quit(ctrl_c));
        assert_eq!(handle_key_event(ctrl_c), None);
        assert!(!should_quit(key(KeyCode::Char('c'))));
    }

    #[test]
    fn test_release_is_not_a_press() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(!is_press(release));
        assert!(is_press(key(KeyCode::Char('a'))));
    }
}
