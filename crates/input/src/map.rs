//! Key mapping from terminal events to game actions.

use crate::types::{Difficulty, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Cursor movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(GameAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(GameAction::CursorRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(GameAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(GameAction::CursorDown),

        // Flip the card under the cursor
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::Flip),

        // Session control
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        // Strike budget
        KeyCode::Char('+') | KeyCode::Char('=') => Some(GameAction::AddLife),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(GameAction::RemoveLife),

        // Difficulty presets
        KeyCode::Char('1') => Some(GameAction::SetDifficulty(Difficulty::Easy)),
        KeyCode::Char('2') => Some(GameAction::SetDifficulty(Difficulty::Medium)),
        KeyCode::Char('3') => Some(GameAction::SetDifficulty(Difficulty::Hard)),
        KeyCode::Char('4') => Some(GameAction::SetDifficulty(Difficulty::Expert)),
        KeyCode::Char('5') => Some(GameAction::SetDifficulty(Difficulty::Legendary)),
        KeyCode::Char('6') => Some(GameAction::SetDifficulty(Difficulty::Boss)),

        // Board and timer configuration
        KeyCode::Char('g') | KeyCode::Char('G') => Some(GameAction::CycleGridSize),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(GameAction::CycleTimer),
        KeyCode::Char(']') => Some(GameAction::SpeedUp),
        KeyCode::Char('[') => Some(GameAction::SpeedDown),

        // Persistence
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::SaveScore),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::CursorLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('l'))),
            Some(GameAction::CursorRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('K'))),
            Some(GameAction::CursorUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::CursorDown)
        );
    }

    #[test]
    fn test_flip_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::Flip)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Flip)
        );
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(GameAction::Pause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('s'))),
            Some(GameAction::SaveScore)
        );
    }

    #[test]
    fn test_configuration_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('3'))),
            Some(GameAction::SetDifficulty(Difficulty::Hard))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('g'))),
            Some(GameAction::CycleGridSize)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('t'))),
            Some(GameAction::CycleTimer)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('+'))),
            Some(GameAction::AddLife)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('['))),
            Some(GameAction::SpeedDown)
        );
    }

    #[test]
    fn test_unbound_key_ignored() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('z'))));
    }
}
