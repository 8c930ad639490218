//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Arrows, WASD and vi-style HJKL all move; `r` restarts.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    let direction = match key.code {
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Direction::Up,
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Direction::Right,
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Direction::Down,
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Direction::Left,
        KeyCode::Char('r' | 'R') => return Some(GameAction::Restart),
        _ => return None,
    };
    Some(GameAction::Move(direction))
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

    fn action(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(action(KeyCode::Up), Some(GameAction::Move(Direction::Up)));
        assert_eq!(action(KeyCode::Right), Some(GameAction::Move(Direction::Right)));
        assert_eq!(action(KeyCode::Down), Some(GameAction::Move(Direction::Down)));
        assert_eq!(action(KeyCode::Left), Some(GameAction::Move(Direction::Left)));
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(action(KeyCode::Char('w')), Some(GameAction::Move(Direction::Up)));
        assert_eq!(action(KeyCode::Char('D')), Some(GameAction::Move(Direction::Right)));
        assert_eq!(action(KeyCode::Char('j')), Some(GameAction::Move(Direction::Down)));
        assert_eq!(action(KeyCode::Char('H')), Some(GameAction::Move(Direction::Left)));
        assert_eq!(action(KeyCode::Char('r')), Some(GameAction::Restart));
        assert_eq!(action(KeyCode::Char('x')), None);
        assert_eq!(action(KeyCode::Char(' ')), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
