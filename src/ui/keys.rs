//! Remote-control key decoding.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Logical remote-control input delivered to the active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    Up,
    Down,
    Enter,
    Space,
    /// Escape or Backspace: leave the screen.
    Back,
}

impl NavKey {
    /// Decode a terminal key press. Releases and unmapped keys yield `None`.
    pub fn from_key_event(key: &KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        match key.code {
            KeyCode::Left => Some(NavKey::Left),
            KeyCode::Right => Some(NavKey::Right),
            KeyCode::Up => Some(NavKey::Up),
            KeyCode::Down => Some(NavKey::Down),
            KeyCode::Enter => Some(NavKey::Enter),
            KeyCode::Char(' ') => Some(NavKey::Space),
            KeyCode::Esc | KeyCode::Backspace => Some(NavKey::Back),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            NavKey::from_key_event(&press(KeyCode::Left)),
            Some(NavKey::Left)
        );
        assert_eq!(
            NavKey::from_key_event(&press(KeyCode::Right)),
            Some(NavKey::Right)
        );
        assert_eq!(NavKey::from_key_event(&press(KeyCode::Up)), Some(NavKey::Up));
        assert_eq!(
            NavKey::from_key_event(&press(KeyCode::Down)),
            Some(NavKey::Down)
        );
    }

    #[test]
    fn test_escape_and_backspace_are_back() {
        assert_eq!(
            NavKey::from_key_event(&press(KeyCode::Esc)),
            Some(NavKey::Back)
        );
        assert_eq!(
            NavKey::from_key_event(&press(KeyCode::Backspace)),
            Some(NavKey::Back)
        );
    }

    #[test]
    fn test_space_and_enter() {
        assert_eq!(
            NavKey::from_key_event(&press(KeyCode::Char(' '))),
            Some(NavKey::Space)
        );
        assert_eq!(
            NavKey::from_key_event(&press(KeyCode::Enter)),
            Some(NavKey::Enter)
        );
    }

    #[test]
    fn test_unmapped_and_release() {
        assert_eq!(NavKey::from_key_event(&press(KeyCode::Char('x'))), None);

        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        };
        assert_eq!(NavKey::from_key_event(&release), None);
    }
}
