//! Key bindings — maps key events to wizard actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::layout::Step;

/// Actions the wizard understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Up,
    Down,
    Left,
    Right,
    /// Choose the key under the cursor, or toggle the swara under it.
    Confirm,
    /// Return to the previous step.
    Back,
    /// Advance to the result once the selection is complete.
    Next,
    ResetSelection,
    PlayArohanam,
    PlayAvarohanam,
    /// Start over from key selection with an empty selection.
    NewKey,
    ToggleHelp,
}

/// Map a key event to an action for the given step.
pub fn map_key(key: KeyEvent, step: Step) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => return Some(Action::Quit),
        KeyCode::Char('?') => return Some(Action::ToggleHelp),
        KeyCode::Esc => return Some(Action::Back),
        _ => {}
    }

    match step {
        Step::Key => match key.code {
            KeyCode::Left | KeyCode::Char('h') => Some(Action::Left),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::Right),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Confirm),
            _ => None,
        },
        Step::Swaras => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Confirm),
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('n') => Some(Action::Next),
            KeyCode::Left | KeyCode::Backspace => Some(Action::Back),
            KeyCode::Char('r') => Some(Action::ResetSelection),
            _ => None,
        },
        Step::Result => match key.code {
            KeyCode::Char('a') => Some(Action::PlayArohanam),
            KeyCode::Char('d') => Some(Action::PlayAvarohanam),
            KeyCode::Char('k') => Some(Action::NewKey),
            KeyCode::Left | KeyCode::Backspace => Some(Action::Back),
            _ => None,
        },
    }
}

/// Bindings shown in the help overlay, per step.
pub fn help_lines(step: Step) -> &'static [(&'static str, &'static str)] {
    match step {
        Step::Key => &[
            ("←→↑↓ / hjkl", "move"),
            ("Enter / Space", "choose key"),
            ("?", "toggle help"),
            ("q", "quit"),
        ],
        Step::Swaras => &[
            ("↑↓ / jk", "move"),
            ("Enter / Space", "select, deselect or play swara"),
            ("Tab / → / n", "show melakarta"),
            ("r", "clear selection"),
            ("← / Esc", "change key"),
            ("q", "quit"),
        ],
        Step::Result => &[
            ("a", "play arohanam"),
            ("d", "play avarohanam"),
            ("k", "pick a new key"),
            ("← / Esc", "back to swaras"),
            ("q", "quit"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_everywhere() {
        for step in [Step::Key, Step::Swaras, Step::Result] {
            assert_eq!(map_key(press(KeyCode::Char('q')), step), Some(Action::Quit));
            assert_eq!(
                map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), step),
                Some(Action::Quit)
            );
        }
    }

    #[test]
    fn arrows_depend_on_step() {
        assert_eq!(map_key(press(KeyCode::Left), Step::Key), Some(Action::Left));
        assert_eq!(map_key(press(KeyCode::Left), Step::Swaras), Some(Action::Back));
        assert_eq!(map_key(press(KeyCode::Right), Step::Swaras), Some(Action::Next));
    }

    #[test]
    fn k_moves_up_except_on_result() {
        assert_eq!(map_key(press(KeyCode::Char('k')), Step::Swaras), Some(Action::Up));
        assert_eq!(
            map_key(press(KeyCode::Char('k')), Step::Result),
            Some(Action::NewKey)
        );
    }

    #[test]
    fn playback_keys_only_on_result() {
        assert_eq!(
            map_key(press(KeyCode::Char('a')), Step::Result),
            Some(Action::PlayArohanam)
        );
        assert_eq!(map_key(press(KeyCode::Char('a')), Step::Swaras), None);
    }

    #[test]
    fn every_step_has_help() {
        for step in [Step::Key, Step::Swaras, Step::Result] {
            assert!(!help_lines(step).is_empty());
        }
    }
}
