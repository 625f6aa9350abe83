use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    Select,
    EditQuery,
    QueryChar(char),
    QueryBackspace,
    QuerySubmit,
    QueryCancel,
    Resubmit,
    Help,
    ClosePopup,
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Edit,
}

pub fn map_key(key: KeyEvent, mode: InputMode) -> Action {
    if mode == InputMode::Edit {
        return match key.code {
            KeyCode::Esc => Action::QueryCancel,
            KeyCode::Enter => Action::QuerySubmit,
            KeyCode::Backspace => Action::QueryBackspace,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char(c) => Action::QueryChar(c),
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
        KeyCode::Enter => Action::Select,
        KeyCode::Char('/') | KeyCode::Char('s') => Action::EditQuery,
        KeyCode::Char('r') => Action::Resubmit,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Esc => Action::ClosePopup,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn browse_mode_maps_navigation() {
        assert_eq!(map_key(key(KeyCode::Char('j')), InputMode::Browse), Action::ScrollDown);
        assert_eq!(map_key(key(KeyCode::Up), InputMode::Browse), Action::ScrollUp);
        assert_eq!(map_key(key(KeyCode::Enter), InputMode::Browse), Action::Select);
        assert_eq!(map_key(key(KeyCode::Char('/')), InputMode::Browse), Action::EditQuery);
        assert_eq!(map_key(key(KeyCode::Char('q')), InputMode::Browse), Action::Quit);
    }

    #[test]
    fn edit_mode_captures_typed_characters() {
        assert_eq!(
            map_key(key(KeyCode::Char('q')), InputMode::Edit),
            Action::QueryChar('q')
        );
        assert_eq!(map_key(key(KeyCode::Enter), InputMode::Edit), Action::QuerySubmit);
        assert_eq!(map_key(key(KeyCode::Esc), InputMode::Edit), Action::QueryCancel);
        assert_eq!(
            map_key(key(KeyCode::Backspace), InputMode::Edit),
            Action::QueryBackspace
        );
    }

    #[test]
    fn ctrl_c_quits_in_both_modes() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, InputMode::Browse), Action::Quit);
        assert_eq!(map_key(ctrl_c, InputMode::Edit), Action::Quit);
    }
}
