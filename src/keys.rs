use crossterm::event::{self, KeyCode, KeyModifiers};

use crate::msg::Message;

/// Maps a key event into a [`Message`].
/// If function returns [`None`], no action should be triggered.
pub fn handle_key(key: event::KeyEvent) -> Option<Message> {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Message::Quit),
        (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(Message::Refresh),
        (KeyModifiers::SHIFT, KeyCode::Char('C')) => Some(Message::CollapseAll),
        (KeyModifiers::SHIFT, KeyCode::Char('E')) => Some(Message::ExpandAll),
        (KeyModifiers::SHIFT, KeyCode::Char('G')) => Some(Message::MoveToBottom),
        (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Message::Quit),
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => Some(Message::MoveUp),
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => Some(Message::MoveDown),
        (KeyModifiers::NONE, KeyCode::Char('g') | KeyCode::Home) => Some(Message::MoveToTop),
        (KeyModifiers::NONE, KeyCode::End) => Some(Message::MoveToBottom),
        (KeyModifiers::NONE, KeyCode::Tab | KeyCode::Enter) => Some(Message::Select),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn create_key_event(modifiers: KeyModifiers, code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_tab_and_enter_select() {
        let tab = create_key_event(KeyModifiers::NONE, KeyCode::Tab);
        let enter = create_key_event(KeyModifiers::NONE, KeyCode::Enter);
        assert_eq!(handle_key(tab), Some(Message::Select));
        assert_eq!(handle_key(enter), Some(Message::Select));
    }

    #[test]
    fn test_batch_keys() {
        let collapse = create_key_event(KeyModifiers::SHIFT, KeyCode::Char('C'));
        let expand = create_key_event(KeyModifiers::SHIFT, KeyCode::Char('E'));
        assert_eq!(handle_key(collapse), Some(Message::CollapseAll));
        assert_eq!(handle_key(expand), Some(Message::ExpandAll));
    }

    #[test]
    fn test_movement_keys() {
        let j = create_key_event(KeyModifiers::NONE, KeyCode::Char('j'));
        let up = create_key_event(KeyModifiers::NONE, KeyCode::Up);
        let big_g = create_key_event(KeyModifiers::SHIFT, KeyCode::Char('G'));
        assert_eq!(handle_key(j), Some(Message::MoveDown));
        assert_eq!(handle_key(up), Some(Message::MoveUp));
        assert_eq!(handle_key(big_g), Some(Message::MoveToBottom));
    }

    #[test]
    fn test_quit_and_refresh() {
        let ctrl_c = create_key_event(KeyModifiers::CONTROL, KeyCode::Char('c'));
        let ctrl_r = create_key_event(KeyModifiers::CONTROL, KeyCode::Char('r'));
        assert_eq!(handle_key(ctrl_c), Some(Message::Quit));
        assert_eq!(handle_key(ctrl_r), Some(Message::Refresh));
    }

    #[test]
    fn test_unbound_key() {
        let x = create_key_event(KeyModifiers::NONE, KeyCode::Char('x'));
        assert_eq!(handle_key(x), None);
    }
}
