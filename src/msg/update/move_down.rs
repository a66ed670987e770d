use crate::{model::Model, msg::Message};

pub fn update(model: &mut Model) -> Option<Message> {
    let max_pos = model.ui_model.lines.len().saturating_sub(1);
    // Find the next selectable line
    let mut new_pos = model.ui_model.cursor_position;
    while new_pos < max_pos {
        new_pos += 1;
        if model.ui_model.lines[new_pos].is_selectable() {
            model.ui_model.cursor_position = new_pos;
            return Some(Message::ScrollToCursor);
        }
    }
    None
}
