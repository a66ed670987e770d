use crate::{model::Model, msg::Message};

pub fn update(model: &mut Model) -> Option<Message> {
    // Find the previous selectable line
    let mut new_pos = model.ui_model.cursor_position;
    while new_pos > 0 {
        new_pos -= 1;
        if model.ui_model.lines[new_pos].is_selectable() {
            model.ui_model.cursor_position = new_pos;
            return Some(Message::ScrollToCursor);
        }
    }
    None
}
