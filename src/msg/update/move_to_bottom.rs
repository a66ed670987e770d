use crate::{model::Model, msg::Message};

pub fn update(model: &mut Model) -> Option<Message> {
    if let Some(last) = model.ui_model.lines.iter().rposition(|l| l.is_selectable()) {
        model.ui_model.cursor_position = last;
        return Some(Message::ScrollToCursor);
    }
    None
}
