use crate::{model::Model, msg::Message};

pub fn update(model: &mut Model) -> Option<Message> {
    if let Some(first) = model.ui_model.lines.iter().position(|l| l.is_selectable()) {
        model.ui_model.cursor_position = first;
        // Show decoration lines above the first row as well
        model.ui_model.scroll_offset = 0;
    }
    None
}
