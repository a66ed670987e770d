use crate::{model::Model, msg::Message};

pub fn update(model: &mut Model) -> Option<Message> {
    model.scroll_to_cursor();
    None
}
