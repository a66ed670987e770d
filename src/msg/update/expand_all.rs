use crate::{model::Model, msg::Message};

use super::{apply_diffs, report_error};

pub fn update(model: &mut Model) -> Option<Message> {
    let result = model
        .table
        .expand_all()
        .map_err(Into::into)
        .and_then(|diffs| apply_diffs(model, &diffs));
    match result {
        Ok(()) => Some(Message::ScrollToCursor),
        Err(e) => {
            report_error(model, e);
            None
        }
    }
}
