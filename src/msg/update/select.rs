use crate::{
    errors::AppResult,
    model::{Model, RowPosition},
    msg::Message,
    table::{CollapsibleAddress, Selection},
};

use super::report_error;

pub fn update(model: &mut Model) -> Option<Message> {
    let position = model.current_position()?;
    match select(model, position) {
        Ok(next) => next,
        Err(e) => {
            report_error(model, e);
            None
        }
    }
}

fn select(model: &mut Model, position: RowPosition) -> AppResult<Option<Message>> {
    match model.table.select(position.section, position.flat_row)? {
        Selection::Toggled {
            diff, scroll_to, ..
        } => {
            if let Some(diff) = diff {
                model.apply_diff(&diff)?;
            }
            if let Some(header_row) = scroll_to {
                let header = RowPosition {
                    section: position.section,
                    flat_row: header_row,
                };
                if let Some(index) = model.line_index(header) {
                    model.ui_model.scroll_offset = index;
                }
                return Ok(None);
            }
            Ok(Some(Message::ScrollToCursor))
        }
        Selection::Row(address) => {
            if let CollapsibleAddress::Row { key, row, .. } = address {
                model.message = Some(format!(
                    "Selected row {} of header {} in section {}",
                    row, key.subsection, key.section
                ));
            }
            Ok(None)
        }
    }
}
