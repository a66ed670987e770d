use crate::{errors::AppError, model::Model, msg::Message, table::RowDiff};

mod collapse_all;
mod expand_all;
mod move_down;
mod move_to_bottom;
mod move_to_top;
mod move_up;
mod quit;
mod refresh;
mod scroll_to_cursor;
mod select;

/// Processes a [`Message`], modifying the passed model.
///
/// Returns a follow up [`Message`] for sequences of actions.
/// e.g. after the cursor moved, a [`Message::ScrollToCursor`] keeps it in view.
pub fn update(model: &mut Model, msg: Message) -> Option<Message> {
    log::trace!("[update] {:?}", msg);
    model.message = None;
    match msg {
        Message::Quit => quit::update(model),
        Message::Refresh => refresh::update(model),
        Message::MoveUp => move_up::update(model),
        Message::MoveDown => move_down::update(model),
        Message::MoveToTop => move_to_top::update(model),
        Message::MoveToBottom => move_to_bottom::update(model),
        Message::Select => select::update(model),
        Message::CollapseAll => collapse_all::update(model),
        Message::ExpandAll => expand_all::update(model),
        Message::ScrollToCursor => scroll_to_cursor::update(model),
    }
}

/// Applies diffs to the line cache in emission order.
fn apply_diffs(model: &mut Model, diffs: &[RowDiff]) -> Result<(), AppError> {
    for diff in diffs {
        model.apply_diff(diff)?;
    }
    Ok(())
}

/// Logs an error and shows it in the status bar.
fn report_error(model: &mut Model, error: AppError) {
    log::error!("[update] {error}");
    model.message = Some(error.to_string());
}
