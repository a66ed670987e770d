use crate::{
    config::Config,
    errors::AppResult,
    model::{Line, Model, build_lines},
    msg::Message,
};

use super::report_error;

pub fn update(model: &mut Model) -> Option<Message> {
    match refresh(model) {
        Ok(()) => Some(Message::ScrollToCursor),
        Err(e) => {
            report_error(model, e);
            None
        }
    }
}

fn refresh(model: &mut Model) -> AppResult<()> {
    let config = match &model.config_path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load(),
    };

    model.table.replace_provider(config.layout());
    model.table.set_options(config.table_options());
    model.theme = config.resolve_theme();
    model.ui_model.lines = build_lines(&model.table)?;

    // Clamp cursor position if lines changed
    let lines = &model.ui_model.lines;
    let max_pos = lines.len().saturating_sub(1);
    if model.ui_model.cursor_position > max_pos {
        model.ui_model.cursor_position = max_pos;
    }
    if !lines
        .get(model.ui_model.cursor_position)
        .is_some_and(Line::is_selectable)
    {
        model.ui_model.cursor_position = lines.iter().position(Line::is_selectable).unwrap_or(0);
    }

    log::debug!("[refresh] rebuilt {} lines", model.ui_model.lines.len());
    Ok(())
}
