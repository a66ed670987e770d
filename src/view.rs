use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::Line as TextLine,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    model::{LineContent, Model},
    table::RotationRecord,
    view::{status_bar::render_status_bar, util::selection_style},
};

mod row;
mod section_header;
mod section_title;
mod status_bar;
mod util;

/// The view functions draws the UI using the application
/// state (Model).
///
/// ┌─────────────────────────────────────────────────┐
/// |∨Header 0 (5)                                    |
/// |  0 - 0 row                                      |
/// |  0 - 1 row                                      |
/// |  ...                                            |
/// |>Header 1 (3)                                    |
/// |∨Header 2 (2)                                    |
/// |  2 - 0 row                                      |
/// |  2 - 1 row                                      |
/// └─────────────────────────────────────────────────┘
///  Tab toggle  C collapse all  E expand all   S0 R0
pub fn view(model: &Model, frame: &mut Frame) {
    let [list_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
    let theme = &model.theme;
    let cursor_pos = model.ui_model.cursor_position;
    // Content width is area width minus 2 for borders
    let content_width = list_area.width.saturating_sub(2) as usize;

    let mut text = Vec::new();
    for (index, line) in model.ui_model.lines.iter().enumerate() {
        let mut line_texts: Vec<TextLine> = match &line.content {
            LineContent::EmptyLine => vec![TextLine::from("")],
            LineContent::SectionTitle(title) => section_title::get_lines(title, theme),
            LineContent::Header { key, title, rows } => {
                // Headers drawn for the first time fall back to the live state
                let rotation = model.table.rotation(*key).unwrap_or_else(|| {
                    RotationRecord::for_state(model.table.state().is_collapsed(*key))
                });
                section_header::get_lines(title, *rows, rotation.collapsed, theme)
            }
            LineContent::Row { key, row } => row::get_lines(*key, *row, theme),
        };

        if index == cursor_pos {
            let sel_style = selection_style(theme.selection_bg);
            for text_line in &mut line_texts {
                util::highlight_line(text_line, content_width, sel_style);
            }
        }

        text.extend(line_texts);
    }

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Collapsible table"))
        .scroll((model.ui_model.scroll_offset as u16, 0));
    frame.render_widget(paragraph, list_area);

    let position = model
        .current_position()
        .map(|p| format!("S{} R{}", p.section, p.flat_row))
        .unwrap_or_default();
    render_status_bar(
        frame,
        status_area,
        model.message.as_deref(),
        &position,
        theme,
    );
}
