use ratatui::{
    style::Style,
    text::{Line as TextLine, Span},
};

use crate::{config::Theme, table::SectionKey};

/// Generate the view line for a child row, labelled `subsection - row`
/// and indented under its header.
pub fn get_lines(key: SectionKey, row: usize, theme: &Theme) -> Vec<TextLine<'static>> {
    vec![TextLine::from(vec![
        Span::raw("  "),
        Span::styled(
            format!("{} - {}", key.subsection, row),
            Style::default().fg(theme.row_index),
        ),
        Span::styled(" row", Style::default().fg(theme.row)),
    ])]
}
