use ratatui::{
    style::Style,
    text::{Line as TextLine, Span},
};

use crate::config::Theme;

/// Generate the view lines for a collapsible section header
pub fn get_lines(
    title: &str,
    rows: usize,
    collapsed: bool,
    theme: &Theme,
) -> Vec<TextLine<'static>> {
    // Use '>' when collapsed, '∨' when expanded
    let indicator = if collapsed { ">" } else { "∨" };

    let header_line = TextLine::from(vec![
        Span::raw(indicator),
        Span::styled(title.to_string(), Style::default().fg(theme.header)),
        Span::styled(
            format!(" ({})", rows),
            Style::default().fg(theme.header_count),
        ),
    ]);

    vec![header_line]
}
