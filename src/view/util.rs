use ratatui::{
    style::{Color, Style},
    text::{Line as TextLine, Span},
};

pub fn selection_style(bg: Color) -> Style {
    Style::default().bg(bg)
}

/// Pads a line with styled spaces so the selection fills the row.
pub fn highlight_line(line: &mut TextLine<'static>, width: usize, style: Style) {
    let line_width: usize = line.spans.iter().map(|s| s.content.chars().count()).sum();
    let padding = width.saturating_sub(line_width);
    let mut spans: Vec<Span<'static>> = line.spans.clone();
    if padding > 0 {
        spans.push(Span::styled(" ".repeat(padding), style));
    }
    *line = TextLine::from(spans).style(style);
}
