use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line as TextLine, Span},
    widgets::Paragraph,
};

use crate::config::Theme;

const KEY_HINTS: &str = " Tab toggle  C collapse all  E expand all  q quit ";

/// Render the status bar at the bottom of the screen
///
/// Layout:
/// - Left: last message, or key hints when there is none
/// - Right: position of the cursor in the table
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: Option<&str>,
    position: &str,
    theme: &Theme,
) {
    let width = area.width as usize;
    let style = Style::default()
        .fg(theme.status_bar_fg)
        .bg(theme.status_bar_bg);

    let left = match message {
        Some(message) => format!(" {} ", message),
        None => KEY_HINTS.to_string(),
    };
    let right = format!(" {} ", position);
    let padding = width.saturating_sub(left.chars().count() + right.chars().count());

    let line = TextLine::from(vec![
        Span::styled(left, style),
        Span::styled(" ".repeat(padding), style),
        Span::styled(right, style),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
