use ratatui::{
    style::{Modifier, Style},
    text::{Line as TextLine, Span},
};

use crate::config::Theme;

pub fn get_lines(title: &str, theme: &Theme) -> Vec<TextLine<'static>> {
    vec![TextLine::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(theme.section_title)
            .add_modifier(Modifier::BOLD),
    ))]
}
