use std::io;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;

use super::theme::Theme;
use crate::table::{SectionLayout, SubsectionLayout, TableLayout, TableOptions};

/// Reads a color override. Accepts whatever ratatui's `Color` parser does
/// (names, `#rrggbb`, 0-255 indices) plus `#rgb` and `rgb(r, g, b)`.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    if let Some(hex) = s.strip_prefix('#').filter(|hex| hex.len() == 3) {
        let mut channels = hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8 * 17));
        return Some(Color::Rgb(channels.next()??, channels.next()??, channels.next()??));
    }

    if let Some(inner) = s.strip_prefix("rgb(").and_then(|rest| rest.strip_suffix(')')) {
        let channels = inner
            .split(',')
            .map(|part| part.trim().parse::<u8>().ok())
            .collect::<Option<Vec<u8>>>()?;
        return match channels[..] {
            [r, g, b] => Some(Color::Rgb(r, g, b)),
            _ => None,
        };
    }

    s.parse::<Color>().ok()
}

/// Color overrides in the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColorOverrides {
    pub section_title: Option<String>,
    pub header: Option<String>,
    pub header_count: Option<String>,
    pub row: Option<String>,
    pub row_index: Option<String>,
    pub text: Option<String>,
    pub status_bar_fg: Option<String>,
    pub status_bar_bg: Option<String>,
    pub selection_bg: Option<String>,
}

/// Main config structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme_name")]
    pub theme: String,

    #[serde(default)]
    pub colors: ColorOverrides,

    /// Scroll an expanded header to the top of the list.
    #[serde(default = "default_true")]
    pub scroll_top_when_expand: bool,

    /// Collapse every section on startup.
    #[serde(default)]
    pub start_collapsed: bool,

    #[serde(default = "example_sections")]
    pub sections: Vec<SectionLayout>,
}

fn default_theme_name() -> String {
    "default".to_string()
}

fn default_true() -> bool {
    true
}

/// One section with five collapsible sections of 5, 3, 2, 2 and 2 rows.
fn example_sections() -> Vec<SectionLayout> {
    let subsections = [5, 3, 2, 2, 2]
        .iter()
        .enumerate()
        .map(|(index, rows)| SubsectionLayout {
            title: format!("Header {}", index),
            rows: *rows,
        })
        .collect();
    vec![SectionLayout {
        title: None,
        subsections,
    }]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            colors: ColorOverrides::default(),
            scroll_top_when_expand: true,
            start_collapsed: false,
            sections: example_sections(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("collapsible-table").join("config.toml"))
    }

    /// Load config from the default path, or return default config
    pub fn load() -> Self {
        Self::default_path()
            .and_then(|path| Self::load_from_path(&path).ok())
            .unwrap_or_default()
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn layout(&self) -> TableLayout {
        TableLayout {
            sections: self.sections.clone(),
        }
    }

    pub fn table_options(&self) -> TableOptions {
        TableOptions {
            scroll_top_when_expand: self.scroll_top_when_expand,
        }
    }

    /// Resolve the theme with overrides applied
    pub fn resolve_theme(&self) -> Theme {
        let mut theme = Theme::from_name(&self.theme).unwrap_or_else(Theme::default_theme);

        macro_rules! apply_override {
            ($field:ident) => {
                if let Some(ref color_str) = self.colors.$field {
                    if let Some(color) = parse_color(color_str) {
                        theme.$field = color;
                    }
                }
            };
        }

        apply_override!(section_title);
        apply_override!(header);
        apply_override!(header_count);
        apply_override!(row);
        apply_override!(row_index);
        apply_override!(text);
        apply_override!(status_bar_fg);
        apply_override!(status_bar_bg);
        apply_override!(selection_bg);

        theme
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
