use ratatui::style::Color;

/// Represents all semantic color roles in the demo list
#[derive(Debug, Clone)]
pub struct Theme {
    // Section colors
    pub section_title: Color,
    pub header: Color,
    pub header_count: Color,

    // Row colors
    pub row: Color,
    pub row_index: Color,

    // Misc
    pub text: Color,
    pub status_bar_fg: Color,
    pub status_bar_bg: Color,

    // Selection
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    /// The default terminal palette
    pub fn default_theme() -> Self {
        Self {
            section_title: Color::Magenta,
            header: Color::Yellow,
            header_count: Color::DarkGray,
            row: Color::White,
            row_index: Color::Cyan,
            text: Color::Reset,
            status_bar_fg: Color::White,
            status_bar_bg: Color::DarkGray,
            selection_bg: Color::Rgb(60, 60, 80),
        }
    }

    /// Catppuccin Frappe theme
    pub fn catppuccin_frappe() -> Self {
        Self {
            section_title: Color::Rgb(202, 158, 230), // Mauve
            header: Color::Rgb(229, 200, 144),        // Yellow
            header_count: Color::Rgb(131, 139, 167),  // Overlay1
            row: Color::Rgb(198, 208, 245),           // Text
            row_index: Color::Rgb(140, 170, 238),     // Blue
            text: Color::Rgb(198, 208, 245),          // Text
            status_bar_fg: Color::Rgb(198, 208, 245), // Text
            status_bar_bg: Color::Rgb(41, 44, 60),    // Mantle
            selection_bg: Color::Rgb(65, 69, 89),     // Surface0
        }
    }

    /// Catppuccin Mocha theme
    pub fn catppuccin_mocha() -> Self {
        Self {
            section_title: Color::Rgb(203, 166, 247), // Mauve
            header: Color::Rgb(249, 226, 175),        // Yellow
            header_count: Color::Rgb(127, 132, 156),  // Overlay1
            row: Color::Rgb(205, 214, 244),           // Text
            row_index: Color::Rgb(137, 180, 250),     // Blue
            text: Color::Rgb(205, 214, 244),          // Text
            status_bar_fg: Color::Rgb(205, 214, 244), // Text
            status_bar_bg: Color::Rgb(24, 24, 37),    // Mantle
            selection_bg: Color::Rgb(49, 50, 68),     // Surface0
        }
    }

    /// Get a built-in theme by name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().replace('_', "-").as_str() {
            "default" => Some(Self::default_theme()),
            "catppuccin-frappe" => Some(Self::catppuccin_frappe()),
            "catppuccin-mocha" => Some(Self::catppuccin_mocha()),
            _ => None,
        }
    }
}
