use std::path::PathBuf;

use crate::config::{Config, Theme};
use crate::errors::AppResult;
use crate::table::{
    CollapsibleAddress, CollapsibleTable, DiffKind, RowDiff, SectionKey, SizeProvider,
    TableLayout,
};

/// The whole state of the demo application.
pub struct Model {
    /// Running state of the application
    pub running_state: RunningState,
    /// The model passed to the view function to render the main UI.
    pub ui_model: UiModel,
    /// Collapse state and index translation for the list
    pub table: CollapsibleTable<TableLayout>,
    /// Color scheme
    pub theme: Theme,
    /// Config file given on the command line, reloaded on refresh
    pub config_path: Option<PathBuf>,
    /// Feedback shown in the status bar until the next key press
    pub message: Option<String>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub enum RunningState {
    #[default]
    Running,
    Done,
}

#[derive(Default, Clone)]
pub struct UiModel {
    pub lines: Vec<Line>,
    pub cursor_position: usize,
    pub scroll_offset: usize,
    pub viewport_height: usize,
}

/// A flat row of the table: the outer section and the row index inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPosition {
    pub section: usize,
    pub flat_row: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineContent {
    EmptyLine,
    SectionTitle(String),
    Header {
        key: SectionKey,
        title: String,
        rows: usize,
    },
    Row {
        key: SectionKey,
        row: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub content: LineContent,
    /// Table rows have a position, decoration lines between sections don't.
    pub position: Option<RowPosition>,
}

impl Line {
    pub fn is_selectable(&self) -> bool {
        self.position.is_some()
    }
}

impl Model {
    /// Builds the model from a loaded config.
    pub fn new(config: &Config, config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut table = CollapsibleTable::with_options(config.layout(), config.table_options());
        if config.start_collapsed {
            table.collapse_all()?;
        }
        let lines = build_lines(&table)?;
        let cursor_position = lines.iter().position(Line::is_selectable).unwrap_or(0);

        Ok(Self {
            running_state: RunningState::Running,
            ui_model: UiModel {
                lines,
                cursor_position,
                ..Default::default()
            },
            table,
            theme: config.resolve_theme(),
            config_path,
            message: None,
        })
    }

    /// Table position of the line under the cursor.
    pub fn current_position(&self) -> Option<RowPosition> {
        self.ui_model
            .lines
            .get(self.ui_model.cursor_position)
            .and_then(|line| line.position)
    }

    /// Splices the rows of a diff into the line cache and keeps the cursor
    /// on the same row, or on the header when its row disappeared.
    pub fn apply_diff(&mut self, diff: &RowDiff) -> AppResult<()> {
        let section = diff.key().section;
        let Some(base) = section_start(&self.ui_model.lines, section) else {
            return Ok(());
        };
        let low = base + diff.range.low;
        let high = base + diff.range.high;
        let len = diff.range.len();
        let cursor = self.ui_model.cursor_position;

        match diff.kind {
            DiffKind::Remove => {
                self.ui_model.lines.drain(low..=high);
                if cursor > high {
                    self.ui_model.cursor_position = cursor - len;
                } else if cursor >= low {
                    self.ui_model.cursor_position = base + diff.range.header_row();
                }
            }
            DiffKind::Insert => {
                let translator = self.table.translator();
                let mut inserted = Vec::with_capacity(len);
                for flat_row in diff.range.rows() {
                    let address = translator.locate(section, flat_row)?;
                    inserted.push(line_for(&self.table, address));
                }
                self.ui_model.lines.splice(low..low, inserted);
                if cursor >= low {
                    self.ui_model.cursor_position = cursor + len;
                }
            }
        }

        renumber_section(&mut self.ui_model.lines, base, section);
        Ok(())
    }

    /// Moves the viewport so the cursor line is visible.
    pub fn scroll_to_cursor(&mut self) {
        let ui = &mut self.ui_model;
        if ui.cursor_position < ui.scroll_offset {
            ui.scroll_offset = ui.cursor_position;
        } else if ui.viewport_height > 0
            && ui.cursor_position >= ui.scroll_offset + ui.viewport_height
        {
            ui.scroll_offset = ui.cursor_position + 1 - ui.viewport_height;
        }
    }

    /// Line index of a table position.
    pub fn line_index(&self, position: RowPosition) -> Option<usize> {
        section_start(&self.ui_model.lines, position.section).map(|base| base + position.flat_row)
    }
}

/// Renders every visible row of the table into lines, with a blank line
/// and an optional title before each section.
pub fn build_lines<P: SizeProvider + TitleSource>(
    table: &CollapsibleTable<P>,
) -> AppResult<Vec<Line>> {
    let translator = table.translator();
    let mut lines = Vec::new();

    for section in 0..table.section_count() {
        if section > 0 {
            lines.push(Line {
                content: LineContent::EmptyLine,
                position: None,
            });
        }
        if let Some(title) = table.provider().section_title(section) {
            lines.push(Line {
                content: LineContent::SectionTitle(title.to_string()),
                position: None,
            });
        }
        for flat_row in 0..translator.visible_row_count(section)? {
            let address = translator.locate(section, flat_row)?;
            lines.push(line_for(table, address));
        }
    }

    Ok(lines)
}

/// Titles shown by the demo, kept apart from the sizes the table needs.
pub trait TitleSource {
    fn section_title(&self, section: usize) -> Option<&str>;
    fn subsection_title(&self, key: SectionKey) -> Option<&str>;
}

impl TitleSource for TableLayout {
    fn section_title(&self, section: usize) -> Option<&str> {
        self.section(section).and_then(|s| s.title.as_deref())
    }

    fn subsection_title(&self, key: SectionKey) -> Option<&str> {
        self.subsection(key.section, key.subsection)
            .map(|s| s.title.as_str())
    }
}

fn line_for<P: SizeProvider + TitleSource>(
    table: &CollapsibleTable<P>,
    address: CollapsibleAddress,
) -> Line {
    let key = address.key();
    let position = Some(RowPosition {
        section: key.section,
        flat_row: address.flat_row(),
    });
    let content = match address {
        CollapsibleAddress::Header { .. } => LineContent::Header {
            key,
            title: table
                .provider()
                .subsection_title(key)
                .map_or_else(|| format!("Header {}", key.subsection), String::from),
            rows: table.provider().row_count(key.section, key.subsection),
        },
        CollapsibleAddress::Row { row, .. } => LineContent::Row { key, row },
    };
    Line { content, position }
}

/// Index of the first table row of `section` in the line cache.
fn section_start(lines: &[Line], section: usize) -> Option<usize> {
    lines
        .iter()
        .position(|line| line.position.is_some_and(|p| p.section == section))
}

fn renumber_section(lines: &mut [Line], base: usize, section: usize) {
    for (flat_row, line) in lines[base..]
        .iter_mut()
        .take_while(|line| line.position.is_some_and(|p| p.section == section))
        .enumerate()
    {
        line.position = Some(RowPosition { section, flat_row });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with(counts: &[&[usize]]) -> Model {
        let mut config = Config::default();
        config.sections = TableLayout::from_counts(counts).sections;
        Model::new(&config, None).unwrap()
    }

    #[test]
    fn test_build_lines_layout() {
        let model = model_with(&[&[3, 2], &[1]]);
        let lines = &model.ui_model.lines;
        // 7 rows, blank separator, 2 rows
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[7].content, LineContent::EmptyLine);
        assert_eq!(
            lines[8].position,
            Some(RowPosition {
                section: 1,
                flat_row: 0
            })
        );
    }

    #[test]
    fn test_remove_diff_moves_cursor_to_header() {
        let mut model = model_with(&[&[3, 2]]);
        model.ui_model.cursor_position = 6;
        let diff = model.table.toggle(0, 1).unwrap().unwrap();
        model.apply_diff(&diff).unwrap();
        assert_eq!(model.ui_model.cursor_position, 4);
        assert_eq!(model.ui_model.lines, build_lines(&model.table).unwrap());
    }

    #[test]
    fn test_insert_diff_shifts_cursor() {
        let mut model = model_with(&[&[3, 2]]);
        let diff = model.table.toggle(0, 0).unwrap().unwrap();
        model.apply_diff(&diff).unwrap();
        model.ui_model.cursor_position = 1;

        let diff = model.table.toggle(0, 0).unwrap().unwrap();
        model.apply_diff(&diff).unwrap();
        assert_eq!(model.ui_model.cursor_position, 4);
        assert_eq!(model.ui_model.lines, build_lines(&model.table).unwrap());
    }
}
