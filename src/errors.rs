use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// Failures reported by the collapsible table.
///
/// The out-of-range kinds mean the caller and the size provider disagree
/// about the shape of the table. They abort the operation instead of being
/// clamped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("section {section} is out of range ({count} sections)")]
    SectionOutOfRange { section: usize, count: usize },

    #[error(
        "collapsible section {subsection} of section {section} is out of range ({count} collapsible sections)"
    )]
    SubsectionOutOfRange {
        section: usize,
        subsection: usize,
        count: usize,
    },

    #[error("row {row} of section {section} is out of range ({count} visible rows)")]
    RowOutOfRange {
        section: usize,
        row: usize,
        count: usize,
    },

    #[error("collapsible section {subsection} of section {section} has no rows")]
    EmptySubsection { section: usize, subsection: usize },
}

impl TableError {
    /// True for every kind that signals a caller/provider inconsistency.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            TableError::SectionOutOfRange { .. }
                | TableError::SubsectionOutOfRange { .. }
                | TableError::RowOutOfRange { .. }
        )
    }
}

pub type TableResult<T> = Result<T, TableError>;

/// Errors surfaced by the demo application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("table error: {0}")]
    Table(#[from] TableError),
}

pub type AppResult<T> = Result<T, AppError>;
