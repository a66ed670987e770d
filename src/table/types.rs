use std::ops::RangeInclusive;

use super::rotation::RotationRecord;

/// Identity of one collapsible section: the outer section it lives in and
/// its index within that section.
///
/// Keys order lexicographically, so sorting keys yields ascending
/// `(section, subsection)` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionKey {
    pub section: usize,
    pub subsection: usize,
}

impl SectionKey {
    pub fn new(section: usize, subsection: usize) -> Self {
        Self {
            section,
            subsection,
        }
    }
}

/// Flat rows owned by the child rows of one collapsible section.
///
/// `low..=high` is inclusive. The header sits directly above the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub key: SectionKey,
    pub low: usize,
    pub high: usize,
}

impl RowRange {
    /// Flat row of the header for this range.
    ///
    /// `low` is always at least 1 because the header precedes it, so the
    /// floor at 0 never triggers for ranges built by the translator.
    pub fn header_row(&self) -> usize {
        self.low.saturating_sub(1)
    }

    pub fn rows(&self) -> RangeInclusive<usize> {
        self.low..=self.high
    }

    pub fn len(&self) -> usize {
        (self.high + 1).saturating_sub(self.low)
    }

    pub fn is_empty(&self) -> bool {
        self.high < self.low
    }
}

/// What sits at a flat row in collapsible space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapsibleAddress {
    /// Header row of a collapsible section.
    Header { key: SectionKey, flat_row: usize },
    /// Child row `row` (0-based within its collapsible section).
    Row {
        key: SectionKey,
        row: usize,
        flat_row: usize,
    },
}

impl CollapsibleAddress {
    pub fn key(&self) -> SectionKey {
        match self {
            CollapsibleAddress::Header { key, .. } | CollapsibleAddress::Row { key, .. } => *key,
        }
    }

    /// The flat row this address was resolved from.
    pub fn flat_row(&self) -> usize {
        match self {
            CollapsibleAddress::Header { flat_row, .. }
            | CollapsibleAddress::Row { flat_row, .. } => *flat_row,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, CollapsibleAddress::Header { .. })
    }

    /// Row offset inside the collapsible section, `None` for headers.
    pub fn local_row(&self) -> Option<usize> {
        match self {
            CollapsibleAddress::Header { .. } => None,
            CollapsibleAddress::Row { row, .. } => Some(*row),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffKind {
    Insert,
    Remove,
}

/// Rows a list widget must insert or remove after a collapsible section
/// changed state, along with the arrow orientation its header should show.
///
/// Diffs emitted by one batch operation are meant to be applied in order:
/// each range is computed against the rows left by the diffs before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowDiff {
    pub kind: DiffKind,
    pub range: RowRange,
    pub rotation: RotationRecord,
}

impl RowDiff {
    pub fn key(&self) -> SectionKey {
        self.range.key
    }
}

/// Outcome of selecting a flat row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    /// A header was selected and its section toggled. `diff` is `None` when
    /// the section has no rows. `scroll_to` is the header row to bring to
    /// the top after an expansion, when that behaviour is enabled.
    Toggled {
        key: SectionKey,
        diff: Option<RowDiff>,
        scroll_to: Option<usize>,
    },
    /// A child row was selected; forwarded untouched.
    Row(CollapsibleAddress),
}
