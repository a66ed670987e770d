use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::{TableError, TableResult};

use super::collapse_state::CollapseState;
use super::provider::SizeProvider;
use super::rotation::{RotationCache, RotationRecord};
use super::translator::IndexTranslator;
use super::types::{CollapsibleAddress, DiffKind, RowDiff, RowRange, SectionKey, Selection};

/// Receives every diff the table emits, in emission order.
pub trait DiffSink {
    fn apply(&mut self, diff: &RowDiff);
}

impl DiffSink for Vec<RowDiff> {
    fn apply(&mut self, diff: &RowDiff) {
        self.push(*diff);
    }
}

impl<S: DiffSink + ?Sized> DiffSink for Rc<RefCell<S>> {
    fn apply(&mut self, diff: &RowDiff) {
        self.borrow_mut().apply(diff);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Ask the list to scroll an expanded header to the top after it was
    /// expanded by a selection.
    pub scroll_top_when_expand: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            scroll_top_when_expand: true,
        }
    }
}

/// Collapse and expand operations over a table whose shape comes from a
/// [`SizeProvider`].
///
/// Every state change is reported as a [`RowDiff`], returned to the caller
/// and also forwarded to the attached [`DiffSink`], if any.
pub struct CollapsibleTable<P: SizeProvider> {
    provider: P,
    state: CollapseState,
    rotations: RotationCache,
    options: TableOptions,
    sink: Option<Box<dyn DiffSink>>,
}

impl<P: SizeProvider> CollapsibleTable<P> {
    pub fn new(provider: P) -> Self {
        Self::with_options(provider, TableOptions::default())
    }

    pub fn with_options(provider: P, options: TableOptions) -> Self {
        Self {
            provider,
            state: CollapseState::new(),
            rotations: RotationCache::default(),
            options,
            sink: None,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn state(&self) -> &CollapseState {
        &self.state
    }

    pub fn options(&self) -> TableOptions {
        self.options
    }

    pub fn set_options(&mut self, options: TableOptions) {
        self.options = options;
    }

    pub fn set_sink(&mut self, sink: Box<dyn DiffSink>) {
        self.sink = Some(sink);
    }

    pub fn clear_sink(&mut self) -> Option<Box<dyn DiffSink>> {
        self.sink.take()
    }

    pub fn translator(&self) -> IndexTranslator<'_, P> {
        IndexTranslator::new(&self.provider, &self.state)
    }

    pub fn section_count(&self) -> usize {
        self.provider.section_count()
    }

    pub fn visible_row_count(&self, section: usize) -> TableResult<usize> {
        self.translator().visible_row_count(section)
    }

    pub fn is_collapsed(&self, section: usize, subsection: usize) -> bool {
        self.state.is_collapsed(SectionKey::new(section, subsection))
    }

    /// Last arrow orientation recorded for a header, if it ever changed.
    pub fn rotation(&self, key: SectionKey) -> Option<RotationRecord> {
        self.rotations.get(key)
    }

    pub fn locate_for_selection(
        &self,
        section: usize,
        flat_row: usize,
    ) -> TableResult<CollapsibleAddress> {
        self.translator().locate(section, flat_row)
    }

    /// Flips one collapsible section. Empty sections are left alone and
    /// produce no diff.
    pub fn toggle(&mut self, section: usize, subsection: usize) -> TableResult<Option<RowDiff>> {
        if self.is_collapsed(section, subsection) {
            self.expand(section, subsection)
        } else {
            self.collapse(section, subsection)
        }
    }

    /// Expands one collapsible section. No diff when it was not collapsed
    /// or has no rows.
    pub fn expand(&mut self, section: usize, subsection: usize) -> TableResult<Option<RowDiff>> {
        let key = SectionKey::new(section, subsection);
        self.translator().check_key(key)?;
        if !self.state.is_collapsed(key) {
            return Ok(None);
        }
        let Some(range) = self.extent(key)? else {
            return Ok(None);
        };
        self.state.expand(key);
        Ok(Some(self.emit(DiffKind::Insert, range)))
    }

    /// Collapses one collapsible section. No diff when it was already
    /// collapsed or has no rows.
    pub fn collapse(&mut self, section: usize, subsection: usize) -> TableResult<Option<RowDiff>> {
        let key = SectionKey::new(section, subsection);
        self.translator().check_key(key)?;
        if self.state.is_collapsed(key) || self.provider.row_count(section, subsection) == 0 {
            return Ok(None);
        }
        self.state.collapse(key);
        match self.extent(key)? {
            Some(range) => Ok(Some(self.emit(DiffKind::Remove, range))),
            None => Ok(None),
        }
    }

    /// Expands every collapsed section, in ascending `(section, subsection)`
    /// order. All keys are validated before anything changes.
    pub fn expand_all(&mut self) -> TableResult<Vec<RowDiff>> {
        let keys = self.state.sorted_keys();
        {
            let translator = self.translator();
            for key in &keys {
                translator.check_key(*key)?;
            }
        }

        let mut diffs = Vec::with_capacity(keys.len());
        for key in keys {
            match self.expand(key.section, key.subsection)? {
                Some(diff) => diffs.push(diff),
                // Empty sections never show rows, just drop the key.
                None => {
                    self.state.expand(key);
                    self.rotations.record(key, RotationRecord::expanded());
                }
            }
        }
        log::debug!("[table] expand all: {} diffs", diffs.len());
        Ok(diffs)
    }

    /// Collapses every non-empty expanded section, in ascending
    /// `(section, subsection)` order.
    pub fn collapse_all(&mut self) -> TableResult<Vec<RowDiff>> {
        let mut diffs = Vec::new();
        for section in 0..self.provider.section_count() {
            for subsection in 0..self.provider.subsection_count(section) {
                if let Some(diff) = self.collapse(section, subsection)? {
                    diffs.push(diff);
                }
            }
        }
        log::debug!("[table] collapse all: {} diffs", diffs.len());
        Ok(diffs)
    }

    /// Handles a selected flat row: headers toggle their section, child
    /// rows are handed back to the caller.
    pub fn select(&mut self, section: usize, flat_row: usize) -> TableResult<Selection> {
        let address = self.locate_for_selection(section, flat_row)?;
        if !address.is_header() {
            return Ok(Selection::Row(address));
        }

        let key = address.key();
        let diff = self.toggle(key.section, key.subsection)?;
        let scroll_to = match diff {
            Some(diff) if diff.kind == DiffKind::Insert && self.options.scroll_top_when_expand => {
                Some(diff.range.header_row())
            }
            _ => None,
        };
        Ok(Selection::Toggled {
            key,
            diff,
            scroll_to,
        })
    }

    /// Swaps in a new provider, dropping collapse and rotation state for
    /// sections that no longer exist or no longer have rows.
    ///
    /// Returns the previous provider.
    pub fn replace_provider(&mut self, provider: P) -> P {
        let previous = std::mem::replace(&mut self.provider, provider);

        let before = self.state.len();
        let provider = &self.provider;
        let still_valid = |key: SectionKey| {
            key.section < provider.section_count()
                && key.subsection < provider.subsection_count(key.section)
                && provider.row_count(key.section, key.subsection) > 0
        };
        self.state.retain(|key| still_valid(*key));
        self.rotations.retain(still_valid);

        let pruned = before - self.state.len();
        if pruned > 0 {
            log::warn!("[table] dropped {pruned} collapsed sections missing from the new provider");
        }
        previous
    }

    /// Extent of a section, `None` when it has no rows.
    fn extent(&self, key: SectionKey) -> TableResult<Option<RowRange>> {
        match self.translator().subsection_extent(key.section, key.subsection) {
            Ok(range) => Ok(Some(range)),
            Err(TableError::EmptySubsection { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn emit(&mut self, kind: DiffKind, range: RowRange) -> RowDiff {
        let rotation = RotationRecord::for_state(kind == DiffKind::Remove);
        self.rotations.record(range.key, rotation);
        let diff = RowDiff {
            kind,
            range,
            rotation,
        };
        log::debug!(
            "[table] {:?} rows {}..={} of section {} for {:?}",
            kind,
            range.low,
            range.high,
            range.key.section,
            range.key
        );
        if let Some(sink) = self.sink.as_mut() {
            sink.apply(&diff);
        }
        diff
    }
}
