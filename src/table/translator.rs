use crate::errors::{TableError, TableResult};

use super::collapse_state::CollapseState;
use super::provider::SizeProvider;
use super::types::{CollapsibleAddress, RowRange, SectionKey};

/// Index arithmetic between flat rows and collapsible sections.
///
/// Every subsection occupies a span of `1 + rows` flat rows when expanded
/// and just its header row when collapsed. Spans follow each other in
/// subsection order, so all queries are a walk over the spans of one
/// section.
pub struct IndexTranslator<'a, P: SizeProvider + ?Sized> {
    provider: &'a P,
    state: &'a CollapseState,
}

impl<'a, P: SizeProvider + ?Sized> IndexTranslator<'a, P> {
    pub fn new(provider: &'a P, state: &'a CollapseState) -> Self {
        Self { provider, state }
    }

    /// Fails when `section` is not one of the provider's sections.
    pub fn check_section(&self, section: usize) -> TableResult<()> {
        let count = self.provider.section_count();
        if section >= count {
            return Err(TableError::SectionOutOfRange { section, count });
        }
        Ok(())
    }

    /// Fails when `key` does not name one of the provider's subsections.
    pub fn check_key(&self, key: SectionKey) -> TableResult<()> {
        self.check_section(key.section)?;
        let count = self.provider.subsection_count(key.section);
        if key.subsection >= count {
            return Err(TableError::SubsectionOutOfRange {
                section: key.section,
                subsection: key.subsection,
                count,
            });
        }
        Ok(())
    }

    /// Flat rows contributed by one subsection: its header plus its rows
    /// when expanded.
    pub fn span(&self, key: SectionKey) -> usize {
        if self.state.is_collapsed(key) {
            1
        } else {
            1 + self.provider.row_count(key.section, key.subsection)
        }
    }

    /// Number of rows a list widget shows for `section`.
    pub fn visible_row_count(&self, section: usize) -> TableResult<usize> {
        self.check_section(section)?;
        Ok((0..self.provider.subsection_count(section))
            .map(|subsection| self.span(SectionKey::new(section, subsection)))
            .sum())
    }

    /// Resolves a flat row to the header or child row it shows.
    pub fn locate(&self, section: usize, flat_row: usize) -> TableResult<CollapsibleAddress> {
        self.check_section(section)?;

        let mut consumed = 0;
        for subsection in 0..self.provider.subsection_count(section) {
            let key = SectionKey::new(section, subsection);
            let span = self.span(key);
            if flat_row < consumed + span {
                log::trace!("[translate] row {flat_row} of section {section} falls in {key:?}");
                return Ok(if flat_row == consumed {
                    CollapsibleAddress::Header { key, flat_row }
                } else {
                    CollapsibleAddress::Row {
                        key,
                        row: flat_row - consumed - 1,
                        flat_row,
                    }
                });
            }
            consumed += span;
        }

        Err(TableError::RowOutOfRange {
            section,
            row: flat_row,
            count: consumed,
        })
    }

    /// Flat rows owned by the child rows of `(section, subsection)`.
    ///
    /// The range depends only on the subsections before this one, so it is
    /// the same whether this subsection is collapsed or expanded.
    pub fn subsection_extent(&self, section: usize, subsection: usize) -> TableResult<RowRange> {
        let key = SectionKey::new(section, subsection);
        self.check_key(key)?;

        let rows = self.provider.row_count(section, subsection);
        if rows == 0 {
            return Err(TableError::EmptySubsection {
                section,
                subsection,
            });
        }

        let preceding: usize = (0..subsection)
            .map(|before| self.span(SectionKey::new(section, before)))
            .sum();
        let low = preceding + 1;
        Ok(RowRange {
            key,
            low,
            high: low + rows - 1,
        })
    }
}
