use std::rc::Rc;

use serde::Deserialize;

/// Tells the table how big each part of it is.
///
/// Counts are queried on every call and never cached, so a provider whose
/// data changes only has to keep its answers consistent between calls.
pub trait SizeProvider {
    fn section_count(&self) -> usize;

    fn subsection_count(&self, section: usize) -> usize;

    fn row_count(&self, section: usize, subsection: usize) -> usize;
}

impl<P: SizeProvider + ?Sized> SizeProvider for &P {
    fn section_count(&self) -> usize {
        (**self).section_count()
    }

    fn subsection_count(&self, section: usize) -> usize {
        (**self).subsection_count(section)
    }

    fn row_count(&self, section: usize, subsection: usize) -> usize {
        (**self).row_count(section, subsection)
    }
}

impl<P: SizeProvider + ?Sized> SizeProvider for Rc<P> {
    fn section_count(&self) -> usize {
        (**self).section_count()
    }

    fn subsection_count(&self, section: usize) -> usize {
        (**self).subsection_count(section)
    }

    fn row_count(&self, section: usize, subsection: usize) -> usize {
        (**self).row_count(section, subsection)
    }
}

impl<P: SizeProvider + ?Sized> SizeProvider for Box<P> {
    fn section_count(&self) -> usize {
        (**self).section_count()
    }

    fn subsection_count(&self, section: usize) -> usize {
        (**self).subsection_count(section)
    }

    fn row_count(&self, section: usize, subsection: usize) -> usize {
        (**self).row_count(section, subsection)
    }
}

/// A fixed table shape, usually read from a config file.
///
/// The default is a single section with nothing in it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableLayout {
    #[serde(default = "default_sections")]
    pub sections: Vec<SectionLayout>,
}

fn default_sections() -> Vec<SectionLayout> {
    vec![SectionLayout::default()]
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            sections: default_sections(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SectionLayout {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subsections: Vec<SubsectionLayout>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubsectionLayout {
    pub title: String,
    #[serde(default)]
    pub rows: usize,
}

impl TableLayout {
    /// Builds a layout from row counts, one inner vector per section.
    /// Subsections are titled "Header N".
    pub fn from_counts(counts: &[&[usize]]) -> Self {
        let sections = counts
            .iter()
            .map(|rows| SectionLayout {
                title: None,
                subsections: rows
                    .iter()
                    .enumerate()
                    .map(|(index, rows)| SubsectionLayout {
                        title: format!("Header {}", index),
                        rows: *rows,
                    })
                    .collect(),
            })
            .collect();
        Self { sections }
    }

    pub fn section(&self, section: usize) -> Option<&SectionLayout> {
        self.sections.get(section)
    }

    pub fn subsection(&self, section: usize, subsection: usize) -> Option<&SubsectionLayout> {
        self.section(section)
            .and_then(|s| s.subsections.get(subsection))
    }
}

impl SizeProvider for TableLayout {
    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn subsection_count(&self, section: usize) -> usize {
        self.section(section).map_or(0, |s| s.subsections.len())
    }

    fn row_count(&self, section: usize, subsection: usize) -> usize {
        self.subsection(section, subsection).map_or(0, |s| s.rows)
    }
}
