//! Collapsible sections over a flat list of rows.
//!
//! A section is split into collapsible sections ("subsections"), each shown
//! as one header row followed by its child rows. Collapsing a subsection
//! hides its child rows but keeps the header. This module translates between
//! the flat row indices a list widget sees and the (section, subsection, row)
//! triples the data lives in, and reports which rows appear or disappear
//! when a subsection is toggled.
//!
//! All of it is single-threaded: a [`CollapsibleTable`] has no internal
//! locking, callers that share one across threads must serialise access
//! themselves.

pub mod collapse_state;
pub mod controller;
pub mod provider;
pub mod rotation;
pub mod translator;
pub mod types;

pub use collapse_state::CollapseState;
pub use controller::{CollapsibleTable, DiffSink, TableOptions};
pub use provider::{SectionLayout, SizeProvider, SubsectionLayout, TableLayout};
pub use rotation::{COLLAPSED_RADIANS, EXPANDED_RADIANS, RotationCache, RotationRecord};
pub use translator::IndexTranslator;
pub use types::{CollapsibleAddress, DiffKind, RowDiff, RowRange, SectionKey, Selection};
