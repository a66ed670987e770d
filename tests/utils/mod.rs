#![allow(unused)]

use std::cell::RefCell;
use std::rc::Rc;

use collapsible_table::{
    config::Config,
    model::Model,
    table::{CollapsibleTable, RowDiff, SizeProvider, TableLayout},
};

/// Size provider backed by plain row counts, one vector per section.
pub struct FakeSizes {
    pub rows: Vec<Vec<usize>>,
}

impl FakeSizes {
    pub fn new(rows: &[&[usize]]) -> Self {
        Self {
            rows: rows.iter().map(|r| r.to_vec()).collect(),
        }
    }
}

impl SizeProvider for FakeSizes {
    fn section_count(&self) -> usize {
        self.rows.len()
    }

    fn subsection_count(&self, section: usize) -> usize {
        self.rows[section].len()
    }

    fn row_count(&self, section: usize, subsection: usize) -> usize {
        self.rows[section][subsection]
    }
}

/// Size provider whose counts can change while a table holds it.
#[derive(Clone)]
pub struct SharedSizes(pub Rc<RefCell<FakeSizes>>);

impl SharedSizes {
    pub fn new(rows: &[&[usize]]) -> Self {
        Self(Rc::new(RefCell::new(FakeSizes::new(rows))))
    }
}

impl SizeProvider for SharedSizes {
    fn section_count(&self) -> usize {
        self.0.borrow().section_count()
    }

    fn subsection_count(&self, section: usize) -> usize {
        self.0.borrow().subsection_count(section)
    }

    fn row_count(&self, section: usize, subsection: usize) -> usize {
        self.0.borrow().row_count(section, subsection)
    }
}

pub fn create_table(rows: &[&[usize]]) -> CollapsibleTable<FakeSizes> {
    CollapsibleTable::new(FakeSizes::new(rows))
}

/// Number of flat rows `locate` resolves before running out of range.
pub fn resolvable_rows<P: SizeProvider>(table: &CollapsibleTable<P>, section: usize) -> usize {
    let mut flat_row = 0;
    while table.locate_for_selection(section, flat_row).is_ok() {
        flat_row += 1;
    }
    flat_row
}

/// Applies diffs to a flat list of `(subsection, row)` labels, the way a
/// list widget would, using `None` for header rows.
pub fn apply_to_rows(rows: &mut Vec<(usize, Option<usize>)>, diff: &RowDiff) {
    use collapsible_table::table::DiffKind;
    match diff.kind {
        DiffKind::Remove => {
            rows.drain(diff.range.low..=diff.range.high);
        }
        DiffKind::Insert => {
            let subsection = diff.key().subsection;
            let inserted: Vec<_> = (0..diff.range.len())
                .map(|row| (subsection, Some(row)))
                .collect();
            rows.splice(diff.range.low..diff.range.low, inserted);
        }
    }
}

/// Labels of every visible row of a section, resolved from scratch.
pub fn visible_rows<P: SizeProvider>(
    table: &CollapsibleTable<P>,
    section: usize,
) -> Vec<(usize, Option<usize>)> {
    let count = table.visible_row_count(section).unwrap();
    (0..count)
        .map(|flat_row| {
            let address = table.locate_for_selection(section, flat_row).unwrap();
            (address.key().subsection, address.local_row())
        })
        .collect()
}

/// Creates a demo model over the given row counts.
pub fn create_test_model(rows: &[&[usize]]) -> Model {
    let mut config = Config::default();
    config.sections = TableLayout::from_counts(rows).sections;
    Model::new(&config, None).unwrap()
}

/// Creates a demo model with a viewport, as the run loop would set it.
pub fn create_test_model_with_viewport(rows: &[&[usize]], viewport_height: usize) -> Model {
    let mut model = create_test_model(rows);
    model.ui_model.viewport_height = viewport_height;
    model
}
