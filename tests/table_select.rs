use collapsible_table::table::{
    CollapsibleAddress, CollapsibleTable, DiffKind, RotationRecord, SectionKey, Selection,
    TableLayout, TableOptions,
};

mod utils;

use crate::utils::create_table;

#[test]
fn test_selecting_a_row_forwards_it() {
    let mut table = create_table(&[&[3, 2]]);

    let selection = table.select(0, 2).unwrap();

    assert_eq!(
        selection,
        Selection::Row(CollapsibleAddress::Row {
            key: SectionKey::new(0, 0),
            row: 1,
            flat_row: 2
        })
    );
    assert!(table.state().is_empty());
}

#[test]
fn test_selecting_a_header_toggles_it() {
    let mut table = create_table(&[&[3, 2]]);

    let Selection::Toggled {
        key,
        diff,
        scroll_to,
    } = table.select(0, 4).unwrap()
    else {
        panic!("expected a toggle");
    };

    assert_eq!(key, SectionKey::new(0, 1));
    assert_eq!(diff.unwrap().kind, DiffKind::Remove);
    assert_eq!(scroll_to, None);
    assert!(table.is_collapsed(0, 1));
}

#[test]
fn test_expanding_by_selection_scrolls_to_header() {
    let mut table = create_table(&[&[3, 2]]);
    table.collapse(0, 1).unwrap();

    let Selection::Toggled { scroll_to, .. } = table.select(0, 4).unwrap() else {
        panic!("expected a toggle");
    };

    assert_eq!(scroll_to, Some(4));
}

#[test]
fn test_scroll_can_be_disabled() {
    let options = TableOptions {
        scroll_top_when_expand: false,
    };
    let mut table = CollapsibleTable::with_options(TableLayout::from_counts(&[&[3, 2]]), options);
    table.collapse(0, 0).unwrap();

    let Selection::Toggled { diff, scroll_to, .. } = table.select(0, 0).unwrap() else {
        panic!("expected a toggle");
    };

    assert_eq!(diff.unwrap().kind, DiffKind::Insert);
    assert_eq!(scroll_to, None);
}

#[test]
fn test_selecting_an_empty_header_changes_nothing() {
    let mut table = create_table(&[&[0, 2]]);

    let selection = table.select(0, 0).unwrap();

    assert_eq!(
        selection,
        Selection::Toggled {
            key: SectionKey::new(0, 0),
            diff: None,
            scroll_to: None
        }
    );
    assert!(!table.is_collapsed(0, 0));
}

#[test]
fn test_selecting_past_the_end_fails() {
    let mut table = create_table(&[&[3, 2]]);

    let err = table.select(0, 7).unwrap_err();

    assert!(err.is_out_of_range());
}

#[test]
fn test_rotation_follows_last_transition() {
    let mut table = create_table(&[&[3, 2]]);
    let key = SectionKey::new(0, 1);
    assert_eq!(table.rotation(key), None);

    table.toggle(0, 1).unwrap();
    assert_eq!(table.rotation(key), Some(RotationRecord::collapsed()));

    table.toggle(0, 1).unwrap();
    assert_eq!(table.rotation(key), Some(RotationRecord::expanded()));
    assert_eq!(table.rotation(SectionKey::new(0, 0)), None);
}

#[test]
fn test_replace_provider_prunes_stale_state() {
    let mut table = CollapsibleTable::new(TableLayout::from_counts(&[&[3, 2, 4], &[1]]));
    table.collapse(0, 0).unwrap();
    table.collapse(0, 2).unwrap();
    table.collapse(1, 0).unwrap();

    let previous = table.replace_provider(TableLayout::from_counts(&[&[0, 2]]));

    assert_eq!(previous.sections.len(), 2);
    assert!(table.state().is_empty());
    assert_eq!(table.rotation(SectionKey::new(0, 2)), None);
    assert_eq!(table.visible_row_count(0), Ok(4));
}

#[test]
fn test_replace_provider_keeps_valid_state() {
    let mut table = CollapsibleTable::new(TableLayout::from_counts(&[&[3, 2]]));
    table.collapse(0, 1).unwrap();

    table.replace_provider(TableLayout::from_counts(&[&[5, 6]]));

    assert!(table.is_collapsed(0, 1));
    assert_eq!(table.rotation(SectionKey::new(0, 1)), Some(RotationRecord::collapsed()));
    assert_eq!(table.visible_row_count(0), Ok(7));
}
