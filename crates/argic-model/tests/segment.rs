//! Tests for argic-model tables and codes.

use argic_model::{
    ArgicError, ProductCode, SegmentEntry, SegmentKind, SegmentTable, WindowEntry,
    WindowPriorityTable,
};

fn manufacturers() -> SegmentTable {
    SegmentTable::from_pairs(
        SegmentKind::Manufacturer,
        [("BMW", "24"), ("DACIA", "72"), ("MINI", "72"), ("BOVA", "BO")],
    )
    .expect("build manufacturer table")
}

#[test]
fn exact_lookup_returns_code() {
    let table = manufacturers();
    assert_eq!(table.resolve("BMW").unwrap(), "24");
    assert_eq!(table.resolve("BOVA").unwrap(), "BO");
}

#[test]
fn lookup_does_not_fold_case() {
    let table = manufacturers();
    let err = table.resolve("bmw").unwrap_err();
    assert_eq!(
        err,
        ArgicError::UnknownAttribute {
            kind: SegmentKind::Manufacturer,
            name: "bmw".to_string(),
        }
    );
}

#[test]
fn codes_may_repeat_across_names() {
    let table = manufacturers();
    assert_eq!(table.get("DACIA"), table.get("MINI"));
}

#[test]
fn duplicate_names_are_rejected() {
    let err = SegmentTable::from_pairs(SegmentKind::Model, [("A3", "54"), ("a3", "55")])
        .unwrap_err();
    assert_eq!(
        err,
        ArgicError::DuplicateKey {
            kind: SegmentKind::Model,
            name: "A3".to_string(),
        }
    );
}

#[test]
fn entries_keep_insertion_order_and_metadata() {
    let table = SegmentTable::from_entries(
        SegmentKind::Model,
        [
            SegmentEntry::new("X5 E53", "39").with_group("BMW"),
            SegmentEntry::new("A3", "54").with_group("AUDI"),
        ],
    )
    .unwrap();
    let names: Vec<&str> = table.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["X5 E53", "A3"]);
    assert_eq!(table.entry("A3").and_then(|e| e.group.as_deref()), Some("AUDI"));
    assert_eq!(table.len(), 2);
}

#[test]
fn window_table_follows_selection_order() {
    let windows = WindowPriorityTable::from_entries([
        WindowEntry::new("jqvmap1_ws", "WINDSHIELD"),
        WindowEntry::new("jqvmap1_df", "ALT_WINDSHIELD"),
        WindowEntry::new("jqvmap1_rw", "REAR_WINDOW"),
    ])
    .unwrap();
    let matched = windows.first_match(&["jqvmap1_rw", "jqvmap1_df"]).unwrap();
    assert_eq!(matched.window, "jqvmap1_rw");
    assert_eq!(matched.position, "REAR_WINDOW");
    assert_eq!(windows.get("jqvmap1_df").map(|e| e.position.as_str()), Some("ALT_WINDSHIELD"));
}

#[test]
fn product_code_concatenates_without_separator() {
    let code = ProductCode::from_segments("24", "36", "A", "BL");
    assert_eq!(code.as_str(), "2436ABL");
    assert_eq!(code.len(), 7);
    assert_eq!(code.to_string(), "2436ABL");
    assert_eq!(String::from(code), "2436ABL");
}
