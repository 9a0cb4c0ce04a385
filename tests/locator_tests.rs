//! Row locator tests

use daybook::core::{find_row_index, parse_date};
use daybook::types::{CellValue, TableRow};

fn row(index: usize, first_cell: CellValue) -> TableRow {
    TableRow::new(index, vec![first_cell, CellValue::Text("1".to_string())])
}

// ═══════════════════════════════════════════════════════════════════════════
// BASIC MATCHING
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_empty_sequence_is_not_found() {
    let target = parse_date("4/July/2025").unwrap();
    assert_eq!(find_row_index(&target, &[]), None);
}

#[test]
fn test_no_matching_date_is_not_found() {
    let target = parse_date("5/July/2025").unwrap();
    let rows = vec![
        row(0, CellValue::Number(45841.0)),
        row(1, CellValue::Number(45842.0)),
    ];
    assert_eq!(find_row_index(&target, &rows), None);
}

#[test]
fn test_returns_remote_index_not_scan_position() {
    let target = parse_date("4/July/2025").unwrap();
    // Remote indexes need not start at 0 or be contiguous
    let rows = vec![
        row(14, CellValue::Number(45841.0)),
        row(17, CellValue::Number(45842.0)),
    ];
    assert_eq!(find_row_index(&target, &rows), Some(17));
}

#[test]
fn test_first_of_duplicate_dates_wins() {
    let target = parse_date("4/July/2025").unwrap();
    let rows = vec![
        row(0, CellValue::Number(45841.0)),
        row(1, CellValue::Number(45842.0)),
        row(2, CellValue::Number(45842.0)),
    ];
    assert_eq!(find_row_index(&target, &rows), Some(1));
}

// ═══════════════════════════════════════════════════════════════════════════
// CELL SHAPES: NUMERIC, TEXTUAL, DEGENERATE
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_textual_date_cells_are_reparsed_to_serials() {
    let target = parse_date("4/July/2025").unwrap();
    let rows = vec![
        row(0, CellValue::Text("3/7/2025".to_string())),
        row(1, CellValue::Text("4/7/2025".to_string())),
    ];
    assert_eq!(find_row_index(&target, &rows), Some(1));
}

#[test]
fn test_month_name_text_cell_matches_numeric_query() {
    let target = parse_date("04/07/2025").unwrap();
    let rows = vec![row(3, CellValue::Text("4/July/2025".to_string()))];
    assert_eq!(find_row_index(&target, &rows), Some(3));
}

#[test]
fn test_fractional_serials_truncate() {
    let target = parse_date("4/July/2025").unwrap();
    let rows = vec![row(0, CellValue::Number(45842.9999))];
    assert_eq!(find_row_index(&target, &rows), Some(0));
}

#[test]
fn test_unparseable_and_degenerate_cells_are_skipped() {
    let target = parse_date("4/July/2025").unwrap();
    let rows = vec![
        row(0, CellValue::Text("TOTAL".to_string())),
        row(1, CellValue::Text("  ".to_string())),
        row(2, CellValue::Blank),
        row(3, CellValue::Bool(true)),
        TableRow {
            index: 4,
            values: vec![],
        },
        row(5, CellValue::Number(45842.0)),
    ];
    // Degenerate rows are skipped silently; scanning continues past them
    assert_eq!(find_row_index(&target, &rows), Some(5));
}

#[test]
fn test_input_rows_are_not_mutated() {
    let target = parse_date("4/July/2025").unwrap();
    let rows = vec![row(0, CellValue::Number(45842.0))];
    let before = rows.clone();
    let _ = find_row_index(&target, &rows);
    assert_eq!(rows, before);
}
