//! Table store construction and row/column append tests

mod common;

use common::{editing_at, model_at, model_from, GRID_3X3};
use sheetgrid::grid::{CellPosition, GridError, GridMode, DEFAULT_COLS, DEFAULT_ROWS};
use sheetgrid::{update, GridModel, Msg, Table};

fn strings(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

// ========================================================================
// Construction
// ========================================================================

#[test]
fn test_default_grid_is_ten_by_ten_and_empty() {
    let model = GridModel::default();
    assert_eq!(model.row_count(), DEFAULT_ROWS);
    assert_eq!(model.column_count(), DEFAULT_COLS);
    assert!(model.table().rows().iter().flatten().all(String::is_empty));
    assert_eq!(model.mode(), GridMode::Idle { active: CellPosition::new(0, 0) });
}

#[test]
fn test_ragged_rows_are_rejected() {
    let err = GridModel::from_rows(strings(&[&["a", "b"], &["c"]])).unwrap_err();
    assert_eq!(
        err,
        GridError::MalformedTable {
            row: 1,
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn test_padded_construction_fills_short_rows() {
    let table = Table::from_rows_padded(strings(&[&["a"], &["b", "c", "d"], &[]]));
    assert_eq!(table.column_count(), 3);
    assert_eq!(table.row(0), Some(&["a".to_string(), String::new(), String::new()][..]));
    assert_eq!(table.get(2, 2), Ok(""));
}

#[test]
fn test_out_of_range_access_is_an_error() {
    let mut table = Table::new_empty(2, 2);
    assert!(matches!(table.get(2, 0), Err(GridError::OutOfRange { .. })));
    assert!(matches!(table.set(0, 5, "x"), Err(GridError::OutOfRange { .. })));
    assert_eq!(table, Table::new_empty(2, 2));
}

#[test]
fn test_set_replaces_only_one_cell() {
    let mut table = Table::from_rows(strings(GRID_3X3)).unwrap();
    table.set(1, 2, "new").unwrap();
    assert_eq!(table.get(1, 2), Ok("new"));
    let changed: usize = table
        .rows()
        .iter()
        .zip(strings(GRID_3X3))
        .map(|(a, b)| a.iter().zip(&b).filter(|(x, y)| x != y).count())
        .sum();
    assert_eq!(changed, 1);
}

// ========================================================================
// Append
// ========================================================================

#[test]
fn test_add_row_appends_empty_row() {
    let mut model = model_from(GRID_3X3);
    update(&mut model, Msg::AddRow);
    assert_eq!(model.row_count(), 4);
    assert_eq!(model.view().cell(3, 0), Some(""));
    assert_eq!(model.view().row_headers[3].label, "4");
}

#[test]
fn test_add_column_appends_to_every_row() {
    let mut model = model_from(GRID_3X3);
    update(&mut model, Msg::AddColumn);
    assert_eq!(model.column_count(), 4);
    assert!(model.table().rows().iter().all(|row| row.len() == 4 && row[3].is_empty()));
    assert_eq!(model.view().columns[3].label, "D");
}

#[test]
fn test_append_keeps_selection_editing_and_sort() {
    let mut model = editing_at(GRID_3X3, 1, 2);
    update(&mut model, Msg::RequestSort(0));
    let sort = model.sort_config();

    update(&mut model, Msg::AddRow);
    update(&mut model, Msg::AddColumn);

    assert_eq!(model.mode(), GridMode::Editing { cell: CellPosition::new(1, 2) });
    assert_eq!(model.sort_config(), sort);
}

#[test]
fn test_append_reports_table_snapshot() {
    let mut model = model_at(GRID_3X3, 0, 0);
    let cmd = update(&mut model, Msg::AddRow).unwrap();
    let rows = cmd.table_snapshot().unwrap();
    assert_eq!(rows.len(), 4);
    assert!(cmd.needs_redraw());
    assert_eq!(cmd.focus_target(), None);
}

#[test]
fn test_add_column_on_rowless_table_sets_width_for_later_rows() {
    let mut model = GridModel::blank(0, 0);
    update(&mut model, Msg::AddColumn);
    update(&mut model, Msg::AddColumn);
    assert_eq!(model.row_count(), 0);
    assert_eq!(model.column_count(), 2);

    update(&mut model, Msg::AddRow);
    assert_eq!(model.table().snapshot(), vec![vec![String::new(), String::new()]]);

    // The grid is now navigable
    update(&mut model, Msg::click(0, 1));
    assert_eq!(model.active(), CellPosition::new(0, 1));
}

#[test]
fn test_column_labels_past_z() {
    let mut model = GridModel::blank(1, 26);
    update(&mut model, Msg::AddColumn);
    update(&mut model, Msg::AddColumn);
    let labels: Vec<String> = model.view().columns.iter().map(|c| c.label.clone()).collect();
    assert_eq!(&labels[24..], &["Y", "Z", "AA", "AB"]);
}

// ========================================================================
// Editing
// ========================================================================

#[test]
fn test_text_input_writes_editing_cell() {
    let mut model = editing_at(GRID_3X3, 2, 0);
    let cmd = update(&mut model, Msg::text_input("hello")).unwrap();
    assert_eq!(model.table().get(2, 0), Ok("hello"));
    assert_eq!(cmd.table_snapshot().map(|rows| rows[2][0].as_str()), Some("hello"));
}

#[test]
fn test_text_input_while_idle_is_ignored() {
    let mut model = model_at(GRID_3X3, 0, 0);
    assert!(update(&mut model, Msg::text_input("nope")).is_none());
    assert_eq!(model.table().get(0, 0), Ok("a1"));
}

#[test]
fn test_unchanged_text_input_is_noop() {
    let mut model = editing_at(GRID_3X3, 0, 0);
    assert!(update(&mut model, Msg::text_input("a1")).is_none());
}

#[test]
fn test_escape_keeps_typed_value() {
    let mut model = editing_at(GRID_3X3, 0, 0);
    update(&mut model, Msg::text_input("typed"));
    update(&mut model, Msg::key("Escape").unwrap());
    assert!(!model.is_editing());
    assert_eq!(model.table().get(0, 0), Ok("typed"));
}
