//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use sheetgrid::cli::sample_rows;
use sheetgrid::grid::{CellPosition, GridMode};
use sheetgrid::{update, Cmd, GridModel, Msg};

/// Build a grid from string literals; panics on ragged input
pub fn model_from(data: &[&[&str]]) -> GridModel {
    GridModel::from_rows(
        data.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
    )
    .expect("test table must be rectangular")
}

/// The 5x4 sample table (header row plus four employees)
pub fn sample_model() -> GridModel {
    GridModel::from_rows(sample_rows()).expect("sample table is rectangular")
}

/// Grid with the active cell placed at (row, col)
pub fn model_at(data: &[&[&str]], row: usize, col: usize) -> GridModel {
    let mut model = model_from(data);
    model
        .set_mode(GridMode::Idle {
            active: CellPosition::new(row, col),
        })
        .expect("active cell inside table");
    model
}

/// Grid editing the cell at (row, col)
pub fn editing_at(data: &[&[&str]], row: usize, col: usize) -> GridModel {
    let mut model = model_from(data);
    model
        .set_mode(GridMode::Editing {
            cell: CellPosition::new(row, col),
        })
        .expect("editing cell inside table");
    model
}

/// Send a key by its host identifier
pub fn press(model: &mut GridModel, key: &str) -> Option<Cmd> {
    let msg = Msg::key(key).expect("valid key string");
    update(model, msg)
}

/// Send several keys in order
pub fn press_all(model: &mut GridModel, keys: &[&str]) {
    for key in keys {
        press(model, key);
    }
}

/// Values of one column, top to bottom in display order
pub fn display_column(model: &GridModel, col: usize) -> Vec<String> {
    model
        .view()
        .rows
        .iter()
        .map(|row| row[col].clone())
        .collect()
}

/// A 3x3 grid with distinct values
pub const GRID_3X3: &[&[&str]] = &[&["a1", "b1", "c1"], &["a2", "b2", "c2"], &["a3", "b3", "c3"]];
