//! Pull-based render data
//!
//! Hosts call [`GridModel::view`] after dispatching each message and draw
//! whatever it returns. The view borrows from the model; nothing is copied
//! except the header labels.

use serde::Serialize;

use super::header::{column_label, row_label};
use super::model::{CellPosition, GridModel, SortIndicator};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnHeader {
    pub label: String,
    pub sort: SortIndicator,
    /// The active cell is in this column
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowHeader {
    pub label: String,
    /// The active cell is in this row
    pub active: bool,
}

/// Everything a host needs to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct GridView<'a> {
    pub columns: Vec<ColumnHeader>,
    pub row_headers: Vec<RowHeader>,
    /// Cell values in display order
    pub rows: Vec<&'a [String]>,
    pub active: Option<CellPosition>,
    pub editing: Option<CellPosition>,
}

impl<'a> GridView<'a> {
    pub fn new(model: &'a GridModel) -> Self {
        let table = model.table();
        let sort = model.sort_config();
        let has_cells = !table.is_empty();
        let active = has_cells.then(|| model.active());

        let columns = (0..table.column_count())
            .map(|col| ColumnHeader {
                label: column_label(col),
                sort: sort.indicator(col),
                active: active.is_some_and(|a| a.col == col),
            })
            .collect();

        let rows: Vec<&[String]> = model
            .display_order()
            .iter()
            .filter_map(|&row| table.row(row))
            .collect();

        let row_headers = (0..rows.len())
            .map(|row| RowHeader {
                label: row_label(row),
                active: active.is_some_and(|a| a.row == row),
            })
            .collect();

        Self {
            columns,
            row_headers,
            rows,
            active,
            editing: model.editing(),
        }
    }

    pub fn is_active(&self, row: usize, col: usize) -> bool {
        self.active == Some(CellPosition::new(row, col))
    }

    pub fn is_editing(&self, row: usize, col: usize) -> bool {
        self.editing == Some(CellPosition::new(row, col))
    }

    /// Cell value at a display position
    pub fn cell(&self, row: usize, col: usize) -> Option<&'a str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .map(String::as_str)
    }
}
