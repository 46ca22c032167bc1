//! Grid data model types
//!
//! The table store keeps rows in insertion order. Everything the user sees
//! (selection, editing, row numbers) is expressed in display positions, which
//! only coincide with storage positions while no sort is applied.

use serde::Serialize;

use super::error::GridError;
use super::sort::display_order;
use super::view::GridView;

/// Position of a cell in the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this position lies inside a `rows` x `cols` table
    pub fn is_within(self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }
}

/// Rectangular store of string cells
///
/// The column count is tracked separately from the rows so that a table with
/// no rows can still grow wider; later `append_row` calls use that width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
    column_count: usize,
}

impl Table {
    /// Create an all-empty table of the given size
    pub fn new_empty(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![vec![String::new(); cols]; rows],
            column_count: cols,
        }
    }

    /// Create a table from fully populated rows
    ///
    /// Every row must have the same length as the first one.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self, GridError> {
        let column_count = rows.first().map_or(0, Vec::len);

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != column_count)
        {
            return Err(GridError::MalformedTable {
                row,
                expected: column_count,
                found,
            });
        }

        Ok(Self { rows, column_count })
    }

    /// Create a table from possibly ragged rows, padding short rows with
    /// empty cells up to the widest row
    pub fn from_rows_padded(mut rows: Vec<Vec<String>>) -> Self {
        let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(column_count, String::new());
        }
        Self { rows, column_count }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.column_count == 0
    }

    /// All rows in storage order
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Row at a storage index
    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Get cell value at a storage position
    pub fn get(&self, row: usize, col: usize) -> Result<&str, GridError> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .map(String::as_str)
            .ok_or_else(|| self.out_of_range(row, col))
    }

    /// Replace the value of a single cell; no other cell is touched
    pub fn set(&mut self, row: usize, col: usize, value: impl Into<String>) -> Result<(), GridError> {
        let err = self.out_of_range(row, col);
        let cell = self
            .rows
            .get_mut(row)
            .and_then(|cells| cells.get_mut(col))
            .ok_or(err)?;
        *cell = value.into();
        Ok(())
    }

    /// Append a row of empty cells at the end
    pub fn append_row(&mut self) {
        self.rows.push(vec![String::new(); self.column_count]);
    }

    /// Append an empty cell to the end of every row
    pub fn append_column(&mut self) {
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.column_count += 1;
    }

    /// Owned copy of the cells in storage order, handed to hosts on change
    pub fn snapshot(&self) -> Vec<Vec<String>> {
        self.rows.clone()
    }

    fn out_of_range(&self, row: usize, col: usize) -> GridError {
        GridError::OutOfRange {
            row,
            col,
            rows: self.row_count(),
            cols: self.column_count,
        }
    }
}

/// Selection and edit state
///
/// While editing, the active cell and the editing cell are the same cell,
/// so a single position is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GridMode {
    Idle { active: CellPosition },
    Editing { cell: CellPosition },
}

impl Default for GridMode {
    fn default() -> Self {
        GridMode::Idle {
            active: CellPosition::default(),
        }
    }
}

impl GridMode {
    /// The cell that has keyboard focus
    pub fn active(self) -> CellPosition {
        match self {
            GridMode::Idle { active } => active,
            GridMode::Editing { cell } => cell,
        }
    }

    /// The cell open for text input, if any
    pub fn editing(self) -> Option<CellPosition> {
        match self {
            GridMode::Idle { .. } => None,
            GridMode::Editing { cell } => Some(cell),
        }
    }

    pub fn is_editing(self) -> bool {
        matches!(self, GridMode::Editing { .. })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Per-column sort marker for header rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortIndicator {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn symbol(self) -> &'static str {
        match self {
            SortIndicator::None => "",
            SortIndicator::Ascending => "▲",
            SortIndicator::Descending => "▼",
        }
    }
}

/// Which column the display is sorted by, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortConfig {
    pub key: Option<usize>,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Header click: the same column flips ascending to descending, anything
    /// else (another column, or the same column while descending) sorts
    /// ascending by the requested column
    pub fn request_sort(&mut self, key: usize) {
        self.direction = if self.key == Some(key) && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.key = Some(key);
    }

    pub fn indicator(&self, col: usize) -> SortIndicator {
        match (self.key, self.direction) {
            (Some(key), SortDirection::Ascending) if key == col => SortIndicator::Ascending,
            (Some(key), SortDirection::Descending) if key == col => SortIndicator::Descending,
            _ => SortIndicator::None,
        }
    }
}

/// Owned state of one grid: the table plus its UI state
///
/// All mutation goes through methods on this type so the cached display order
/// never goes stale.
#[derive(Debug, Clone)]
pub struct GridModel {
    table: Table,
    mode: GridMode,
    sort: SortConfig,
    /// Display position -> storage row
    display_order: Vec<usize>,
}

impl Default for GridModel {
    fn default() -> Self {
        Self::blank(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

/// Size of a blank grid when the host supplies neither data nor dimensions
pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 10;

impl GridModel {
    pub fn new(table: Table) -> Self {
        let display_order = (0..table.row_count()).collect();
        Self {
            table,
            mode: GridMode::default(),
            sort: SortConfig::default(),
            display_order,
        }
    }

    /// An all-empty grid of the given size
    pub fn blank(rows: usize, cols: usize) -> Self {
        Self::new(Table::new_empty(rows, cols))
    }

    /// A grid over fully populated rows; ragged input is rejected
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self, GridError> {
        Table::from_rows(rows).map(Self::new)
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn mode(&self) -> GridMode {
        self.mode
    }

    pub fn sort_config(&self) -> SortConfig {
        self.sort
    }

    pub fn active(&self) -> CellPosition {
        self.mode.active()
    }

    pub fn editing(&self) -> Option<CellPosition> {
        self.mode.editing()
    }

    pub fn is_editing(&self) -> bool {
        self.mode.is_editing()
    }

    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    pub fn column_count(&self) -> usize {
        self.table.column_count()
    }

    /// Storage row index for each display position
    pub fn display_order(&self) -> &[usize] {
        &self.display_order
    }

    /// Storage row shown at a display position
    pub fn storage_row(&self, display_row: usize) -> Option<usize> {
        self.display_order.get(display_row).copied()
    }

    /// Replace the selection/edit state
    ///
    /// Positions outside the table are rejected and leave the state untouched.
    pub fn set_mode(&mut self, mode: GridMode) -> Result<(), GridError> {
        let cell = mode.active();
        if !cell.is_within(self.row_count(), self.column_count()) {
            return Err(GridError::OutOfRange {
                row: cell.row,
                col: cell.col,
                rows: self.row_count(),
                cols: self.column_count(),
            });
        }
        self.mode = mode;
        Ok(())
    }

    /// Cell value at a display position
    pub fn cell_at_display(&self, row: usize, col: usize) -> Result<&str, GridError> {
        let storage_row = self.storage_row(row).unwrap_or(row);
        self.table.get(storage_row, col).map_err(|_| self.display_out_of_range(row, col))
    }

    /// Write a cell addressed by display position
    ///
    /// The display order is recomputed afterwards, so with an active sort the
    /// edited row may move to a different display position. If the active
    /// cell was on that row it moves with it, keeping an edit session on one
    /// stored row.
    pub fn set_display_cell(
        &mut self,
        row: usize,
        col: usize,
        value: impl Into<String>,
    ) -> Result<(), GridError> {
        let storage_row = self
            .storage_row(row)
            .ok_or_else(|| self.display_out_of_range(row, col))?;
        self.table.set(storage_row, col, value)?;
        self.refresh_display_order();
        self.follow_storage_row(row, storage_row);
        Ok(())
    }

    /// Append an empty row; selection, editing and sort state are untouched
    pub fn add_row(&mut self) {
        self.table.append_row();
        self.refresh_display_order();
    }

    /// Append an empty column; selection, editing and sort state are untouched
    pub fn add_column(&mut self) {
        self.table.append_column();
        self.refresh_display_order();
    }

    /// Apply the header-click toggle for `col`
    ///
    /// Returns false (and changes nothing) if the column does not exist.
    pub fn request_sort(&mut self, col: usize) -> bool {
        if col >= self.column_count() {
            return false;
        }
        self.sort.request_sort(col);
        self.refresh_display_order();
        true
    }

    /// Current render data
    pub fn view(&self) -> GridView<'_> {
        GridView::new(self)
    }

    /// Check model invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        let cols = self.column_count();
        debug_assert!(
            self.table.rows().iter().all(|row| row.len() == cols),
            "Every row must have {} cells",
            cols
        );

        let mut order = self.display_order.clone();
        order.sort_unstable();
        debug_assert!(
            order.iter().copied().eq(0..self.row_count()),
            "Display order must be a permutation of the stored rows"
        );

        if !self.table.is_empty() {
            debug_assert!(
                self.active().is_within(self.row_count(), cols),
                "Active cell {:?} outside {}x{} table",
                self.active(),
                self.row_count(),
                cols
            );
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}

    fn refresh_display_order(&mut self) {
        self.display_order = display_order(&self.table, &self.sort);
    }

    /// Re-point the active cell at `storage_row` after it left `old_display`
    fn follow_storage_row(&mut self, old_display: usize, storage_row: usize) {
        if self.mode.active().row != old_display {
            return;
        }
        let Some(new_display) = self.display_order.iter().position(|&r| r == storage_row) else {
            return;
        };
        self.mode = match self.mode {
            GridMode::Idle { active } => GridMode::Idle {
                active: CellPosition::new(new_display, active.col),
            },
            GridMode::Editing { cell } => GridMode::Editing {
                cell: CellPosition::new(new_display, cell.col),
            },
        };
    }

    fn display_out_of_range(&self, row: usize, col: usize) -> GridError {
        GridError::OutOfRange {
            row,
            col,
            rows: self.row_count(),
            cols: self.column_count(),
        }
    }
}
