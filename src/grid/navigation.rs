//! Cell navigation logic
//!
//! Maps a grid event and the current selection/edit state to the next state.
//! Arrow keys clamp at the table edges; only Tab wraps from one row to the
//! next. Nothing here touches the table store.

use super::model::{CellPosition, GridMode};

/// Direction for arrow-key movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Input understood by the selection/edit state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    /// Arrow key
    Move(Direction),
    /// Tab, or Shift+Tab when `backward`
    Tab { backward: bool },
    Enter,
    Escape,
    /// Printable character typed while the grid has focus
    Char(char),
    Click(CellPosition),
    DoubleClick(CellPosition),
    /// The given cell's text input lost focus
    Blur(CellPosition),
    /// First column of the active row (Home)
    RowStart,
    /// Last column of the active row (End)
    RowEnd,
    /// Top-left cell (Ctrl+Home)
    GridStart,
    /// Bottom-right cell (Ctrl+End)
    GridEnd,
}

/// Compute the state that follows `event`
///
/// On an empty table (no rows or no columns) every event is a no-op.
pub fn next_state(mode: GridMode, event: GridEvent, rows: usize, cols: usize) -> GridMode {
    if rows == 0 || cols == 0 {
        return mode;
    }

    let active = clamp(mode.active(), rows, cols);
    let idle = |active| GridMode::Idle { active };

    match (mode, event) {
        (GridMode::Idle { .. }, GridEvent::Move(direction)) => {
            let (delta_row, delta_col) = direction.delta();
            idle(offset(active, delta_row, delta_col, rows, cols))
        }
        // The text input consumes arrows while editing
        (GridMode::Editing { .. }, GridEvent::Move(_)) => mode,

        (_, GridEvent::Tab { backward: false }) => idle(next_cell(active, rows, cols)),
        (_, GridEvent::Tab { backward: true }) => idle(prev_cell(active, cols)),

        (GridMode::Idle { .. }, GridEvent::Enter) => GridMode::Editing { cell: active },
        (GridMode::Editing { .. }, GridEvent::Enter) => idle(offset(active, 1, 0, rows, cols)),

        (GridMode::Idle { .. }, GridEvent::Escape) => mode,
        (GridMode::Editing { .. }, GridEvent::Escape) => idle(active),

        (GridMode::Idle { .. }, GridEvent::Char(_)) => GridMode::Editing { cell: active },
        (GridMode::Editing { .. }, GridEvent::Char(_)) => mode,

        (_, GridEvent::Click(cell)) if !cell.is_within(rows, cols) => mode,
        (GridMode::Editing { cell: editing }, GridEvent::Click(cell)) if editing == cell => mode,
        (_, GridEvent::Click(cell)) => idle(cell),

        (_, GridEvent::DoubleClick(cell)) if cell.is_within(rows, cols) => {
            GridMode::Editing { cell }
        }
        (_, GridEvent::DoubleClick(_)) => mode,

        (GridMode::Editing { cell: editing }, GridEvent::Blur(cell)) if editing == cell => {
            idle(active)
        }
        (_, GridEvent::Blur(_)) => mode,

        (GridMode::Idle { .. }, GridEvent::RowStart) => idle(CellPosition::new(active.row, 0)),
        (GridMode::Idle { .. }, GridEvent::RowEnd) => idle(CellPosition::new(active.row, cols - 1)),
        (GridMode::Idle { .. }, GridEvent::GridStart) => idle(CellPosition::new(0, 0)),
        (GridMode::Idle { .. }, GridEvent::GridEnd) => idle(CellPosition::new(rows - 1, cols - 1)),
        (
            GridMode::Editing { .. },
            GridEvent::RowStart | GridEvent::RowEnd | GridEvent::GridStart | GridEvent::GridEnd,
        ) => mode,
    }
}

/// Move by a delta, clamping each axis to the table bounds
fn offset(
    pos: CellPosition,
    delta_row: isize,
    delta_col: isize,
    rows: usize,
    cols: usize,
) -> CellPosition {
    let row = pos
        .row
        .saturating_add_signed(delta_row)
        .min(rows.saturating_sub(1));
    let col = pos
        .col
        .saturating_add_signed(delta_col)
        .min(cols.saturating_sub(1));
    CellPosition::new(row, col)
}

fn clamp(pos: CellPosition, rows: usize, cols: usize) -> CellPosition {
    offset(pos, 0, 0, rows, cols)
}

/// Tab: next column, wrapping to the start of the next row; the last cell
/// stays put
fn next_cell(pos: CellPosition, rows: usize, cols: usize) -> CellPosition {
    if pos.col + 1 < cols {
        CellPosition::new(pos.row, pos.col + 1)
    } else if pos.row + 1 < rows {
        CellPosition::new(pos.row + 1, 0)
    } else {
        pos
    }
}

/// Shift+Tab: previous column, wrapping to the end of the previous row; the
/// first cell stays put
fn prev_cell(pos: CellPosition, cols: usize) -> CellPosition {
    if pos.col > 0 {
        CellPosition::new(pos.row, pos.col - 1)
    } else if pos.row > 0 {
        CellPosition::new(pos.row - 1, cols - 1)
    } else {
        pos
    }
}
