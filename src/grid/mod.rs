//! Spreadsheet-style grid
//!
//! Provides the state of an editable table of strings with:
//! - Active cell selection and single-cell edit mode
//! - Keyboard navigation (arrow keys, Tab/Shift+Tab, Enter, Escape, Home/End)
//! - Row/column append
//! - Display-only column sorting
//!
//! # Architecture
//!
//! ```text
//! GridModel
//! ├── Table        (rows in insertion order)
//! ├── GridMode     (Idle { active } | Editing { cell })
//! ├── SortConfig   (key column + direction)
//! └── display order (derived from Table + SortConfig)
//! ```
//!
//! Active and editing positions are display positions. After a sort, display
//! row 0 is whichever stored row sorts first.

mod error;
pub mod header;
mod model;
pub mod navigation;
pub mod render;
pub mod sort;
mod view;

pub use error::GridError;
pub use header::{column_label, row_label};
pub use model::{
    CellPosition, GridMode, GridModel, SortConfig, SortDirection, SortIndicator, Table,
    DEFAULT_COLS, DEFAULT_ROWS,
};
pub use navigation::{next_state, Direction, GridEvent};
pub use render::{render_text, RenderOptions};
pub use sort::display_order;
pub use view::{ColumnHeader, GridView, RowHeader};
