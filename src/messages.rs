//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Row and column
//! coordinates are display positions.

use crate::keymap::{parse_key_string, KeymapError, Keystroke};

/// Input events delivered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Key pressed while the grid has focus
    Key(Keystroke),
    /// Single click on a cell
    Click { row: usize, col: usize },
    /// Double click on a cell
    DoubleClick { row: usize, col: usize },
    /// New contents of the editing cell's text input
    TextInput(String),
    /// A cell's text input lost focus
    Blur { row: usize, col: usize },
    /// "Add row" action
    AddRow,
    /// "Add column" action
    AddColumn,
    /// Click on a column header
    RequestSort(usize),
}

// Convenience constructors for common messages
impl Msg {
    /// Parse a host key identifier such as `ArrowDown` or `Shift+Tab`
    pub fn key(key: &str) -> Result<Self, KeymapError> {
        parse_key_string(key).map(Msg::Key)
    }

    pub fn click(row: usize, col: usize) -> Self {
        Msg::Click { row, col }
    }

    pub fn double_click(row: usize, col: usize) -> Self {
        Msg::DoubleClick { row, col }
    }

    pub fn blur(row: usize, col: usize) -> Self {
        Msg::Blur { row, col }
    }

    pub fn text_input(value: impl Into<String>) -> Self {
        Msg::TextInput(value.into())
    }
}
