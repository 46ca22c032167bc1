//! Sheetgrid - Elm-style spreadsheet grid state
//!
//! This crate provides the state machine behind an editable, spreadsheet-style
//! grid of strings: active cell selection, keyboard navigation, single-cell
//! editing, row/column append and display-only sorting. Rendering is left to
//! the host, which pulls a [`grid::GridView`] after each update.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod csv_io;
pub mod grid;
pub mod keymap;
pub mod messages;
pub mod script;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::GridConfig;
pub use grid::{CellPosition, GridError, GridModel, GridView, Table};
pub use messages::Msg;
pub use update::update;
