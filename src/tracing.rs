//! Tracing setup and state snapshots for diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=selection=debug` - selection diffs only (debug builds)
//! - `RUST_LOG=sheetgrid::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/sheetgrid/logs/sheetgrid.log` with daily rotation.
//! File logging uses debug level regardless of RUST_LOG.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::grid::{CellPosition, GridModel, SortDirection};

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so stdout stays free for grid output.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "sheetgrid.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of selection, edit and sort state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub active: CellPosition,
    pub editing: Option<CellPosition>,
    pub sort_key: Option<usize>,
    pub sort_direction: SortDirection,
    pub rows: usize,
    pub cols: usize,
}

impl SelectionSnapshot {
    pub fn from_model(model: &GridModel) -> Self {
        let sort = model.sort_config();
        Self {
            active: model.active(),
            editing: model.editing(),
            sort_key: sort.key,
            sort_direction: sort.direction,
            rows: model.row_count(),
            cols: model.column_count(),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.active != other.active {
            changes.push(format!(
                "active: ({},{}) → ({},{})",
                self.active.row, self.active.col, other.active.row, other.active.col
            ));
        }
        if self.editing != other.editing {
            changes.push(match other.editing {
                Some(cell) => format!("editing ({},{})", cell.row, cell.col),
                None => "editing ended".to_string(),
            });
        }
        if self.sort_key != other.sort_key || self.sort_direction != other.sort_direction {
            changes.push(format!(
                "sort: {:?} {:?} → {:?} {:?}",
                self.sort_key, self.sort_direction, other.sort_key, other.sort_direction
            ));
        }
        if self.rows != other.rows || self.cols != other.cols {
            changes.push(format!(
                "size: {}x{} → {}x{}",
                self.rows, self.cols, other.rows, other.cols
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
