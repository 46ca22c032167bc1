//! Command-line argument parsing for the grid host
//!
//! Supports:
//! - Seeding the grid from a CSV file, the sample table, or a blank size
//! - Replaying an event script from a file or stdin
//! - Text or JSON output of the final view

use clap::Parser;
use std::path::PathBuf;

use crate::config::GridConfig;

/// Replay input events against a spreadsheet-style grid
#[derive(Parser, Debug)]
#[command(name = "sheetgrid", version, about = "Replay input events against a spreadsheet-style grid")]
pub struct CliArgs {
    /// CSV file with the initial table
    #[arg(long, value_name = "FILE", conflicts_with = "sample")]
    pub data: Option<PathBuf>,

    /// Start from the built-in 5x4 sample table
    #[arg(long)]
    pub sample: bool,

    /// Rows in a blank grid (overrides config)
    #[arg(long, value_name = "N")]
    pub rows: Option<usize>,

    /// Columns in a blank grid (overrides config)
    #[arg(long, value_name = "N")]
    pub cols: Option<usize>,

    /// Event script to replay (reads stdin when omitted)
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Print the final view as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Print each changed table as CSV while replaying
    #[arg(long)]
    pub emit_changes: bool,

    /// Write the loaded settings (defaults filled in) to the user config file
    #[arg(long)]
    pub write_config: bool,
}

/// Where the initial table comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialData {
    Csv(PathBuf),
    Sample,
    Blank { rows: usize, cols: usize },
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    pub data: InitialData,
    pub script: Option<PathBuf>,
    pub json: bool,
    pub emit_changes: bool,
    pub write_config: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self, config: &GridConfig) -> StartupConfig {
        let data = match (self.data, self.sample) {
            (Some(path), _) => InitialData::Csv(path),
            (None, true) => InitialData::Sample,
            (None, false) => InitialData::Blank {
                rows: self.rows.unwrap_or(config.default_rows),
                cols: self.cols.unwrap_or(config.default_cols),
            },
        };

        StartupConfig {
            data,
            script: self.script,
            json: self.json,
            emit_changes: self.emit_changes,
            write_config: self.write_config,
        }
    }
}

/// The sample table: a header row plus four employees
pub fn sample_rows() -> Vec<Vec<String>> {
    [
        ["Name", "Title", "Company", "Salary"],
        ["Alice", "Developer", "Tech Corp", "120000"],
        ["Bob", "Designer", "Creative Inc", "95000"],
        ["Charlie", "Manager", "Biz Solutions", "150000"],
        ["Diana", "Engineer", "Future Systems", "135000"],
    ]
    .iter()
    .map(|row| row.iter().map(|cell| cell.to_string()).collect())
    .collect()
}
