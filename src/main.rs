//! Sheetgrid host: replays an event script against a grid and prints the
//! resulting view.

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use sheetgrid::cli::{sample_rows, CliArgs, InitialData, StartupConfig};
use sheetgrid::csv_io::{detect_delimiter, parse_csv, write_csv, Delimiter};
use sheetgrid::grid::render_text;
use sheetgrid::script::parse_script;
use sheetgrid::{update, Cmd, GridConfig, GridModel};

fn main() -> Result<()> {
    sheetgrid::tracing::init();

    let config = GridConfig::load();
    let startup = CliArgs::parse().into_config(&config);

    if startup.write_config {
        config
            .save()
            .map_err(anyhow::Error::msg)
            .context("Failed to write config")?;
    }

    let mut model = initial_model(&startup.data)?;
    tracing::info!(
        rows = model.row_count(),
        cols = model.column_count(),
        "grid ready"
    );

    let script = read_script(&startup)?;
    let messages = parse_script(&script).context("Failed to parse event script")?;

    for msg in messages {
        let Some(cmd) = update(&mut model, msg) else {
            continue;
        };
        run_command(&cmd, &startup)?;
    }

    if startup.json {
        let json = serde_json::to_string_pretty(&model.view())
            .context("Failed to serialize grid view")?;
        println!("{}", json);
    } else {
        print!("{}", render_text(&model.view(), &config.render_options()));
    }

    Ok(())
}

fn initial_model(data: &InitialData) -> Result<GridModel> {
    match data {
        InitialData::Csv(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let delimiter = path
                .extension()
                .and_then(|e| e.to_str())
                .map(Delimiter::from_extension)
                .unwrap_or_else(|| detect_delimiter(&content));
            let table = parse_csv(&content, delimiter)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            Ok(GridModel::new(table))
        }
        InitialData::Sample => {
            GridModel::from_rows(sample_rows()).context("Sample table is not rectangular")
        }
        InitialData::Blank { rows, cols } => Ok(GridModel::blank(*rows, *cols)),
    }
}

fn read_script(startup: &StartupConfig) -> Result<String> {
    match &startup.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display())),
        None => {
            let mut script = String::new();
            std::io::stdin()
                .read_to_string(&mut script)
                .context("Failed to read script from stdin")?;
            Ok(script)
        }
    }
}

/// Perform the side effects a command asks for
///
/// There is no real input focus in a replay, so focus requests are logged.
fn run_command(cmd: &Cmd, startup: &StartupConfig) -> Result<()> {
    match cmd {
        Cmd::None | Cmd::Redraw => {}
        Cmd::FocusCell(cell) => {
            tracing::debug!(row = cell.row, col = cell.col, "focus cell");
        }
        Cmd::TableChanged(rows) => {
            if startup.emit_changes {
                let csv = write_csv(rows, Delimiter::Comma).context("Failed to write table")?;
                println!("{}", csv);
            }
        }
        Cmd::Batch(cmds) => {
            for cmd in cmds {
                run_command(cmd, startup)?;
            }
        }
    }
    Ok(())
}
