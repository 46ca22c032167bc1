//! Grid update functions
//!
//! Each handler mutates the model and returns the commands the host should
//! run, or `None` when the message changed nothing.

use crate::commands::Cmd;
use crate::grid::{next_state, CellPosition, GridEvent, GridModel};
use crate::keymap::{event_for_keystroke, Keystroke};

/// Handle a key press
pub fn handle_key(model: &mut GridModel, stroke: &Keystroke) -> Option<Cmd> {
    let Some(event) = event_for_keystroke(stroke) else {
        tracing::trace!(key = %stroke, "unhandled key");
        return None;
    };
    apply_event(model, event)
}

pub fn click(model: &mut GridModel, row: usize, col: usize) -> Option<Cmd> {
    apply_event(model, GridEvent::Click(CellPosition::new(row, col)))
}

pub fn double_click(model: &mut GridModel, row: usize, col: usize) -> Option<Cmd> {
    apply_event(model, GridEvent::DoubleClick(CellPosition::new(row, col)))
}

pub fn blur(model: &mut GridModel, row: usize, col: usize) -> Option<Cmd> {
    apply_event(model, GridEvent::Blur(CellPosition::new(row, col)))
}

/// Run an event through the navigation state machine
///
/// Any change moves focus to the (possibly unchanged) active cell, since
/// entering or leaving edit mode swaps which input should hold focus.
pub fn apply_event(model: &mut GridModel, event: GridEvent) -> Option<Cmd> {
    let before = model.mode();
    let after = next_state(before, event, model.row_count(), model.column_count());

    if after == before {
        return None;
    }

    if let Err(err) = model.set_mode(after) {
        tracing::error!(%err, ?event, "navigation left the table bounds");
        return None;
    }

    tracing::debug!(?event, ?before, ?after, "selection changed");
    Some(Cmd::batch(vec![Cmd::Redraw, Cmd::FocusCell(after.active())]))
}

/// Replace the value of the editing cell
///
/// Ignored unless a cell is being edited; the text input is read-only
/// otherwise. Under a sort the edited row can move, and focus follows it.
pub fn text_input(model: &mut GridModel, value: String) -> Option<Cmd> {
    let Some(cell) = model.editing() else {
        tracing::debug!("text input without an editing cell ignored");
        return None;
    };

    if model.cell_at_display(cell.row, cell.col).ok() == Some(value.as_str()) {
        return None;
    }

    if let Err(err) = model.set_display_cell(cell.row, cell.col, value) {
        tracing::error!(%err, "editing cell outside the table");
        return None;
    }

    let active = model.active();
    if active == cell {
        return Some(table_changed(model));
    }

    tracing::debug!(from = ?cell, to = ?active, "edited row moved");
    Some(Cmd::batch(vec![
        Cmd::TableChanged(model.table().snapshot()),
        Cmd::Redraw,
        Cmd::FocusCell(active),
    ]))
}

pub fn add_row(model: &mut GridModel) -> Option<Cmd> {
    model.add_row();
    tracing::debug!(rows = model.row_count(), "row added");
    Some(table_changed(model))
}

pub fn add_column(model: &mut GridModel) -> Option<Cmd> {
    model.add_column();
    tracing::debug!(cols = model.column_count(), "column added");
    Some(table_changed(model))
}

/// Header click
pub fn request_sort(model: &mut GridModel, col: usize) -> Option<Cmd> {
    if !model.request_sort(col) {
        tracing::warn!(col, cols = model.column_count(), "sort requested on missing column");
        return None;
    }
    let sort = model.sort_config();
    tracing::debug!(key = ?sort.key, direction = ?sort.direction, "sort changed");
    Some(Cmd::Redraw)
}

fn table_changed(model: &GridModel) -> Cmd {
    Cmd::batch(vec![Cmd::TableChanged(model.table().snapshot()), Cmd::Redraw])
}
