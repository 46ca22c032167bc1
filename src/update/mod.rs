//! Update function for the Elm-style architecture
//!
//! All state transformations flow through [`update`].

mod grid;

use crate::commands::Cmd;
use crate::grid::GridModel;
use crate::messages::Msg;

#[cfg(debug_assertions)]
use crate::tracing::SelectionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use grid::apply_event;

/// Main update function - dispatches to the grid handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut GridModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut GridModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Key(stroke) => grid::handle_key(model, &stroke),
        Msg::Click { row, col } => grid::click(model, row, col),
        Msg::DoubleClick { row, col } => grid::double_click(model, row, col),
        Msg::Blur { row, col } => grid::blur(model, row, col),
        Msg::TextInput(value) => grid::text_input(model, value),
        Msg::AddRow => grid::add_row(model),
        Msg::AddColumn => grid::add_column(model),
        Msg::RequestSort(col) => grid::request_sort(model, col),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after selection state and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut GridModel, msg: Msg) -> Option<Cmd> {
    let msg_name = format!("{:?}", msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = SelectionSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = SelectionSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "selection", %diff, "state changed");
    }

    model.assert_invariants();
    result
}
