//! Fixed key bindings for grid navigation

use super::types::{KeyCode, Keystroke};
use crate::grid::{Direction, GridEvent};

/// Map a keystroke to the grid event it triggers
///
/// Returns `None` for keys the grid does not handle; those are no-ops.
pub fn event_for_keystroke(stroke: &Keystroke) -> Option<GridEvent> {
    let mods = stroke.mods;

    match stroke.key {
        KeyCode::Up => Some(GridEvent::Move(Direction::Up)),
        KeyCode::Down => Some(GridEvent::Move(Direction::Down)),
        KeyCode::Left => Some(GridEvent::Move(Direction::Left)),
        KeyCode::Right => Some(GridEvent::Move(Direction::Right)),
        KeyCode::Tab => Some(GridEvent::Tab {
            backward: mods.shift(),
        }),
        KeyCode::Enter => Some(GridEvent::Enter),
        KeyCode::Escape => Some(GridEvent::Escape),
        KeyCode::Home if mods.has_command() => Some(GridEvent::GridStart),
        KeyCode::End if mods.has_command() => Some(GridEvent::GridEnd),
        KeyCode::Home => Some(GridEvent::RowStart),
        KeyCode::End => Some(GridEvent::RowEnd),
        KeyCode::Char(c) if !mods.has_command() && !c.is_control() => Some(GridEvent::Char(c)),
        _ => None,
    }
}
