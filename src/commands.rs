//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host should perform after an update.

use crate::grid::CellPosition;

/// Side effects requested by `update`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// State changed; the host should pull a fresh view and redraw
    Redraw,
    /// Move input focus to the text input of this display cell
    FocusCell(CellPosition),
    /// Table contents changed; storage-order snapshot for the host to keep
    TableChanged(Vec<Vec<String>>),
    /// Execute multiple commands, in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands, dropping `None`s and unwrapping a single
    /// remaining command
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Cmd::None)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw | Cmd::TableChanged(_) => true,
            Cmd::FocusCell(_) => false,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::needs_redraw),
        }
    }

    /// Last focus request in this command, if any
    pub fn focus_target(&self) -> Option<CellPosition> {
        match self {
            Cmd::FocusCell(pos) => Some(*pos),
            Cmd::Batch(cmds) => cmds.iter().rev().find_map(Cmd::focus_target),
            _ => None,
        }
    }

    /// Latest table snapshot in this command, if any
    pub fn table_snapshot(&self) -> Option<&[Vec<String>]> {
        match self {
            Cmd::TableChanged(rows) => Some(rows.as_slice()),
            Cmd::Batch(cmds) => cmds.iter().rev().find_map(Cmd::table_snapshot),
            _ => None,
        }
    }
}
