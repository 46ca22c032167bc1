//! Keyboard input for the grid
//!
//! ```text
//! host key identifier → parse_key_string() → Keystroke → event_for_keystroke() → GridEvent
//! ```
//!
//! Key identifiers follow the DOM `KeyboardEvent.key` names (`ArrowUp`,
//! `Tab`, `Enter`, `Escape`, single characters) with optional modifier
//! prefixes such as `Shift+Tab`.

mod binding;
mod config;
mod types;

pub use binding::event_for_keystroke;
pub use config::{parse_key_string, KeymapError};
pub use types::{KeyCode, Keystroke, Modifiers};
