//! Parsing of key identifiers
//!
//! Accepts DOM-style names (`ArrowUp`, `Escape`), short names (`up`, `esc`)
//! and modifier chords joined with `+` (`Shift+Tab`, `ctrl+home`).
//!
//! Key names the grid has no use for (`CapsLock`, `Insert`, a lone `Shift`)
//! parse to [`KeyCode::Unidentified`]. Only malformed chords are errors.

use thiserror::Error;

use super::types::{KeyCode, Keystroke, Modifiers};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeymapError {
    #[error("invalid key: {0}")]
    InvalidKey(String),
}

/// Parse a key string like "Shift+Tab" into a Keystroke
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, KeymapError> {
    let key_str = key_str.trim();
    if key_str.is_empty() {
        return Err(KeymapError::InvalidKey(key_str.to_string()));
    }

    // A trailing "+" is the plus key itself ("+", "Shift++")
    let (chord, plus_key) = match key_str.strip_suffix('+') {
        Some(rest) if rest.is_empty() || rest.ends_with('+') => {
            (rest.trim_end_matches('+'), true)
        }
        _ => (key_str, false),
    };

    let mut mods = Modifiers::NONE;
    let mut key_part = plus_key.then_some(KeyCode::Char('+'));

    for part in chord.split('+').filter(|p| !p.is_empty()) {
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => mods = mods | Modifiers::CTRL,
            "shift" => mods = mods | Modifiers::SHIFT,
            "alt" | "option" | "opt" => mods = mods | Modifiers::ALT,
            "meta" | "cmd" | "super" | "win" => mods = mods | Modifiers::META,
            _ => {
                if key_part.is_some() {
                    return Err(KeymapError::InvalidKey(format!(
                        "multiple keys in {}",
                        key_str
                    )));
                }
                key_part = Some(parse_key_code(part));
            }
        }
    }

    // A bare modifier press ("Shift", "Control")
    let key = match key_part {
        Some(key) => key,
        None if !mods.is_empty() => KeyCode::Unidentified,
        None => return Err(KeymapError::InvalidKey(format!("no key in {}", key_str))),
    };

    Ok(Keystroke::new(key, mods))
}

/// Parse a key code from string; unknown names are `Unidentified`
fn parse_key_code(key: &str) -> KeyCode {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return KeyCode::Char(c);
    }

    match key.to_lowercase().as_str() {
        "enter" | "return" => KeyCode::Enter,
        "escape" | "esc" => KeyCode::Escape,
        "tab" => KeyCode::Tab,
        "backspace" | "back" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),

        "up" | "arrowup" => KeyCode::Up,
        "down" | "arrowdown" => KeyCode::Down,
        "left" | "arrowleft" => KeyCode::Left,
        "right" | "arrowright" => KeyCode::Right,

        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdown" | "pgdn" => KeyCode::PageDown,

        lower => lower
            .strip_prefix('f')
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (1..=24).contains(n))
            .map_or(KeyCode::Unidentified, KeyCode::F),
    }
}
