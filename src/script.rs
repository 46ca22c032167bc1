//! Line-oriented event scripts
//!
//! Lets a host replay a session from text, one message per line:
//!
//! ```text
//! # comment
//! key ArrowDown
//! key Shift+Tab
//! click 1 2
//! dblclick 0 0
//! input new cell text
//! blur 0 0
//! add-row
//! add-column
//! sort 3
//! ```

use thiserror::Error;

use crate::keymap::{parse_key_string, KeymapError};
use crate::messages::Msg;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: {message}")]
    InvalidArgument { line: usize, message: String },

    #[error("line {line}: {source}")]
    InvalidKey {
        line: usize,
        #[source]
        source: KeymapError,
    },
}

/// Parse a whole script into messages
pub fn parse_script(text: &str) -> Result<Vec<Msg>, ScriptError> {
    let mut messages = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if let Some(msg) = parse_line(line, index + 1)? {
            messages.push(msg);
        }
    }
    Ok(messages)
}

/// Parse one script line; blank lines and `#` comments yield `None`
pub fn parse_line(line: &str, line_number: usize) -> Result<Option<Msg>, ScriptError> {
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (command, rest) = match trimmed.split_once(' ') {
        Some((command, rest)) => (command, rest),
        None => (trimmed.trim_end(), ""),
    };

    let msg = match command {
        "key" => parse_key_string(rest).map(Msg::Key).map_err(|source| {
            ScriptError::InvalidKey {
                line: line_number,
                source,
            }
        })?,
        "click" => {
            let (row, col) = parse_cell(rest, line_number)?;
            Msg::click(row, col)
        }
        "dblclick" => {
            let (row, col) = parse_cell(rest, line_number)?;
            Msg::double_click(row, col)
        }
        "blur" => {
            let (row, col) = parse_cell(rest, line_number)?;
            Msg::blur(row, col)
        }
        // Keep the text verbatim, including inner and trailing spaces
        "input" => Msg::text_input(rest),
        "add-row" => Msg::AddRow,
        "add-column" => Msg::AddColumn,
        "sort" => Msg::RequestSort(parse_index(rest.trim(), line_number)?),
        other => {
            return Err(ScriptError::UnknownCommand {
                line: line_number,
                command: other.to_string(),
            })
        }
    };

    Ok(Some(msg))
}

fn parse_cell(args: &str, line: usize) -> Result<(usize, usize), ScriptError> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    match parts.as_slice() {
        [row, col] => Ok((parse_index(row, line)?, parse_index(col, line)?)),
        _ => Err(ScriptError::InvalidArgument {
            line,
            message: format!("expected `<row> <col>`, got `{}`", args.trim()),
        }),
    }
}

fn parse_index(value: &str, line: usize) -> Result<usize, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidArgument {
        line,
        message: format!("`{}` is not a row or column index", value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{KeyCode, Keystroke, Modifiers};

    #[test]
    fn test_parse_script_skips_comments_and_blanks() {
        let script = "# setup\n\nkey ArrowDown\n   \nadd-row\n";
        let messages = parse_script(script).unwrap();
        assert_eq!(
            messages,
            vec![Msg::Key(Keystroke::key(KeyCode::Down)), Msg::AddRow]
        );
    }

    #[test]
    fn test_parse_cell_commands() {
        assert_eq!(parse_line("click 1 2", 1), Ok(Some(Msg::click(1, 2))));
        assert_eq!(parse_line("dblclick 0 3", 1), Ok(Some(Msg::double_click(0, 3))));
        assert_eq!(parse_line("blur 4 5", 1), Ok(Some(Msg::blur(4, 5))));
    }

    #[test]
    fn test_parse_input_keeps_spaces() {
        assert_eq!(
            parse_line("input  two  words ", 1),
            Ok(Some(Msg::text_input(" two  words ")))
        );
        assert_eq!(parse_line("input", 1), Ok(Some(Msg::text_input(""))));
    }

    #[test]
    fn test_parse_key_with_modifiers() {
        assert_eq!(
            parse_line("key Shift+Tab", 1),
            Ok(Some(Msg::Key(Keystroke::new(KeyCode::Tab, Modifiers::SHIFT))))
        );
    }

    #[test]
    fn test_parse_sort_and_structure() {
        assert_eq!(parse_line("sort 3", 1), Ok(Some(Msg::RequestSort(3))));
        assert_eq!(parse_line("add-column", 1), Ok(Some(Msg::AddColumn)));
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        let err = parse_script("add-row\nclick 1\n").unwrap_err();
        assert!(matches!(err, ScriptError::InvalidArgument { line: 2, .. }));

        let err = parse_script("jump 1 1").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownCommand {
                line: 1,
                command: "jump".to_string()
            }
        );

        let err = parse_script("\n\nkey a+b").unwrap_err();
        assert!(matches!(err, ScriptError::InvalidKey { line: 3, .. }));
        assert!(err.to_string().starts_with("line 3:"));

        assert!(parse_line("sort -1", 7).is_err());
    }

    #[test]
    fn test_parse_unknown_key_names() {
        assert_eq!(
            parse_line("key Shift", 1),
            Ok(Some(Msg::Key(Keystroke::new(KeyCode::Unidentified, Modifiers::SHIFT))))
        );
        assert_eq!(
            parse_line("key CapsLock", 2),
            Ok(Some(Msg::Key(Keystroke::key(KeyCode::Unidentified))))
        );
        assert!(matches!(
            parse_line("key a+b", 3),
            Err(ScriptError::InvalidKey { line: 3, .. })
        ));
    }
}
