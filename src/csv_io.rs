//! CSV import/export for hosts
//!
//! The grid itself only deals in tables of strings. These helpers let a host
//! seed a grid from CSV text and print table snapshots back out. Parsing uses
//! the csv crate (RFC 4180 quoting, custom delimiters).

use std::io::Cursor;

use thiserror::Error;

use crate::grid::Table;

/// Supported CSV delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl Delimiter {
    /// Get the character for this delimiter
    pub fn char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
        }
    }

    /// Detect delimiter from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "tsv" => Delimiter::Tab,
            "psv" => Delimiter::Pipe,
            _ => Delimiter::Comma,
        }
    }
}

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("CSV parse error at record {record}: {source}")]
    Parse {
        record: usize,
        #[source]
        source: csv::Error,
    },

    #[error("CSV write error: {0}")]
    Write(String),
}

/// Parse CSV content into a table
///
/// Ragged records are padded with empty cells to the widest record.
pub fn parse_csv(content: &str, delimiter: Delimiter) -> Result<Table, CsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.char() as u8)
        .has_headers(false)
        .flexible(true)
        .from_reader(Cursor::new(content.as_bytes()));

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|source| CsvError::Parse {
            record: index + 1,
            source,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::from_rows_padded(rows))
}

/// Detect delimiter by analyzing first few lines
pub fn detect_delimiter(content: &str) -> Delimiter {
    let first_lines: String = content.lines().take(5).collect::<Vec<_>>().join("\n");

    let comma_count = first_lines.matches(',').count();
    let tab_count = first_lines.matches('\t').count();
    let pipe_count = first_lines.matches('|').count();
    let semi_count = first_lines.matches(';').count();

    let max = comma_count.max(tab_count).max(pipe_count).max(semi_count);

    if max == 0 {
        return Delimiter::Comma;
    }

    if tab_count == max {
        Delimiter::Tab
    } else if pipe_count == max {
        Delimiter::Pipe
    } else if semi_count == max {
        Delimiter::Semicolon
    } else {
        Delimiter::Comma
    }
}

/// Serialize rows as CSV text, quoting where needed
pub fn write_csv(rows: &[Vec<String>], delimiter: Delimiter) -> Result<String, CsvError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter.char() as u8)
        .flexible(true)
        .from_writer(Vec::new());

    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| CsvError::Write(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CsvError::Write(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CsvError::Write(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_csv() {
        let table = parse_csv("a,b,c\n1,2,3\n", Delimiter::Comma).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.get(0, 0), Ok("a"));
        assert_eq!(table.get(1, 2), Ok("3"));
    }

    #[test]
    fn test_parse_quoted_fields() {
        let content = r#""hello, world","test"
"with ""quotes""","normal"
"#;
        let table = parse_csv(content, Delimiter::Comma).unwrap();

        assert_eq!(table.get(0, 0), Ok("hello, world"));
        assert_eq!(table.get(1, 0), Ok("with \"quotes\""));
    }

    #[test]
    fn test_parse_ragged_rows_are_padded() {
        let table = parse_csv("a,b,c\n1,2\n", Delimiter::Comma).unwrap();

        assert_eq!(table.column_count(), 3);
        assert_eq!(table.get(1, 2), Ok(""));
    }

    #[test]
    fn test_parse_tsv() {
        let table = parse_csv("a\tb\n1\t2\n", Delimiter::Tab).unwrap();
        assert_eq!(table.get(0, 1), Ok("b"));
    }

    #[test]
    fn test_parse_empty() {
        let table = parse_csv("", Delimiter::Comma).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter("a,b,c\n1,2,3\n"), Delimiter::Comma);
        assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3\n"), Delimiter::Tab);
        assert_eq!(detect_delimiter("a|b|c\n1|2|3\n"), Delimiter::Pipe);
        assert_eq!(detect_delimiter("a;b;c\n1;2;3\n"), Delimiter::Semicolon);
        assert_eq!(detect_delimiter("plain"), Delimiter::Comma);
    }

    #[test]
    fn test_delimiter_from_extension() {
        assert_eq!(Delimiter::from_extension("CSV"), Delimiter::Comma);
        assert_eq!(Delimiter::from_extension("tsv"), Delimiter::Tab);
        assert_eq!(Delimiter::from_extension("psv"), Delimiter::Pipe);
    }

    #[test]
    fn test_write_csv_quotes_when_needed() {
        let rows = vec![
            vec!["a".to_string(), "b, c".to_string()],
            vec!["say \"hi\"".to_string(), String::new()],
        ];
        let text = write_csv(&rows, Delimiter::Comma).unwrap();
        assert_eq!(text, "a,\"b, c\"\n\"say \"\"hi\"\"\",\n");
    }
}
