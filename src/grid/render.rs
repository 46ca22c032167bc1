//! Plain-text grid rendering
//!
//! Renders a [`GridView`] for terminal hosts with:
//! - Row numbers column
//! - Column headers (A, B, C, ...) with sort markers
//! - Active cell wrapped in `[..]`, editing cell in `{..}`
//! - Numeric cells right-aligned

use super::view::{ColumnHeader, GridView};

/// Column sizing limits, in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub min_column_width: usize,
    pub max_column_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            min_column_width: 4,
            max_column_width: 40,
        }
    }
}

/// Check if a string looks like a number (for right-alignment)
pub fn is_number(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    s.parse::<f64>().is_ok()
}

/// Truncate text with ellipsis if too long
pub fn truncate_text(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 1 {
        s.chars().take(max_chars).collect()
    } else {
        let mut result: String = s.chars().take(max_chars - 1).collect();
        result.push('…');
        result
    }
}

/// Width of each column: the widest header or cell, clamped to the limits
pub fn column_widths(view: &GridView<'_>, options: &RenderOptions) -> Vec<usize> {
    let max = options.max_column_width.max(options.min_column_width);

    view.columns
        .iter()
        .enumerate()
        .map(|(col, header)| {
            let header_width = header.label.chars().count() + header_width_extra(header);
            let cell_width = view
                .rows
                .iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0);
            header_width
                .max(cell_width)
                .clamp(options.min_column_width, max)
        })
        .collect()
}

fn header_width_extra(header: &ColumnHeader) -> usize {
    let symbol = header.sort.symbol();
    if symbol.is_empty() {
        0
    } else {
        1 + symbol.chars().count()
    }
}

/// Render the whole view as lines of text
pub fn render_text(view: &GridView<'_>, options: &RenderOptions) -> String {
    let widths = column_widths(view, options);
    let gutter = view.row_headers.len().to_string().len().max(3);
    let mut out = String::new();

    // Header line
    out.push_str(&" ".repeat(gutter));
    out.push_str(" |");
    for (header, &width) in view.columns.iter().zip(&widths) {
        let mut label = header.label.clone();
        let symbol = header.sort.symbol();
        if !symbol.is_empty() {
            label.push(' ');
            label.push_str(symbol);
        }
        let label = truncate_text(&label, width);
        let (open, close) = if header.active { ('*', '*') } else { (' ', ' ') };
        out.push(open);
        out.push_str(&format!("{:<width$}", label, width = width));
        out.push(close);
        out.push('|');
    }
    out.push('\n');

    // Separator
    out.push_str(&"-".repeat(gutter));
    out.push_str("-+");
    for &width in &widths {
        out.push_str(&"-".repeat(width + 2));
        out.push('+');
    }
    out.push('\n');

    for (row, cells) in view.rows.iter().enumerate() {
        let label = &view.row_headers[row].label;
        out.push_str(&format!("{:>gutter$}", label, gutter = gutter));
        out.push_str(" |");

        for (col, &width) in widths.iter().enumerate() {
            let value = cells.get(col).map(String::as_str).unwrap_or("");
            let text = truncate_text(value, width);
            let (open, close) = if view.is_editing(row, col) {
                ('{', '}')
            } else if view.is_active(row, col) {
                ('[', ']')
            } else {
                (' ', ' ')
            };
            out.push(open);
            if is_number(value) {
                out.push_str(&format!("{:>width$}", text, width = width));
            } else {
                out.push_str(&format!("{:<width$}", text, width = width));
            }
            out.push(close);
            out.push('|');
        }
        out.push('\n');
    }

    out
}
