//! Display ordering of rows
//!
//! Sorting never reorders the table store; it produces the list of storage
//! row indices in display order.

use std::cmp::Ordering;

use super::model::{SortConfig, SortDirection, Table};

/// Storage row indices in display order
///
/// Without a sort key this is the identity order. With one, rows are ordered
/// by the key column's text compared UTF-16 code unit by code unit (plain
/// string order, not numeric). The sort is stable in both directions, so rows
/// with equal keys keep their storage order.
pub fn display_order(table: &Table, config: &SortConfig) -> Vec<usize> {
    let mut order: Vec<usize> = (0..table.row_count()).collect();

    let Some(key) = config.key.filter(|&key| key < table.column_count()) else {
        return order;
    };

    let rows = table.rows();
    order.sort_by(|&a, &b| {
        let ordering = compare_cells(&rows[a][key], &rows[b][key]);
        match config.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    order
}

/// Rows of `table` in display order
pub fn sorted_rows<'a>(table: &'a Table, config: &SortConfig) -> Vec<&'a [String]> {
    display_order(table, config)
        .into_iter()
        .map(|row| table.rows()[row].as_slice())
        .collect()
}

/// Code-unit string comparison
///
/// Differs from `str::cmp` (which is code point order) only for characters
/// outside the Basic Multilingual Plane against U+E000..U+FFFF.
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}
