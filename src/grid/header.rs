//! Header labels for the grid
//!
//! Columns use spreadsheet letters (bijective base 26, no zero digit);
//! rows use 1-based numbers.

/// Column letters: 0->A, 25->Z, 26->AA, 701->ZZ, 702->AAA
pub fn column_label(col: usize) -> String {
    let mut digits = Vec::new();
    let mut remaining = Some(col);
    while let Some(n) = remaining {
        digits.push(b'A' + (n % 26) as u8);
        remaining = (n / 26).checked_sub(1);
    }
    digits.iter().rev().map(|&d| d as char).collect()
}

/// 1-based label for a display row
pub fn row_label(display_row: usize) -> String {
    (display_row + 1).to_string()
}
