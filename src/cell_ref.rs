//! Utilities for Excel-style cell references and positional labels.
//!
//! All coordinates here are 1-based `(row, col)`, matching the spreadsheet's
//! own numbering (`A1` is row 1, column 1).

use crate::types::MergeRange;

/// Convert a 1-based column index to its letter name (`1 -> "A"`, `27 -> "AA"`).
///
/// Column `0` has no letter name and yields an empty string.
pub fn column_index_to_letters(col: u32) -> String {
    let mut letters = Vec::new();
    let mut n = col;
    while n > 0 {
        n -= 1;
        // n % 26 < 26, always fits in a u8
        letters.push(char::from(b'A' + u8::try_from(n % 26).unwrap_or(0)));
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Positional label for a cell, e.g. `(3, 2) -> "B3"`.
pub fn cell_label(row: u32, col: u32) -> String {
    format!("{}{row}", column_index_to_letters(col))
}

/// Parse a cell reference like `"B12"` or `"$B$12"` into 1-based `(row, col)`.
///
/// Returns `None` unless the reference is letters followed by digits, with
/// both parts present and non-zero.
pub fn parse_cell_ref(cell_ref: &str) -> Option<(u32, u32)> {
    parse_cell_ref_bytes(cell_ref.trim().as_bytes())
}

/// Bytes equivalent of [`parse_cell_ref`], for raw quick-xml attribute values.
pub fn parse_cell_ref_bytes(ref_bytes: &[u8]) -> Option<(u32, u32)> {
    let mut col: u32 = 0;
    let mut row: u32 = 0;
    let mut saw_col = false;
    let mut saw_row = false;

    for &b in ref_bytes {
        if b == b'$' {
            continue;
        }
        if b.is_ascii_alphabetic() {
            if saw_row {
                return None;
            }
            let upper = b.to_ascii_uppercase();
            col = col
                .saturating_mul(26)
                .saturating_add(u32::from(upper - b'A') + 1);
            saw_col = true;
        } else if b.is_ascii_digit() {
            row = row.saturating_mul(10).saturating_add(u32::from(b - b'0'));
            saw_row = true;
        } else {
            return None;
        }
    }

    if !saw_col || !saw_row || row == 0 {
        return None;
    }

    Some((row, col))
}

/// Parse a range like `"A1:B2"` (or a single cell `"C3"`) into a [`MergeRange`].
///
/// The bounds are normalized so that `min_*` never exceeds `max_*`.
pub fn parse_range_ref(range: &str) -> Option<MergeRange> {
    let (start, end) = range.split_once(':').unwrap_or((range, range));
    let (start_row, start_col) = parse_cell_ref(start)?;
    let (end_row, end_col) = parse_cell_ref(end)?;

    Some(MergeRange {
        min_row: start_row.min(end_row),
        min_col: start_col.min(end_col),
        max_row: start_row.max(end_row),
        max_col: start_col.max(end_col),
    })
}
