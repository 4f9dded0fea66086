use crate::types::{Capacity, CellValue, LayoutTable, LocationRecord, Worksheet};

use super::VisitedCells;

/// 1-based row holding the aisle code of each column.
pub const NPR_HEADER_ROW: u32 = 2;

/// Slot value flagging a reference location.
pub const NPR_REFERENCE_MARKER: &str = "P";

/// Extract slots from an aisle-numbered sheet.
///
/// Each column with a non-blank header cell is an aisle; every other
/// non-blank cell below or above it is a slot named `<aisle>-<slot>` with the
/// slot zero-padded to two characters. Merged cells and values starting with
/// `S` never become slots. Output is column-major.
pub fn extract_npr(sheet: &Worksheet) -> LayoutTable {
    npr_pass(sheet).0
}

/// One extraction pass, returning the claimed-cell set alongside the table.
pub(crate) fn npr_pass(sheet: &Worksheet) -> (LayoutTable, VisitedCells) {
    let mut table = LayoutTable::default();
    let mut visited = VisitedCells::default();

    for range in sheet.merged_ranges() {
        visited.mark_range(range);
    }

    for col in 1..=sheet.max_column() {
        let aisle = sheet.value(NPR_HEADER_ROW, col);
        if aisle.is_blank() {
            tracing::debug!(sheet = sheet.name(), col, "no aisle code, skipping column");
            continue;
        }
        let aisle = aisle.to_string();

        for row in 1..=sheet.max_row() {
            if row == NPR_HEADER_ROW || visited.contains(row, col) {
                continue;
            }

            let value = sheet.value(row, col);
            if value.is_blank() {
                continue;
            }

            let slot = value.to_string();
            if slot.starts_with('S') {
                continue;
            }

            table.push(LocationRecord {
                location_id: format!("{aisle}-{}", zfill(&slot, 2)),
                x: col - 1,
                y: row - 1,
                width: 1,
                height: 1,
                raw_value: value.clone(),
                capacity: Capacity::Count(1),
                is_reference: value.as_text() == Some(NPR_REFERENCE_MARKER),
            });
            visited.mark(row, col);
        }
    }

    tracing::info!(
        sheet = sheet.name(),
        slots = table.len(),
        references = table.stats().references,
        "extracted NPR layout"
    );

    (table, visited)
}

/// Left-pad with zeros to `width` characters, keeping a leading sign in front.
///
/// At width 2, `"3"` becomes `"03"` and `"P"` becomes `"0P"`; at width 3,
/// `"-3"` becomes `"-03"`. Text already `width` long is returned unchanged.
pub fn zfill(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }

    let (sign, rest) = if let Some(rest) = text.strip_prefix('-') {
        ("-", rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        ("+", rest)
    } else {
        ("", text)
    };
    format!("{sign}{}{rest}", "0".repeat(width - len))
}
