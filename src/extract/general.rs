use std::collections::HashSet;

use crate::cell_ref::cell_label;
use crate::types::{Capacity, CellValue, LayoutTable, LocationRecord, Worksheet};

use super::{classify, split_capacity, VisitedCells};

/// Extract locations from a free-form sheet.
///
/// Merged ranges are emitted first, in range order, each as one record
/// anchored at its top-left cell. Remaining cells follow in row-major order
/// as 1x1 records. Empty and ignorable anchors are skipped but their cells
/// still count as claimed.
pub fn extract_general(sheet: &Worksheet, references: &HashSet<String>) -> LayoutTable {
    general_pass(sheet, references).0
}

/// One extraction pass, returning the claimed-cell set alongside the table.
pub(crate) fn general_pass(
    sheet: &Worksheet,
    references: &HashSet<String>,
) -> (LayoutTable, VisitedCells) {
    let mut table = LayoutTable::default();
    let mut visited = VisitedCells::default();

    for range in sheet.merged_ranges() {
        visited.mark_range(range);

        let value = sheet.value(range.min_row, range.min_col);
        let class = classify(value);
        if !class.is_usable() {
            tracing::debug!(
                sheet = sheet.name(),
                anchor = %cell_label(range.min_row, range.min_col),
                ?class,
                "skipping merged range"
            );
            continue;
        }

        let parsed = split_capacity(value);
        let location_id = region_id(&parsed.identifier, value, range.min_row, range.min_col);
        table.push(build_record(
            location_id,
            value,
            parsed.capacity_or_zero(),
            (range.min_row, range.min_col),
            (range.width(), range.height()),
            references,
        ));
    }
    let merged_records = table.len();

    for row in 1..=sheet.max_row() {
        for col in 1..=sheet.max_column() {
            if visited.contains(row, col) {
                continue;
            }

            let value = sheet.value(row, col);
            if !classify(value).is_usable() {
                continue;
            }

            let location_id = cell_id(value, row, col);
            let capacity = split_capacity(value).capacity_or_zero();
            table.push(build_record(
                location_id,
                value,
                capacity,
                (row, col),
                (1, 1),
                references,
            ));
            visited.mark(row, col);
        }
    }

    tracing::info!(
        sheet = sheet.name(),
        merged = merged_records,
        single = table.len() - merged_records,
        references = table.stats().references,
        "extracted general layout"
    );

    (table, visited)
}

fn build_record(
    location_id: String,
    value: &CellValue,
    capacity: Capacity,
    (row, col): (u32, u32),
    (width, height): (u32, u32),
    references: &HashSet<String>,
) -> LocationRecord {
    LocationRecord {
        is_reference: references.contains(&location_id),
        location_id,
        x: col - 1,
        y: row - 1,
        width,
        height,
        raw_value: value.clone(),
        capacity,
    }
}

/// Id of a merged region: the identifier split off a `NAME (N)` anchor, or
/// the anchor value itself when the split leaves nothing (`"(10)"`).
fn region_id(identifier: &CellValue, raw: &CellValue, row: u32, col: u32) -> String {
    [identifier, raw]
        .into_iter()
        .map(|v| v.to_string().trim().to_string())
        .find(|id| !id.is_empty())
        .unwrap_or_else(|| cell_label(row, col))
}

/// Id of a single cell: its trimmed text, annotation included, or the
/// positional label (`"B7"`) for numbers.
fn cell_id(value: &CellValue, row: u32, col: u32) -> String {
    value
        .as_text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map_or_else(|| cell_label(row, col), str::to_string)
}
