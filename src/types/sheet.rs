use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::CellValue;

static EMPTY: CellValue = CellValue::Empty;

/// An inclusive, 1-based rectangular merged-cell range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeRange {
    pub min_row: u32,
    pub min_col: u32,
    pub max_row: u32,
    pub max_col: u32,
}

impl MergeRange {
    pub fn new(min_row: u32, min_col: u32, max_row: u32, max_col: u32) -> Self {
        Self {
            min_row: min_row.min(max_row),
            min_col: min_col.min(max_col),
            max_row: min_row.max(max_row),
            max_col: min_col.max(max_col),
        }
    }

    /// Number of columns covered.
    pub fn width(&self) -> u32 {
        self.max_col.saturating_sub(self.min_col) + 1
    }

    /// Number of rows covered.
    pub fn height(&self) -> u32 {
        self.max_row.saturating_sub(self.min_row) + 1
    }

    /// Every `(row, col)` position covered by the range, row-major.
    pub fn positions(&self) -> impl Iterator<Item = (u32, u32)> {
        let (min_col, max_col) = (self.min_col, self.max_col);
        (self.min_row..=self.max_row)
            .flat_map(move |row| (min_col..=max_col).map(move |col| (row, col)))
    }
}

/// Selects a sheet by zero-based index or by exact name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SheetSelector {
    Index(usize),
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        Self::Index(0)
    }
}

impl fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(idx) => write!(f, "index {idx}"),
            Self::Name(name) => write!(f, "name '{name}'"),
        }
    }
}

impl From<usize> for SheetSelector {
    fn from(idx: usize) -> Self {
        Self::Index(idx)
    }
}

impl From<&str> for SheetSelector {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for SheetSelector {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// A decoded worksheet: typed cell values, merged ranges and used extent.
///
/// Coordinates are 1-based. The extent (`max_row`, `max_column`) covers every
/// stored cell, including empty ones, and every merged range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Worksheet {
    name: String,
    cells: BTreeMap<(u32, u32), CellValue>,
    merges: Vec<MergeRange>,
    max_row: u32,
    max_col: u32,
}

impl Worksheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw value at a 1-based position; `Empty` when nothing is stored.
    pub fn value(&self, row: u32, col: u32) -> &CellValue {
        self.cells.get(&(row, col)).unwrap_or(&EMPTY)
    }

    /// Store a value. Positions with a zero row or column are ignored.
    pub fn set_value(&mut self, row: u32, col: u32, value: impl Into<CellValue>) {
        if row == 0 || col == 0 {
            tracing::debug!(
                sheet = %self.name,
                row,
                col,
                "ignoring cell outside the 1-based grid"
            );
            return;
        }
        self.cells.insert((row, col), value.into());
        self.max_row = self.max_row.max(row);
        self.max_col = self.max_col.max(col);
    }

    pub fn add_merge(&mut self, range: MergeRange) {
        if range.min_row == 0 || range.min_col == 0 {
            tracing::debug!(sheet = %self.name, ?range, "ignoring merge outside the 1-based grid");
            return;
        }
        self.max_row = self.max_row.max(range.max_row);
        self.max_col = self.max_col.max(range.max_col);
        self.merges.push(range);
    }

    /// Builder-style [`Worksheet::set_value`].
    #[must_use]
    pub fn with_value(mut self, row: u32, col: u32, value: impl Into<CellValue>) -> Self {
        self.set_value(row, col, value);
        self
    }

    /// Builder-style [`Worksheet::add_merge`].
    #[must_use]
    pub fn with_merge(mut self, range: MergeRange) -> Self {
        self.add_merge(range);
        self
    }

    /// Merged ranges in document order.
    pub fn merged_ranges(&self) -> &[MergeRange] {
        &self.merges
    }

    pub fn max_row(&self) -> u32 {
        self.max_row
    }

    pub fn max_column(&self) -> u32 {
        self.max_col
    }

    /// Number of stored cells (including explicitly empty ones).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}
