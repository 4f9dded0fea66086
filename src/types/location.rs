use serde::Serialize;
use std::fmt;

use super::CellValue;

/// Declared maximum occupancy of a location.
///
/// Always non-negative. Whole numbers stay integral so they render and
/// serialize without a fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Capacity {
    Count(u64),
    Amount(f64),
}

impl Default for Capacity {
    fn default() -> Self {
        Self::Count(0)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Amount(v) => write!(f, "{v}"),
        }
    }
}

/// One rectangular occupied region of the floor plan.
///
/// `x`/`y` are the zero-based column/row of the top-left cell; `width` and
/// `height` are in grid cells and never zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRecord {
    pub location_id: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub raw_value: CellValue,
    pub capacity: Capacity,
    pub is_reference: bool,
}

impl LocationRecord {
    /// Column just past the right edge of the region.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Row just past the bottom edge of the region.
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }
}

/// Ordered collection of location records produced by one extraction pass.
///
/// Order is discovery order. The table is only built inside this crate and
/// is read-only for callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LayoutTable {
    records: Vec<LocationRecord>,
}

impl LayoutTable {
    pub(crate) fn push(&mut self, record: LocationRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LocationRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record with the given id, in table order.
    pub fn find(&self, location_id: &str) -> Option<&LocationRecord> {
        self.records.iter().find(|r| r.location_id == location_id)
    }

    /// Grid extent `(columns, rows)` covered by the records.
    pub fn extent(&self) -> (u32, u32) {
        self.records.iter().fold((0, 0), |(cols, rows), r| {
            (cols.max(r.right()), rows.max(r.bottom()))
        })
    }

    pub fn stats(&self) -> LayoutStats {
        let references = self.records.iter().filter(|r| r.is_reference).count();
        LayoutStats {
            total: self.records.len(),
            references,
            normal: self.records.len() - references,
        }
    }

    /// Serialize the table as a pretty-printed JSON array.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<Vec<LocationRecord>> for LayoutTable {
    fn from(records: Vec<LocationRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<LocationRecord> for LayoutTable {
    fn from_iter<I: IntoIterator<Item = LocationRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LayoutTable {
    type Item = &'a LocationRecord;
    type IntoIter = std::slice::Iter<'a, LocationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Summary counts for a layout table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LayoutStats {
    pub total: usize,
    pub references: usize,
    pub normal: usize,
}
