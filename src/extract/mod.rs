//! Location extraction: turns a decoded [`Worksheet`](crate::types::Worksheet)
//! into a [`LayoutTable`](crate::types::LayoutTable).
//!
//! Two sheet conventions are supported:
//! - [`extract_general`]: free-form merged regions and single cells
//! - [`extract_npr`]: aisle codes in a header row, numbered slots below

mod capacity;
mod classify;
mod general;
mod npr;

use std::collections::HashSet;

use crate::types::MergeRange;

pub use capacity::{split_capacity, ParsedLocation};
pub use classify::{classify, CellClass, IGNORED_PREFIXES};
pub use general::extract_general;
pub use npr::{extract_npr, zfill, NPR_HEADER_ROW, NPR_REFERENCE_MARKER};

/// Grid positions already claimed during one extraction pass: every cell
/// covered by a merged range plus every emitted location.
///
/// Lives only for the duration of a single extractor call. Scanned positions
/// that produce nothing are never inserted, so the set stays proportional to
/// the sheet's content rather than its extent.
#[derive(Debug, Default)]
pub(crate) struct VisitedCells {
    cells: HashSet<(u32, u32)>,
}

impl VisitedCells {
    pub(crate) fn mark(&mut self, row: u32, col: u32) {
        self.cells.insert((row, col));
    }

    pub(crate) fn mark_range(&mut self, range: &MergeRange) {
        self.cells.extend(range.positions());
    }

    pub(crate) fn contains(&self, row: u32, col: u32) -> bool {
        self.cells.contains(&(row, col))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }
}
