//! Integration tests for xlmap.
//!
//! - `fixtures`: builders for floor plan XLSX files in memory
//! - `common`: decoding shortcuts plus table and SVG assertions
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use crate::common::{ids, load_sheet};
//! use crate::fixtures::XlsxBuilder;
//!
//! fn test_single_rack() {
//!     let xlsx = XlsxBuilder::new()
//!         .add_sheet("Plano")
//!         .add_cell("B2", "RACK-01")
//!         .build();
//!
//!     let sheet = load_sheet(&xlsx, 0usize);
//!     let table = xlmap::extract_general(&sheet, &Default::default());
//!     assert_eq!(ids(&table), vec!["RACK-01"]);
//! }
//! ```
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

pub mod fixtures;

pub use common::{assert_geometry, assert_no_overlap, ids, inspect_svg, load_sheet, open_workbook};
pub use fixtures::{CellValue, SheetBuilder, XlsxBuilder};

use xlmap::SheetSource;

#[test]
fn test_fixture_workbook_opens() {
    let xlsx = fixtures::warehouse_xlsx();
    let workbook = open_workbook(&xlsx);
    assert_eq!(workbook.sheet_names(), vec!["Plano", "NPR"]);
}
