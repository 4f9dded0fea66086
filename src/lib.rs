//! xlmap - warehouse floor plans from XLSX sheets
//!
//! Reads a spreadsheet that encodes a floor plan and turns it into a table of
//! rectangular locations plus an SVG diagram:
//! - General sheets: merged regions and free-form cells, `NAME (N)` capacities
//! - NPR sheets: aisle codes in a header row, numbered slots below
//! - Deterministic SVG with per-location `data-*` metadata
//!
//! # Usage
//!
//! ```no_run
//! use xlmap::{build_floor_plan, LayoutConfig, Workbook};
//!
//! let data = std::fs::read("plano.xlsx")?;
//! let mut workbook = Workbook::from_bytes(&data)?;
//! let plan = build_floor_plan(&mut workbook, &LayoutConfig::default())?;
//! println!("{}", plan.svg);
//! # Ok::<(), xlmap::XlmapError>(())
//! ```

// Decoding
pub mod cell_ref;
pub mod error;
pub mod parser;
pub mod types;
pub mod xml_helpers;

// Layout
pub mod config;
pub mod extract;
pub mod pipeline;
pub mod render;

pub use config::{parse_reference_list, LayoutConfig, ProcessingMode};
pub use error::{Result, XlmapError};
pub use extract::{extract_general, extract_npr};
pub use parser::{SheetSource, Workbook};
pub use pipeline::{build_floor_plan, generate_layout, FloorPlan};
pub use render::render_svg;
pub use types::*;

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
