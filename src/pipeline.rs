//! End-to-end layout generation: sheet lookup, extraction, rendering.

use serde::Serialize;

use crate::config::{LayoutConfig, ProcessingMode};
use crate::error::Result;
use crate::extract::{extract_general, extract_npr};
use crate::parser::SheetSource;
use crate::render::render_svg;
use crate::types::{LayoutStats, LayoutTable};

/// Extraction result together with its rendered diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloorPlan {
    pub table: LayoutTable,
    pub svg: String,
}

impl FloorPlan {
    pub fn stats(&self) -> LayoutStats {
        self.table.stats()
    }
}

/// Extract the layout table for the configured sheet and convention.
///
/// # Errors
/// Sheet lookup and decode errors from `source`, unchanged.
pub fn generate_layout<S: SheetSource + ?Sized>(
    source: &mut S,
    config: &LayoutConfig,
) -> Result<LayoutTable> {
    let sheet = source.worksheet(&config.sheet)?;

    tracing::info!(
        sheet = sheet.name(),
        mode = %config.mode,
        rows = sheet.max_row(),
        cols = sheet.max_column(),
        merges = sheet.merged_ranges().len(),
        "generating layout"
    );

    let table = match config.mode {
        ProcessingMode::General => extract_general(&sheet, &config.reference_set()),
        ProcessingMode::Npr => extract_npr(&sheet),
    };
    Ok(table)
}

/// [`generate_layout`] followed by SVG rendering with the configured
/// reference color.
pub fn build_floor_plan<S: SheetSource + ?Sized>(
    source: &mut S,
    config: &LayoutConfig,
) -> Result<FloorPlan> {
    let table = generate_layout(source, config)?;
    let svg = render_svg(&table, &config.reference_color);
    Ok(FloorPlan { table, svg })
}
