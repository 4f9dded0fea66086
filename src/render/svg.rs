//! SVG floor plan renderer.
//!
//! Output is a pure function of the table and the reference color. All
//! geometry is integral: cell sizes are even, so label centers never need a
//! fractional part.

use std::fmt::Write;

use crate::types::{LayoutTable, LocationRecord};

use super::colors::palette;

/// Width of one grid column in SVG units.
pub const CELL_WIDTH: u64 = 80;
/// Height of one grid row in SVG units.
pub const CELL_HEIGHT: u64 = 60;
/// Blank border around the grid.
pub const MARGIN: u64 = 20;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const EMPTY_DOCUMENT: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\"></svg>";

/// CSS class of the label text.
pub const LABEL_CLASS: &str = "location-label";
/// CSS class of a reference location's rectangle.
pub const REFERENCE_CLASS: &str = "location-reference";
/// CSS class of an ordinary location's rectangle.
pub const NORMAL_CLASS: &str = "location-normal";

/// Escape the five XML-reserved characters. `&` is handled in the same pass,
/// so existing entities are never double-decoded.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Label font size in px for an id drawn in a `width` x `height` box.
pub fn font_size(location_id: &str, width: u64, height: u64) -> u32 {
    let len = location_id.chars().count();
    if len > 25 || width < 50 || height < 30 {
        6
    } else if len > 15 || width < 80 || height < 40 {
        8
    } else {
        10
    }
}

/// Canvas size `(width, height)` for a table.
pub fn canvas_size(table: &LayoutTable) -> (u64, u64) {
    let (max_x, max_y) = table.extent();
    (
        (u64::from(max_x) + 1) * CELL_WIDTH + 2 * MARGIN,
        (u64::from(max_y) + 1) * CELL_HEIGHT + 2 * MARGIN,
    )
}

/// Render a layout table as a standalone SVG document.
///
/// An empty table yields an empty `<svg>` root.
pub fn render_svg(table: &LayoutTable, reference_color: &str) -> String {
    if table.is_empty() {
        return EMPTY_DOCUMENT.to_string();
    }

    let (canvas_width, canvas_height) = canvas_size(table);
    let mut svg = String::with_capacity(512 + table.len() * 256);

    let _ = writeln!(
        svg,
        r#"<svg xmlns="{SVG_NS}" viewBox="0 0 {canvas_width} {canvas_height}" width="100%" height="100%">"#
    );
    write_style(&mut svg, &escape_xml(reference_color));
    let _ = writeln!(
        svg,
        r#"  <rect width="{canvas_width}" height="{canvas_height}" fill="{}" />"#,
        palette::BACKGROUND
    );

    for record in table {
        write_location(&mut svg, record);
    }

    svg.push_str("</svg>");

    tracing::debug!(
        locations = table.len(),
        width = canvas_width,
        height = canvas_height,
        bytes = svg.len(),
        "rendered svg"
    );

    svg
}

fn write_style(svg: &mut String, reference_color: &str) {
    let ink = palette::INK;
    svg.push_str("  <style>\n");
    let _ = writeln!(
        svg,
        "    .{LABEL_CLASS} {{ font-family: Arial; font-size: 12px; text-anchor: middle; dominant-baseline: middle; fill: {ink}; }}"
    );
    let _ = writeln!(
        svg,
        "    .{REFERENCE_CLASS} {{ fill: {reference_color}; stroke: {ink}; stroke-width: 2px; }}"
    );
    let _ = writeln!(
        svg,
        "    .{NORMAL_CLASS} {{ fill: {}; stroke: {ink}; stroke-width: 1px; }}",
        palette::NORMAL_FILL
    );
    let _ = writeln!(
        svg,
        "    .{NORMAL_CLASS}:hover {{ fill: {}; cursor: pointer; }}",
        palette::HOVER_FILL
    );
    svg.push_str("  </style>\n");
}

fn write_location(svg: &mut String, record: &LocationRecord) {
    let x = MARGIN + u64::from(record.x) * CELL_WIDTH;
    let y = MARGIN + u64::from(record.y) * CELL_HEIGHT;
    let width = u64::from(record.width) * CELL_WIDTH;
    let height = u64::from(record.height) * CELL_HEIGHT;

    let id = escape_xml(&record.location_id);
    let class = if record.is_reference {
        REFERENCE_CLASS
    } else {
        NORMAL_CLASS
    };
    let size = font_size(&record.location_id, width, height);

    let _ = writeln!(
        svg,
        r#"  <g id="{id}" data-location="{id}" data-capacity="{}">"#,
        record.capacity
    );
    let _ = writeln!(
        svg,
        r#"    <rect class="{class}" x="{x}" y="{y}" width="{width}" height="{height}" rx="3" />"#
    );
    let _ = writeln!(
        svg,
        r#"    <text class="{LABEL_CLASS}" x="{}" y="{}" font-size="{size}px">{id}</text>"#,
        x + width / 2,
        y + height / 2
    );
    svg.push_str("  </g>\n");
}
