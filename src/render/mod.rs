//! Diagram rendering for extracted layouts.

pub mod colors;
pub mod svg;

pub use colors::{palette, DEFAULT_REFERENCE_COLOR};
pub use svg::{canvas_size, escape_xml, font_size, render_svg, CELL_HEIGHT, CELL_WIDTH, MARGIN};
