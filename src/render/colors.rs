//! Fixed colors used by the floor plan diagram.

/// Default fill for reference locations.
pub const DEFAULT_REFERENCE_COLOR: &str = "#FFD1A8";

pub mod palette {
    /// Canvas background.
    pub const BACKGROUND: &str = "#f5f5f5";
    /// Outline and label color.
    pub const INK: &str = "#000000";
    /// Fill of ordinary locations.
    pub const NORMAL_FILL: &str = "#ffffff";
    /// Fill of an ordinary location under the pointer.
    pub const HOVER_FILL: &str = "#ffcc80";
}
