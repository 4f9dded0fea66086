use crate::types::CellValue;

/// Text prefixes marking aisle and corridor labels. Case-sensitive, matched
/// against the trimmed text.
pub const IGNORED_PREFIXES: [&str; 3] = ["P-", "PASILLO", "COLOSO"];

/// How a raw cell value participates in extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    /// Becomes a location record.
    Usable,
    /// Aisle / corridor label; never a record.
    Ignorable,
    /// Absent or whitespace-only.
    Empty,
}

impl CellClass {
    pub fn is_usable(self) -> bool {
        self == Self::Usable
    }
}

/// Classify a raw cell value.
pub fn classify(value: &CellValue) -> CellClass {
    match value {
        CellValue::Empty => CellClass::Empty,
        CellValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                CellClass::Empty
            } else if IGNORED_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
                CellClass::Ignorable
            } else {
                CellClass::Usable
            }
        }
        CellValue::Integer(_) | CellValue::Real(_) => CellClass::Usable,
    }
}
