//! Layout generation settings.
//!
//! Loadable from JSON. Field names accept both the English names and the
//! Spanish keys used by existing warehouse config files
//! (`tipo_procesamiento`, `color_referencias`, `ubicaciones_referencia`,
//! `hoja_origen`). Missing fields take their defaults.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, XlmapError};
use crate::render::DEFAULT_REFERENCE_COLOR;
use crate::types::SheetSelector;

/// Reference locations flagged by default in general mode.
pub const DEFAULT_REFERENCE_LOCATIONS: [&str; 5] = [
    "INDUSTRIAL",
    "KIOSCO",
    "REEMPAQUE",
    "CARGA TRASERA",
    "RECEPCIÓN LATERAL",
];

/// Which sheet convention to extract with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(try_from = "String", into = "String")]
pub enum ProcessingMode {
    /// Merged regions and free-form cells.
    #[default]
    General,
    /// Aisle codes in row 2, numbered slots below.
    Npr,
}

impl ProcessingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Npr => "npr",
        }
    }
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; only the first word counts, so labels like
/// `"NPR (Pasillos numerados)"` parse too.
impl FromStr for ProcessingMode {
    type Err = XlmapError;

    fn from_str(s: &str) -> Result<Self> {
        let word = s.split_whitespace().next().unwrap_or_default();
        if word.eq_ignore_ascii_case("general") {
            Ok(Self::General)
        } else if word.eq_ignore_ascii_case("npr") {
            Ok(Self::Npr)
        } else {
            Err(XlmapError::Config(format!("unknown processing mode '{s}'")))
        }
    }
}

impl TryFrom<String> for ProcessingMode {
    type Error = XlmapError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ProcessingMode> for String {
    fn from(mode: ProcessingMode) -> Self {
        mode.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    #[serde(alias = "tipo_procesamiento")]
    pub mode: ProcessingMode,
    /// CSS color for reference locations, passed through to the diagram.
    #[serde(alias = "color_referencias")]
    pub reference_color: String,
    /// General-mode reference identifiers. NPR mode always uses `"P"`.
    #[serde(alias = "ubicaciones_referencia")]
    pub reference_locations: Vec<String>,
    #[serde(alias = "hoja_origen")]
    pub sheet: SheetSelector,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mode: ProcessingMode::default(),
            reference_color: DEFAULT_REFERENCE_COLOR.to_string(),
            reference_locations: DEFAULT_REFERENCE_LOCATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            sheet: SheetSelector::default(),
        }
    }
}

impl LayoutConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| XlmapError::Config(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reference identifiers as a lookup set, trimmed.
    pub fn reference_set(&self) -> HashSet<String> {
        self.reference_locations
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Parse a newline-separated identifier list. Lines are trimmed and blank
/// lines dropped.
pub fn parse_reference_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
