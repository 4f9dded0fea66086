use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw cell value as decoded from the workbook.
///
/// Serializes untagged: text as a JSON string, numbers as JSON numbers and
/// `Empty` as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Text content (shared, inline, formula string, boolean or error cells).
    Text(String),
    /// Numeric content whose stored form is an integer literal.
    Integer(i64),
    /// Any other numeric content.
    Real(f64),
    /// No value.
    #[default]
    Empty,
}

impl CellValue {
    /// Build a numeric value from the text stored in a `<v>` element.
    ///
    /// Integer literals become `Integer`, other numbers `Real`; anything that
    /// is not a number is kept as `Text`.
    pub fn from_numeric_text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            return Self::Integer(n);
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Self::Real(v),
            _ => Self::Text(raw.to_string()),
        }
    }

    /// The text content, if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// True for `Empty` and for whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Integer(_) | Self::Real(_) => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(v) => write!(f, "{v}"),
            Self::Empty => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}
