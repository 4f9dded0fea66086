use crate::types::{Capacity, CellValue};

/// Result of splitting a `NAME (N)` cell value.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLocation {
    /// Text before the first `(`, trimmed; or the original value when no
    /// annotation was found.
    pub identifier: CellValue,
    pub capacity: Option<Capacity>,
}

impl ParsedLocation {
    /// Capacity with "none" normalized to zero.
    pub fn capacity_or_zero(&self) -> Capacity {
        self.capacity.unwrap_or_default()
    }
}

/// Split a raw value of the form `NAME (N)` into identifier and capacity.
///
/// Only text containing both `(` and `)` is split. The capacity text runs from
/// the first `(` to the next `(` or `)`. Anything that is not a non-negative
/// finite number yields no capacity. Never fails.
pub fn split_capacity(value: &CellValue) -> ParsedLocation {
    let unchanged = || ParsedLocation {
        identifier: value.clone(),
        capacity: None,
    };

    let Some(text) = value.as_text() else {
        return unchanged();
    };
    if !text.contains(')') {
        return unchanged();
    }
    let Some((name, rest)) = text.split_once('(') else {
        return unchanged();
    };

    let capacity_text = rest.split(['(', ')']).next().unwrap_or_default();

    ParsedLocation {
        identifier: CellValue::Text(name.trim().to_string()),
        capacity: parse_capacity(capacity_text.trim()),
    }
}

fn parse_capacity(text: &str) -> Option<Capacity> {
    if let Ok(n) = text.parse::<i64>() {
        return u64::try_from(n).ok().map(Capacity::Count);
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(Capacity::Amount(v.abs())),
        _ => None,
    }
}
