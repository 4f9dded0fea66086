//! Structured error types for xlmap.
//!
//! Decode failures (broken ZIP package, malformed XML) and sheet lookup
//! failures are the only errors the extraction pipeline can surface.
//! Capacity parsing never fails; it degrades to "no capacity".

/// All errors that can occur while decoding a workbook or building a layout.
#[derive(Debug, thiserror::Error)]
pub enum XlmapError {
    /// XML parsing error from quick-xml.
    #[error("XML parsing: {0}")]
    Xml(#[from] quick_xml::Error),

    /// ZIP archive error (the input is not a valid XLSX package).
    #[error("ZIP archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The requested sheet index or name does not exist in the workbook.
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Invalid cell reference or range in the sheet XML.
    #[error("Invalid cell reference: {0}")]
    CellRef(String),

    /// Invalid configuration value.
    #[error("Configuration: {0}")]
    Config(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, XlmapError>;
