//! XLSX workbook decoder
//!
//! Opens the ZIP package, reads the sheet list and shared strings up front,
//! and decodes individual worksheets on demand.

mod relationships;
mod worksheet;

use std::io::{Cursor, Read, Seek};
use zip::ZipArchive;

use crate::error::{Result, XlmapError};
use crate::types::{SheetSelector, Worksheet};

use relationships::{get_sheet_info, parse_shared_strings, parse_workbook_relationships};
use worksheet::{parse_sheet, SheetInfo};

/// Anything that can hand out decoded worksheets by position.
///
/// This is the boundary between extraction and decoding: the extractors only
/// ever see a [`Worksheet`], never the package it came from.
pub trait SheetSource {
    /// Sheet names in workbook order.
    fn sheet_names(&self) -> Vec<String>;

    /// Decode the sheet at a zero-based position.
    fn load_sheet(&mut self, index: usize) -> Result<Worksheet>;

    /// Map a selector to a zero-based position.
    ///
    /// # Errors
    /// `SheetNotFound` when the index is out of range or no sheet has exactly
    /// that name.
    fn resolve_sheet(&self, selector: &SheetSelector) -> Result<usize> {
        let names = self.sheet_names();
        let found = match selector {
            SheetSelector::Index(idx) => (*idx < names.len()).then_some(*idx),
            SheetSelector::Name(name) => names.iter().position(|n| n == name),
        };
        found.ok_or_else(|| XlmapError::SheetNotFound(selector.to_string()))
    }

    /// Resolve a selector and decode that sheet.
    fn worksheet(&mut self, selector: &SheetSelector) -> Result<Worksheet> {
        let index = self.resolve_sheet(selector)?;
        self.load_sheet(index)
    }
}

/// An opened `.xlsx` package.
///
/// Each call to [`SheetSource::load_sheet`] re-reads the sheet part from the
/// archive, so repeated extraction passes see identical input.
pub struct Workbook<R: Read + Seek> {
    archive: ZipArchive<R>,
    sheets: Vec<SheetInfo>,
    shared_strings: Vec<String>,
}

impl<R: Read + Seek> Workbook<R> {
    /// Open a package from any seekable reader.
    ///
    /// # Errors
    /// Returns a `Zip` error if the bytes are not a ZIP archive and `Xml` /
    /// `Zip` errors if required workbook parts are missing or malformed.
    pub fn open(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;

        let rels = parse_workbook_relationships(&mut archive)?;
        let sheets = get_sheet_info(&mut archive, &rels.worksheets)?;
        let shared_strings = parse_shared_strings(&mut archive, rels.shared_strings.as_deref())?;

        tracing::debug!(
            sheets = sheets.len(),
            shared_strings = shared_strings.len(),
            "opened workbook"
        );

        Ok(Self {
            archive,
            sheets,
            shared_strings,
        })
    }

    /// Decode every sheet, in workbook order.
    pub fn into_worksheets(mut self) -> Result<Vec<Worksheet>> {
        (0..self.sheets.len())
            .map(|idx| self.load_sheet(idx))
            .collect()
    }
}

impl<'a> Workbook<Cursor<&'a [u8]>> {
    /// Open a package held in memory.
    pub fn from_bytes(data: &'a [u8]) -> Result<Self> {
        Self::open(Cursor::new(data))
    }
}

impl<R: Read + Seek> SheetSource for Workbook<R> {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }

    fn load_sheet(&mut self, index: usize) -> Result<Worksheet> {
        let info = self
            .sheets
            .get(index)
            .cloned()
            .ok_or_else(|| XlmapError::SheetNotFound(SheetSelector::Index(index).to_string()))?;
        parse_sheet(&mut self.archive, &info, &self.shared_strings)
    }
}

/// In-memory sheets, for callers that build worksheets themselves.
impl SheetSource for Vec<Worksheet> {
    fn sheet_names(&self) -> Vec<String> {
        self.iter().map(|s| s.name().to_string()).collect()
    }

    fn load_sheet(&mut self, index: usize) -> Result<Worksheet> {
        self.get(index)
            .cloned()
            .ok_or_else(|| XlmapError::SheetNotFound(SheetSelector::Index(index).to_string()))
    }
}

/// Decode all sheets of an in-memory `.xlsx` file.
pub fn parse(data: &[u8]) -> Result<Vec<Worksheet>> {
    Workbook::from_bytes(data)?.into_worksheets()
}
