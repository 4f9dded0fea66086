//! Test fixtures for generating floor plan XLSX files in memory.
//!
//! # Example
//!
//! ```rust
//! use fixtures::XlsxBuilder;
//!
//! let xlsx = XlsxBuilder::new()
//!     .add_sheet("Plano")
//!     .add_cell("A1", "ZONE A (50)")
//!     .merge("A1:B2")
//!     .add_cell("A3", "B12")
//!     .build();
//!
//! let sheets = xlmap::parser::parse(&xlsx).unwrap();
//! ```
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use std::io::{Cursor, Write};
use zip::write::FileOptions;
use zip::ZipWriter;

// ============================================================================
// Cell Value
// ============================================================================

/// A cell value as it should be written into the sheet XML.
#[derive(Debug, Clone)]
pub enum CellValue {
    /// Shared string (`t="s"`).
    String(String),
    /// Numeric value written as `<v>`.
    Number(f64),
    /// Boolean (`t="b"`).
    Boolean(bool),
    /// Error code (`t="e"`), e.g. `#REF!`.
    Error(String),
    /// Inline string (`t="inlineStr"`).
    InlineString(String),
    /// Formula with a cached string result (`t="str"`).
    Formula { formula: String, cached: String },
    /// Cell element with no value.
    Empty,
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

// ============================================================================
// Sheet Builder
// ============================================================================

#[derive(Debug, Clone)]
pub struct CellEntry {
    pub cell_ref: String,
    pub value: CellValue,
}

/// Builder for a single worksheet.
#[derive(Debug, Clone, Default)]
pub struct SheetBuilder {
    pub name: String,
    pub cells: Vec<CellEntry>,
    pub merges: Vec<String>,
    /// Replaces the generated sheet XML entirely when set.
    pub raw_xml: Option<String>,
}

impl SheetBuilder {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Add a cell (e.g. `"B3"`).
    #[must_use]
    pub fn cell<V: Into<CellValue>>(mut self, cell_ref: &str, value: V) -> Self {
        self.cells.push(CellEntry {
            cell_ref: cell_ref.to_string(),
            value: value.into(),
        });
        self
    }

    /// Add a merge range (e.g. `"A1:B2"`).
    #[must_use]
    pub fn merge(mut self, range: &str) -> Self {
        self.merges.push(range.to_string());
        self
    }

    /// Use hand-written worksheet XML instead of generating it.
    #[must_use]
    pub fn raw_xml(mut self, xml: &str) -> Self {
        self.raw_xml = Some(xml.to_string());
        self
    }
}

// ============================================================================
// XLSX Builder
// ============================================================================

#[derive(Debug, Default)]
pub struct XlsxBuilder {
    sheets: Vec<SheetBuilder>,
    omit_workbook_rels: bool,
}

impl XlsxBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn sheet(mut self, sheet: SheetBuilder) -> Self {
        self.sheets.push(sheet);
        self
    }

    /// Start a new sheet and add cells to it fluently.
    #[must_use]
    pub fn add_sheet(self, name: &str) -> XlsxSheetAdder {
        XlsxSheetAdder {
            builder: self,
            sheet: SheetBuilder::new(name),
        }
    }

    /// Leave out `xl/_rels/workbook.xml.rels`, forcing conventional part names.
    #[must_use]
    pub fn without_workbook_rels(mut self) -> Self {
        self.omit_workbook_rels = true;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let cursor = Cursor::new(Vec::new());
        let mut zip = ZipWriter::new(cursor);
        let options = FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        let mut shared_strings: Vec<String> = Vec::new();
        for sheet in &self.sheets {
            for cell in &sheet.cells {
                if let CellValue::String(ref s) = cell.value {
                    if !shared_strings.contains(s) {
                        shared_strings.push(s.clone());
                    }
                }
            }
        }

        zip.start_file("[Content_Types].xml", options).unwrap();
        zip.write_all(generate_content_types(self.sheets.len()).as_bytes())
            .unwrap();

        zip.start_file("_rels/.rels", options).unwrap();
        zip.write_all(generate_rels().as_bytes()).unwrap();

        if !self.omit_workbook_rels {
            zip.start_file("xl/_rels/workbook.xml.rels", options).unwrap();
            zip.write_all(generate_workbook_rels(self.sheets.len()).as_bytes())
                .unwrap();
        }

        zip.start_file("xl/workbook.xml", options).unwrap();
        zip.write_all(generate_workbook(&self.sheets).as_bytes())
            .unwrap();

        if !shared_strings.is_empty() {
            zip.start_file("xl/sharedStrings.xml", options).unwrap();
            zip.write_all(generate_shared_strings(&shared_strings).as_bytes())
                .unwrap();
        }

        for (i, sheet) in self.sheets.iter().enumerate() {
            let path = format!("xl/worksheets/sheet{}.xml", i + 1);
            zip.start_file(&path, options).unwrap();
            let xml = match &sheet.raw_xml {
                Some(raw) => raw.clone(),
                None => generate_sheet_xml(sheet, &shared_strings),
            };
            zip.write_all(xml.as_bytes()).unwrap();
        }

        let cursor = zip.finish().expect("Failed to finish ZIP");
        cursor.into_inner()
    }
}

/// Helper for fluent sheet building within `XlsxBuilder`.
pub struct XlsxSheetAdder {
    builder: XlsxBuilder,
    sheet: SheetBuilder,
}

impl XlsxSheetAdder {
    #[must_use]
    pub fn add_cell<V: Into<CellValue>>(mut self, cell_ref: &str, value: V) -> Self {
        self.sheet = self.sheet.cell(cell_ref, value);
        self
    }

    #[must_use]
    pub fn merge(mut self, range: &str) -> Self {
        self.sheet = self.sheet.merge(range);
        self
    }

    /// Finish this sheet and return to the workbook builder.
    #[must_use]
    pub fn done(self) -> XlsxBuilder {
        self.builder.sheet(self.sheet)
    }

    /// Finish this sheet and start another.
    #[must_use]
    pub fn add_sheet(self, name: &str) -> XlsxSheetAdder {
        self.done().add_sheet(name)
    }

    /// Finish this sheet and leave out `xl/_rels/workbook.xml.rels`.
    #[must_use]
    pub fn without_workbook_rels(self) -> XlsxBuilder {
        self.done().without_workbook_rels()
    }

    pub fn build(self) -> Vec<u8> {
        self.done().build()
    }
}

// ============================================================================
// XML generation
// ============================================================================

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn generate_content_types(sheet_count: usize) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    xml.push_str(r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#);
    xml.push_str(r#"<Override PartName="/xl/sharedStrings.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml"/>"#);
    for i in 1..=sheet_count {
        xml.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{i}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
        ));
    }
    xml.push_str("</Types>");
    xml
}

fn generate_rels() -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    xml.push_str(r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>"#);
    xml.push_str("</Relationships>");
    xml
}

fn generate_workbook_rels(sheet_count: usize) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for i in 1..=sheet_count {
        xml.push_str(&format!(
            r#"<Relationship Id="rId{i}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{i}.xml"/>"#
        ));
    }
    xml.push_str(&format!(
        r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings" Target="sharedStrings.xml"/>"#,
        sheet_count + 1
    ));
    xml.push_str("</Relationships>");
    xml
}

fn generate_workbook(sheets: &[SheetBuilder]) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#);
    xml.push_str("<sheets>");
    for (i, sheet) in sheets.iter().enumerate() {
        xml.push_str(&format!(
            r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
            escape_xml(&sheet.name),
            i + 1,
            i + 1
        ));
    }
    xml.push_str("</sheets>");
    xml.push_str("</workbook>");
    xml
}

fn generate_shared_strings(strings: &[String]) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(&format!(
        r#"<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{}" uniqueCount="{}">"#,
        strings.len(),
        strings.len()
    ));
    for s in strings {
        xml.push_str(&format!(
            r#"<si><t xml:space="preserve">{}</t></si>"#,
            escape_xml(s)
        ));
    }
    xml.push_str("</sst>");
    xml
}

fn generate_sheet_xml(sheet: &SheetBuilder, shared_strings: &[String]) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    );
    xml.push_str("<sheetData>");

    let mut rows: std::collections::BTreeMap<u32, Vec<&CellEntry>> =
        std::collections::BTreeMap::new();
    for cell in &sheet.cells {
        rows.entry(row_of(&cell.cell_ref)).or_default().push(cell);
    }

    for (row_num, cells) in rows {
        xml.push_str(&format!(r#"<row r="{row_num}">"#));
        for cell in cells {
            let r = &cell.cell_ref;
            match &cell.value {
                CellValue::String(s) => {
                    let idx = shared_strings.iter().position(|x| x == s).unwrap_or(0);
                    xml.push_str(&format!(r#"<c r="{r}" t="s"><v>{idx}</v></c>"#));
                }
                CellValue::Number(n) => {
                    xml.push_str(&format!(r#"<c r="{r}"><v>{n}</v></c>"#));
                }
                CellValue::Boolean(b) => {
                    let v = if *b { "1" } else { "0" };
                    xml.push_str(&format!(r#"<c r="{r}" t="b"><v>{v}</v></c>"#));
                }
                CellValue::Error(e) => {
                    xml.push_str(&format!(
                        r#"<c r="{r}" t="e"><v>{}</v></c>"#,
                        escape_xml(e)
                    ));
                }
                CellValue::InlineString(s) => {
                    xml.push_str(&format!(
                        r#"<c r="{r}" t="inlineStr"><is><t>{}</t></is></c>"#,
                        escape_xml(s)
                    ));
                }
                CellValue::Formula { formula, cached } => {
                    xml.push_str(&format!(
                        r#"<c r="{r}" t="str"><f>{}</f><v>{}</v></c>"#,
                        escape_xml(formula),
                        escape_xml(cached)
                    ));
                }
                CellValue::Empty => {
                    xml.push_str(&format!(r#"<c r="{r}"/>"#));
                }
            }
        }
        xml.push_str("</row>");
    }

    xml.push_str("</sheetData>");

    if !sheet.merges.is_empty() {
        xml.push_str(&format!(r#"<mergeCells count="{}">"#, sheet.merges.len()));
        for merge in &sheet.merges {
            xml.push_str(&format!(r#"<mergeCell ref="{merge}"/>"#));
        }
        xml.push_str("</mergeCells>");
    }

    xml.push_str("</worksheet>");
    xml
}

/// Row number of a reference like `"B12"`.
fn row_of(cell_ref: &str) -> u32 {
    cell_ref
        .chars()
        .filter(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .unwrap_or(0)
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Workbook with one merged zone and one single-cell location.
#[must_use]
pub fn zone_and_rack_xlsx() -> Vec<u8> {
    XlsxBuilder::new()
        .add_sheet("Plano")
        .add_cell("A1", "ZONE A (50)")
        .merge("A1:B2")
        .add_cell("A3", "B12")
        .build()
}

/// Workbook with a general sheet and an NPR sheet.
#[must_use]
pub fn warehouse_xlsx() -> Vec<u8> {
    XlsxBuilder::new()
        .add_sheet("Plano")
        .add_cell("A1", "PASILLO 1")
        .merge("A1:D1")
        .add_cell("A2", "KIOSCO")
        .merge("A2:B3")
        .add_cell("C2", "RACK-01 (12)")
        .add_cell("D2", "P-4")
        .add_cell("C3", "RACK-02 (abc)")
        .add_cell("D3", 17)
        .add_sheet("NPR")
        .add_cell("A1", "SECTOR NORTE")
        .add_cell("A2", "S01")
        .add_cell("B2", "S02")
        .add_cell("A3", 1)
        .add_cell("A4", 2)
        .add_cell("A5", "P")
        .add_cell("B3", 10)
        .add_cell("B4", "X")
        .add_cell("C4", 99)
        .build()
}
