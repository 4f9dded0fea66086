//! Worksheet parsing - streams one sheet part into a [`Worksheet`].

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::{BufReader, Read, Seek};
use zip::ZipArchive;

use crate::cell_ref::{parse_cell_ref_bytes, parse_range_ref};
use crate::error::{Result, XlmapError};
use crate::types::{CellValue, Worksheet};
use crate::xml_helpers::{attr_string, read_element_text};

/// Sheet metadata from workbook.xml
#[derive(Debug, Clone)]
pub(super) struct SheetInfo {
    pub name: String,
    pub path: String,
}

/// Cell type tag from the `t` attribute of a `<c>` element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum CellTypeTag {
    Shared,
    Inline,
    Str,
    Bool,
    Error,
    Date,
    Number,
}

pub(super) fn parse_cell_type_tag(value: &[u8]) -> CellTypeTag {
    match value {
        b"s" => CellTypeTag::Shared,
        b"b" => CellTypeTag::Bool,
        b"e" => CellTypeTag::Error,
        b"str" => CellTypeTag::Str,
        b"inlineStr" => CellTypeTag::Inline,
        b"d" => CellTypeTag::Date,
        _ => CellTypeTag::Number,
    }
}

/// Turn the raw `<v>` / inline text of a cell into a typed value.
pub(super) fn resolve_cell_value(
    raw: Option<String>,
    tag: CellTypeTag,
    shared_strings: &[String],
) -> CellValue {
    let Some(raw) = raw else {
        return CellValue::Empty;
    };

    match tag {
        CellTypeTag::Shared => raw
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|idx| shared_strings.get(idx))
            .map_or(CellValue::Empty, |s| CellValue::Text(s.clone())),
        CellTypeTag::Inline | CellTypeTag::Str | CellTypeTag::Error | CellTypeTag::Date => {
            CellValue::Text(raw)
        }
        CellTypeTag::Bool => {
            let truthy = matches!(raw.trim(), "1" | "true" | "TRUE");
            CellValue::Text(if truthy { "TRUE" } else { "FALSE" }.to_string())
        }
        CellTypeTag::Number => CellValue::from_numeric_text(&raw),
    }
}

/// Position and type of a `<c>` element. A missing `r` attribute means
/// "next column in the current row".
fn parse_cell_attrs(e: &BytesStart, current_row: u32, next_col: u32) -> (u32, u32, CellTypeTag) {
    let mut pos = None;
    let mut tag = CellTypeTag::Number;

    for attr in e.attributes().flatten() {
        match attr.key.as_ref() {
            b"r" => pos = parse_cell_ref_bytes(&attr.value),
            b"t" => tag = parse_cell_type_tag(&attr.value),
            _ => {}
        }
    }

    let (row, col) = pos.unwrap_or((current_row, next_col));
    (row, col, tag)
}

/// Read the children of a non-empty `<c>` element and return its value text.
///
/// `<v>` holds the stored value, `<is>` an inline string; `<f>` (formula)
/// is ignored so only cached results are seen.
fn read_cell_contents<R: std::io::BufRead>(
    xml: &mut Reader<R>,
    buf: &mut Vec<u8>,
    text_buf: &mut Vec<u8>,
) -> Result<Option<String>> {
    let mut value = None;

    loop {
        buf.clear();
        match xml.read_event_into(buf)? {
            Event::Start(ref inner) => match inner.local_name().as_ref() {
                b"v" => value = Some(read_element_text(xml, text_buf, b"v")?),
                b"is" => value = Some(read_element_text(xml, text_buf, b"is")?),
                b"f" => {
                    read_element_text(xml, text_buf, b"f")?;
                }
                _ => {}
            },
            Event::End(ref inner) if inner.local_name().as_ref() == b"c" => break,
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(value)
}

/// Parse a single worksheet part.
pub(super) fn parse_sheet<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    info: &SheetInfo,
    shared_strings: &[String],
) -> Result<Worksheet> {
    let file = archive.by_name(&info.path)?;

    let reader = BufReader::new(file);
    let mut xml = Reader::from_reader(reader);
    xml.trim_text(false);

    let mut sheet = Worksheet::new(info.name.clone());

    let mut buf = Vec::new();
    let mut cell_buf = Vec::new();
    let mut text_buf = Vec::new();
    let mut current_row: u32 = 0;
    let mut next_col: u32 = 1;

    loop {
        buf.clear();
        let event = xml.read_event_into(&mut buf)?;
        let (e, is_start_event) = match &event {
            Event::Start(e) => (e, true),
            Event::Empty(e) => (e, false),
            Event::Eof => break,
            _ => continue,
        };

        match e.local_name().as_ref() {
            b"row" => {
                current_row = attr_string(e, b"r")
                    .and_then(|s| s.trim().parse().ok())
                    .unwrap_or(current_row.saturating_add(1));
                next_col = 1;
            }

            b"c" => {
                let (row, col, tag) = parse_cell_attrs(e, current_row, next_col);
                next_col = col.saturating_add(1);

                let raw = if is_start_event {
                    read_cell_contents(&mut xml, &mut cell_buf, &mut text_buf)?
                } else {
                    None
                };

                let value = resolve_cell_value(raw, tag, shared_strings);
                sheet.set_value(row, col, value);
            }

            b"mergeCell" => {
                let range_ref = attr_string(e, b"ref").unwrap_or_default();
                let range =
                    parse_range_ref(&range_ref).ok_or(XlmapError::CellRef(range_ref))?;
                sheet.add_merge(range);
            }

            _ => {}
        }
    }

    tracing::debug!(
        sheet = %info.name,
        cells = sheet.cell_count(),
        merges = sheet.merged_ranges().len(),
        max_row = sheet.max_row(),
        max_col = sheet.max_column(),
        "parsed worksheet"
    );

    Ok(sheet)
}
