//! Shared XML helpers for the XLSX decoder.
//!
//! Attribute lookups tolerate namespace prefixes and invalid UTF-8 (treated
//! as missing). Text reading propagates XML errors so a corrupt part fails
//! the decode instead of silently truncating.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;

use crate::error::Result;

/// Extract a string attribute value by key.
///
/// Returns `None` if the attribute is missing or not valid UTF-8.
pub fn attr_string(e: &BytesStart, key: &[u8]) -> Option<String> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == key {
            return std::str::from_utf8(&attr.value).ok().map(|s| s.to_string());
        }
    }
    None
}

/// Extract a string attribute by local name (ignoring namespace prefix).
pub fn attr_string_local(e: &BytesStart, key: &[u8]) -> Option<String> {
    for attr in e.attributes().flatten() {
        if attr.key.local_name().as_ref() == key {
            return std::str::from_utf8(&attr.value).ok().map(|s| s.to_string());
        }
    }
    None
}

/// Read the text content of the element whose start tag was just consumed,
/// up to and including its end tag.
///
/// Nested elements are skipped but their text is kept, so `<t>a<x/>b</t>`
/// yields `"ab"`. Entities are unescaped.
pub fn read_element_text<R: BufRead>(
    xml: &mut Reader<R>,
    buf: &mut Vec<u8>,
    end: &[u8],
) -> Result<String> {
    let mut text = String::new();
    let mut depth: usize = 0;

    loop {
        buf.clear();
        match xml.read_event_into(buf)? {
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::CData(t) => text.push_str(&String::from_utf8_lossy(&t.into_inner())),
            Event::Start(ref e) if e.local_name().as_ref() == end => depth += 1,
            Event::End(ref e) if e.local_name().as_ref() == end => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}
