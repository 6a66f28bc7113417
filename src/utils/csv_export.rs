//! CSV export of ingest items.
//!
//! Produces RFC 4180 text: CRLF row terminators, fields quoted only when
//! they contain a separator, quote or line break, embedded quotes doubled.

use std::fmt::Write;

use crate::domain::entities::Item;

/// Header row emitted before any data.
pub const HEADER: [&str; 4] = ["platform", "dateISO", "url", "text"];

/// Maximum caption length in characters.
pub const MAX_TEXT_CHARS: usize = 240;

const SEPARATOR: char = ',';
const LINE_END: &str = "\r\n";

/// Encodes items as CSV text, one row per item in their original order.
///
/// An empty slice yields the header row alone.
///
/// # Examples
///
/// ```ignore
/// let items = vec![Item::new("x", None, "https://x.com/a", Some("hi, there".into()))];
/// assert_eq!(
///     encode_items(&items),
///     "platform,dateISO,url,text\r\nx,,https://x.com/a,\"hi, there\"\r\n"
/// );
/// ```
pub fn encode_items(items: &[Item]) -> String {
    let mut out = String::new();
    write_row(&mut out, HEADER.iter().copied());

    for item in items {
        let text = clean_text(item.text.as_deref().unwrap_or_default());
        write_row(
            &mut out,
            [
                item.platform.as_str(),
                item.date_iso.as_deref().unwrap_or_default(),
                item.url.as_str(),
                text.as_str(),
            ],
        );
    }

    out
}

/// Flattens a caption onto one line, trims it and caps its length.
pub fn clean_text(text: &str) -> String {
    let flattened = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
    flattened.trim().chars().take(MAX_TEXT_CHARS).collect()
}

fn needs_quotes(field: &str) -> bool {
    field.contains(SEPARATOR) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn write_row<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        if needs_quotes(field) {
            let _ = write!(out, "\"{}\"", field.replace('"', "\"\""));
        } else {
            out.push_str(field);
        }
    }
    out.push_str(LINE_END);
}
