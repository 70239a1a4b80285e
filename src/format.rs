//! Per-cell value formatting: trim, truncate, quote and escape

use chrono::NaiveTime;

use crate::model::CellValue;

/// Hard cap on a single field's character count, matching the cell
/// limit of common spreadsheet tools. Longer text is silently cut.
pub const MAX_FIELD_CHARS: usize = 30_000;

/// Format a single value into its output-ready field text.
///
/// Nulls become the empty string. Dates format as `YYYY-MM-DD`;
/// datetimes as `YYYY-MM-DD HH:MM:SS` unless the time is exactly
/// midnight, in which case the date form is used. Everything else uses
/// its default textual representation with surrounding whitespace
/// trimmed. The text is truncated to [`MAX_FIELD_CHARS`] characters
/// before the escaping check: a field containing the delimiter, a
/// double quote, or a newline is wrapped in double quotes with embedded
/// quotes doubled.
pub fn format_value(value: &CellValue, delimiter: &str) -> String {
    let raw = match value {
        CellValue::Null => String::new(),
        CellValue::Bool(b) => b.to_string(),
        CellValue::Int(i) => i.to_string(),
        CellValue::Float(f) => f.to_string(),
        CellValue::String(s) => s.trim().to_string(),
        CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        CellValue::DateTime(dt) => {
            if dt.time() == NaiveTime::MIN {
                dt.format("%Y-%m-%d").to_string()
            } else {
                dt.format("%Y-%m-%d %H:%M:%S").to_string()
            }
        }
    };

    escape(truncate_chars(raw), delimiter)
}

/// Cut `text` down to at most [`MAX_FIELD_CHARS`] characters
fn truncate_chars(mut text: String) -> String {
    if let Some((byte_index, _)) = text.char_indices().nth(MAX_FIELD_CHARS) {
        text.truncate(byte_index);
    }
    text
}

/// Quote the field if it contains the delimiter, a double quote, or a
/// newline character; embedded double quotes are doubled
fn escape(text: String, delimiter: &str) -> String {
    let needs_quoting = text.contains(delimiter)
        || text.contains('"')
        || text.contains('\n')
        || text.contains('\r');
    if !needs_quoting {
        return text;
    }

    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        if ch == '"' {
            quoted.push('"');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}
