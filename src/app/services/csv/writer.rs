//! Serialization of record batches back to CSV text
//!
//! The writer is the exact inverse of the tokenizer for every field it
//! quotes: a field containing a comma, quote, or newline is wrapped in
//! double quotes with embedded quotes doubled.

use super::parser::StructuredRecord;

/// Serialize records to CSV text using the given column order
///
/// Values are looked up by header name; a record missing a column emits
/// an empty field. Returns an empty string when no columns are given.
/// No trailing newline is appended.
pub fn to_csv(headers: &[String], records: &[StructuredRecord]) -> String {
    if headers.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|name| escape_field(name))
            .collect::<Vec<_>>()
            .join(","),
    );

    for record in records {
        let row = headers
            .iter()
            .map(|name| escape_field(record.get(name).map(String::as_str).unwrap_or("")))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }

    lines.join("\n")
}

/// Quote a field when it contains a delimiter, quote, or newline
fn escape_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
