//! Field extraction utilities for structured CSV records
//!
//! Numeric parsing follows the parse-or-zero policy: a cell that is
//! missing, empty, or not a number reads as zero rather than raising a
//! per-row error. Identity extraction is the one place that distinguishes
//! empty from zero.

use crate::app::services::csv::StructuredRecord;

/// Read an integer fee cell, coercing unparseable input to 0
pub fn parse_or_zero_i64(record: &StructuredRecord, field_name: &str) -> i64 {
    record
        .get(field_name)
        .and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(0)
}

/// Read a floating-point cell, coercing unparseable input to 0.0
pub fn parse_or_zero_f64(record: &StructuredRecord, field_name: &str) -> f64 {
    record
        .get(field_name)
        .and_then(|value| value.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Read a required identity cell, rejecting empty values
///
/// Returns `None` when the cell is absent or blank after trimming; the
/// caller skips the whole row in that case instead of zero-filling.
pub fn required_trimmed<'a>(record: &'a StructuredRecord, field_name: &str) -> Option<&'a str> {
    record
        .get(field_name)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}
