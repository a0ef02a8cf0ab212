//! Parsing statistics and diagnostics for CSV processing
//!
//! Row-local problems are never fatal: they are collected here so callers
//! can surface a skipped-row count alongside the successful records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic for a data row whose field count did not match the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowShapeIssue {
    /// 1-based line number in the source text (header is line 1)
    pub line: usize,

    /// Field count declared by the header row
    pub expected: usize,

    /// Field count actually found in this row
    pub actual: usize,
}

impl fmt::Display for RowShapeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: expected {} fields, found {}",
            self.line, self.expected, self.actual
        )
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total number of non-blank data rows encountered
    pub data_rows: usize,

    /// Number of records successfully parsed
    pub records_parsed: usize,

    /// Number of rows skipped due to shape mismatches
    pub rows_skipped: usize,

    /// Shape diagnostics for skipped rows
    pub issues: Vec<RowShapeIssue>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.data_rows == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.data_rows as f64) * 100.0
        }
    }

    /// One-line summary suitable for user-facing reports
    pub fn summary(&self) -> String {
        if self.rows_skipped == 0 {
            format!("{} rows parsed", self.records_parsed)
        } else {
            format!(
                "{} rows parsed, {} rows skipped",
                self.records_parsed, self.rows_skipped
            )
        }
    }
}
