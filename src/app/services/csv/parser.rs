//! Core CSV parser implementation
//!
//! This module provides the parsing orchestration: line splitting, header
//! extraction, and zipping of data rows into header-keyed records.

use std::collections::HashMap;
use tracing::{debug, warn};

use super::stats::{ParseStats, RowShapeIssue};
use super::tokenizer::tokenize_row;
use crate::{Error, Result};

/// One CSV data row after header-keyed mapping, values still as strings
pub type StructuredRecord = HashMap<String, String>;

/// Parsing result with header order, records, and statistics
///
/// The ordered header list is carried alongside the records because
/// `HashMap` does not preserve column order and the writer needs it to
/// reproduce the source layout.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Header names in source column order
    pub headers: Vec<String>,

    /// Successfully parsed records, in source row order
    pub records: Vec<StructuredRecord>,

    /// Basic parsing statistics and row diagnostics
    pub stats: ParseStats,
}

/// CSV parser for management-fee upload text
///
/// A pure transformation: identical input always yields identical output,
/// with no shared state between invocations.
#[derive(Debug)]
pub struct CsvParser;

impl CsvParser {
    /// Parse CSV text into header-keyed records
    ///
    /// The first non-blank line is the header and defines the schema for
    /// all subsequent rows. Rows whose field count differs from the header
    /// are skipped with a diagnostic; processing always continues.
    ///
    /// Fails with [`Error::EmptyInput`] when the input has no non-blank
    /// lines, and with [`Error::InvalidHeader`] when the header row yields
    /// no usable field names.
    pub fn parse(text: &str) -> Result<ParseResult> {
        // Keep original 1-based line numbers for diagnostics; blank lines
        // are discarded but do not shift the numbering of later rows.
        let lines: Vec<(usize, &str)> = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line))
            .filter(|(_, line)| !line.trim().is_empty())
            .collect();

        let (&(_, header_line), data_lines) = lines
            .split_first()
            .ok_or_else(|| Error::empty_input("no non-blank lines in input"))?;

        let headers: Vec<String> = tokenize_row(header_line)
            .iter()
            .map(|name| name.trim().to_string())
            .collect();

        if headers.iter().all(|name| name.is_empty()) {
            return Err(Error::invalid_header("header row yields no field names"));
        }

        debug!("Parsed header with {} columns", headers.len());

        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        for &(line_no, line) in data_lines {
            stats.data_rows += 1;

            let fields = tokenize_row(line);
            if fields.len() != headers.len() {
                let issue = RowShapeIssue {
                    line: line_no,
                    expected: headers.len(),
                    actual: fields.len(),
                };
                warn!("Skipping row: {}", issue);
                stats.rows_skipped += 1;
                stats.issues.push(issue);
                continue;
            }

            let record: StructuredRecord = headers
                .iter()
                .cloned()
                .zip(fields.into_iter())
                .collect();
            records.push(record);
            stats.records_parsed += 1;
        }

        debug!(
            "Parsed {} records from {} data rows",
            stats.records_parsed, stats.data_rows
        );

        Ok(ParseResult {
            headers,
            records,
            stats,
        })
    }
}
