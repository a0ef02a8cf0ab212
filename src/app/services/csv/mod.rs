//! CSV parsing for management-fee upload files
//!
//! This module provides a line-oriented CSV parser matched to the upload
//! format used by the invoice pipeline: comma-delimited fields, optional
//! double-quote quoting with doubled-quote escaping, `\n` or `\r\n` line
//! endings, first line as header.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Parsing orchestration: header extraction and row zipping
//! - [`tokenizer`] - Single-line quote-aware field tokenizer
//! - [`writer`] - Serialization of record batches back to CSV text
//! - [`stats`] - Parsing statistics and row-shape diagnostics
//!
//! ## Known limitation
//!
//! Input is split into lines before quote-aware scanning, so a quoted
//! field containing a literal newline is mis-split. This mirrors the
//! behavior of the upload format's producers and is preserved
//! deliberately; quotes never span lines.
//!
//! ## Usage
//!
//! ```rust
//! use invoice_processor::app::services::csv::CsvParser;
//!
//! # fn example() -> invoice_processor::Result<()> {
//! let result = CsvParser::parse("unit,area\n101호,84.5")?;
//!
//! println!(
//!     "Parsed {} records, skipped {} rows",
//!     result.stats.records_parsed, result.stats.rows_skipped
//! );
//! # Ok(())
//! # }
//! ```

pub mod parser;
pub mod stats;
pub mod tokenizer;
pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::{CsvParser, ParseResult, StructuredRecord};
pub use stats::{ParseStats, RowShapeIssue};
pub use tokenizer::tokenize_row;
pub use writer::to_csv;
