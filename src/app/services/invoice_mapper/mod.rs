//! Record mapping and fee aggregation for parsed CSV records
//!
//! This module turns header-keyed string records into typed
//! [`InvoiceRecord`](crate::app::models::InvoiceRecord) values: it
//! validates that the required schema fields are present in the header,
//! coerces numeric cells with the parse-or-zero policy, and skips rows
//! whose identity fields are empty.
//!
//! ## Architecture
//!
//! - [`schema`] - Schema profiles, required-column sets, header validation
//! - [`field_parsers`] - Field extraction and numeric coercion utilities
//! - [`mapper`] - Record-to-invoice mapping orchestration
//! - [`stats`] - Mapping statistics and row diagnostics
//!
//! ## Coercion policy
//!
//! Numeric cells never fail: unparseable or empty text coerces to zero.
//! This is deliberate best-effort ingestion matching the upload format's
//! established behavior, and it can mask data-entry mistakes; callers
//! that need strictness must pre-validate upstream.

pub mod field_parsers;
pub mod mapper;
pub mod schema;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use mapper::{InvoiceMapper, MapResult};
pub use schema::{validate_headers, SchemaProfile};
pub use stats::MapStats;
