//! Invoice Processor Library
//!
//! A Rust library for ingesting building management-fee data from CSV
//! format into validated, structured invoice records.
//!
//! This library provides tools for:
//! - Parsing delimiter-quoted CSV text with proper quote/escape handling
//! - Validating required header fields against a declared schema
//! - Coercing raw string fields into fee and usage breakdowns
//! - Computing derived totals and per-unit prices for display
//! - Serializing record batches back to canonical CSV
//! - Comprehensive error handling with row-level diagnostics

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv;
        pub mod invoice_mapper;
        pub mod invoice_store;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{BatchSummary, FeeBreakdown, InvoiceRecord, UsageBreakdown};
pub use app::services::csv::CsvParser;
pub use app::services::invoice_mapper::InvoiceMapper;
pub use config::IngestOptions;

/// Result type alias for the invoice processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for invoice processing operations
///
/// Only batch-fatal conditions are represented here. Row-local issues
/// (shape mismatches, empty identity fields) are reported as diagnostics
/// in the parsing/mapping statistics and never abort a batch.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input contained no usable lines
    #[error("CSV input is empty: {message}")]
    EmptyInput { message: String },

    /// Header row could not be used as a schema
    #[error("Invalid CSV header: {message}")]
    InvalidHeader { message: String },

    /// Required schema fields absent from the header row
    #[error("Missing required headers: {}", missing.join(", "))]
    MissingHeaders { missing: Vec<String> },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Report serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an empty-input error
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Create an invalid-header error
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Create a missing-headers error naming the absent fields
    pub fn missing_headers(missing: Vec<String>) -> Self {
        Self::MissingHeaders { missing }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
