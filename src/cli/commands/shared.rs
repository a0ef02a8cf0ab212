//! Shared components for CLI commands
//!
//! Common statistics, logging setup, and file helpers used across the
//! command implementations.

use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// Processing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of data rows seen by the parser
    pub rows_seen: usize,

    /// Number of rows skipped for shape mismatches
    pub rows_skipped: usize,

    /// Number of invoices mapped
    pub invoices_mapped: usize,

    /// Number of records skipped during mapping
    pub records_skipped: usize,

    /// Grand total billed across the mapped batch
    pub total_billed: i64,

    /// Total processing time
    pub processing_time: std::time::Duration,
}

impl ProcessingStats {
    /// Total number of rows dropped anywhere in the pipeline
    pub fn total_skipped(&self) -> usize {
        self.rows_skipped + self.records_skipped
    }
}

/// Set up structured logging from verbosity flags
///
/// `RUST_LOG` takes precedence over the flag-derived level when set.
pub fn setup_logging(log_level: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("invoice_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Read an input CSV file with path context on failure
pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("failed to read input file {}", path.display()), e))
}

/// Format a won amount with thousands separators
pub fn format_amount(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-{}원", grouped)
    } else {
        format!("{}원", grouped)
    }
}
