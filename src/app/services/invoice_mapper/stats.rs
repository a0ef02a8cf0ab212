//! Mapping statistics for invoice batch construction

use serde::{Deserialize, Serialize};

/// Statistics for one mapping pass over a parsed record batch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapStats {
    /// Total number of structured records considered
    pub records_total: usize,

    /// Number of invoices successfully mapped
    pub invoices_mapped: usize,

    /// Number of records skipped (empty identity fields)
    pub records_skipped: usize,

    /// Row-level diagnostics for skipped records
    pub errors: Vec<String>,
}

impl MapStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.records_total == 0 {
            0.0
        } else {
            (self.invoices_mapped as f64 / self.records_total as f64) * 100.0
        }
    }
}
