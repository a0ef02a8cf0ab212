//! Configuration for ingestion runs
//!
//! Options are assembled from CLI arguments and validated before any
//! processing starts.

use crate::app::services::invoice_mapper::SchemaProfile;
use crate::{Error, Result};

/// Options controlling one ingestion run
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Upload schema the input file claims to follow
    pub profile: SchemaProfile,

    /// Treat any skipped row as a run failure
    ///
    /// Row-level skips remain non-fatal to the batch either way; strict
    /// mode only changes the final exit status once processing completes.
    pub strict: bool,

    /// Maximum number of row diagnostics to include in reports
    pub max_reported_issues: usize,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            profile: SchemaProfile::Billing,
            strict: false,
            max_reported_issues: 10,
        }
    }
}

impl IngestOptions {
    /// Validate option consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_reported_issues == 0 {
            return Err(Error::configuration(
                "max_reported_issues must be at least 1",
            ));
        }
        Ok(())
    }
}
