//! Schema profiles and header validation
//!
//! Two upload schemas exist at the call sites: full billing files carrying
//! every fee column, and usage-reading files carrying only metered
//! quantities. Both share the identity columns.

use crate::constants::{usage_reading_columns, IDENTITY_COLUMNS};
use crate::{Error, Result};

/// Upload schema variant for an ingestion run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaProfile {
    /// Full billing upload: identity columns required, fee and usage
    /// columns read with parse-or-zero coercion
    Billing,

    /// Usage-reading upload: identity plus the four metered columns
    /// required, no fee data
    Usage,
}

impl SchemaProfile {
    /// Header fields that must be present for this profile
    pub fn required_columns(&self) -> Vec<&'static str> {
        match self {
            // Fee columns are intentionally not required: a missing fee
            // column reads as zero, matching the coercion policy.
            SchemaProfile::Billing => IDENTITY_COLUMNS.to_vec(),
            SchemaProfile::Usage => {
                let mut columns = IDENTITY_COLUMNS.to_vec();
                columns.extend_from_slice(usage_reading_columns::ALL);
                columns
            }
        }
    }
}

/// Validate that every required field appears in the header row
///
/// Fails with [`Error::MissingHeaders`] naming exactly the absent fields,
/// before any row is processed. Matching is exact (case-sensitive) on the
/// trimmed header names produced by the parser.
pub fn validate_headers(headers: &[String], required: &[&str]) -> Result<()> {
    let missing: Vec<String> = required
        .iter()
        .filter(|name| !headers.iter().any(|header| header == *name))
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::missing_headers(missing))
    }
}
