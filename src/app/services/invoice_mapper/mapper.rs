//! Record-to-invoice mapping orchestration
//!
//! Consumes the parser's output and produces typed invoice records with
//! computed fee breakdowns. Header validation is fatal for the batch;
//! row-level problems skip the row and continue.

use tracing::{debug, warn};

use super::field_parsers::{parse_or_zero_f64, parse_or_zero_i64, required_trimmed};
use super::schema::{validate_headers, SchemaProfile};
use super::stats::MapStats;
use crate::app::models::{FeeBreakdown, InvoiceRecord, UsageBreakdown};
use crate::app::services::csv::{ParseResult, StructuredRecord};
use crate::constants::{fee_columns, usage_columns, usage_reading_columns, COL_AREA, COL_RESIDENT_NAME, COL_UNIT};
use crate::Result;

/// Mapping result with invoices and statistics
#[derive(Debug, Clone)]
pub struct MapResult {
    /// Successfully mapped invoice records, in source order
    pub invoices: Vec<InvoiceRecord>,

    /// Mapping statistics and row diagnostics
    pub stats: MapStats,
}

/// Maps parsed CSV records to invoice records for one schema profile
#[derive(Debug, Clone)]
pub struct InvoiceMapper {
    profile: SchemaProfile,
}

impl InvoiceMapper {
    /// Create a mapper for the given schema profile
    pub fn new(profile: SchemaProfile) -> Self {
        Self { profile }
    }

    /// Map a parsed batch into invoice records
    ///
    /// Validates the required header set for the profile up front; a
    /// missing header aborts the whole batch with nothing produced.
    /// Individual records with empty identity fields are skipped with a
    /// diagnostic and never abort the batch.
    pub fn map(&self, parsed: &ParseResult) -> Result<MapResult> {
        self.map_with_required(parsed, &self.profile.required_columns())
    }

    /// Map a parsed batch, validating against a caller-supplied required set
    pub fn map_with_required(
        &self,
        parsed: &ParseResult,
        required_fields: &[&str],
    ) -> Result<MapResult> {
        validate_headers(&parsed.headers, required_fields)?;

        let mut stats = MapStats::new();
        let mut invoices = Vec::with_capacity(parsed.records.len());

        for (index, record) in parsed.records.iter().enumerate() {
            stats.records_total += 1;

            // Record numbering is 1-based over the parsed batch
            match self.map_record(record) {
                Ok(invoice) => {
                    invoices.push(invoice);
                    stats.invoices_mapped += 1;
                }
                Err(reason) => {
                    warn!("Skipping record {}: {}", index + 1, reason);
                    stats.records_skipped += 1;
                    stats.errors.push(format!("record {}: {}", index + 1, reason));
                }
            }
        }

        debug!(
            "Mapped {} invoices from {} records ({} skipped)",
            stats.invoices_mapped, stats.records_total, stats.records_skipped
        );

        Ok(MapResult { invoices, stats })
    }

    /// Map one structured record, or explain why it must be skipped
    fn map_record(&self, record: &StructuredRecord) -> std::result::Result<InvoiceRecord, String> {
        let unit = required_trimmed(record, COL_UNIT)
            .ok_or_else(|| format!("empty required field '{}'", COL_UNIT))?;
        let resident_name = required_trimmed(record, COL_RESIDENT_NAME)
            .ok_or_else(|| format!("empty required field '{}'", COL_RESIDENT_NAME))?;
        // Area is identity-required as text even though it parses leniently
        required_trimmed(record, COL_AREA)
            .ok_or_else(|| format!("empty required field '{}'", COL_AREA))?;

        let area = parse_or_zero_f64(record, COL_AREA);
        let (fees, usage) = match self.profile {
            SchemaProfile::Billing => (parse_fees(record), parse_usage(record)),
            SchemaProfile::Usage => (FeeBreakdown::default(), parse_usage_readings(record)),
        };

        InvoiceRecord::new(unit.to_string(), resident_name.to_string(), area, fees, usage)
            .map_err(|e| e.to_string())
    }
}

/// Parse the 14 fee components from a billing record
fn parse_fees(record: &StructuredRecord) -> FeeBreakdown {
    FeeBreakdown {
        general: parse_or_zero_i64(record, fee_columns::GENERAL),
        security_guard: parse_or_zero_i64(record, fee_columns::SECURITY_GUARD),
        cleaning: parse_or_zero_i64(record, fee_columns::CLEANING),
        disinfection: parse_or_zero_i64(record, fee_columns::DISINFECTION),
        elevator: parse_or_zero_i64(record, fee_columns::ELEVATOR),
        electricity_common: parse_or_zero_i64(record, fee_columns::ELECTRICITY_COMMON),
        electricity_elevator: parse_or_zero_i64(record, fee_columns::ELECTRICITY_ELEVATOR),
        water: parse_or_zero_i64(record, fee_columns::WATER),
        heating: parse_or_zero_i64(record, fee_columns::HEATING),
        hot_water: parse_or_zero_i64(record, fee_columns::HOT_WATER),
        insurance: parse_or_zero_i64(record, fee_columns::INSURANCE),
        repairs: parse_or_zero_i64(record, fee_columns::REPAIRS),
        long_term_repairs: parse_or_zero_i64(record, fee_columns::LONG_TERM_REPAIRS),
        expenses: parse_or_zero_i64(record, fee_columns::EXPENSES),
    }
}

/// Parse metered usage from the suffixed billing columns
fn parse_usage(record: &StructuredRecord) -> UsageBreakdown {
    UsageBreakdown {
        water: parse_or_zero_f64(record, usage_columns::WATER),
        heating: parse_or_zero_f64(record, usage_columns::HEATING),
        hot_water: parse_or_zero_f64(record, usage_columns::HOT_WATER),
        electricity: parse_or_zero_f64(record, usage_columns::ELECTRICITY),
    }
}

/// Parse metered usage from the plain reading-upload columns
fn parse_usage_readings(record: &StructuredRecord) -> UsageBreakdown {
    UsageBreakdown {
        water: parse_or_zero_f64(record, usage_reading_columns::WATER),
        heating: parse_or_zero_f64(record, usage_reading_columns::HEATING),
        hot_water: parse_or_zero_f64(record, usage_reading_columns::HOT_WATER),
        electricity: parse_or_zero_f64(record, usage_reading_columns::ELECTRICITY),
    }
}
