//! Data models for management-fee invoice processing
//!
//! This module contains the core data structures representing a single
//! unit's management-fee invoice: the fixed fee breakdown, metered usage
//! quantities, and batch-level aggregates derived from them.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Fee Breakdown
// =============================================================================

/// Fixed set of management-fee line items for one unit, in won
///
/// Every component is non-negative in well-formed data; unparseable or
/// missing input coerces to 0 during mapping. The invoice total is always
/// derived from these components via [`FeeBreakdown::total`], never stored
/// separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// General management fee
    pub general: i64,

    /// Security guard service fee
    pub security_guard: i64,

    /// Cleaning service fee
    pub cleaning: i64,

    /// Disinfection service fee
    pub disinfection: i64,

    /// Elevator maintenance fee
    pub elevator: i64,

    /// Common-area electricity fee
    pub electricity_common: i64,

    /// Elevator electricity fee
    pub electricity_elevator: i64,

    /// Water fee
    pub water: i64,

    /// Heating fee
    pub heating: i64,

    /// Hot water fee
    pub hot_water: i64,

    /// Building insurance fee
    pub insurance: i64,

    /// Repairs fee
    pub repairs: i64,

    /// Long-term repair reserve contribution
    pub long_term_repairs: i64,

    /// Operating expenses
    pub expenses: i64,
}

impl FeeBreakdown {
    /// Sum of all fee components
    ///
    /// Flat arithmetic sum with no rounding; recomputed on every call so
    /// the total can never drift from the components.
    pub fn total(&self) -> i64 {
        self.general
            + self.security_guard
            + self.cleaning
            + self.disinfection
            + self.elevator
            + self.electricity_common
            + self.electricity_elevator
            + self.water
            + self.heating
            + self.hot_water
            + self.insurance
            + self.repairs
            + self.long_term_repairs
            + self.expenses
    }

    /// Fee components paired with their canonical column names
    ///
    /// Order follows [`fee_columns::ALL`](crate::constants::fee_columns::ALL).
    pub fn components(&self) -> [(&'static str, i64); 14] {
        use crate::constants::fee_columns;
        let values = [
            self.general,
            self.security_guard,
            self.cleaning,
            self.disinfection,
            self.elevator,
            self.electricity_common,
            self.electricity_elevator,
            self.water,
            self.heating,
            self.hot_water,
            self.insurance,
            self.repairs,
            self.long_term_repairs,
            self.expenses,
        ];
        std::array::from_fn(|i| (fee_columns::ALL[i], values[i]))
    }
}

// =============================================================================
// Usage Breakdown
// =============================================================================

/// Metered usage quantities for one unit
///
/// Quantities are non-negative in well-formed data and coerce to 0.0 on
/// parse failure, matching the fee coercion policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageBreakdown {
    /// Water usage in tons
    pub water: f64,

    /// Heating usage in Gcal
    pub heating: f64,

    /// Hot water usage in tons
    pub hot_water: f64,

    /// Electricity usage in kWh
    pub electricity: f64,
}

// =============================================================================
// Invoice Record
// =============================================================================

/// A single unit's management-fee invoice
///
/// The long-lived artifact of CSV ingestion, handed to callers once the
/// mapper has validated identity fields and coerced all numeric cells.
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Unit label (e.g. "101호") - primary display key
    pub unit: String,

    /// Resident name
    pub resident_name: String,

    /// Floor area in square meters
    pub area: f64,

    /// Management-fee line items
    pub fees: FeeBreakdown,

    /// Metered usage quantities
    pub usage: UsageBreakdown,
}

impl InvoiceRecord {
    /// Create a new invoice record with identity validation
    pub fn new(
        unit: String,
        resident_name: String,
        area: f64,
        fees: FeeBreakdown,
        usage: UsageBreakdown,
    ) -> Result<Self> {
        if unit.trim().is_empty() {
            return Err(Error::data_validation("Unit label cannot be empty"));
        }
        if resident_name.trim().is_empty() {
            return Err(Error::data_validation("Resident name cannot be empty"));
        }

        Ok(Self {
            unit,
            resident_name,
            area,
            fees,
            usage,
        })
    }

    /// Total amount billed for this invoice
    pub fn total(&self) -> i64 {
        self.fees.total()
    }
}

// =============================================================================
// Derived Metrics
// =============================================================================

/// Fee per unit of usage, rounded to the nearest won
///
/// Returns `None` when usage is zero: the caller must render a placeholder
/// rather than a divided value, so `Infinity`/`NaN` never reaches display
/// output.
pub fn unit_price(fee: i64, usage: f64) -> Option<i64> {
    if usage == 0.0 {
        None
    } else {
        Some((fee as f64 / usage).round() as i64)
    }
}

// =============================================================================
// Batch Summary
// =============================================================================

/// Aggregate figures over a mapped invoice batch
///
/// Used by bulk views and reports: per-component sums across all units
/// plus the grand total billed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of invoices in the batch
    pub invoice_count: usize,

    /// Per-component fee sums across the batch
    pub fee_totals: FeeBreakdown,

    /// Grand total billed across the batch
    pub total_billed: i64,
}

impl BatchSummary {
    /// Compute summary figures from a batch of invoices
    pub fn from_invoices(invoices: &[InvoiceRecord]) -> Self {
        let mut fee_totals = FeeBreakdown::default();
        for invoice in invoices {
            fee_totals.general += invoice.fees.general;
            fee_totals.security_guard += invoice.fees.security_guard;
            fee_totals.cleaning += invoice.fees.cleaning;
            fee_totals.disinfection += invoice.fees.disinfection;
            fee_totals.elevator += invoice.fees.elevator;
            fee_totals.electricity_common += invoice.fees.electricity_common;
            fee_totals.electricity_elevator += invoice.fees.electricity_elevator;
            fee_totals.water += invoice.fees.water;
            fee_totals.heating += invoice.fees.heating;
            fee_totals.hot_water += invoice.fees.hot_water;
            fee_totals.insurance += invoice.fees.insurance;
            fee_totals.repairs += invoice.fees.repairs;
            fee_totals.long_term_repairs += invoice.fees.long_term_repairs;
            fee_totals.expenses += invoice.fees.expenses;
        }

        Self {
            invoice_count: invoices.len(),
            total_billed: fee_totals.total(),
            fee_totals,
        }
    }
}
