//! Application constants for the invoice processor
//!
//! This module contains the canonical CSV column names and required-field
//! sets used throughout the ingestion pipeline. Column names follow the
//! header contract of the management-fee upload format.

// =============================================================================
// Identity Columns
// =============================================================================

/// Column holding the unit label (e.g. "101호")
pub const COL_UNIT: &str = "unit";

/// Column holding the floor area in square meters
pub const COL_AREA: &str = "area";

/// Column holding the resident name
pub const COL_RESIDENT_NAME: &str = "residentName";

/// Identity columns that must be present and non-empty for every row
pub const IDENTITY_COLUMNS: &[&str] = &[COL_UNIT, COL_AREA, COL_RESIDENT_NAME];

// =============================================================================
// Fee Columns (billing profile)
// =============================================================================

/// Fee component column names, one per management-fee line item
pub mod fee_columns {
    pub const GENERAL: &str = "general";
    pub const SECURITY_GUARD: &str = "securityGuard";
    pub const CLEANING: &str = "cleaning";
    pub const DISINFECTION: &str = "disinfection";
    pub const ELEVATOR: &str = "elevator";
    pub const ELECTRICITY_COMMON: &str = "electricityCommon";
    pub const ELECTRICITY_ELEVATOR: &str = "electricityElevator";
    pub const WATER: &str = "water";
    pub const HEATING: &str = "heating";
    pub const HOT_WATER: &str = "hotWater";
    pub const INSURANCE: &str = "insurance";
    pub const REPAIRS: &str = "repairs";
    pub const LONG_TERM_REPAIRS: &str = "longTermRepairs";
    pub const EXPENSES: &str = "expenses";

    /// All fee component columns in display order
    pub const ALL: &[&str] = &[
        GENERAL,
        SECURITY_GUARD,
        CLEANING,
        DISINFECTION,
        ELEVATOR,
        ELECTRICITY_COMMON,
        ELECTRICITY_ELEVATOR,
        WATER,
        HEATING,
        HOT_WATER,
        INSURANCE,
        REPAIRS,
        LONG_TERM_REPAIRS,
        EXPENSES,
    ];
}

// =============================================================================
// Usage Columns
// =============================================================================

/// Metered usage column names for the billing profile
///
/// These carry the "Usage" suffix because the plain names (`water`,
/// `heating`, `hotWater`) denote fee amounts in billing uploads.
pub mod usage_columns {
    pub const WATER: &str = "waterUsage";
    pub const HEATING: &str = "heatingUsage";
    pub const HOT_WATER: &str = "hotWaterUsage";
    pub const ELECTRICITY: &str = "electricityUsage";
}

/// Metered usage column names for the usage-reading profile
///
/// Usage-only uploads carry readings under the plain component names.
pub mod usage_reading_columns {
    pub const WATER: &str = "water";
    pub const HEATING: &str = "heating";
    pub const HOT_WATER: &str = "hotWater";
    pub const ELECTRICITY: &str = "electricity";

    pub const ALL: &[&str] = &[WATER, HEATING, HOT_WATER, ELECTRICITY];
}

// =============================================================================
// Usage Units
// =============================================================================

/// Display units for metered usage quantities
pub mod usage_units {
    pub const WATER: &str = "t";
    pub const HEATING: &str = "Gcal";
    pub const HOT_WATER: &str = "t";
    pub const ELECTRICITY: &str = "kWh";
}
