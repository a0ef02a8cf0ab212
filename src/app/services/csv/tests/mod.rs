//! Test utilities and fixtures for CSV parser testing
//!
//! This module provides common fixture builders shared across the CSV
//! test modules.

use super::parser::StructuredRecord;

mod stats_tests;
mod tokenizer_tests;

/// Helper to create a complete billing-profile CSV fixture
pub fn create_billing_csv() -> String {
    "unit,area,residentName,general,securityGuard,cleaning,disinfection,elevator,\
     electricityCommon,electricityElevator,water,heating,hotWater,insurance,repairs,\
     longTermRepairs,expenses,waterUsage,heatingUsage,hotWaterUsage,electricityUsage\n\
     101호,84.5,김철수,50000,30000,20000,5000,15000,10000,5000,25000,40000,20000,3000,10000,20000,7000,24,1.5,12,350\n\
     102호,59.8,이영희,45000,30000,20000,5000,15000,9000,5000,20000,35000,15000,3000,10000,20000,6000,18,1.2,9,280"
        .to_string()
}

/// Helper to create a usage-profile CSV fixture
pub fn create_usage_csv() -> String {
    "unit,area,residentName,water,heating,hotWater,electricity\n\
     101호,84.5,김철수,24,1.5,12,350\n\
     102호,59.8,이영희,18,1.2,9,280"
        .to_string()
}

/// Helper to build a structured record from key/value pairs
pub fn record_from_pairs(pairs: &[(&str, &str)]) -> StructuredRecord {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
