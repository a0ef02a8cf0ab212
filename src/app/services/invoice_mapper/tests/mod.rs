//! Test fixtures for the invoice mapper

use crate::app::services::csv::{CsvParser, ParseResult};

mod mapper_tests;
mod schema_tests;

/// Parse a billing-profile fixture with two well-formed rows
pub fn parsed_billing_fixture() -> ParseResult {
    let text = "unit,area,residentName,general,securityGuard,cleaning,disinfection,elevator,\
                electricityCommon,electricityElevator,water,heating,hotWater,insurance,repairs,\
                longTermRepairs,expenses,waterUsage,heatingUsage,hotWaterUsage,electricityUsage\n\
                101호,84.5,김철수,50000,30000,20000,5000,15000,10000,5000,25000,40000,20000,3000,10000,20000,7000,24,1.5,12,350\n\
                102호,59.8,이영희,45000,30000,20000,5000,15000,9000,5000,20000,35000,15000,3000,10000,20000,6000,18,1.2,9,280";
    CsvParser::parse(text).unwrap()
}

/// Parse a usage-profile fixture
pub fn parsed_usage_fixture() -> ParseResult {
    let text = "unit,area,residentName,water,heating,hotWater,electricity\n\
                101호,84.5,김철수,24,1.5,12,350\n\
                102호,59.8,이영희,18,1.2,9,280";
    CsvParser::parse(text).unwrap()
}
