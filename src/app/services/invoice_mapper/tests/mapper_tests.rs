//! Tests for the record-to-invoice mapping pass

use super::{parsed_billing_fixture, parsed_usage_fixture};
use crate::app::services::csv::CsvParser;
use crate::app::services::invoice_mapper::{InvoiceMapper, SchemaProfile};
use crate::Error;

#[test]
fn test_billing_fixture_maps_both_rows() {
    let mapper = InvoiceMapper::new(SchemaProfile::Billing);
    let result = mapper.map(&parsed_billing_fixture()).unwrap();

    assert_eq!(result.invoices.len(), 2);
    assert_eq!(result.stats.invoices_mapped, 2);
    assert_eq!(result.stats.records_skipped, 0);

    let first = &result.invoices[0];
    assert_eq!(first.unit, "101호");
    assert_eq!(first.resident_name, "김철수");
    assert_eq!(first.area, 84.5);
    assert_eq!(first.fees.general, 50_000);
    assert_eq!(first.fees.expenses, 7_000);
    assert_eq!(first.usage.water, 24.0);
    assert_eq!(first.usage.electricity, 350.0);
    assert_eq!(
        first.total(),
        50_000 + 30_000 + 20_000 + 5_000 + 15_000 + 10_000 + 5_000 + 25_000 + 40_000 + 20_000
            + 3_000 + 10_000 + 20_000 + 7_000
    );
}

#[test]
fn test_usage_profile_maps_readings_without_fees() {
    let mapper = InvoiceMapper::new(SchemaProfile::Usage);
    let result = mapper.map(&parsed_usage_fixture()).unwrap();

    assert_eq!(result.invoices.len(), 2);
    let second = &result.invoices[1];
    assert_eq!(second.usage.heating, 1.2);
    assert_eq!(second.usage.hot_water, 9.0);
    assert_eq!(second.fees.total(), 0);
}

#[test]
fn test_missing_required_header_aborts_batch() {
    let parsed = CsvParser::parse("unit,area\n101호,84.5").unwrap();
    let mapper = InvoiceMapper::new(SchemaProfile::Billing);

    match mapper.map(&parsed) {
        Err(Error::MissingHeaders { missing }) => {
            assert_eq!(missing, vec!["residentName"]);
        }
        other => panic!("expected MissingHeaders, got {:?}", other),
    }
}

#[test]
fn test_usage_profile_missing_metered_column_is_fatal() {
    let parsed =
        CsvParser::parse("unit,area,residentName,water,heating,hotWater\n101호,84.5,김철수,1,2,3")
            .unwrap();
    let mapper = InvoiceMapper::new(SchemaProfile::Usage);

    match mapper.map(&parsed) {
        Err(Error::MissingHeaders { missing }) => {
            assert_eq!(missing, vec!["electricity"]);
        }
        other => panic!("expected MissingHeaders, got {:?}", other),
    }
}

#[test]
fn test_empty_identity_field_skips_row_only() {
    let text = "unit,area,residentName\n101호,84.5,김철수\n,59.8,이영희\n103호,72.0,  ";
    let parsed = CsvParser::parse(text).unwrap();
    let mapper = InvoiceMapper::new(SchemaProfile::Billing);
    let result = mapper.map(&parsed).unwrap();

    assert_eq!(result.invoices.len(), 1);
    assert_eq!(result.invoices[0].unit, "101호");
    assert_eq!(result.stats.records_skipped, 2);
    assert_eq!(result.stats.errors.len(), 2);
    assert!(result.stats.errors[0].contains("record 2"));
    assert!(result.stats.errors[0].contains("unit"));
    assert!(result.stats.errors[1].contains("residentName"));
}

#[test]
fn test_empty_area_skips_row() {
    // Area is identity-required even though numeric cells normally zero-fill
    let text = "unit,area,residentName\n101호,,김철수";
    let parsed = CsvParser::parse(text).unwrap();
    let result = InvoiceMapper::new(SchemaProfile::Billing).map(&parsed).unwrap();

    assert!(result.invoices.is_empty());
    assert_eq!(result.stats.records_skipped, 1);
}

#[test]
fn test_unparseable_numeric_cells_zero_fill() {
    let text = "unit,area,residentName,general,waterUsage\n101호,84.5,김철수,abc,n/a";
    let parsed = CsvParser::parse(text).unwrap();
    let result = InvoiceMapper::new(SchemaProfile::Billing).map(&parsed).unwrap();

    let invoice = &result.invoices[0];
    assert_eq!(invoice.fees.general, 0);
    assert_eq!(invoice.usage.water, 0.0);
    // Coercion failures are silent: no diagnostics are recorded
    assert!(result.stats.errors.is_empty());
}

#[test]
fn test_absent_fee_columns_read_as_zero() {
    let text = "unit,area,residentName\n101호,84.5,김철수";
    let parsed = CsvParser::parse(text).unwrap();
    let result = InvoiceMapper::new(SchemaProfile::Billing).map(&parsed).unwrap();

    assert_eq!(result.invoices[0].fees.total(), 0);
}

#[test]
fn test_custom_required_set_overrides_profile() {
    let parsed = CsvParser::parse("unit,area,residentName\n101호,84.5,김철수").unwrap();
    let mapper = InvoiceMapper::new(SchemaProfile::Billing);

    let result = mapper.map_with_required(&parsed, &["unit", "general"]);
    match result {
        Err(Error::MissingHeaders { missing }) => assert_eq!(missing, vec!["general"]),
        other => panic!("expected MissingHeaders, got {:?}", other),
    }
}

#[test]
fn test_success_rate_reflects_skips() {
    let text = "unit,area,residentName\n101호,84.5,김철수\n,59.8,이영희";
    let parsed = CsvParser::parse(text).unwrap();
    let result = InvoiceMapper::new(SchemaProfile::Billing).map(&parsed).unwrap();
    assert_eq!(result.stats.success_rate(), 50.0);
}
