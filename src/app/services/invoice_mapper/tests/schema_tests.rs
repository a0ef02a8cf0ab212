//! Tests for schema profiles and header validation

use crate::app::services::invoice_mapper::schema::{validate_headers, SchemaProfile};
use crate::Error;

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_billing_profile_requires_identity_only() {
    assert_eq!(
        SchemaProfile::Billing.required_columns(),
        vec!["unit", "area", "residentName"]
    );
}

#[test]
fn test_usage_profile_requires_metered_columns() {
    let required = SchemaProfile::Usage.required_columns();
    assert_eq!(
        required,
        vec!["unit", "area", "residentName", "water", "heating", "hotWater", "electricity"]
    );
}

#[test]
fn test_validation_passes_when_all_present() {
    let result = validate_headers(&headers(&["unit", "area", "residentName"]), &["unit", "area"]);
    assert!(result.is_ok());
}

#[test]
fn test_validation_names_exactly_the_missing_fields() {
    let result = validate_headers(&headers(&["a", "b"]), &["a", "b", "c"]);

    match result {
        Err(Error::MissingHeaders { missing }) => assert_eq!(missing, vec!["c"]),
        other => panic!("expected MissingHeaders, got {:?}", other),
    }
}

#[test]
fn test_validation_reports_multiple_missing_fields() {
    let result = validate_headers(&headers(&["unit"]), &["unit", "area", "residentName"]);

    match result {
        Err(Error::MissingHeaders { missing }) => {
            assert_eq!(missing, vec!["area", "residentName"]);
        }
        other => panic!("expected MissingHeaders, got {:?}", other),
    }
}

#[test]
fn test_missing_headers_message_is_human_readable() {
    let error = validate_headers(&headers(&["unit"]), &["unit", "area", "residentName"])
        .unwrap_err();
    let message = error.to_string();
    assert!(message.contains("area"));
    assert!(message.contains("residentName"));
}

#[test]
fn test_matching_is_case_sensitive() {
    let result = validate_headers(&headers(&["Unit"]), &["unit"]);
    assert!(result.is_err());
}
