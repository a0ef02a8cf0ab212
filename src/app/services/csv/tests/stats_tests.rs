//! Tests for parsing statistics

use crate::app::services::csv::stats::{ParseStats, RowShapeIssue};

#[test]
fn test_success_rate_with_no_rows() {
    let stats = ParseStats::new();
    assert_eq!(stats.success_rate(), 0.0);
}

#[test]
fn test_success_rate_partial() {
    let stats = ParseStats {
        data_rows: 4,
        records_parsed: 3,
        rows_skipped: 1,
        issues: vec![RowShapeIssue {
            line: 5,
            expected: 3,
            actual: 2,
        }],
    };
    assert_eq!(stats.success_rate(), 75.0);
}

#[test]
fn test_summary_mentions_skips_only_when_present() {
    let mut stats = ParseStats {
        data_rows: 2,
        records_parsed: 2,
        rows_skipped: 0,
        issues: vec![],
    };
    assert_eq!(stats.summary(), "2 rows parsed");

    stats.rows_skipped = 1;
    assert!(stats.summary().contains("1 rows skipped"));
}

#[test]
fn test_issue_display_names_line_and_counts() {
    let issue = RowShapeIssue {
        line: 7,
        expected: 20,
        actual: 19,
    };
    assert_eq!(issue.to_string(), "line 7: expected 20 fields, found 19");
}
