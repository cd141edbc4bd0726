//! Tests for audit-model types.

use audit_model::{
    AuditContext, AuditError, Compliance, ComplianceRecord, Progress, REPORT_COLUMNS, ReportRow,
    Standard,
};
use chrono::NaiveDate;

#[test]
fn report_row_cells_follow_column_order() {
    let record = ComplianceRecord {
        code: "SA 200".to_string(),
        done: true,
        notes: "Engagement letter on file".to_string(),
    };
    let row = ReportRow {
        code: record.code.clone(),
        name: "Overall Objectives of the Independent Auditor".to_string(),
        compliant: record.compliance(),
        notes: record.notes.clone(),
    };
    assert_eq!(REPORT_COLUMNS, ["SA Code", "Standard Name", "Compliant", "Notes"]);
    assert_eq!(
        row.cells(),
        [
            "SA 200",
            "Overall Objectives of the Independent Auditor",
            "Yes",
            "Engagement letter on file"
        ]
    );
}

#[test]
fn compliance_serializes_as_variant_name() {
    let json = serde_json::to_string(&Compliance::No).expect("serialize compliance");
    assert_eq!(json, "\"No\"");
}

#[test]
fn context_serializes_date_as_iso() {
    let context = AuditContext::new(
        "XYZ Ltd",
        NaiveDate::from_ymd_opt(2025, 1, 31).expect("valid date"),
    );
    let json = serde_json::to_value(&context).expect("serialize context");
    assert_eq!(json["audit_date"], "2025-01-31");
    assert_eq!(json["client_name"], "XYZ Ltd");
}

#[test]
fn progress_tuple_matches_fields() {
    let progress = Progress { done: 1, total: 2 };
    assert_eq!(progress.as_tuple(), (1, 2));
    assert_eq!(progress.percent_complete(), 50);
}

#[test]
fn error_messages_name_the_code() {
    assert_eq!(
        AuditError::not_found("SA 999").to_string(),
        "standard SA 999 not found"
    );
    assert_eq!(
        AuditError::already_exists("SA 200").to_string(),
        "standard SA 200 already exists"
    );
}

#[test]
fn standard_equality_is_structural() {
    let a = Standard::new("SA 500", "Audit Evidence").unwrap();
    let b = Standard::new("SA 500 ", "Audit Evidence").unwrap();
    assert_eq!(a, b);
}
