//! Flattening of session state into report rows.

use audit_core::ComplianceStore;
use audit_model::{Compliance, ReportRow};
use audit_standards::StandardRegistry;

/// One row per registered standard, in registry order.
pub fn build_rows(registry: &StandardRegistry, store: &ComplianceStore) -> Vec<ReportRow> {
    registry
        .iter()
        .map(|standard| {
            let (done, notes) = store
                .record(&standard.code)
                .map_or((false, ""), |record| (record.done, record.notes.as_str()));
            ReportRow {
                code: standard.code.clone(),
                name: standard.name.clone(),
                compliant: Compliance::from(done),
                notes: notes.to_string(),
            }
        })
        .collect()
}
