use serde::{Deserialize, Serialize};

use crate::compliance::Compliance;

/// Column headers shared by every report format.
pub const REPORT_COLUMNS: [&str; 4] = ["SA Code", "Standard Name", "Compliant", "Notes"];

/// One flattened report row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub code: String,
    pub name: String,
    pub compliant: Compliance,
    pub notes: String,
}

impl ReportRow {
    /// Cell values in [`REPORT_COLUMNS`] order.
    pub fn cells(&self) -> [&str; 4] {
        [
            self.code.as_str(),
            self.name.as_str(),
            self.compliant.as_str(),
            self.notes.as_str(),
        ]
    }
}
