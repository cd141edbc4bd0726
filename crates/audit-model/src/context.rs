use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Client name used when none has been entered.
pub const DEFAULT_CLIENT_NAME: &str = "XYZ Ltd";

/// Free-form metadata attached to exports. Not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditContext {
    pub client_name: String,
    pub audit_date: NaiveDate,
}

impl AuditContext {
    pub fn new(client_name: impl Into<String>, audit_date: NaiveDate) -> Self {
        Self {
            client_name: client_name.into(),
            audit_date,
        }
    }

    /// Audit date in `YYYY-MM-DD` form, as printed on reports.
    pub fn audit_date_text(&self) -> String {
        self.audit_date.format("%Y-%m-%d").to_string()
    }
}

impl Default for AuditContext {
    fn default() -> Self {
        Self::new(DEFAULT_CLIENT_NAME, Local::now().date_naive())
    }
}
