//! Session configuration assembled from command-line flags.

use std::path::PathBuf;

use audit_model::{AuditContext, DEFAULT_CLIENT_NAME};
use chrono::{Local, NaiveDate};

/// Date format accepted on the command line and in session commands.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub client_name: String,
    pub audit_date: NaiveDate,
    /// Directory that receives exported reports.
    pub output_dir: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            client_name: DEFAULT_CLIENT_NAME.to_string(),
            audit_date: Local::now().date_naive(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl SessionConfig {
    /// Apply optional overrides on top of the defaults.
    pub fn from_overrides(
        client_name: Option<String>,
        audit_date: Option<NaiveDate>,
        output_dir: Option<PathBuf>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            client_name: client_name.unwrap_or(defaults.client_name),
            audit_date: audit_date.unwrap_or(defaults.audit_date),
            output_dir: output_dir.unwrap_or(defaults.output_dir),
        }
    }

    pub fn context(&self) -> AuditContext {
        AuditContext::new(self.client_name.clone(), self.audit_date)
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_audit_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_checklist_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.client_name, "XYZ Ltd");
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn overrides_replace_defaults() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let config =
            SessionConfig::from_overrides(Some("ACME".to_string()), Some(date), None);
        assert_eq!(config.client_name, "ACME");
        assert_eq!(config.context().audit_date, date);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(
            parse_audit_date(" 2024-04-01 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
        );
        assert!(parse_audit_date("01/04/2024").is_err());
        assert!(parse_audit_date("2024-02-30").is_err());
    }
}
