//! Data model for the audit compliance checklist.
//!
//! - [`Standard`]: a Standard on Auditing identified by code (e.g. "SA 200")
//! - [`ComplianceRecord`]: the done/notes pair tracked against one standard
//! - [`AuditContext`]: client name and audit date attached to exports
//! - [`ReportRow`]: one flattened row of the compliance report

pub mod compliance;
pub mod context;
pub mod error;
pub mod report;
pub mod standard;

pub use compliance::{Compliance, ComplianceRecord, Progress};
pub use context::{AuditContext, DEFAULT_CLIENT_NAME};
pub use error::{AuditError, Result};
pub use report::{REPORT_COLUMNS, ReportRow};
pub use standard::Standard;
