//! Session state and command handlers for the audit compliance checklist.

pub mod session;
pub mod store;

pub use session::{AddOutcome, AuditSession};
pub use store::ComplianceStore;
