//! Audit session context and command handlers.
//!
//! An [`AuditSession`] owns everything one auditor edits during a run: the
//! standard registry, the compliance store and the audit context. The
//! presentation layer calls the `on_*` handlers; nothing else mutates the
//! session.

use audit_model::{AuditContext, AuditError, ComplianceRecord, Progress, Result, Standard};
use audit_standards::StandardRegistry;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::store::ComplianceStore;

/// Result of an add-standard request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The standard was registered with a blank compliance record.
    Added(Standard),
    /// The code already exists; nothing changed.
    Duplicate { code: String },
    /// Code or name was blank; nothing changed.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct AuditSession {
    registry: StandardRegistry,
    store: ComplianceStore,
    context: AuditContext,
}

impl AuditSession {
    pub fn new(registry: StandardRegistry, context: AuditContext) -> Self {
        let store = ComplianceStore::initialize(&registry);
        Self {
            registry,
            store,
            context,
        }
    }

    /// Session over the built-in ICAI catalogue.
    pub fn with_builtin_standards(context: AuditContext) -> Self {
        Self::new(StandardRegistry::builtin(), context)
    }

    pub fn registry(&self) -> &StandardRegistry {
        &self.registry
    }

    pub fn store(&self) -> &ComplianceStore {
        &self.store
    }

    pub fn context(&self) -> &AuditContext {
        &self.context
    }

    pub fn on_set_client(&mut self, client_name: impl Into<String>) {
        self.context.client_name = client_name.into();
        debug!(client = %self.context.client_name, "client name updated");
    }

    pub fn on_set_date(&mut self, audit_date: NaiveDate) {
        self.context.audit_date = audit_date;
        debug!(date = %audit_date, "audit date updated");
    }

    /// Register a new standard together with its compliance record.
    pub fn on_add_standard(&mut self, code: &str, name: &str) -> AddOutcome {
        if code.trim().is_empty() || name.trim().is_empty() {
            return AddOutcome::Ignored;
        }
        match self.registry.add(code, name) {
            Ok(standard) => {
                let standard = standard.clone();
                self.store.insert(&standard.code);
                info!(code = %standard.code, "added standard");
                AddOutcome::Added(standard)
            }
            Err(AuditError::AlreadyExists { code }) => {
                warn!(code = %code, "standard already exists");
                AddOutcome::Duplicate { code }
            }
            Err(_) => AddOutcome::Ignored,
        }
    }

    pub fn on_toggle_done(&mut self, code: &str, done: bool) -> Result<()> {
        self.store.set_done(code, done)?;
        debug!(code = code.trim(), done, "compliance flag updated");
        Ok(())
    }

    pub fn on_edit_notes(&mut self, code: &str, notes: impl Into<String>) -> Result<()> {
        let notes = notes.into();
        let length = notes.len();
        self.store.set_notes(code, notes)?;
        // Note text may hold client details; log the size only.
        debug!(code = code.trim(), length, "notes updated");
        Ok(())
    }

    pub fn on_reset(&mut self) {
        self.store.reset_all();
        info!(total = self.store.len(), "compliance data reset");
    }

    /// Standard name for `code`.
    pub fn lookup(&self, code: &str) -> Result<&str> {
        self.registry.lookup(code)
    }

    pub fn summary(&self) -> Progress {
        self.store.summary()
    }

    pub fn pending(&self) -> Vec<&Standard> {
        self.store.pending(&self.registry)
    }

    /// Every standard paired with its record, in registry order.
    pub fn checklist(&self) -> impl Iterator<Item = (&Standard, &ComplianceRecord)> {
        self.registry.iter().filter_map(|standard| {
            self.store
                .record(&standard.code)
                .map(|record| (standard, record))
        })
    }
}

impl Default for AuditSession {
    fn default() -> Self {
        Self::with_builtin_standards(AuditContext::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> AuditSession {
        let registry = StandardRegistry::from_standards([
            ("SA 200", "Overall Objectives"),
            ("SA 210", "Agreeing Terms"),
        ])
        .unwrap();
        AuditSession::new(registry, AuditContext::default())
    }

    #[test]
    fn blank_add_is_ignored() {
        let mut session = session();
        assert_eq!(session.on_add_standard("", "Name"), AddOutcome::Ignored);
        assert_eq!(session.on_add_standard("SA 900", "   "), AddOutcome::Ignored);
        assert_eq!(session.registry().len(), 2);
        assert_eq!(session.store().len(), 2);
    }

    #[test]
    fn checklist_pairs_records_with_standards() {
        let mut session = session();
        session.on_edit_notes("SA 210", "Signed").unwrap();
        let entries: Vec<(&str, &str)> = session
            .checklist()
            .map(|(standard, record)| (standard.code.as_str(), record.notes.as_str()))
            .collect();
        assert_eq!(entries, vec![("SA 200", ""), ("SA 210", "Signed")]);
    }

    #[test]
    fn context_handlers_update_metadata() {
        let mut session = session();
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        session.on_set_client("ABC Industries");
        session.on_set_date(date);
        assert_eq!(session.context().client_name, "ABC Industries");
        assert_eq!(session.context().audit_date, date);
    }
}
