//! Per-session compliance records.

use std::collections::HashMap;

use audit_model::{AuditError, ComplianceRecord, Progress, Result, Standard};
use audit_standards::StandardRegistry;

/// Done/notes state for every registered standard.
///
/// Records are kept in registry insertion order. The store never decides
/// which codes exist; [`crate::AuditSession`] inserts into the registry and
/// the store together.
#[derive(Debug, Clone, Default)]
pub struct ComplianceStore {
    records: Vec<ComplianceRecord>,
    index: HashMap<String, usize>,
}

impl ComplianceStore {
    /// One fresh record per registry entry.
    pub fn initialize(registry: &StandardRegistry) -> Self {
        let mut store = Self::default();
        for code in registry.codes() {
            store.insert(code);
        }
        store
    }

    /// Add a fresh record for `code`; an existing record is left untouched.
    pub fn insert(&mut self, code: &str) -> &ComplianceRecord {
        let position = match self.index.get(code) {
            Some(&position) => position,
            None => {
                self.records.push(ComplianceRecord::new(code));
                let position = self.records.len() - 1;
                self.index.insert(code.to_string(), position);
                position
            }
        };
        &self.records[position]
    }

    pub fn set_done(&mut self, code: &str, done: bool) -> Result<()> {
        self.record_mut(code)?.done = done;
        Ok(())
    }

    pub fn set_notes(&mut self, code: &str, notes: impl Into<String>) -> Result<()> {
        self.record_mut(code)?.notes = notes.into();
        Ok(())
    }

    /// Return every record to `{done: false, notes: ""}`.
    pub fn reset_all(&mut self) {
        for record in &mut self.records {
            record.clear();
        }
    }

    pub fn summary(&self) -> Progress {
        Progress {
            done: self.records.iter().filter(|record| record.done).count(),
            total: self.records.len(),
        }
    }

    /// Standards not yet marked done, in registry order.
    pub fn pending<'r>(&self, registry: &'r StandardRegistry) -> Vec<&'r Standard> {
        registry
            .iter()
            .filter(|standard| {
                self.record(&standard.code)
                    .is_none_or(|record| !record.done)
            })
            .collect()
    }

    pub fn record(&self, code: &str) -> Option<&ComplianceRecord> {
        self.index
            .get(code.trim())
            .and_then(|&position| self.records.get(position))
    }

    pub fn records(&self) -> impl Iterator<Item = &ComplianceRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn record_mut(&mut self, code: &str) -> Result<&mut ComplianceRecord> {
        let position = *self
            .index
            .get(code.trim())
            .ok_or_else(|| AuditError::not_found(code.trim()))?;
        Ok(&mut self.records[position])
    }
}
