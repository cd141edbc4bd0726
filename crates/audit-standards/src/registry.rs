use std::collections::HashMap;

use audit_model::{AuditError, Result, Standard};
use tracing::debug;

use crate::builtin::ICAI_STANDARDS;

/// Ordered registry of standards keyed by code.
///
/// Insertion order is the display and export order. Entries are never
/// removed or overwritten.
#[derive(Debug, Clone, Default)]
pub struct StandardRegistry {
    standards: Vec<Standard>,
    index: HashMap<String, usize>,
}

impl StandardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the ICAI catalogue.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (code, name) in ICAI_STANDARDS {
            registry.standards.push(Standard {
                code: (*code).to_string(),
                name: (*name).to_string(),
            });
            registry
                .index
                .insert((*code).to_string(), registry.standards.len() - 1);
        }
        registry
    }

    /// Build a registry from `(code, name)` pairs, failing on the first duplicate.
    pub fn from_standards<I, C, N>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (C, N)>,
        C: AsRef<str>,
        N: AsRef<str>,
    {
        let mut registry = Self::new();
        for (code, name) in entries {
            registry.add(code, name)?;
        }
        Ok(registry)
    }

    /// Name of the standard registered under `code`.
    pub fn lookup(&self, code: &str) -> Result<&str> {
        self.get(code)
            .map(|standard| standard.name.as_str())
            .ok_or_else(|| AuditError::not_found(code))
    }

    /// Register a new standard at the end of the display order.
    ///
    /// An existing code is never overwritten.
    pub fn add(&mut self, code: impl AsRef<str>, name: impl AsRef<str>) -> Result<&Standard> {
        let standard = Standard::new(code, name)?;
        if self.index.contains_key(&standard.code) {
            return Err(AuditError::already_exists(standard.code));
        }
        debug!(code = %standard.code, "registered standard");
        let position = self.standards.len();
        self.index.insert(standard.code.clone(), position);
        self.standards.push(standard);
        Ok(&self.standards[position])
    }

    pub fn get(&self, code: &str) -> Option<&Standard> {
        self.index
            .get(code.trim())
            .and_then(|&position| self.standards.get(position))
    }

    pub fn len(&self) -> usize {
        self.standards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.standards.is_empty()
    }

    /// Standards in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Standard> {
        self.standards.iter()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.standards.iter().map(|standard| standard.code.as_str())
    }
}

impl<'a> IntoIterator for &'a StandardRegistry {
    type Item = &'a Standard;
    type IntoIter = std::slice::Iter<'a, Standard>;

    fn into_iter(self) -> Self::IntoIter {
        self.standards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_starts_with_sa_200() {
        let registry = StandardRegistry::builtin();
        assert_eq!(registry.len(), ICAI_STANDARDS.len());
        assert_eq!(registry.codes().next(), Some("SA 200"));
        assert_eq!(registry.codes().last(), Some("SA 810"));
    }

    #[test]
    fn lookup_missing_code_fails() {
        let registry = StandardRegistry::builtin();
        let err = registry.lookup("SA 999").unwrap_err();
        assert_eq!(err, AuditError::not_found("SA 999"));
    }

    #[test]
    fn add_appends_in_order() {
        let mut registry = StandardRegistry::new();
        registry.add("SA 900", "First").unwrap();
        registry.add("SA 100", "Second").unwrap();
        let codes: Vec<&str> = registry.codes().collect();
        assert_eq!(codes, vec!["SA 900", "SA 100"]);
    }

    #[test]
    fn add_duplicate_does_not_overwrite() {
        let mut registry = StandardRegistry::builtin();
        let before = registry.len();
        let err = registry.add("SA 230", "Replacement").unwrap_err();
        assert_eq!(err, AuditError::already_exists("SA 230"));
        assert_eq!(registry.len(), before);
        assert_eq!(registry.lookup("SA 230").unwrap(), "Audit Documentation");
    }

    #[test]
    fn lookup_ignores_surrounding_whitespace() {
        let registry = StandardRegistry::builtin();
        assert_eq!(registry.lookup(" SA 500 ").unwrap(), "Audit Evidence");
    }

    #[test]
    fn from_standards_rejects_duplicates() {
        let result = StandardRegistry::from_standards([("SA 1", "A"), ("SA 1", "B")]);
        assert!(matches!(result, Err(AuditError::AlreadyExists { .. })));
    }
}
