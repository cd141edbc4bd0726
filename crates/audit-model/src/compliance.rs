use std::fmt;

use serde::{Deserialize, Serialize};

/// Compliance status as it appears in exported reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compliance {
    Yes,
    No,
}

impl Compliance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Compliance::Yes => "Yes",
            Compliance::No => "No",
        }
    }
}

impl From<bool> for Compliance {
    fn from(done: bool) -> Self {
        if done { Compliance::Yes } else { Compliance::No }
    }
}

impl fmt::Display for Compliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Done flag and free-text notes tracked against one standard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceRecord {
    pub code: String,
    pub done: bool,
    pub notes: String,
}

impl ComplianceRecord {
    /// A fresh record: not done, no notes.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            done: false,
            notes: String::new(),
        }
    }

    /// Return the record to its initial state, keeping the code.
    pub fn clear(&mut self) {
        self.done = false;
        self.notes.clear();
    }

    pub fn compliance(&self) -> Compliance {
        Compliance::from(self.done)
    }
}

/// Completed versus total standards for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

impl Progress {
    pub fn pending_count(&self) -> usize {
        self.total.saturating_sub(self.done)
    }

    /// Whole-number completion percentage; 0 when there are no standards.
    pub fn percent_complete(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.done * 100 / self.total
        }
    }

    pub fn as_tuple(&self) -> (usize, usize) {
        (self.done, self.total)
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.done, self.total)
    }
}
