use serde::{Deserialize, Serialize};

use crate::error::{AuditError, Result};

/// A Standard on Auditing.
///
/// Standards are never mutated once registered; the code is the unique key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Standard {
    /// Standard code (e.g., "SA 200").
    pub code: String,
    /// Descriptive title of the standard.
    pub name: String,
}

impl Standard {
    /// Build a standard from raw input, trimming both fields.
    ///
    /// Fails with [`AuditError::InvalidStandard`] when either field is blank.
    pub fn new(code: impl AsRef<str>, name: impl AsRef<str>) -> Result<Self> {
        let code = code.as_ref().trim();
        let name = name.as_ref().trim();
        if code.is_empty() {
            return Err(AuditError::InvalidStandard {
                message: "code is empty".to_string(),
            });
        }
        if name.is_empty() {
            return Err(AuditError::InvalidStandard {
                message: format!("name for {code} is empty"),
            });
        }
        Ok(Self {
            code: code.to_string(),
            name: name.to_string(),
        })
    }
}
