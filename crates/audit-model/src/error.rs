use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuditError {
    #[error("standard {code} not found")]
    NotFound { code: String },
    #[error("standard {code} already exists")]
    AlreadyExists { code: String },
    #[error("invalid standard: {message}")]
    InvalidStandard { message: String },
}

impl AuditError {
    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    pub fn already_exists(code: impl Into<String>) -> Self {
        Self::AlreadyExists { code: code.into() }
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;
