//! Error types for report generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while serializing or saving a report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    /// ZIP container could not be assembled.
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// An XML part or the in-memory archive could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The finished report could not be saved.
    #[error("failed to save {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    pub(crate) fn save(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Save {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_failures_surface_as_io() {
        let error = ReportError::from(std::io::Error::other("disk full"));
        assert!(matches!(error, ReportError::Io(_)));
        assert_eq!(error.to_string(), "I/O error: disk full");
    }

    #[test]
    fn save_error_names_the_path() {
        let error = ReportError::save(
            "reports/audit_compliance_report.xlsx",
            std::io::Error::other("read-only"),
        );
        assert_eq!(
            error.to_string(),
            "failed to save reports/audit_compliance_report.xlsx: read-only"
        );
    }
}
