//! Export artifacts and session export handlers.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use audit_core::AuditSession;
use audit_model::{AuditContext, ReportRow};
use tempfile::NamedTempFile;
use tracing::info;

use crate::docx::write_docx;
use crate::error::{ReportError, Result};
use crate::rows::build_rows;
use crate::xlsx::write_xlsx;

/// Base name shared by both report files.
pub const REPORT_BASE_NAME: &str = "audit_compliance_report";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Spreadsheet workbook.
    Xlsx,
    /// Word-processing document.
    Docx,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Xlsx, ExportFormat::Docx];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Docx => "docx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// Default download name, e.g. `audit_compliance_report.xlsx`.
    pub fn file_name(&self) -> String {
        format!("{REPORT_BASE_NAME}.{}", self.extension())
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "Excel",
            ExportFormat::Docx => "Word",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A complete in-memory report ready to be offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub format: ExportFormat,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

/// Render rows and context in the requested format.
pub fn export(
    format: ExportFormat,
    rows: &[ReportRow],
    context: &AuditContext,
) -> Result<ExportArtifact> {
    let bytes = match format {
        ExportFormat::Xlsx => write_xlsx(rows, context)?,
        ExportFormat::Docx => write_docx(rows, context)?,
    };
    Ok(ExportArtifact {
        format,
        file_name: format.file_name(),
        bytes,
    })
}

/// Spreadsheet export of the given rows.
pub fn export_tabular(rows: &[ReportRow], context: &AuditContext) -> Result<ExportArtifact> {
    export(ExportFormat::Xlsx, rows, context)
}

/// Document export of the given rows.
pub fn export_document(rows: &[ReportRow], context: &AuditContext) -> Result<ExportArtifact> {
    export(ExportFormat::Docx, rows, context)
}

/// Save an artifact under `output_dir`.
///
/// The file is written to a temporary sibling and renamed into place, so a
/// failed export never leaves a partial report behind.
pub fn write_artifact(output_dir: &Path, artifact: &ExportArtifact) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|e| ReportError::save(output_dir, e))?;
    let path = output_dir.join(&artifact.file_name);
    let mut temp = NamedTempFile::new_in(output_dir).map_err(|e| ReportError::save(&path, e))?;
    temp.write_all(&artifact.bytes)
        .and_then(|()| temp.flush())
        .map_err(|e| ReportError::save(&path, e))?;
    temp.persist(&path)
        .map_err(|e| ReportError::save(&path, e.error))?;
    info!(
        path = %path.display(),
        format = %artifact.format,
        bytes = artifact.bytes.len(),
        "report saved"
    );
    Ok(path)
}

/// Export handlers for an [`AuditSession`].
pub trait SessionExport {
    /// Report rows for the current session state.
    fn build_rows(&self) -> Vec<ReportRow>;

    fn on_export(&self, format: ExportFormat) -> Result<ExportArtifact>;

    fn on_export_tabular(&self) -> Result<ExportArtifact> {
        self.on_export(ExportFormat::Xlsx)
    }

    fn on_export_document(&self) -> Result<ExportArtifact> {
        self.on_export(ExportFormat::Docx)
    }
}

impl SessionExport for AuditSession {
    fn build_rows(&self) -> Vec<ReportRow> {
        build_rows(self.registry(), self.store())
    }

    fn on_export(&self, format: ExportFormat) -> Result<ExportArtifact> {
        let rows = SessionExport::build_rows(self);
        let artifact = export(format, &rows, self.context())?;
        info!(
            format = %format,
            rows = rows.len(),
            bytes = artifact.bytes.len(),
            "exported compliance report"
        );
        Ok(artifact)
    }
}
