//! Compliance report generation.
//!
//! Session state is flattened into [`ReportRow`](audit_model::ReportRow)s by
//! [`build_rows`] and serialized as:
//!
//! - **XLSX**: workbook with the compliance sheet and an info sheet
//! - **DOCX**: title, audit date line and the compliance table
//!
//! Both formats are minimal Office Open XML packages assembled in memory.

mod docx;
mod error;
mod export;
mod ooxml;
mod rows;
mod xlsx;

pub use docx::{document_title, write_docx};
pub use error::{ReportError, Result};
pub use export::{
    ExportArtifact, ExportFormat, REPORT_BASE_NAME, SessionExport, export, export_document,
    export_tabular, write_artifact,
};
pub use rows::build_rows;
pub use xlsx::{COMPLIANCE_SHEET_NAME, INFO_COLUMNS, INFO_SHEET_NAME, column_name, write_xlsx};
