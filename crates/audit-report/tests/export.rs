//! Integration tests for XLSX and DOCX export.

use std::io::{Cursor, Read};

use audit_core::AuditSession;
use audit_model::{AuditContext, Compliance};
use audit_report::{
    ExportFormat, SessionExport, build_rows, export_document, export_tabular, write_artifact,
};
use audit_standards::StandardRegistry;
use chrono::NaiveDate;
use quick_xml::Reader;
use quick_xml::events::Event;

const SA_200_NAME: &str = "Overall Objectives of the Independent Auditor";
const SA_210_NAME: &str = "Agreeing the Terms of Audit Engagements";

fn test_session() -> AuditSession {
    let registry =
        StandardRegistry::from_standards([("SA 200", SA_200_NAME), ("SA 210", SA_210_NAME)])
            .unwrap();
    let context = AuditContext::new("XYZ Ltd", NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
    AuditSession::new(registry, context)
}

/// Read one part of an OOXML package as text.
fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("open package");
    let mut part = archive.by_name(name).expect("part present");
    let mut text = String::new();
    part.read_to_string(&mut text).expect("read part");
    text
}

fn part_names(bytes: &[u8]) -> Vec<String> {
    let archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("open package");
    archive.file_names().map(str::to_string).collect()
}

/// Collect the cells of an XML table.
///
/// `row_tag` opens a row, `cell_tag` opens a cell, and text inside any of
/// `text_tags` is appended to the current cell.
fn table_cells(xml: &str, row_tag: &[u8], cell_tag: &[u8], text_tags: &[&[u8]]) -> Vec<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut in_text = false;
    loop {
        match reader.read_event().expect("valid xml") {
            Event::Start(element) => {
                let name = element.name();
                if name.as_ref() == row_tag {
                    rows.push(Vec::new());
                } else if name.as_ref() == cell_tag {
                    if let Some(row) = rows.last_mut() {
                        row.push(String::new());
                    }
                } else if text_tags.contains(&name.as_ref()) {
                    in_text = true;
                }
            }
            Event::End(element) => {
                if text_tags.contains(&element.name().as_ref()) {
                    in_text = false;
                }
            }
            Event::Text(text) if in_text => {
                let value = std::str::from_utf8(&text).expect("utf-8 text");
                if let Some(cell) = rows.last_mut().and_then(|row| row.last_mut()) {
                    cell.push_str(value);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    rows
}

fn sheet_rows(bytes: &[u8], sheet: usize) -> Vec<Vec<String>> {
    let xml = read_part(bytes, &format!("xl/worksheets/sheet{sheet}.xml"));
    table_cells(&xml, b"row", b"c", &[b"t", b"v"])
}

fn document_table(bytes: &[u8]) -> Vec<Vec<String>> {
    let xml = read_part(bytes, "word/document.xml");
    table_cells(&xml, b"w:tr", b"w:tc", &[b"w:t"])
}

#[test]
fn rows_follow_registry_and_flags() {
    let mut session = test_session();
    session.on_toggle_done("SA 200", true).unwrap();

    let rows = build_rows(session.registry(), session.store());

    assert_eq!(rows.len(), session.registry().len());
    assert_eq!(rows[0].compliant, Compliance::Yes);
    assert_eq!(rows[1].compliant, Compliance::No);
}

#[test]
fn tabular_export_has_compliance_and_info_sheets() {
    let mut session = test_session();
    session.on_toggle_done("SA 200", true).unwrap();
    session.on_edit_notes("SA 210", "Awaiting signed letter").unwrap();

    let artifact = session.on_export_tabular().expect("export xlsx");
    assert_eq!(artifact.format, ExportFormat::Xlsx);
    assert_eq!(artifact.file_name, "audit_compliance_report.xlsx");

    let names = part_names(&artifact.bytes);
    for part in [
        "[Content_Types].xml",
        "_rels/.rels",
        "xl/workbook.xml",
        "xl/_rels/workbook.xml.rels",
        "xl/styles.xml",
        "xl/worksheets/sheet1.xml",
        "xl/worksheets/sheet2.xml",
    ] {
        assert!(names.iter().any(|name| name == part), "missing {part}");
    }

    let workbook = read_part(&artifact.bytes, "xl/workbook.xml");
    assert!(workbook.contains("name=\"Audit Compliance\""));
    assert!(workbook.contains("name=\"Info\""));

    let rows = sheet_rows(&artifact.bytes, 1);
    assert_eq!(
        rows,
        vec![
            vec!["SA Code", "Standard Name", "Compliant", "Notes"],
            vec!["SA 200", SA_200_NAME, "Yes", ""],
            vec!["SA 210", SA_210_NAME, "No", "Awaiting signed letter"],
        ]
    );

    let info = sheet_rows(&artifact.bytes, 2);
    // 2024-04-01 as an Excel date serial.
    assert_eq!(
        info,
        vec![
            vec!["Client Name", "Audit Date"],
            vec!["XYZ Ltd", "45383"],
        ]
    );
}

#[test]
fn document_export_has_title_date_and_table() {
    let mut session = test_session();
    session.on_toggle_done("SA 210", true).unwrap();
    session.on_edit_notes("SA 200", "Reviewed by partner").unwrap();

    let artifact = session.on_export_document().expect("export docx");
    assert_eq!(artifact.file_name, "audit_compliance_report.docx");
    assert_eq!(
        artifact.mime_type(),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );

    let xml = read_part(&artifact.bytes, "word/document.xml");
    assert!(xml.contains("<w:pStyle w:val=\"Title\"/>"));
    assert!(xml.contains("Audit Compliance Report for XYZ Ltd"));
    assert!(xml.contains("Audit Date: 2024-04-01"));
    let title_at = xml.find("Audit Compliance Report").unwrap();
    let date_at = xml.find("Audit Date:").unwrap();
    let table_at = xml.find("<w:tbl>").unwrap();
    assert!(title_at < date_at && date_at < table_at);

    let table = document_table(&artifact.bytes);
    assert_eq!(
        table,
        vec![
            vec!["SA Code", "Standard Name", "Compliant", "Notes"],
            vec!["SA 200", SA_200_NAME, "No", "Reviewed by partner"],
            vec!["SA 210", SA_210_NAME, "Yes", ""],
        ]
    );
}

#[test]
fn added_standard_appears_last_in_both_exports() {
    let mut session = test_session();
    session.on_add_standard("SA 900", "Firm Review");
    let rows = session.build_rows();

    let xlsx = export_tabular(&rows, session.context()).unwrap();
    let docx = export_document(&rows, session.context()).unwrap();

    let sheet = sheet_rows(&xlsx.bytes, 1);
    let table = document_table(&docx.bytes);
    assert_eq!(sheet.len(), 4);
    assert_eq!(table.len(), 4);
    assert_eq!(sheet[3], vec!["SA 900", "Firm Review", "No", ""]);
    assert_eq!(table[3], sheet[3]);
}

#[test]
fn builtin_export_row_count_matches_registry() {
    let session = AuditSession::with_builtin_standards(AuditContext::default());
    let artifact = session.on_export_tabular().unwrap();
    let rows = sheet_rows(&artifact.bytes, 1);
    assert_eq!(rows.len(), session.registry().len() + 1);
}

#[test]
fn write_artifact_saves_complete_file() {
    let dir = tempfile::tempdir().unwrap();
    let session = test_session();
    let artifact = session.on_export_document().unwrap();

    let path = write_artifact(&dir.path().join("reports"), &artifact).unwrap();

    assert_eq!(path.file_name().unwrap(), "audit_compliance_report.docx");
    let saved = std::fs::read(&path).unwrap();
    assert_eq!(saved, artifact.bytes);
    let leftovers: Vec<_> = std::fs::read_dir(dir.path().join("reports"))
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.path() != path)
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn info_sheet_dates_follow_excel_calendar() {
    let rows = test_session().build_rows();
    let info_date = |date: NaiveDate| {
        let context = AuditContext::new("XYZ Ltd", date);
        let artifact = export_tabular(&rows, &context).unwrap();
        sheet_rows(&artifact.bytes, 2)[1][1].clone()
    };

    assert_eq!(info_date(NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()), "1");
    assert_eq!(info_date(NaiveDate::from_ymd_opt(1900, 3, 1).unwrap()), "61");
    assert_eq!(info_date(NaiveDate::from_ymd_opt(1899, 6, 1).unwrap()), "1899-06-01");
}

#[test]
fn date_cells_use_iso_number_format() {
    let artifact = test_session().on_export_tabular().unwrap();
    let styles = read_part(&artifact.bytes, "xl/styles.xml");
    assert!(styles.contains("<numFmt numFmtId=\"164\" formatCode=\"yyyy-mm-dd\"/>"));
    assert!(styles.contains("<xf numFmtId=\"164\""));
    let info = read_part(&artifact.bytes, "xl/worksheets/sheet2.xml");
    assert!(info.contains("<c r=\"B2\" s=\"3\"><v>45383</v></c>"));
}
