//! Spreadsheet (XLSX) export.
//!
//! The workbook has two sheets:
//!
//! - **Audit Compliance**: one row per standard under the report header
//! - **Info**: client name and audit date
//!
//! Strings are written inline (`t="inlineStr"`), so no shared-string table
//! is needed. The audit date is stored as an Excel date serial shown as
//! `yyyy-mm-dd`; dates before 1900 have no serial and are written as text.

use audit_model::{AuditContext, REPORT_COLUMNS, ReportRow};
use chrono::NaiveDate;
use quick_xml::events::{BytesText, Event};
use tracing::debug;

use crate::error::Result;
use crate::ooxml::{
    OFFICE_RELATIONSHIPS_NS, Package, REL_OFFICE_DOCUMENT, REL_STYLES, REL_WORKSHEET, XmlWriter,
    content_types, empty, end, preserved_text, relationship_id, relationships, start, xml_part,
};

pub const COMPLIANCE_SHEET_NAME: &str = "Audit Compliance";
pub const INFO_SHEET_NAME: &str = "Info";
pub const INFO_COLUMNS: [&str; 2] = ["Client Name", "Audit Date"];

const SPREADSHEET_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const WORKBOOK_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml";
const WORKSHEET_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml";
const STYLES_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml";

/// Cell style indexes into `cellXfs` of [`STYLES_XML`].
const STYLE_HEADER: &str = "1";
const STYLE_WRAP: &str = "2";
const STYLE_DATE: &str = "3";

const MIN_COLUMN_WIDTH: usize = 10;
const MAX_COLUMN_WIDTH: usize = 80;

const STYLES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    r#"<numFmts count="1"><numFmt numFmtId="164" formatCode="yyyy-mm-dd"/></numFmts>"#,
    r#"<fonts count="2">"#,
    r#"<font><sz val="11"/><name val="Calibri"/><family val="2"/></font>"#,
    r#"<font><b/><sz val="11"/><name val="Calibri"/><family val="2"/></font>"#,
    r#"</fonts>"#,
    r#"<fills count="2">"#,
    r#"<fill><patternFill patternType="none"/></fill>"#,
    r#"<fill><patternFill patternType="gray125"/></fill>"#,
    r#"</fills>"#,
    r#"<borders count="2">"#,
    r#"<border><left/><right/><top/><bottom/><diagonal/></border>"#,
    r#"<border><left style="thin"/><right style="thin"/><top style="thin"/>"#,
    r#"<bottom style="thin"/><diagonal/></border>"#,
    r#"</borders>"#,
    r#"<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>"#,
    r#"<cellXfs count="4">"#,
    r#"<xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/>"#,
    r#"<xf numFmtId="0" fontId="1" fillId="0" borderId="1" xfId="0" applyFont="1" applyBorder="1">"#,
    r#"<alignment horizontal="center" vertical="top"/></xf>"#,
    r#"<xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0" applyAlignment="1">"#,
    r#"<alignment vertical="top" wrapText="1"/></xf>"#,
    r#"<xf numFmtId="164" fontId="0" fillId="0" borderId="0" xfId="0" applyNumberFormat="1"/>"#,
    r#"</cellXfs>"#,
    r#"<cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles>"#,
    r#"</styleSheet>"#,
);

/// A single worksheet cell value.
#[derive(Debug, Clone, PartialEq)]
enum CellValue {
    Text(String),
    Date(NaiveDate),
}

impl CellValue {
    fn display_width(&self) -> usize {
        match self {
            CellValue::Text(text) => text
                .lines()
                .map(|line| line.chars().count())
                .max()
                .unwrap_or(0),
            CellValue::Date(_) => 10,
        }
    }
}

/// Header plus data rows for one worksheet.
struct Sheet<'a> {
    name: &'a str,
    header: &'a [&'a str],
    rows: Vec<Vec<CellValue>>,
}

impl Sheet<'_> {
    fn column_widths(&self) -> Vec<usize> {
        (0..self.header.len())
            .map(|col| {
                let data_width = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(CellValue::display_width)
                    .max()
                    .unwrap_or(0);
                let header_width = self.header[col].chars().count();
                (data_width.max(header_width) + 2).clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH)
            })
            .collect()
    }
}

/// Build the XLSX workbook for the given rows and context.
pub fn write_xlsx(rows: &[ReportRow], context: &AuditContext) -> Result<Vec<u8>> {
    let sheets = [compliance_sheet(rows), info_sheet(context)];

    let mut overrides = vec![
        ("/xl/workbook.xml".to_string(), WORKBOOK_CONTENT_TYPE),
        ("/xl/styles.xml".to_string(), STYLES_CONTENT_TYPE),
    ];
    for idx in 0..sheets.len() {
        overrides.push((
            format!("/xl/worksheets/{}", sheet_file_name(idx)),
            WORKSHEET_CONTENT_TYPE,
        ));
    }
    let overrides: Vec<(&str, &str)> = overrides
        .iter()
        .map(|(part, kind)| (part.as_str(), *kind))
        .collect();

    let sheet_targets: Vec<String> = (0..sheets.len())
        .map(|idx| format!("worksheets/{}", sheet_file_name(idx)))
        .collect();
    let mut workbook_rels: Vec<(&str, &str)> = sheet_targets
        .iter()
        .map(|target| (REL_WORKSHEET, target.as_str()))
        .collect();
    workbook_rels.push((REL_STYLES, "styles.xml"));

    let mut package = Package::new();
    package.add_part("[Content_Types].xml", &content_types(&overrides)?)?;
    package.add_part(
        "_rels/.rels",
        &relationships(&[(REL_OFFICE_DOCUMENT, "xl/workbook.xml")])?,
    )?;
    package.add_part("xl/workbook.xml", &workbook_xml(&sheets)?)?;
    package.add_part("xl/_rels/workbook.xml.rels", &relationships(&workbook_rels)?)?;
    package.add_part("xl/styles.xml", STYLES_XML.as_bytes())?;
    for (idx, sheet) in sheets.iter().enumerate() {
        let path = format!("xl/worksheets/{}", sheet_file_name(idx));
        package.add_part(&path, &worksheet_xml(sheet)?)?;
    }
    let bytes = package.finish()?;
    debug!(rows = rows.len(), bytes = bytes.len(), "built xlsx workbook");
    Ok(bytes)
}

fn compliance_sheet(rows: &[ReportRow]) -> Sheet<'static> {
    Sheet {
        name: COMPLIANCE_SHEET_NAME,
        header: &REPORT_COLUMNS,
        rows: rows
            .iter()
            .map(|row| {
                row.cells()
                    .iter()
                    .map(|cell| CellValue::Text((*cell).to_string()))
                    .collect()
            })
            .collect(),
    }
}

fn info_sheet(context: &AuditContext) -> Sheet<'static> {
    Sheet {
        name: INFO_SHEET_NAME,
        header: &INFO_COLUMNS,
        rows: vec![vec![
            CellValue::Text(context.client_name.clone()),
            CellValue::Date(context.audit_date),
        ]],
    }
}

fn sheet_file_name(idx: usize) -> String {
    format!("sheet{}.xml", idx + 1)
}

fn workbook_xml(sheets: &[Sheet<'_>]) -> Result<Vec<u8>> {
    xml_part(|writer| {
        start(
            writer,
            "workbook",
            &[("xmlns", SPREADSHEET_NS), ("xmlns:r", OFFICE_RELATIONSHIPS_NS)],
        )?;
        start(writer, "sheets", &[])?;
        for (idx, sheet) in sheets.iter().enumerate() {
            let sheet_id = (idx + 1).to_string();
            let rel_id = relationship_id(idx);
            empty(
                writer,
                "sheet",
                &[
                    ("name", sheet.name),
                    ("sheetId", sheet_id.as_str()),
                    ("r:id", rel_id.as_str()),
                ],
            )?;
        }
        end(writer, "sheets")?;
        end(writer, "workbook")
    })
}

fn worksheet_xml(sheet: &Sheet<'_>) -> Result<Vec<u8>> {
    xml_part(|writer| {
        start(writer, "worksheet", &[("xmlns", SPREADSHEET_NS)])?;

        start(writer, "sheetViews", &[])?;
        start(writer, "sheetView", &[("workbookViewId", "0")])?;
        empty(
            writer,
            "pane",
            &[
                ("ySplit", "1"),
                ("topLeftCell", "A2"),
                ("activePane", "bottomLeft"),
                ("state", "frozen"),
            ],
        )?;
        end(writer, "sheetView")?;
        end(writer, "sheetViews")?;

        start(writer, "cols", &[])?;
        for (idx, width) in sheet.column_widths().into_iter().enumerate() {
            let position = (idx + 1).to_string();
            let width = width.to_string();
            empty(
                writer,
                "col",
                &[
                    ("min", position.as_str()),
                    ("max", position.as_str()),
                    ("width", width.as_str()),
                    ("customWidth", "1"),
                ],
            )?;
        }
        end(writer, "cols")?;

        start(writer, "sheetData", &[])?;
        let header: Vec<CellValue> = sheet
            .header
            .iter()
            .map(|title| CellValue::Text((*title).to_string()))
            .collect();
        write_row(writer, 1, &header, Some(STYLE_HEADER))?;
        for (idx, row) in sheet.rows.iter().enumerate() {
            write_row(writer, idx + 2, row, None)?;
        }
        end(writer, "sheetData")?;

        end(writer, "worksheet")
    })
}

fn write_row(
    writer: &mut XmlWriter,
    row_number: usize,
    cells: &[CellValue],
    style: Option<&str>,
) -> Result<()> {
    let row_ref = row_number.to_string();
    start(writer, "row", &[("r", row_ref.as_str())])?;
    for (col, value) in cells.iter().enumerate() {
        let cell_ref = format!("{}{row_number}", column_name(col));
        match value {
            CellValue::Text(text) => write_text_cell(writer, &cell_ref, style, text)?,
            CellValue::Date(date) => match excel_serial(*date) {
                Some(serial) => {
                    start(
                        writer,
                        "c",
                        &[("r", cell_ref.as_str()), ("s", style.unwrap_or(STYLE_DATE))],
                    )?;
                    let serial = serial.to_string();
                    start(writer, "v", &[])?;
                    writer.write_event(Event::Text(BytesText::new(&serial)))?;
                    end(writer, "v")?;
                    end(writer, "c")?;
                }
                // Excel has no serial before 1900-01-01; keep the ISO text.
                None => {
                    let text = date.format("%Y-%m-%d").to_string();
                    write_text_cell(writer, &cell_ref, style, &text)?;
                }
            },
        }
    }
    end(writer, "row")
}

fn write_text_cell(
    writer: &mut XmlWriter,
    cell_ref: &str,
    style: Option<&str>,
    text: &str,
) -> Result<()> {
    let style = style.unwrap_or(if text.contains('\n') { STYLE_WRAP } else { "0" });
    start(
        writer,
        "c",
        &[("r", cell_ref), ("s", style), ("t", "inlineStr")],
    )?;
    start(writer, "is", &[])?;
    preserved_text(writer, "t", text)?;
    end(writer, "is")?;
    end(writer, "c")
}

/// Spreadsheet column letters for a zero-based index (0 -> A, 26 -> AA).
pub fn column_name(mut idx: usize) -> String {
    let mut name = Vec::new();
    loop {
        name.push(b'A' + (idx % 26) as u8);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }
    name.reverse();
    String::from_utf8(name).unwrap_or_default()
}

/// Excel's 1900 date serial for `date`, or `None` before 1900-01-01.
///
/// Excel counts a nonexistent 1900-02-29, so serials from 1900-03-01 on are
/// days since 1899-12-30 and earlier ones are days since 1899-12-31.
pub fn excel_serial(date: NaiveDate) -> Option<i64> {
    let first = NaiveDate::from_ymd_opt(1900, 1, 1)?;
    let leap_bug = NaiveDate::from_ymd_opt(1900, 3, 1)?;
    if date < first {
        return None;
    }
    let offset = if date < leap_bug { 1 } else { 2 };
    Some((date - first).num_days() + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_names() {
        assert_eq!(column_name(0), "A");
        assert_eq!(column_name(3), "D");
        assert_eq!(column_name(25), "Z");
        assert_eq!(column_name(26), "AA");
        assert_eq!(column_name(27), "AB");
        assert_eq!(column_name(701), "ZZ");
        assert_eq!(column_name(702), "AAA");
    }

    #[test]
    fn excel_serial_matches_known_dates() {
        let serial = |y, m, d| excel_serial(NaiveDate::from_ymd_opt(y, m, d).unwrap());
        assert_eq!(serial(1900, 1, 1), Some(1));
        assert_eq!(serial(1900, 2, 28), Some(59));
        assert_eq!(serial(1900, 3, 1), Some(61));
        assert_eq!(serial(2024, 1, 1), Some(45292));
    }

    #[test]
    fn dates_before_1900_have_no_serial() {
        assert_eq!(excel_serial(NaiveDate::from_ymd_opt(1899, 12, 31).unwrap()), None);
        assert_eq!(excel_serial(NaiveDate::from_ymd_opt(1899, 6, 1).unwrap()), None);
    }

    #[test]
    fn early_dates_are_written_as_text() {
        let date = NaiveDate::from_ymd_opt(1899, 6, 1).unwrap();
        let xml = xml_part(|writer| write_row(writer, 2, &[CellValue::Date(date)], None)).unwrap();
        let text = String::from_utf8(xml).unwrap();
        assert!(text.contains("<c r=\"A2\" s=\"0\" t=\"inlineStr\">"));
        assert!(text.contains(">1899-06-01</t>"));
        assert!(!text.contains("<v>"));
    }

    #[test]
    fn column_widths_are_clamped() {
        let sheet = Sheet {
            name: "Test",
            header: &["A", "B"],
            rows: vec![vec![
                CellValue::Text("x".repeat(200)),
                CellValue::Text("short".to_string()),
            ]],
        };
        assert_eq!(sheet.column_widths(), vec![MAX_COLUMN_WIDTH, MIN_COLUMN_WIDTH]);
    }
}
