//! Word-processing (DOCX) export.

use audit_model::{AuditContext, REPORT_COLUMNS, ReportRow};
use tracing::debug;

use crate::error::Result;
use crate::ooxml::{
    Package, REL_OFFICE_DOCUMENT, REL_STYLES, XmlWriter, content_types, empty, end,
    preserved_text, relationships, start, xml_part,
};

const WORDPROCESSING_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const DOCUMENT_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
const STYLES_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";

/// Column widths in twentieths of a point; 9360 spans a Letter page
/// with one-inch margins.
const COLUMN_WIDTHS: [u32; 4] = [1300, 3760, 1100, 3200];

const STYLES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    r#"<w:docDefaults>"#,
    r#"<w:rPrDefault><w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:eastAsia="Calibri" w:cs="Calibri"/>"#,
    r#"<w:sz w:val="22"/><w:szCs w:val="22"/></w:rPr></w:rPrDefault>"#,
    r#"<w:pPrDefault><w:pPr><w:spacing w:after="160" w:line="259" w:lineRule="auto"/></w:pPr></w:pPrDefault>"#,
    r#"</w:docDefaults>"#,
    r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal">"#,
    r#"<w:name w:val="Normal"/><w:qFormat/></w:style>"#,
    r#"<w:style w:type="paragraph" w:styleId="Title">"#,
    r#"<w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/>"#,
    r#"<w:pPr><w:spacing w:after="300" w:line="240" w:lineRule="auto"/><w:contextualSpacing/></w:pPr>"#,
    r#"<w:rPr><w:color w:val="17365D"/><w:spacing w:val="5"/><w:kern w:val="28"/>"#,
    r#"<w:sz w:val="52"/><w:szCs w:val="52"/></w:rPr></w:style>"#,
    r#"<w:style w:type="table" w:default="1" w:styleId="TableNormal">"#,
    r#"<w:name w:val="Normal Table"/><w:uiPriority w:val="99"/><w:semiHidden/><w:unhideWhenUsed/>"#,
    r#"<w:tblPr><w:tblInd w:w="0" w:type="dxa"/><w:tblCellMar>"#,
    r#"<w:top w:w="0" w:type="dxa"/><w:left w:w="108" w:type="dxa"/>"#,
    r#"<w:bottom w:w="0" w:type="dxa"/><w:right w:w="108" w:type="dxa"/>"#,
    r#"</w:tblCellMar></w:tblPr></w:style>"#,
    r#"<w:style w:type="table" w:styleId="TableGrid">"#,
    r#"<w:name w:val="Table Grid"/><w:basedOn w:val="TableNormal"/><w:uiPriority w:val="59"/>"#,
    r#"<w:pPr><w:spacing w:after="0" w:line="240" w:lineRule="auto"/></w:pPr>"#,
    r#"<w:tblPr><w:tblBorders>"#,
    r#"<w:top w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
    r#"<w:left w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
    r#"<w:bottom w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
    r#"<w:right w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
    r#"<w:insideH w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
    r#"<w:insideV w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
    r#"</w:tblBorders></w:tblPr></w:style>"#,
    r#"</w:styles>"#,
);

/// Report title for a client.
pub fn document_title(context: &AuditContext) -> String {
    format!("Audit Compliance Report for {}", context.client_name)
}

/// Build the DOCX document for the given rows and context.
pub fn write_docx(rows: &[ReportRow], context: &AuditContext) -> Result<Vec<u8>> {
    let mut package = Package::new();
    package.add_part(
        "[Content_Types].xml",
        &content_types(&[
            ("/word/document.xml", DOCUMENT_CONTENT_TYPE),
            ("/word/styles.xml", STYLES_CONTENT_TYPE),
        ])?,
    )?;
    package.add_part(
        "_rels/.rels",
        &relationships(&[(REL_OFFICE_DOCUMENT, "word/document.xml")])?,
    )?;
    package.add_part("word/document.xml", &document_xml(rows, context)?)?;
    package.add_part(
        "word/_rels/document.xml.rels",
        &relationships(&[(REL_STYLES, "styles.xml")])?,
    )?;
    package.add_part("word/styles.xml", STYLES_XML.as_bytes())?;
    let bytes = package.finish()?;
    debug!(rows = rows.len(), bytes = bytes.len(), "built docx document");
    Ok(bytes)
}

fn document_xml(rows: &[ReportRow], context: &AuditContext) -> Result<Vec<u8>> {
    xml_part(|writer| {
        start(writer, "w:document", &[("xmlns:w", WORDPROCESSING_NS)])?;
        start(writer, "w:body", &[])?;

        write_paragraph(writer, &document_title(context), Some("Title"), false)?;
        let date_line = format!("Audit Date: {}", context.audit_date_text());
        write_paragraph(writer, &date_line, None, false)?;
        empty(writer, "w:p", &[])?;

        start(writer, "w:tbl", &[])?;
        start(writer, "w:tblPr", &[])?;
        empty(writer, "w:tblStyle", &[("w:val", "TableGrid")])?;
        empty(writer, "w:tblW", &[("w:w", "0"), ("w:type", "auto")])?;
        end(writer, "w:tblPr")?;
        start(writer, "w:tblGrid", &[])?;
        for width in COLUMN_WIDTHS {
            let width = width.to_string();
            empty(writer, "w:gridCol", &[("w:w", width.as_str())])?;
        }
        end(writer, "w:tblGrid")?;

        write_table_row(writer, &REPORT_COLUMNS, true)?;
        for row in rows {
            write_table_row(writer, &row.cells(), false)?;
        }
        end(writer, "w:tbl")?;

        start(writer, "w:sectPr", &[])?;
        empty(writer, "w:pgSz", &[("w:w", "12240"), ("w:h", "15840")])?;
        empty(
            writer,
            "w:pgMar",
            &[
                ("w:top", "1440"),
                ("w:right", "1440"),
                ("w:bottom", "1440"),
                ("w:left", "1440"),
                ("w:header", "720"),
                ("w:footer", "720"),
                ("w:gutter", "0"),
            ],
        )?;
        end(writer, "w:sectPr")?;

        end(writer, "w:body")?;
        end(writer, "w:document")
    })
}

fn write_table_row(writer: &mut XmlWriter, cells: &[&str], header: bool) -> Result<()> {
    start(writer, "w:tr", &[])?;
    if header {
        start(writer, "w:trPr", &[])?;
        empty(writer, "w:tblHeader", &[])?;
        end(writer, "w:trPr")?;
    }
    for (text, width) in cells.iter().zip(COLUMN_WIDTHS) {
        let width = width.to_string();
        start(writer, "w:tc", &[])?;
        start(writer, "w:tcPr", &[])?;
        empty(writer, "w:tcW", &[("w:w", width.as_str()), ("w:type", "dxa")])?;
        end(writer, "w:tcPr")?;
        write_paragraph(writer, text, None, header)?;
        end(writer, "w:tc")?;
    }
    end(writer, "w:tr")
}

/// Paragraph with a single run; line breaks in `text` become `<w:br/>`.
fn write_paragraph(
    writer: &mut XmlWriter,
    text: &str,
    style: Option<&str>,
    bold: bool,
) -> Result<()> {
    start(writer, "w:p", &[])?;
    if let Some(style) = style {
        start(writer, "w:pPr", &[])?;
        empty(writer, "w:pStyle", &[("w:val", style)])?;
        end(writer, "w:pPr")?;
    }
    if !text.is_empty() {
        start(writer, "w:r", &[])?;
        if bold {
            start(writer, "w:rPr", &[])?;
            empty(writer, "w:b", &[])?;
            end(writer, "w:rPr")?;
        }
        let normalized = text.replace("\r\n", "\n");
        for (idx, line) in normalized.split('\n').enumerate() {
            if idx > 0 {
                empty(writer, "w:br", &[])?;
            }
            preserved_text(writer, "w:t", line)?;
        }
        end(writer, "w:r")?;
    }
    end(writer, "w:p")
}
