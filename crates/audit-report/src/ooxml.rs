//! Shared Office Open XML packaging: ZIP container, XML part writing,
//! content types and relationships.

use std::io::{Cursor, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::error::Result;

pub const CONTENT_TYPES_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
pub const PACKAGE_RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";
pub const OFFICE_RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

pub const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
pub const REL_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
pub const REL_WORKSHEET: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";

const RELATIONSHIPS_CONTENT_TYPE: &str = "application/vnd.openxmlformats-package.relationships+xml";

pub type XmlWriter = Writer<Vec<u8>>;

/// ZIP container being filled with package parts.
pub struct Package {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl Package {
    pub fn new() -> Self {
        // Fixed timestamp keeps identical input producing identical bytes.
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            options,
        }
    }

    pub fn add_part(&mut self, name: &str, contents: &[u8]) -> Result<()> {
        self.zip.start_file(name, self.options)?;
        self.zip.write_all(contents)?;
        Ok(())
    }

    pub fn finish(self) -> Result<Vec<u8>> {
        Ok(self.zip.finish()?.into_inner())
    }
}

impl Default for Package {
    fn default() -> Self {
        Self::new()
    }
}

/// Write one XML part, prefixed with the standalone declaration.
pub fn xml_part<F>(build: F) -> Result<Vec<u8>>
where
    F: FnOnce(&mut XmlWriter) -> Result<()>,
{
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    build(&mut writer)?;
    Ok(writer.into_inner())
}

pub fn start(writer: &mut XmlWriter, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
    let mut element = BytesStart::new(name);
    for attribute in attributes {
        element.push_attribute(*attribute);
    }
    writer.write_event(Event::Start(element))?;
    Ok(())
}

pub fn end(writer: &mut XmlWriter, name: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

pub fn empty(writer: &mut XmlWriter, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
    let mut element = BytesStart::new(name);
    for attribute in attributes {
        element.push_attribute(*attribute);
    }
    writer.write_event(Event::Empty(element))?;
    Ok(())
}

/// Write `<name xml:space="preserve">text</name>`.
pub fn preserved_text(writer: &mut XmlWriter, name: &str, text: &str) -> Result<()> {
    start(writer, name, &[("xml:space", "preserve")])?;
    let text = sanitize_text(text);
    writer.write_event(Event::Text(BytesText::new(&text)))?;
    end(writer, name)
}

/// Drop characters XML 1.0 cannot carry, keeping tabs and line breaks.
pub fn sanitize_text(text: &str) -> String {
    text.chars()
        .filter(|&ch| {
            matches!(ch, '\t' | '\n' | '\r')
                || (ch >= '\u{20}' && ch != '\u{FFFE}' && ch != '\u{FFFF}')
        })
        .collect()
}

/// `[Content_Types].xml` with the given part overrides.
pub fn content_types(overrides: &[(&str, &str)]) -> Result<Vec<u8>> {
    xml_part(|writer| {
        start(writer, "Types", &[("xmlns", CONTENT_TYPES_NS)])?;
        empty(
            writer,
            "Default",
            &[
                ("Extension", "rels"),
                ("ContentType", RELATIONSHIPS_CONTENT_TYPE),
            ],
        )?;
        empty(
            writer,
            "Default",
            &[("Extension", "xml"), ("ContentType", "application/xml")],
        )?;
        for &(part_name, content_type) in overrides {
            empty(
                writer,
                "Override",
                &[("PartName", part_name), ("ContentType", content_type)],
            )?;
        }
        end(writer, "Types")
    })
}

/// A relationships part; ids are assigned `rId1..` in the given order.
pub fn relationships(targets: &[(&str, &str)]) -> Result<Vec<u8>> {
    xml_part(|writer| {
        start(
            writer,
            "Relationships",
            &[("xmlns", PACKAGE_RELATIONSHIPS_NS)],
        )?;
        for (idx, &(kind, target)) in targets.iter().enumerate() {
            let id = relationship_id(idx);
            empty(
                writer,
                "Relationship",
                &[("Id", id.as_str()), ("Type", kind), ("Target", target)],
            )?;
        }
        end(writer, "Relationships")
    })
}

pub fn relationship_id(idx: usize) -> String {
    format!("rId{}", idx + 1)
}
