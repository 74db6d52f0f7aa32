//! ProjectDocument → XML
//!
//! Attribute values are always double-quoted and only `&`, `<` and `"` are
//! escaped, so MSBuild conditions keep their single quotes and `>`
//! comparisons. Text escapes only `&` and `<`. Elements without children
//! are written as `<Name />`.

use quick_xml::escape::minimal_escape;
use quick_xml::events::{BytesCData, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use projfix_core::model::{Element, Node, ProjectDocument};

use crate::errors::{serialization_error, Result};

const OP: &str = "write_project";

fn escape_attribute(value: &str) -> String {
    minimal_escape(value).replace('"', "&quot;")
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| serialization_error(OP, &e.to_string()))
}

fn write_raw(writer: &mut Writer<Vec<u8>>, parts: &[&str]) {
    for part in parts {
        writer.get_mut().extend_from_slice(part.as_bytes());
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<()> {
    let mut content = element.name.clone();
    for (name, value) in element.attributes() {
        content.push(' ');
        content.push_str(name);
        content.push_str("=\"");
        content.push_str(&escape_attribute(value));
        content.push('"');
    }

    if element.children.is_empty() {
        content.push(' ');
        return write_event(
            writer,
            Event::Empty(BytesStart::from_content(content, element.name.len())),
        );
    }

    write_event(
        writer,
        Event::Start(BytesStart::from_content(content, element.name.len())),
    )?;
    for child in &element.children {
        write_node(writer, child)?;
    }
    write_event(writer, Event::End(BytesEnd::new(element.name.as_str())))
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &Node) -> Result<()> {
    match node {
        Node::Element(element) => write_element(writer, element)?,
        Node::Text(text) => write_event(
            writer,
            Event::Text(BytesText::from_escaped(minimal_escape(text))),
        )?,
        Node::CData(text) => write_event(writer, Event::CData(BytesCData::new(text.as_str())))?,
        Node::Comment(raw) => write_raw(writer, &["<!--", raw, "-->"]),
        Node::ProcessingInstruction(raw) | Node::Declaration(raw) => {
            write_raw(writer, &["<?", raw, "?>"])
        }
        Node::DocType(raw) => write_raw(writer, &["<!DOCTYPE ", raw, ">"]),
    }
    Ok(())
}

/// Serialize a project document to XML text
///
/// The byte order mark flag is not applied here; `save` writes it.
///
/// # Errors
/// * `ERR_SERIALIZATION` - The XML writer failed
pub fn write_project_string(project: &ProjectDocument) -> Result<String> {
    let mut writer = Writer::new(Vec::new());

    for node in project.prolog() {
        write_node(&mut writer, node)?;
    }
    write_element(&mut writer, project.root())?;
    for node in project.epilog() {
        write_node(&mut writer, node)?;
    }

    String::from_utf8(writer.into_inner()).map_err(|e| serialization_error(OP, &e.to_string()))
}
