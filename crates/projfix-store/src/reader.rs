//! XML → ProjectDocument
//!
//! Every event is kept, whitespace included, so that writing the document
//! back reproduces the input apart from quoting and empty-element style.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use projfix_core::errors::{ExError, ProjFixError};
use projfix_core::model::{Element, Node, ProjectDocument};

use crate::errors::{malformed, Result};

const UTF8_BOM: char = '\u{feff}';

/// Builds the node tree from the flat event stream
#[derive(Default)]
struct TreeBuilder {
    /// Elements opened but not yet closed, innermost last
    open: Vec<Element>,
    prolog: Vec<Node>,
    root: Option<Element>,
    epilog: Vec<Node>,
}

impl TreeBuilder {
    fn attach(&mut self, node: Node) -> Result<()> {
        if let Some(parent) = self.open.last_mut() {
            parent.children.push(node);
            return Ok(());
        }

        match node {
            Node::Element(element) => {
                if self.root.is_some() {
                    return Err(malformed(format!(
                        "second root element '{}'",
                        element.name
                    )));
                }
                self.root = Some(element);
            }
            Node::Text(text) if !text.chars().all(char::is_whitespace) => {
                return Err(malformed("text outside the root element"));
            }
            Node::CData(_) => return Err(malformed("CDATA outside the root element")),
            other if self.root.is_none() => self.prolog.push(other),
            other => self.epilog.push(other),
        }
        Ok(())
    }

    fn close(&mut self, name: &str) -> Result<()> {
        match self.open.pop() {
            Some(element) if element.name == name => self.attach(Node::Element(element)),
            Some(element) => Err(malformed(format!(
                "expected '</{}>', found '</{}>'",
                element.name, name
            ))),
            None => Err(malformed(format!("unmatched end tag '</{}>'", name))),
        }
    }

    fn finish(self, utf8_bom: bool) -> Result<ProjectDocument> {
        if let Some(element) = self.open.last() {
            return Err(malformed(format!("unclosed element '{}'", element.name)));
        }
        let root = self.root.ok_or_else(|| malformed("document has no root element"))?;
        let mut project = ProjectDocument::from_parts(self.prolog, root, self.epilog)
            .map_err(unexpected_root)?;
        project.set_utf8_bom(utf8_bom);
        Ok(project)
    }
}

fn unexpected_root(err: ProjFixError) -> ExError {
    ExError::from(err).with_op("parse_project")
}

fn utf8(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|e| malformed(format!("invalid UTF-8: {}", e)))
}

fn start_element(start: &BytesStart<'_>) -> Result<Element> {
    let mut element = Element::new(utf8(start.name().as_ref())?);
    for attr in start.attributes() {
        let attr = attr.map_err(|e| malformed(e.to_string()))?;
        let key = utf8(attr.key.as_ref())?;
        let value = attr
            .unescape_value()
            .map_err(|e| malformed(e.to_string()))?;
        element.set_attribute(key, value.into_owned());
    }
    Ok(element)
}

/// Parse a project document from XML text
///
/// A leading byte order mark is remembered and restored on write. The
/// returned document has no path and no unsaved changes.
///
/// # Errors
/// * `ERR_INVALID_DOCUMENT` - The text is not well-formed XML, has no
///   single root element, or the root is not `Project`
pub fn parse_project_str(text: &str) -> Result<ProjectDocument> {
    let (text, utf8_bom) = match text.strip_prefix(UTF8_BOM) {
        Some(rest) => (rest, true),
        None => (text, false),
    };

    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(false);
    let mut tree = TreeBuilder::default();

    loop {
        let event = reader.read_event().map_err(|e| {
            malformed(format!("at byte {}: {}", reader.buffer_position(), e))
        })?;
        match event {
            Event::Start(e) => {
                let element = start_element(&e)?;
                tree.open.push(element);
            }
            Event::Empty(e) => {
                let element = start_element(&e)?;
                tree.attach(Node::Element(element))?;
            }
            Event::End(e) => tree.close(&utf8(e.name().as_ref())?)?,
            Event::Text(t) => {
                let text = t.unescape().map_err(|e| malformed(e.to_string()))?;
                tree.attach(Node::Text(text.into_owned()))?;
            }
            Event::CData(c) => tree.attach(Node::CData(utf8(&c)?))?,
            Event::Comment(c) => tree.attach(Node::Comment(utf8(&c)?))?,
            Event::PI(p) => tree.attach(Node::ProcessingInstruction(utf8(&p)?))?,
            Event::Decl(d) => tree.attach(Node::Declaration(utf8(&d)?))?,
            Event::DocType(d) => tree.attach(Node::DocType(utf8(&d)?))?,
            Event::Eof => break,
        }
    }

    tree.finish(utf8_bom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_whitespace_and_attributes() {
        let xml = "<Project Sdk=\"Godot.NET.Sdk/4.4.0\">\n  <PropertyGroup>\n    <TargetFramework>net8.0</TargetFramework>\n  </PropertyGroup>\n</Project>\n";

        let project = parse_project_str(xml).unwrap();

        assert_eq!(project.sdk(), Some("Godot.NET.Sdk/4.4.0"));
        assert_eq!(project.root().children.len(), 3);
        assert!(project.root().children[0].is_whitespace());
        assert_eq!(project.epilog(), &[Node::Text("\n".to_string())]);
        assert!(!project.has_unsaved_changes());
        assert!(project.path().is_none());
    }

    #[test]
    fn test_parse_unescapes_attribute_values() {
        let xml = "<Project><PropertyGroup Condition=\" &apos;$(GodotTargetPlatform)&apos; == &apos;ios&apos; \" /></Project>";

        let project = parse_project_str(xml).unwrap();
        let (_, group) = project.property_groups().next().unwrap();

        assert_eq!(
            group.attribute("Condition"),
            Some(" '$(GodotTargetPlatform)' == 'ios' ")
        );
    }

    #[test]
    fn test_parse_keeps_prolog() {
        let xml = "\u{feff}<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!-- generated -->\n<Project />";

        let project = parse_project_str(xml).unwrap();

        assert!(project.has_utf8_bom());
        assert_eq!(
            project.prolog()[0],
            Node::Declaration("xml version=\"1.0\" encoding=\"utf-8\"".to_string())
        );
        assert_eq!(project.prolog()[2], Node::Comment(" generated ".to_string()));
    }

    #[test]
    fn test_parse_rejects_foreign_root() {
        let err = parse_project_str("<Solution />").unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_DOCUMENT");
        assert!(err.message().contains("Solution"));
    }

    #[test]
    fn test_parse_rejects_broken_documents() {
        for xml in [
            "",
            "   ",
            "<Project>",
            "<Project></Other>",
            "<Project /><Project />",
            "text<Project />",
            "<Project a=\"1\" a=\"2\" />",
        ] {
            let err = parse_project_str(xml).unwrap_err();
            assert_eq!(err.code(), "ERR_INVALID_DOCUMENT", "input {:?}", xml);
        }
    }
}
