use std::path::{Path, PathBuf};

use super::node::{Element, Node};
use super::{PROJECT_ELEMENT, PROPERTY_GROUP_ELEMENT, SDK_ATTRIBUTE};
use crate::errors::{ProjFixError, Result};

/// An in-memory project document
///
/// Owns the `Project` root element plus whatever surrounds it in the file
/// (declaration, comments, trailing whitespace). The engine mutates it
/// through `&mut` and records every change in the dirty flag so the caller
/// can decide whether to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDocument {
    prolog: Vec<Node>,
    root: Element,
    epilog: Vec<Node>,
    path: Option<PathBuf>,
    utf8_bom: bool,
    has_unsaved_changes: bool,
}

impl ProjectDocument {
    /// An empty `<Project>` document
    pub fn empty() -> Self {
        Self {
            prolog: Vec::new(),
            root: Element::new(PROJECT_ELEMENT),
            epilog: Vec::new(),
            path: None,
            utf8_bom: false,
            has_unsaved_changes: false,
        }
    }

    /// Create a document around a `Project` root element
    ///
    /// # Errors
    /// * `UnexpectedRoot` - If the root element is not named `Project`
    pub fn new(root: Element) -> Result<Self> {
        Self::from_parts(Vec::new(), root, Vec::new())
    }

    /// Assemble a document from the nodes before the root, the root itself
    /// and the nodes after it.
    ///
    /// # Errors
    /// * `UnexpectedRoot` - If the root element is not named `Project`
    pub fn from_parts(prolog: Vec<Node>, root: Element, epilog: Vec<Node>) -> Result<Self> {
        if root.name != PROJECT_ELEMENT {
            return Err(ProjFixError::UnexpectedRoot { found: root.name });
        }
        Ok(Self {
            prolog,
            root,
            epilog,
            ..Self::empty()
        })
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Append a node after the root element
    pub fn push_epilog(&mut self, node: Node) {
        self.epilog.push(node);
    }

    pub fn prolog(&self) -> &[Node] {
        &self.prolog
    }

    pub fn epilog(&self) -> &[Node] {
        &self.epilog
    }

    /// The SDK identifier declared on the root, if any
    pub fn sdk(&self) -> Option<&str> {
        self.root.attribute(SDK_ATTRIBUTE)
    }

    /// Overwrite the SDK identifier. Does not touch the dirty flag.
    pub fn set_sdk(&mut self, sdk: impl Into<String>) {
        self.root.set_attribute(SDK_ATTRIBUTE, sdk);
    }

    /// File the document was loaded from or will be saved to
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: Option<PathBuf>) {
        self.path = path;
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn has_utf8_bom(&self) -> bool {
        self.utf8_bom
    }

    pub fn set_utf8_bom(&mut self, utf8_bom: bool) {
        self.utf8_bom = utf8_bom;
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.has_unsaved_changes
    }

    pub fn mark_dirty(&mut self) {
        self.has_unsaved_changes = true;
    }

    /// Clear the dirty flag after the document has been persisted
    pub fn mark_saved(&mut self) {
        self.has_unsaved_changes = false;
    }

    /// Property groups paired with their index among the root's children
    pub fn property_groups(&self) -> impl Iterator<Item = (usize, &Element)> {
        self.root
            .indexed_child_elements()
            .filter(|(_, element)| element.name == PROPERTY_GROUP_ELEMENT)
    }

    /// Mutable access to the property group at a root child index
    pub fn property_group_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.root
            .children
            .get_mut(index)
            .and_then(Node::as_element_mut)
            .filter(|element| element.name == PROPERTY_GROUP_ELEMENT)
    }

    /// Add an empty, unconditional property group
    ///
    /// The group goes right after the last existing property group, or
    /// before the first child element when there is none. Returns its index
    /// among the root's children.
    pub fn add_property_group(&mut self) -> usize {
        let children = &self.root.children;
        let last_group = children.iter().rposition(|node| {
            matches!(node, Node::Element(e) if e.name == PROPERTY_GROUP_ELEMENT)
        });
        let first_element = children
            .iter()
            .position(|node| matches!(node, Node::Element(_)));

        match (last_group, first_element) {
            (Some(anchor), _) => {
                let indent = indent_before(children, anchor);
                let group = new_group(indent.as_deref());
                match indent {
                    Some(indent) => {
                        self.root.children.insert(anchor + 1, Node::Text(indent));
                        self.root.children.insert(anchor + 2, Node::Element(group));
                        anchor + 2
                    }
                    None => {
                        self.root.children.insert(anchor + 1, Node::Element(group));
                        anchor + 1
                    }
                }
            }
            (None, Some(anchor)) => {
                let indent = indent_before(children, anchor);
                let group = new_group(indent.as_deref());
                self.root.children.insert(anchor, Node::Element(group));
                if let Some(indent) = indent {
                    self.root.children.insert(anchor + 1, Node::Text(indent));
                }
                anchor
            }
            (None, None) => {
                let indent = self.root.child_indent();
                let group = new_group(indent.as_deref());
                self.root.push_child_element(group)
            }
        }
    }
}

fn indent_before(children: &[Node], index: usize) -> Option<String> {
    match index.checked_sub(1).map(|i| &children[i]) {
        Some(Node::Text(ws)) if ws.chars().all(char::is_whitespace) => Some(ws.clone()),
        _ => None,
    }
}

fn new_group(indent: Option<&str>) -> Element {
    let mut group = Element::new(PROPERTY_GROUP_ELEMENT);
    if let Some(indent) = indent {
        group.children.push(Node::Text(indent.to_string()));
    }
    group
}
