//! Generic XML node tree
//!
//! Project documents are kept as a lossless tree so that everything the
//! engine does not understand is written back as it was read. Text and
//! attribute values are held unescaped.

use super::CONDITION_ATTRIBUTE;

/// Indentation added per nesting level when new elements are inserted
pub const INDENT_UNIT: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    CData(String),
    /// Raw comment body, without the `<!--`/`-->` delimiters
    Comment(String),
    /// Raw processing instruction body, without `<?`/`?>`
    ProcessingInstruction(String),
    /// Raw XML declaration body, e.g. `xml version="1.0"`
    Declaration(String),
    /// Raw doctype body
    DocType(String),
}

impl Node {
    /// True for text nodes made only of whitespace
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Node::Text(t) if t.chars().all(char::is_whitespace))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }
}

/// An XML element with ordered attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder form of `set_attribute`
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder form of `set_text`
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, keeping its original position if it already exists
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Concatenated text and CDATA content of the direct children
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(t) | Node::CData(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Replace all children with a single text node
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Child elements paired with their index in `children`
    pub fn indexed_child_elements(&self) -> impl Iterator<Item = (usize, &Element)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(index, node)| node.as_element().map(|e| (index, e)))
    }

    /// Whitespace used to indent this element's children, if the element is
    /// pretty-printed.
    pub fn child_indent(&self) -> Option<String> {
        if let Some(first) = self
            .children
            .iter()
            .position(|node| matches!(node, Node::Element(_)))
        {
            return match first.checked_sub(1).map(|i| &self.children[i]) {
                Some(Node::Text(ws)) if ws.chars().all(char::is_whitespace) => Some(ws.clone()),
                _ => None,
            };
        }
        match self.children.last() {
            Some(Node::Text(closing)) if closing.chars().all(char::is_whitespace) => {
                Some(format!("{}{}", closing, INDENT_UNIT))
            }
            _ => None,
        }
    }

    /// Append a child element after the last existing child, matching the
    /// surrounding indentation. Returns the child's index in `children`.
    pub fn push_child_element(&mut self, child: Element) -> usize {
        let indent = self.child_indent();
        let closing_at = match self.children.last() {
            Some(node) if node.is_whitespace() => self.children.len() - 1,
            _ => self.children.len(),
        };

        match indent {
            Some(indent) if closing_at < self.children.len() => {
                self.children.insert(closing_at, Node::Text(indent));
                self.children.insert(closing_at + 1, Node::Element(child));
                closing_at + 1
            }
            _ => {
                self.children.insert(closing_at, Node::Element(child));
                closing_at
            }
        }
    }

    /// Remove the child at `index` together with the whitespace that
    /// indented it. Returns the removed element, or `None` if `index` does
    /// not point at an element.
    pub fn remove_child_element(&mut self, index: usize) -> Option<Element> {
        if !matches!(self.children.get(index), Some(Node::Element(_))) {
            return None;
        }
        let removed = match self.children.remove(index) {
            Node::Element(e) => e,
            _ => return None,
        };
        if index > 0 && self.children[index - 1].is_whitespace() {
            self.children.remove(index - 1);
        }
        Some(removed)
    }
}

/// Access to an element's condition expression
pub trait Conditioned {
    /// The raw condition string, if the element carries one
    fn condition(&self) -> Option<&str>;
}

impl Conditioned for Element {
    fn condition(&self) -> Option<&str> {
        self.attribute(CONDITION_ATTRIBUTE)
    }
}
