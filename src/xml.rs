//! Minimal XML tree and serializer.
//!
//! Documents are assembled bottom-up from immutable [`XmlElement`] values and
//! turned into text by an [`XmlWriter`]. Keeping the two apart means the same
//! tree can be written compactly for a `SLD_BODY` parameter or indented for a
//! file on disk.

use quick_xml::escape::escape;
use std::borrow::Cow;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Attributes keep insertion order when serialized.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = XmlElement>,
    {
        self.children
            .extend(children.into_iter().map(XmlNode::Element));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|child| match child {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// First direct child element with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.child_elements().find(|child| child.name == name)
    }

    /// Concatenated text of the direct text children, unescaped.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                XmlNode::Text(text) => Some(text.as_str()),
                XmlNode::Element(_) => None,
            })
            .collect()
    }

    fn is_text_only(&self) -> bool {
        self.children
            .iter()
            .all(|child| matches!(child, XmlNode::Text(_)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEscaping {
    /// Escape `<`, `>`, `&`, `'` and `"` in text and attribute values.
    #[default]
    Escape,
    /// Insert values untouched. Callers must guarantee they contain no markup.
    Verbatim,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XmlWriter {
    pub escaping: TextEscaping,
    pub indent: Option<usize>,
}

impl XmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn escaping(mut self, escaping: TextEscaping) -> Self {
        self.escaping = escaping;
        self
    }

    pub fn indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    pub fn write_document(&self, root: &XmlElement) -> String {
        let mut out = String::from(XML_DECLARATION);
        if self.indent.is_some() {
            out.push('\n');
        }
        self.write_element(root, 0, &mut out);
        out
    }

    pub fn write_fragment(&self, element: &XmlElement) -> String {
        let mut out = String::new();
        self.write_element(element, 0, &mut out);
        out
    }

    fn write_element(&self, element: &XmlElement, depth: usize, out: &mut String) {
        out.push('<');
        out.push_str(&element.name);
        for (name, value) in &element.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&self.escape(value));
            out.push('"');
        }

        if element.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');

        for child in &element.children {
            match child {
                XmlNode::Text(text) => out.push_str(&self.escape(text)),
                XmlNode::Element(child) => {
                    self.newline(depth + 1, out);
                    self.write_element(child, depth + 1, out);
                }
            }
        }

        if !element.is_text_only() {
            self.newline(depth, out);
        }
        out.push_str("</");
        out.push_str(&element.name);
        out.push('>');
    }

    fn newline(&self, depth: usize, out: &mut String) {
        if let Some(width) = self.indent {
            out.push('\n');
            out.extend(std::iter::repeat(' ').take(width * depth));
        }
    }

    fn escape<'a>(&self, value: &'a str) -> Cow<'a, str> {
        match self.escaping {
            TextEscaping::Escape => escape(value),
            TextEscaping::Verbatim => Cow::Borrowed(value),
        }
    }
}
