#![allow(dead_code)]

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parsed element used to assert on generated documents.
#[derive(Debug, Default)]
pub struct Node {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<Node>,
}

impl Node {
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named(&self, name: &str) -> Vec<&Node> {
        self.children.iter().filter(|c| c.name == name).collect()
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Follows a path of direct child names.
    pub fn path(&self, names: &[&str]) -> Option<&Node> {
        names.iter().try_fold(self, |node, name| node.child(name))
    }

    pub fn count(&self, name: &str) -> usize {
        self.children
            .iter()
            .map(|c| usize::from(c.name == name) + c.count(name))
            .sum()
    }
}

fn element(start: &BytesStart) -> Node {
    let attrs = start
        .attributes()
        .map(|attr| {
            let attr = attr.expect("valid attribute");
            (
                String::from_utf8(attr.key.as_ref().to_vec()).unwrap(),
                attr.unescape_value().unwrap().into_owned(),
            )
        })
        .collect();
    Node {
        name: String::from_utf8(start.name().as_ref().to_vec()).unwrap(),
        attrs,
        ..Default::default()
    }
}

/// Parses `xml`, panicking if it is not well-formed. Returns a synthetic
/// document node whose children are the top-level elements.
pub fn parse(xml: &str) -> Node {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut stack = vec![Node::default()];
    loop {
        match reader.read_event().expect("well-formed XML") {
            Event::Start(start) => stack.push(element(&start)),
            Event::Empty(start) => {
                let node = element(&start);
                stack.last_mut().unwrap().children.push(node);
            }
            Event::End(_) => {
                let node = stack.pop().unwrap();
                stack.last_mut().expect("balanced tags").children.push(node);
            }
            Event::Text(text) => {
                let text = text.unescape().expect("valid text");
                stack.last_mut().unwrap().text.push_str(&text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    assert_eq!(stack.len(), 1, "unclosed elements");
    stack.pop().unwrap()
}

pub fn css(node: &Node, group: &str, name: &str) -> Option<String> {
    node.path(&["sld:PolygonSymbolizer", group])?
        .children_named("sld:CssParameter")
        .into_iter()
        .find(|p| p.attr("name") == Some(name))
        .map(|p| p.text.clone())
}
