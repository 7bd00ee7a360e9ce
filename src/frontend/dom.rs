//! Minimal in-memory document model
//!
//! Just enough of a page for the controller: elements with an id, a class,
//! attributes, a display style, a form value and child nodes. Text is always
//! stored as text nodes and escaped when serialised.

use std::collections::BTreeMap;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    None,
    Block,
    Flex,
}

impl Display {
    pub fn is_visible(self) -> bool {
        self != Display::None
    }

    fn as_css(self) -> &'static str {
        match self {
            Display::None => "none",
            Display::Block => "block",
            Display::Flex => "flex",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Element(Element),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    fn text_content_into(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => e.children.iter().for_each(|c| c.text_content_into(out)),
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(&escape(t)),
            Node::Element(e) => e.write_html(out),
        }
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub class: Option<String>,
    pub attributes: BTreeMap<String, String>,
    /// Explicit `style.display`; `None` here means no inline style
    pub display: Option<Display>,
    /// Form value for `input` elements
    pub value: String,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            class: None,
            attributes: BTreeMap::new(),
            display: None,
            value: String::new(),
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::text(text))
    }

    /// Hidden unless an inline display style says otherwise
    pub fn is_visible(&self) -> bool {
        self.display.is_some_and(Display::is_visible)
    }

    pub fn set_display(&mut self, display: Display) {
        self.display = Some(display);
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.children.iter().for_each(|c| c.text_content_into(&mut out));
        out
    }

    pub fn set_text_content(&mut self, text: impl Into<String>) {
        self.children = vec![Node::text(text)];
    }

    pub fn replace_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    /// Child elements, skipping text nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| match c {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// First descendant (depth-first) with the given tag name
    pub fn query_selector(&self, tag: &str) -> Option<&Element> {
        query_in(&self.children, tag)
    }

    pub fn query_selector_mut(&mut self, tag: &str) -> Option<&mut Element> {
        query_in_mut(&mut self.children, tag)
    }

    /// This element or a descendant carrying `id`
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|c| c.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| match c {
            Node::Element(e) => e.find_by_id_mut(id),
            Node::Text(_) => None,
        })
    }

    /// Serialise children only, like `innerHTML`
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        self.children.iter().for_each(|c| c.write_html(&mut out));
        out
    }

    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if let Some(id) = &self.id {
            let _ = write!(out, " id=\"{}\"", escape(id));
        }
        if let Some(class) = &self.class {
            let _ = write!(out, " class=\"{}\"", escape(class));
        }
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        if let Some(display) = self.display {
            let _ = write!(out, " style=\"display: {}\"", display.as_css());
        }
        if self.tag == "input" && !self.value.is_empty() {
            let _ = write!(out, " value=\"{}\"", escape(&self.value));
        }
        out.push('>');
        if is_void(&self.tag) {
            return;
        }
        self.children.iter().for_each(|c| c.write_html(out));
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// First element with `tag` among `nodes` and their descendants
pub fn query_in<'a>(nodes: &'a [Node], tag: &str) -> Option<&'a Element> {
    nodes.iter().find_map(|n| match n {
        Node::Element(e) if e.tag == tag => Some(e),
        Node::Element(e) => e.query_selector(tag),
        Node::Text(_) => None,
    })
}

pub fn query_in_mut<'a>(nodes: &'a mut [Node], tag: &str) -> Option<&'a mut Element> {
    for node in nodes.iter_mut() {
        if let Node::Element(e) = node {
            if e.tag == tag {
                return Some(e);
            }
            if let Some(found) = e.query_selector_mut(tag) {
                return Some(found);
            }
        }
    }
    None
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub body: Element,
}

impl Document {
    pub fn new(body: Element) -> Self {
        Self { body }
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        self.body.find_by_id(id)
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.body.find_by_id_mut(id)
    }

    pub fn to_html(&self) -> String {
        self.body.outer_html()
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "img" | "input" | "br" | "hr" | "meta" | "link")
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
