//! In-memory HTML element tree.
//!
//! Renderers build [`Node`] trees rather than strings so that absent content
//! never leaves a stray wrapper behind: optional children are passed as
//! `Option<Node>` and simply contribute nothing when `None`.

use std::fmt::Write as _;

/// Elements serialized as `<tag/>` with no children.
const VOID_ELEMENTS: [&str; 5] = ["meta", "link", "img", "source", "br"];

/// A node in the HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with attributes and children.
    Element(Element),
    /// Text content, escaped on output.
    Text(String),
    /// Pre-rendered HTML, written verbatim.
    Raw(String),
    /// A transparent sequence of nodes without a wrapping element.
    Group(Vec<Node>),
}

/// An HTML element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: &'static str,
    attributes: Vec<(&'static str, String)>,
    nodes: Vec<Node>,
}

/// Start building an element with the given tag name.
pub fn el(name: &'static str) -> Element {
    Element::new(name)
}

/// Create a text node.
pub fn text(value: impl Into<String>) -> Node {
    Node::Text(value.into())
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Set the `class` attribute.
    #[must_use]
    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    /// Set an attribute, replacing any previous value.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.nodes.push(node.into());
        self
    }

    /// Append every node yielded by `nodes`. An `Option<Node>` appends zero or one.
    #[must_use]
    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.nodes.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Tag name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name
    }

    /// Value of the named attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the `class` attribute contains `class` as a whole word.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|value| value.split_whitespace().any(|c| c == class))
    }

    /// Direct children.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.name)
    }

    fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.name);
        for (name, value) in &self.attributes {
            let _ = write!(out, r#" {name}="{}""#, escape_attr(value));
        }

        if self.is_void() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        for node in &self.nodes {
            node.write_to(out);
        }
        let _ = write!(out, "</{}>", self.name);
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl Node {
    /// A transparent group of nodes.
    pub fn group(nodes: impl IntoIterator<Item = Node>) -> Self {
        Node::Group(nodes.into_iter().collect())
    }

    /// Serialize the tree to an HTML string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write_to(out),
            Node::Text(value) => out.push_str(&escape_text(value)),
            Node::Raw(html) => out.push_str(html),
            Node::Group(nodes) => {
                for node in nodes {
                    node.write_to(out);
                }
            }
        }
    }

    /// The element, if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Every element below and including this node, depth first in document order.
    #[must_use]
    pub fn descendants(&self) -> Vec<&Element> {
        let mut found = Vec::new();
        collect_elements(self, &mut found);
        found
    }

    /// Elements with the given tag name, in document order.
    #[must_use]
    pub fn find_all(&self, name: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.name == name)
            .collect()
    }

    /// Elements carrying the given class, in document order.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.has_class(class))
            .collect()
    }

    /// Concatenated unescaped text of this subtree. Raw HTML is skipped.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_elements<'a>(node: &'a Node, found: &mut Vec<&'a Element>) {
    match node {
        Node::Element(element) => {
            found.push(element);
            for child in &element.nodes {
                collect_elements(child, found);
            }
        }
        Node::Group(nodes) => {
            for child in nodes {
                collect_elements(child, found);
            }
        }
        Node::Text(_) | Node::Raw(_) => {}
    }
}

fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Element(element) => {
            for child in &element.nodes {
                collect_text(child, out);
            }
        }
        Node::Group(nodes) => {
            for child in nodes {
                collect_text(child, out);
            }
        }
        Node::Text(value) => out.push_str(value),
        Node::Raw(_) => {}
    }
}

/// Escape text content.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an attribute value for use inside double quotes.
fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

/// A complete HTML document, or an explicit empty placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Html {
    root: Option<Element>,
}

impl Html {
    /// Build a document from its head and body.
    #[must_use]
    pub fn new(language: &str, head: Element, body: Element) -> Self {
        Self {
            root: Some(el("html").attr("lang", language).child(head).child(body)),
        }
    }

    /// A document that renders to nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this is the empty placeholder.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The `<html>` element.
    #[must_use]
    pub fn root(&self) -> Option<&Element> {
        self.root.as_ref()
    }

    /// The `<head>` element.
    #[must_use]
    pub fn head(&self) -> Option<&Element> {
        self.child_named("head")
    }

    /// The `<body>` element.
    #[must_use]
    pub fn body(&self) -> Option<&Element> {
        self.child_named("body")
    }

    fn child_named(&self, name: &str) -> Option<&Element> {
        self.root()?
            .nodes
            .iter()
            .filter_map(Node::as_element)
            .find(|e| e.name == name)
    }

    /// Serialize the document. The empty placeholder yields an empty string.
    #[must_use]
    pub fn render(&self) -> String {
        match &self.root {
            Some(root) => {
                let mut out = String::from("<!DOCTYPE html>");
                root.write_to(&mut out);
                out
            }
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested_elements() {
        let node: Node = el("div")
            .class("well")
            .child(el("p").child("Hello"))
            .into();
        assert_eq!(node.render(), r#"<div class="well"><p>Hello</p></div>"#);
    }

    #[test]
    fn test_void_elements() {
        let node: Node = el("h4").child("Plan").child(el("br")).into();
        assert_eq!(node.render(), "<h4>Plan<br/></h4>");

        let img: Node = el("img").attr("src", "/img/gear.svg").into();
        assert_eq!(img.render(), r#"<img src="/img/gear.svg"/>"#);
    }

    #[test]
    fn test_optional_children() {
        let present: Option<Node> = Some(text("shown"));
        let absent: Option<Node> = None;
        let node: Node = el("header").children(present).children(absent).into();
        assert_eq!(node.render(), "<header>shown</header>");
    }

    #[test]
    fn test_group_is_transparent() {
        let node = Node::group([el("header").into(), el("section").into()]);
        assert_eq!(node.render(), "<header></header><section></section>");
    }

    #[test]
    fn test_escaping() {
        let node: Node = el("a")
            .attr("href", r#"/search?q="a"&b"#)
            .child("<Fish & Chips>")
            .into();
        assert_eq!(
            node.render(),
            r#"<a href="/search?q=&quot;a&quot;&amp;b">&lt;Fish &amp; Chips&gt;</a>"#
        );
    }

    #[test]
    fn test_raw_is_verbatim() {
        let node: Node = el("section").child(Node::Raw("<p>Hi</p>".to_string())).into();
        assert_eq!(node.render(), "<section><p>Hi</p></section>");
        assert_eq!(node.text_content(), "");
    }

    #[test]
    fn test_attr_replaces_existing() {
        let element = el("div").class("a").class("b");
        assert_eq!(element.attribute("class"), Some("b"));
    }

    #[test]
    fn test_queries() {
        let node: Node = el("main")
            .child(el("section").class("how max-section").child(el("div").class("well")))
            .child(el("section").class("product").child(el("div").class("well")))
            .into();

        assert_eq!(node.find_all("section").len(), 2);
        assert_eq!(node.find_by_class("well").len(), 2);
        assert_eq!(node.find_by_class("max-section").len(), 1);
        assert!(node.find_by_class("max").is_empty());
        assert_eq!(node.descendants()[0].name(), "main");
    }

    #[test]
    fn test_html_document() {
        let html = Html::new("en", el("head"), el("body").child("Hi"));
        assert_eq!(
            html.render(),
            r#"<!DOCTYPE html><html lang="en"><head></head><body>Hi</body></html>"#
        );
        assert!(html.head().is_some());
        assert!(html.body().is_some());
    }

    #[test]
    fn test_empty_document() {
        let html = Html::empty();
        assert!(html.is_empty());
        assert_eq!(html.render(), "");
        assert!(html.body().is_none());
    }
}
