//! Element tree
//!
//! A reduced markup model: tag, attributes, child nodes. Enough surface for
//! the components to parse declarative configuration, toggle visibility and
//! selection state, and re-render panel contents from fetched data.

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write as _;

use ego_tree::NodeRef;
use scraper::node::Node as HtmlNode;
use scraper::Html;

/// Elements without a closing tag in serialized markup.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    // === Attributes ===

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    // === Class list ===

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|value| value.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }

        let value = match self.attr("class") {
            Some(existing) if !existing.is_empty() => format!("{} {}", existing, class),
            _ => class.to_string(),
        };
        self.set_attr("class", &value);
    }

    pub fn remove_class(&mut self, class: &str) {
        let Some(existing) = self.attr("class") else {
            return;
        };

        let remaining: Vec<&str> = existing
            .split_whitespace()
            .filter(|c| *c != class)
            .collect();

        if remaining.is_empty() {
            self.remove_attr("class");
        } else {
            self.set_attr("class", &remaining.join(" "));
        }
    }

    // === Visibility ===

    /// The boolean `hidden` attribute; panels toggle this on activation.
    pub fn is_hidden(&self) -> bool {
        self.has_attr("hidden")
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        if hidden {
            self.set_attr("hidden", "");
        } else {
            self.remove_attr("hidden");
        }
    }

    // === Children ===

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Replace all children with the parsed fragment. The element's own
    /// attributes are untouched.
    pub fn set_inner_html(&mut self, markup: &str) {
        self.children = parse_fragment(markup);
    }

    /// Serialize the children back to markup.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            write_node(child, &mut out);
        }
        out
    }

    // === Queries (descendants only, document order) ===

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        for el in self.child_elements() {
            if el.id() == Some(id) {
                return Some(el);
            }
            if let Some(found) = el.find_by_id(id) {
                return Some(found);
            }
        }
        None
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        for node in &mut self.children {
            let Node::Element(el) = node else { continue };
            if el.id() == Some(id) {
                return Some(el);
            }
            if let Some(found) = el.find_by_id_mut(id) {
                return Some(found);
            }
        }
        None
    }

    /// All descendant elements carrying the given `role` attribute.
    pub fn elements_with_role(&self, role: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_role(role, &mut found);
        found
    }

    fn collect_by_role<'a>(&'a self, role: &str, found: &mut Vec<&'a Element>) {
        for el in self.child_elements() {
            if el.attr("role") == Some(role) {
                found.push(el);
            }
            el.collect_by_role(role, found);
        }
    }

    pub fn has_descendant_tag(&self, tag: &str) -> bool {
        self.child_elements()
            .any(|el| el.tag == tag || el.has_descendant_tag(tag))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_element(self, &mut out);
        f.write_str(&out)
    }
}

/// Parse a markup fragment into nodes. Comments and whitespace-only text are
/// dropped; the parser recovers from malformed markup the way browsers do,
/// so this never fails.
pub fn parse_fragment(markup: &str) -> Vec<Node> {
    let fragment = Html::parse_fragment(markup);
    let mut nodes = Vec::new();
    for child in fragment.tree.root().children() {
        collect(child, &mut nodes);
    }
    nodes
}

fn collect(node: NodeRef<'_, HtmlNode>, out: &mut Vec<Node>) {
    match node.value() {
        // The fragment parser wraps content in a synthetic <html> element.
        HtmlNode::Element(el) if el.name() == "html" => {
            for child in node.children() {
                collect(child, out);
            }
        }
        HtmlNode::Element(el) => {
            let mut element = Element::new(el.name());
            for (name, value) in el.attrs() {
                element.set_attr(name, value);
            }
            for child in node.children() {
                collect(child, &mut element.children);
            }
            out.push(Node::Element(element));
        }
        HtmlNode::Text(text) => {
            if !text.text.trim().is_empty() {
                out.push(Node::Text(text.text.to_string()));
            }
        }
        _ => {}
    }
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Element(el) => write_element(el, out),
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    for (name, value) in &el.attributes {
        let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&el.tag.as_str()) {
        return;
    }

    for child in &el.children {
        write_node(child, out);
    }
    let _ = write!(out, "</{}>", el.tag);
}

fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_serialize_round_trip() {
        let nodes = parse_fragment("<ul class=\"list\"><li>one</li><li>two</li></ul>");
        assert_eq!(nodes.len(), 1);

        let Node::Element(ul) = &nodes[0] else {
            panic!("expected element");
        };
        assert_eq!(ul.tag(), "ul");
        assert!(ul.has_class("list"));
        assert_eq!(
            ul.inner_html(),
            "<li>one</li><li>two</li>"
        );
    }

    #[test]
    fn test_custom_elements_and_placeholders_survive() {
        let mut host = Element::new("div");
        host.set_inner_html("<vitrine-slider data-gap=\"6\"><li>{name} {prices}</li></vitrine-slider>");

        assert!(host.has_descendant_tag("vitrine-slider"));
        assert_eq!(
            host.inner_html(),
            "<vitrine-slider data-gap=\"6\"><li>{name} {prices}</li></vitrine-slider>"
        );
    }

    #[test]
    fn test_set_inner_html_keeps_own_attributes() {
        let mut panel = Element::new("div");
        panel.set_attr("id", "panel-1");
        panel.set_hidden(true);
        panel.set_inner_html("<p>loaded</p>");

        assert_eq!(panel.id(), Some("panel-1"));
        assert!(panel.is_hidden());
        assert_eq!(panel.inner_html(), "<p>loaded</p>");
    }

    #[test]
    fn test_find_by_id_searches_descendants() {
        let mut root = Element::new("section");
        root.set_inner_html("<div><span id=\"deep\">x</span></div>");

        assert!(root.find_by_id("deep").is_some());
        assert!(root.find_by_id("missing").is_none());

        root.find_by_id_mut("deep").unwrap().set_attr("class", "hit");
        assert!(root.find_by_id("deep").unwrap().has_class("hit"));
    }

    #[test]
    fn test_elements_with_role_in_document_order() {
        let mut root = Element::new("nav");
        root.set_inner_html(
            "<button role=\"tab\" id=\"a\"></button>\
             <div><button role=\"tab\" id=\"b\"></button></div>\
             <button role=\"tab\" id=\"c\"></button>",
        );

        let ids: Vec<&str> = root
            .elements_with_role("tab")
            .iter()
            .filter_map(|el| el.id())
            .collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_class_list_operations() {
        let mut el = Element::new("button");
        el.add_class("tab-active");
        el.add_class("tab-active");
        assert_eq!(el.attr("class"), Some("tab-active"));

        el.add_class("other");
        el.remove_class("tab-active");
        assert_eq!(el.attr("class"), Some("other"));

        el.remove_class("other");
        assert!(!el.has_attr("class"));
    }

    #[test]
    fn test_text_is_escaped_on_serialize() {
        let mut el = Element::new("p");
        el.push_child(Node::Text("a < b & c".to_string()));
        assert_eq!(el.inner_html(), "a &lt; b &amp; c");
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let nodes = parse_fragment("<img src=\"u1\">");
        let mut out = Element::new("div");
        for node in nodes {
            out.push_child(node);
        }
        assert_eq!(out.inner_html(), "<img src=\"u1\">");
    }
}
