//! Document wrapper
//!
//! Holds the element tree plus the one piece of state that is not local to
//! any element: which element currently has input focus.

use crate::element::{parse_fragment, Element, Node};

#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
    focused: Option<String>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            focused: None,
        }
    }

    /// Parse page markup under a synthetic `body` root.
    pub fn parse(markup: &str) -> Self {
        let mut root = Element::new("body");
        for node in parse_fragment(markup) {
            root.push_child(node);
        }
        Self::new(root)
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Move input focus to the element with the given id.
    pub fn focus(&mut self, id: &str) {
        tracing::trace!(id, "focus moved");
        self.focused = Some(id.to_string());
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }
}

impl Document {
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.root.find_by_id(id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.root.find_by_id_mut(id)
    }

    pub fn push_node(&mut self, node: Node) {
        self.root.push_child(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_markup() {
        let doc = Document::parse("<div id=\"one\"></div><div id=\"two\"></div>");
        assert!(doc.find_by_id("one").is_some());
        assert!(doc.find_by_id("two").is_some());
    }

    #[test]
    fn test_focus_tracking() {
        let mut doc = Document::parse("<button id=\"a\"></button>");
        assert!(doc.focused().is_none());

        doc.focus("a");
        assert_eq!(doc.focused(), Some("a"));
    }
}
