//! Element type - the tree nodes renderers and the engine build.

use smallvec::SmallVec;

use crate::key::NodeKey;
use crate::props::Style;

use super::{Attrs, Children, Node, Text};

/// Tag of the keyed wrapper the engine puts around each rendered block.
pub const CONTAINER_TAG: &str = "view";

/// Tag of the empty spacer inserted where a list run ends.
pub const SEPARATOR_TAG: &str = "view-after-list";

// =============================================================================
// Element
// =============================================================================

/// Element with optional key, attributes and children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name
    pub tag: String,
    /// Sibling identity key
    pub key: Option<NodeKey>,
    /// Element attributes
    pub attrs: Attrs,
    /// Child nodes
    pub children: Children,
}

impl Element {
    /// Create an unkeyed element without attributes or children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            key: None,
            attrs: Vec::new(),
            children: SmallVec::new(),
        }
    }

    /// Keyed wrapper around a rendered block
    pub fn container(key: NodeKey) -> Self {
        Self::new(CONTAINER_TAG).with_key(key)
    }

    /// Empty spacer closing a list run, styled with the separator style
    pub fn separator(key: NodeKey, style: Option<&Style>) -> Self {
        let elem = Self::new(SEPARATOR_TAG).with_key(key);
        match style.map(Style::to_css) {
            Some(css) if !css.is_empty() => elem.attr("style", css),
            _ => elem,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder
    // ─────────────────────────────────────────────────────────────────────────

    pub fn with_key(mut self, key: NodeKey) -> Self {
        self.key = Some(key);
        self
    }

    /// Add or replace an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Append a child node
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append an optional child node
    pub fn maybe_child(mut self, node: Option<impl Into<Node>>) -> Self {
        if let Some(node) = node {
            self.children.push(node.into());
        }
        self
    }

    /// Append a text child
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Text::new(content))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Attribute access
    // ─────────────────────────────────────────────────────────────────────────

    /// Get attribute value by name
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set attribute value (update if exists, add if not)
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some(attr) => attr.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(k, _)| k == name)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn is_container(&self) -> bool {
        self.tag == CONTAINER_TAG
    }

    pub fn is_separator(&self) -> bool {
        self.tag == SEPARATOR_TAG
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// First child, if any
    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    /// Last child, if any
    pub fn last_child(&self) -> Option<&Node> {
        self.children.last()
    }

    /// Whether the first child is a separator
    pub fn starts_with_separator(&self) -> bool {
        self.first_child().is_some_and(Node::is_separator)
    }

    /// Iterate over child elements
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Text content of this element (concatenated from all text nodes)
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    fn collect_text(&self, buf: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => buf.push_str(&t.content),
                Node::Element(e) => e.collect_text(buf),
                Node::Block(_) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_builder() {
        let elem = Element::new("li")
            .attr("data-depth", "1")
            .child(Element::new("span").text("1."))
            .text(" item");

        assert_eq!(elem.get_attr("data-depth"), Some("1"));
        assert_eq!(elem.child_count(), 2);
        assert_eq!(elem.text_content(), "1. item");
        assert_eq!(elem.child_elements().count(), 1);
        assert!(elem.key.is_none());
    }

    #[test]
    fn test_set_attr_replaces() {
        let mut elem = Element::new("p").attr("class", "a");
        elem.set_attr("class", "b");
        assert_eq!(elem.attrs.len(), 1);
        assert_eq!(elem.get_attr("class"), Some("b"));
        assert!(!elem.has_attr("id"));
    }

    #[test]
    fn test_separator_style() {
        let style = Style::new().with("marginBottom", 10);
        let sep = Element::separator(NodeKey::from_raw(9), Some(&style));
        assert!(sep.is_separator());
        assert!(sep.is_empty());
        assert_eq!(sep.get_attr("style"), Some("margin-bottom: 10px"));

        let bare = Element::separator(NodeKey::from_raw(9), None);
        assert!(!bare.has_attr("style"));
    }

    #[test]
    fn test_container_with_optional_separator() {
        let sep: Option<Element> = Some(Element::separator(NodeKey::from_raw(1), None));
        let elem = Element::container(NodeKey::from_raw(2))
            .maybe_child(sep)
            .child(Element::new("p"));
        assert!(elem.is_container());
        assert!(elem.starts_with_separator());
        assert_eq!(elem.last_child().and_then(Node::as_element).map(|e| e.tag.as_str()), Some("p"));

        let none: Option<Element> = None;
        let elem = Element::container(NodeKey::from_raw(3)).maybe_child(none);
        assert!(elem.is_empty());
    }
}
