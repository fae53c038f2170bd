//! HTML serialization of laid-out node sequences.
//!
//! Top-level nodes are written in order as siblings. Keyed elements get a
//! key attribute (`data-key` by default), raw passthrough blocks become an
//! HTML comment so they stay visible without producing markup.

use crate::node::{Element, Node};

// =============================================================================
// HtmlConfig
// =============================================================================

/// Default attribute name for node keys.
pub const DEFAULT_KEY_ATTR: &str = "data-key";

/// Configuration for HTML output.
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Whether to emit node keys as attributes.
    pub emit_keys: bool,
    /// Whether to put each top-level node on its own line.
    pub line_per_node: bool,
    /// Attribute name for keys (empty means `data-key`).
    pub key_attr_name: String,
}

impl HtmlConfig {
    /// Debug config (keys, one node per line).
    pub const DEBUG: Self = Self {
        emit_keys: true,
        line_per_node: true,
        key_attr_name: String::new(),
    };

    /// Compact config (no keys, no separating whitespace).
    pub const COMPACT: Self = Self {
        emit_keys: false,
        line_per_node: false,
        key_attr_name: String::new(),
    };

    pub fn with_key_attr(mut self, name: impl Into<String>) -> Self {
        self.key_attr_name = name.into();
        self
    }

    /// Attribute name used for keys.
    pub fn key_attr(&self) -> &str {
        if self.key_attr_name.is_empty() {
            DEFAULT_KEY_ATTR
        } else {
            &self.key_attr_name
        }
    }
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self::COMPACT
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Render nodes with the compact config.
pub fn render_html(nodes: &[Node]) -> String {
    HtmlWriter::new(HtmlConfig::default()).write_nodes(nodes).finish()
}

/// Render nodes with a custom config.
pub fn render_html_with(nodes: &[Node], config: HtmlConfig) -> String {
    HtmlWriter::new(config).write_nodes(nodes).finish()
}

// =============================================================================
// HtmlWriter
// =============================================================================

/// Accumulates HTML for a node sequence.
pub struct HtmlWriter {
    config: HtmlConfig,
    buffer: String,
}

impl HtmlWriter {
    pub fn new(config: HtmlConfig) -> Self {
        Self {
            config,
            buffer: String::with_capacity(4 * 1024),
        }
    }

    /// Write top-level siblings.
    pub fn write_nodes(mut self, nodes: &[Node]) -> Self {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 && self.config.line_per_node {
                self.buffer.push('\n');
            }
            self.write_node(node);
        }
        self
    }

    /// Consume the writer and return the HTML.
    pub fn finish(self) -> String {
        self.buffer
    }

    fn write_node(&mut self, node: &Node) {
        match node {
            Node::Element(elem) => self.write_element(elem),
            Node::Text(text) => self.write_escaped(&text.content, false),
            Node::Block(block) => {
                self.buffer.push_str("<!-- ");
                self.buffer.push_str(&comment_safe(block.block_type.as_str()));
                self.buffer.push_str(" block ");
                self.buffer.push_str(&comment_safe(&block.key));
                self.buffer.push_str(" -->");
            }
        }
    }

    fn write_element(&mut self, elem: &Element) {
        // an unusable tag keeps its children but loses the wrapper
        if !is_valid_name(&elem.tag) {
            for child in &elem.children {
                self.write_node(child);
            }
            return;
        }

        self.buffer.push('<');
        self.buffer.push_str(&elem.tag);

        if self.config.emit_keys
            && let Some(key) = elem.key
        {
            let attr = self.config.key_attr().to_string();
            self.write_attr(&attr, &key.to_attr_value());
        }
        for (name, value) in &elem.attrs {
            self.write_attr(name, value);
        }

        if is_void_element(&elem.tag) {
            self.buffer.push_str(" />");
            return;
        }
        self.buffer.push('>');

        for child in &elem.children {
            self.write_node(child);
        }

        self.buffer.push_str("</");
        self.buffer.push_str(&elem.tag);
        self.buffer.push('>');
    }

    fn write_attr(&mut self, name: &str, value: &str) {
        if !is_valid_name(name) {
            return;
        }
        self.buffer.push(' ');
        self.buffer.push_str(name);
        self.buffer.push_str("=\"");
        self.write_escaped(value, true);
        self.buffer.push('"');
    }

    fn write_escaped(&mut self, s: &str, in_attr: bool) {
        for c in s.chars() {
            match c {
                '&' => self.buffer.push_str("&amp;"),
                '<' => self.buffer.push_str("&lt;"),
                '>' => self.buffer.push_str("&gt;"),
                '"' if in_attr => self.buffer.push_str("&quot;"),
                _ => self.buffer.push(c),
            }
        }
    }
}

/// Strip sequences that would end the comment early.
fn comment_safe(s: &str) -> String {
    let mut out = s.replace('>', "&gt;");
    while out.contains("--") {
        out = out.replace("--", "- -");
    }
    out
}

/// Tag and attribute names: non-empty, no whitespace, quotes, `<`, `>`, `/`, `=`
/// or control characters.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

/// Check if element is a void element (self-closing).
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area" | "br" | "col" | "embed" | "hr" | "img" | "input" | "source" | "track" | "wbr"
    )
}
