//! Output node tree.
//!
//! The layout engine produces a flat `Vec<Node>`; each entry is one sibling
//! in document order. Containers and separators are [`Element`]s; renderers
//! are free to build whatever element/text subtrees they like underneath.
//!
//! [`Node::Block`] is the escape hatch for atomic blocks laid out without an
//! atomic handler: the raw block is handed back so the caller can
//! post-process it.

mod element;
mod text;

pub use element::{Element, CONTAINER_TAG, SEPARATOR_TAG};
pub use text::Text;

use smallvec::SmallVec;

use crate::content::ContentBlock;
use crate::key::NodeKey;

/// Element attributes as ordered key-value pairs.
pub type Attrs = Vec<(String, String)>;

/// Child collection. Containers hold at most a separator plus one node.
pub type Children = SmallVec<[Node; 4]>;

/// Node in the output sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Box<Element>),
    Text(Text),
    /// Unrendered content block, passed through as-is.
    Block(Box<ContentBlock>),
}

impl Node {
    // element -> Element, text -> Text, block -> Block
    crate::impl_enum_accessors!(element => Element, text => Text, block => ContentBlock);

    /// Key of the node, if it is a keyed element.
    pub fn key(&self) -> Option<NodeKey> {
        self.as_element().and_then(|e| e.key)
    }

    /// Whether this is a list-run separator element.
    pub fn is_separator(&self) -> bool {
        self.as_element().is_some_and(Element::is_separator)
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Element(e) => e.text_content(),
            Node::Text(t) => t.content.clone(),
            Node::Block(_) => String::new(),
        }
    }
}

impl From<Element> for Node {
    #[inline]
    fn from(elem: Element) -> Self {
        Node::Element(Box::new(elem))
    }
}

impl From<Text> for Node {
    #[inline]
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl From<ContentBlock> for Node {
    #[inline]
    fn from(block: ContentBlock) -> Self {
        Node::Block(Box::new(block))
    }
}
