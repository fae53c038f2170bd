//! Content blocks: the flat units of a Draft.js raw content state.

use std::fmt;

use compact_str::CompactString;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// =============================================================================
// BlockType
// =============================================================================

/// Block type tag.
///
/// The Draft.js vocabulary maps onto dedicated variants; any other tag is
/// kept verbatim in [`BlockType::Custom`] so unknown blocks can still reach a
/// custom handler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockType {
    #[default]
    Unstyled,
    Paragraph,
    HeaderOne,
    HeaderTwo,
    HeaderThree,
    HeaderFour,
    HeaderFive,
    HeaderSix,
    CodeBlock,
    Blockquote,
    Atomic,
    UnorderedListItem,
    OrderedListItem,
    Custom(CompactString),
}

/// The two list kinds whose runs are tracked independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    /// The other list kind.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            ListKind::Unordered => ListKind::Ordered,
            ListKind::Ordered => ListKind::Unordered,
        }
    }

    /// Draft.js tag of the list item type.
    pub const fn as_str(self) -> &'static str {
        match self {
            ListKind::Unordered => "unordered-list-item",
            ListKind::Ordered => "ordered-list-item",
        }
    }
}

impl BlockType {
    /// Parse a Draft.js type tag.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "unstyled" => Self::Unstyled,
            "paragraph" => Self::Paragraph,
            "header-one" => Self::HeaderOne,
            "header-two" => Self::HeaderTwo,
            "header-three" => Self::HeaderThree,
            "header-four" => Self::HeaderFour,
            "header-five" => Self::HeaderFive,
            "header-six" => Self::HeaderSix,
            "code-block" => Self::CodeBlock,
            "blockquote" => Self::Blockquote,
            "atomic" => Self::Atomic,
            "unordered-list-item" => Self::UnorderedListItem,
            "ordered-list-item" => Self::OrderedListItem,
            other => Self::Custom(CompactString::from(other)),
        }
    }

    /// The Draft.js type tag.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unstyled => "unstyled",
            Self::Paragraph => "paragraph",
            Self::HeaderOne => "header-one",
            Self::HeaderTwo => "header-two",
            Self::HeaderThree => "header-three",
            Self::HeaderFour => "header-four",
            Self::HeaderFive => "header-five",
            Self::HeaderSix => "header-six",
            Self::CodeBlock => "code-block",
            Self::Blockquote => "blockquote",
            Self::Atomic => "atomic",
            Self::UnorderedListItem => "unordered-list-item",
            Self::OrderedListItem => "ordered-list-item",
            Self::Custom(tag) => tag.as_str(),
        }
    }

    /// Paragraphs, headings and code blocks: everything handed to the text renderer.
    pub fn is_text_like(&self) -> bool {
        matches!(
            self,
            Self::Unstyled
                | Self::Paragraph
                | Self::HeaderOne
                | Self::HeaderTwo
                | Self::HeaderThree
                | Self::HeaderFour
                | Self::HeaderFive
                | Self::HeaderSix
                | Self::CodeBlock
        )
    }

    pub fn is_list_item(&self) -> bool {
        self.list_kind().is_some()
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            Self::UnorderedListItem => Some(ListKind::Unordered),
            Self::OrderedListItem => Some(ListKind::Ordered),
            _ => None,
        }
    }

    /// `header-one` → 1 ... `header-six` → 6.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Self::HeaderOne => Some(1),
            Self::HeaderTwo => Some(2),
            Self::HeaderThree => Some(3),
            Self::HeaderFour => Some(4),
            Self::HeaderFive => Some(5),
            Self::HeaderSix => Some(6),
            _ => None,
        }
    }
}

impl From<String> for BlockType {
    fn from(tag: String) -> Self {
        Self::parse(&tag)
    }
}

impl From<&str> for BlockType {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}

impl From<BlockType> for String {
    fn from(ty: BlockType) -> Self {
        ty.as_str().to_string()
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Ranges
// =============================================================================

/// Inline style span over a block's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineStyleRange {
    pub offset: usize,
    pub length: usize,
    pub style: String,
}

/// Entity reference over a block's text; `key` indexes the entity map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRange {
    pub offset: usize,
    pub length: usize,
    pub key: Value,
}

impl EntityRange {
    /// Entity map key as a string (Draft.js emits both `0` and `"0"`).
    pub fn entity_key(&self) -> Option<String> {
        match &self.key {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

// =============================================================================
// ContentBlock
// =============================================================================

/// One block of a raw content state.
///
/// Every field tolerates being absent or `null` in the source JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub block_type: BlockType,
    #[serde(default)]
    pub data: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inline_style_ranges: Vec<InlineStyleRange>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub entity_ranges: Vec<EntityRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
}

/// Read `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ContentBlock {
    /// Create a block with a key, type and text; everything else empty.
    pub fn new(key: impl Into<String>, block_type: impl Into<BlockType>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
            block_type: block_type.into(),
            ..Default::default()
        }
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    pub fn with_style(mut self, offset: usize, length: usize, style: impl Into<String>) -> Self {
        self.inline_style_ranges.push(InlineStyleRange {
            offset,
            length,
            style: style.into(),
        });
        self
    }

    pub fn with_entity(mut self, offset: usize, length: usize, key: impl Into<Value>) -> Self {
        self.entity_ranges.push(EntityRange {
            offset,
            length,
            key: key.into(),
        });
        self
    }

    /// Nesting depth, with an absent depth read as top level.
    #[inline]
    pub fn depth_or_zero(&self) -> u32 {
        self.depth.unwrap_or(0)
    }

    /// Whether this item sits below the top level of its list.
    #[inline]
    pub fn is_nested(&self) -> bool {
        self.depth_or_zero() >= 1
    }
}
