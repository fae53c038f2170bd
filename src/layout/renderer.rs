//! Renderer seam: what the engine hands to the caller's block renderers.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::content::{BlockType, ContentBlock, EntityMap, EntityRange, InlineStyleRange};
use crate::node::Node;
use crate::props::{CustomStyles, TextProps};

// =============================================================================
// ItemData
// =============================================================================

/// Borrowed view of the block fields every renderer receives.
#[derive(Debug, Clone, Copy)]
pub struct ItemData<'a> {
    pub key: &'a str,
    pub text: &'a str,
    pub block_type: &'a BlockType,
    pub data: &'a Value,
    pub inline_styles: &'a [InlineStyleRange],
    pub entity_ranges: &'a [EntityRange],
    /// Depth exactly as given; `None` when the block had none
    pub depth: Option<u32>,
}

impl<'a> From<&'a ContentBlock> for ItemData<'a> {
    fn from(block: &'a ContentBlock) -> Self {
        Self {
            key: &block.key,
            text: &block.text,
            block_type: &block.block_type,
            data: &block.data,
            inline_styles: &block.inline_style_ranges,
            entity_ranges: &block.entity_ranges,
            depth: block.depth,
        }
    }
}

impl ItemData<'_> {
    #[inline]
    pub fn depth_or_zero(&self) -> u32 {
        self.depth.unwrap_or(0)
    }
}

// =============================================================================
// Navigate
// =============================================================================

/// Link navigation callback, forwarded to renderers untouched.
#[derive(Clone)]
pub struct Navigate(Arc<dyn Fn(&str) + Send + Sync>);

impl Navigate {
    pub fn new(f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Navigate to `url`.
    pub fn call(&self, url: &str) {
        (self.0)(url)
    }
}

impl fmt::Debug for Navigate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Navigate(..)")
    }
}

// =============================================================================
// RenderContext
// =============================================================================

/// Pass-through configuration shared by every renderer call in one layout.
///
/// Text and quote renderers typically ignore `depth_margin` and
/// `ordered_list_separator`; they are here so one context serves all four.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub entity_map: &'a EntityMap,
    pub custom_styles: &'a CustomStyles,
    pub navigate: Option<&'a Navigate>,
    pub depth_margin: Option<f64>,
    pub ordered_list_separator: Option<&'a str>,
    pub text_props: &'a TextProps,
}

// =============================================================================
// BlockRenderer
// =============================================================================

/// The four block renderers the engine delegates to.
///
/// Errors are not inspected by the engine; the first one aborts the layout
/// and is returned to the caller as-is.
pub trait BlockRenderer {
    /// Failure type of this renderer (use `Infallible` if it cannot fail).
    type Error;

    /// Paragraphs, headings and code blocks.
    fn text(&mut self, item: &ItemData<'_>, ctx: &RenderContext<'_>) -> Result<Node, Self::Error>;

    /// Block quotes.
    fn quote(&mut self, item: &ItemData<'_>, ctx: &RenderContext<'_>) -> Result<Node, Self::Error>;

    /// Unordered list items; `ctx.depth_margin` drives indentation.
    fn unordered_item(
        &mut self,
        item: &ItemData<'_>,
        ctx: &RenderContext<'_>,
    ) -> Result<Node, Self::Error>;

    /// Ordered list items with their display number.
    fn ordered_item(
        &mut self,
        item: &ItemData<'_>,
        number: u32,
        ctx: &RenderContext<'_>,
    ) -> Result<Node, Self::Error>;
}

impl<R: BlockRenderer + ?Sized> BlockRenderer for &mut R {
    type Error = R::Error;

    fn text(&mut self, item: &ItemData<'_>, ctx: &RenderContext<'_>) -> Result<Node, Self::Error> {
        (**self).text(item, ctx)
    }

    fn quote(&mut self, item: &ItemData<'_>, ctx: &RenderContext<'_>) -> Result<Node, Self::Error> {
        (**self).quote(item, ctx)
    }

    fn unordered_item(
        &mut self,
        item: &ItemData<'_>,
        ctx: &RenderContext<'_>,
    ) -> Result<Node, Self::Error> {
        (**self).unordered_item(item, ctx)
    }

    fn ordered_item(
        &mut self,
        item: &ItemData<'_>,
        number: u32,
        ctx: &RenderContext<'_>,
    ) -> Result<Node, Self::Error> {
        (**self).ordered_item(item, number, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_item_data_borrows_block() {
        let block = ContentBlock::new("k", "ordered-list-item", "one")
            .with_style(0, 3, "BOLD")
            .with_depth(2);
        let item = ItemData::from(&block);
        assert_eq!(item.key, "k");
        assert_eq!(item.text, "one");
        assert_eq!(*item.block_type, BlockType::OrderedListItem);
        assert_eq!(item.inline_styles.len(), 1);
        assert_eq!(item.depth, Some(2));

        let bare = ContentBlock::new("k", "ordered-list-item", "one");
        assert_eq!(ItemData::from(&bare).depth_or_zero(), 0);
    }

    #[test]
    fn test_navigate_forwards_url() {
        let visited = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&visited);
        let navigate = Navigate::new(move |url| sink.lock().unwrap().push(url.to_string()));
        navigate.clone().call("https://example.com");
        assert_eq!(*visited.lock().unwrap(), vec!["https://example.com".to_string()]);
        assert_eq!(format!("{navigate:?}"), "Navigate(..)");
    }

    #[test]
    fn test_context_is_send_sync() {
        static_assertions::assert_impl_all!(Navigate: Send, Sync, Clone);
        static_assertions::assert_impl_all!(RenderContext<'static>: Send, Sync, Copy);
    }
}
