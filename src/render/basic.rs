//! Stock block renderer producing plain HTML-shaped elements.
//!
//! Inline styles and entities are not resolved; each block becomes one
//! element holding its raw text. Good enough for previews, tests and as a
//! starting point for richer renderers.

use std::convert::Infallible;

use crate::content::BlockType;
use crate::layout::{BlockRenderer, ItemData, RenderContext};
use crate::node::{Element, Node};

/// Marker after ordered item numbers when none is configured.
pub const DEFAULT_ORDERED_SEPARATOR: &str = ".";

/// Bullet used for unordered items.
pub const BULLET: &str = "•";

/// Infallible renderer mapping block types onto HTML tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicRenderer {
    /// Emit `data-block-key` attributes with the source block key
    pub emit_block_keys: bool,
}

impl BasicRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_block_keys(mut self) -> Self {
        self.emit_block_keys = true;
        self
    }

    fn element(&self, tag: &str, item: &ItemData<'_>, ctx: &RenderContext<'_>) -> Element {
        let mut elem = Element::new(tag);
        if self.emit_block_keys {
            elem.set_attr("data-block-key", item.key);
        }
        if let Some(style) = ctx.custom_styles.get(item.block_type.as_str()) {
            let css = style.to_css();
            if !css.is_empty() {
                elem.set_attr("style", css);
            }
        }
        elem
    }

    /// Text element carrying the text props as attributes.
    fn text_span(&self, item: &ItemData<'_>, ctx: &RenderContext<'_>) -> Element {
        ctx.text_props
            .to_attrs()
            .into_iter()
            .fold(Element::new("span"), |span, (k, v)| span.attr(k, v))
            .text(item.text)
    }

    fn list_item(&self, marker: String, item: &ItemData<'_>, ctx: &RenderContext<'_>) -> Node {
        let depth = item.depth_or_zero();
        let mut li = self
            .element("li", item, ctx)
            .attr("data-depth", depth.to_string());
        if let Some(margin) = ctx.depth_margin {
            let indent = margin * f64::from(depth);
            let style = match li.get_attr("style") {
                Some(existing) => format!("{existing}; margin-left: {indent}px"),
                None => format!("margin-left: {indent}px"),
            };
            li.set_attr("style", style);
        }
        li.child(Element::new("span").attr("class", "marker").text(marker))
            .child(self.text_span(item, ctx))
            .into()
    }
}

fn text_tag(block_type: &BlockType) -> &'static str {
    match block_type {
        BlockType::HeaderOne => "h1",
        BlockType::HeaderTwo => "h2",
        BlockType::HeaderThree => "h3",
        BlockType::HeaderFour => "h4",
        BlockType::HeaderFive => "h5",
        BlockType::HeaderSix => "h6",
        BlockType::CodeBlock => "pre",
        _ => "p",
    }
}

impl BlockRenderer for BasicRenderer {
    type Error = Infallible;

    fn text(&mut self, item: &ItemData<'_>, ctx: &RenderContext<'_>) -> Result<Node, Infallible> {
        let tag = text_tag(item.block_type);
        Ok(self.element(tag, item, ctx).child(self.text_span(item, ctx)).into())
    }

    fn quote(&mut self, item: &ItemData<'_>, ctx: &RenderContext<'_>) -> Result<Node, Infallible> {
        Ok(self
            .element("blockquote", item, ctx)
            .child(self.text_span(item, ctx))
            .into())
    }

    fn unordered_item(
        &mut self,
        item: &ItemData<'_>,
        ctx: &RenderContext<'_>,
    ) -> Result<Node, Infallible> {
        Ok(self.list_item(BULLET.to_string(), item, ctx))
    }

    fn ordered_item(
        &mut self,
        item: &ItemData<'_>,
        number: u32,
        ctx: &RenderContext<'_>,
    ) -> Result<Node, Infallible> {
        let separator = ctx.ordered_list_separator.unwrap_or(DEFAULT_ORDERED_SEPARATOR);
        Ok(self.list_item(format!("{number}{separator}"), item, ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::content::{ContentBlock, EntityMap};
    use crate::props::{CustomStyles, Style, TextProps};

    struct Fixture {
        entities: EntityMap,
        styles: CustomStyles,
        props: TextProps,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                entities: EntityMap::default(),
                styles: CustomStyles::new(),
                props: TextProps::new(),
            }
        }

        fn ctx(&self) -> RenderContext<'_> {
            RenderContext {
                entity_map: &self.entities,
                custom_styles: &self.styles,
                navigate: None,
                depth_margin: None,
                ordered_list_separator: None,
                text_props: &self.props,
            }
        }
    }

    #[rstest]
    #[case("unstyled", "p")]
    #[case("paragraph", "p")]
    #[case("header-one", "h1")]
    #[case("header-five", "h5")]
    #[case("code-block", "pre")]
    fn test_text_tags(#[case] block_type: &str, #[case] tag: &str) {
        let fixture = Fixture::new();
        let block = ContentBlock::new("k", block_type, "hello");
        let node = BasicRenderer::new().text(&ItemData::from(&block), &fixture.ctx()).unwrap();
        let elem = node.as_element().unwrap();
        assert_eq!(elem.tag, tag);
        assert_eq!(elem.text_content(), "hello");
    }

    #[test]
    fn test_style_and_props_applied() {
        let mut fixture = Fixture::new();
        fixture.styles.insert("blockquote", Style::new().with("fontStyle", "italic"));
        fixture.props.set("selectable", true);

        let block = ContentBlock::new("q1", "blockquote", "quoted");
        let node = BasicRenderer::new()
            .with_block_keys()
            .quote(&ItemData::from(&block), &fixture.ctx())
            .unwrap();
        let elem = node.as_element().unwrap();
        assert_eq!(elem.tag, "blockquote");
        assert_eq!(elem.get_attr("style"), Some("font-style: italic"));
        assert_eq!(elem.get_attr("data-block-key"), Some("q1"));
        let span = elem.child_elements().next().unwrap();
        assert_eq!(span.get_attr("selectable"), Some("true"));
    }

    #[test]
    fn test_ordered_marker_and_indent() {
        let fixture = Fixture::new();
        let mut ctx = fixture.ctx();
        ctx.ordered_list_separator = Some(")");
        ctx.depth_margin = Some(16.0);

        let block = ContentBlock::new("o", "ordered-list-item", "step").with_depth(2);
        let node = BasicRenderer::new().ordered_item(&ItemData::from(&block), 3, &ctx).unwrap();
        let li = node.as_element().unwrap();
        assert_eq!(li.tag, "li");
        assert_eq!(li.get_attr("data-depth"), Some("2"));
        assert_eq!(li.get_attr("style"), Some("margin-left: 32px"));
        assert_eq!(li.text_content(), "3)step");
    }

    #[test]
    fn test_unordered_defaults() {
        let fixture = Fixture::new();
        let block = ContentBlock::new("u", "unordered-list-item", "dot");
        let node = BasicRenderer::new().unordered_item(&ItemData::from(&block), &fixture.ctx()).unwrap();
        let li = node.as_element().unwrap();
        assert_eq!(li.get_attr("data-depth"), Some("0"));
        assert!(!li.has_attr("style"));
        assert_eq!(li.text_content(), "•dot");
    }
}
