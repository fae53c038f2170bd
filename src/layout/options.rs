//! Layout configuration.
//!
//! - [`LayoutOptions`] is plain data and can be loaded from JSON
//! - [`LayoutParams`] binds a content state to options plus the optional
//!   capabilities (atomic handler, custom block handler, navigate)

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::content::{ContentBlock, ContentState, EntityMap};
use crate::error::{LayoutError, LayoutResult};
use crate::node::Node;
use crate::props::{CustomStyles, Style, TextProps};

use super::renderer::{Navigate, RenderContext};

// =============================================================================
// LayoutOptions
// =============================================================================

/// Data half of the layout configuration.
///
/// Field names follow the editor's camelCase JSON (`depthMargin`,
/// `orderedListSeparator`, ...); every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutOptions {
    /// Named styles forwarded to renderers; `viewAfterList` styles separators.
    pub custom_styles: CustomStyles,
    /// Marker placed after ordered item numbers (`.`, `)`, ...).
    pub ordered_list_separator: Option<String>,
    /// Base indentation per list depth.
    pub depth_margin: Option<f64>,
    /// Text styling bag forwarded to every renderer.
    pub text_props: TextProps,
    /// Stop after this many input blocks.
    pub number_of_lines: Option<usize>,
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON text.
    pub fn from_json(json: &str) -> LayoutResult<Self> {
        serde_json::from_str(json).map_err(LayoutError::InvalidOptions)
    }

    pub fn with_custom_styles(mut self, styles: CustomStyles) -> Self {
        self.custom_styles = styles;
        self
    }

    /// Add one named style.
    pub fn with_style(mut self, name: &str, style: Style) -> Self {
        self.custom_styles.insert(name, style);
        self
    }

    pub fn with_ordered_list_separator(mut self, separator: impl Into<String>) -> Self {
        self.ordered_list_separator = Some(separator.into());
        self
    }

    pub fn with_depth_margin(mut self, margin: f64) -> Self {
        self.depth_margin = Some(margin);
        self
    }

    pub fn with_text_props(mut self, props: TextProps) -> Self {
        self.text_props = props;
        self
    }

    pub fn with_number_of_lines(mut self, lines: usize) -> Self {
        self.number_of_lines = Some(lines);
        self
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Renders `atomic` blocks from the block and the entity map.
pub type AtomicHandler<'a, E> = dyn Fn(&ContentBlock, &EntityMap) -> Result<Node, E> + 'a;

/// Renders blocks of unrecognized type; receives the full parameter set.
pub type CustomBlockHandler<'a, E> =
    dyn Fn(&ContentBlock, &LayoutParams<'a, E>) -> Result<Node, E> + 'a;

// =============================================================================
// LayoutParams
// =============================================================================

/// Everything one layout call needs besides the renderer and key source.
///
/// `E` is the renderer's error type; handlers fail with the same type so the
/// engine can return any failure unchanged.
pub struct LayoutParams<'a, E> {
    content_state: &'a ContentState,
    options: LayoutOptions,
    atomic_handler: Option<Box<AtomicHandler<'a, E>>>,
    custom_block_handler: Option<Box<CustomBlockHandler<'a, E>>>,
    navigate: Option<Navigate>,
}

impl<'a, E> LayoutParams<'a, E> {
    /// Parameters with default options and no handlers.
    pub fn new(content_state: &'a ContentState) -> Self {
        Self {
            content_state,
            options: LayoutOptions::default(),
            atomic_handler: None,
            custom_block_handler: None,
            navigate: None,
        }
    }

    pub fn with_options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    /// Install the atomic block handler.
    pub fn with_atomic_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ContentBlock, &EntityMap) -> Result<Node, E> + 'a,
    {
        self.atomic_handler = Some(Box::new(handler));
        self
    }

    /// Install the fallback handler for unrecognized block types.
    pub fn with_custom_block_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ContentBlock, &LayoutParams<'a, E>) -> Result<Node, E> + 'a,
    {
        self.custom_block_handler = Some(Box::new(handler));
        self
    }

    pub fn with_navigate(mut self, navigate: Navigate) -> Self {
        self.navigate = Some(navigate);
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn content_state(&self) -> &'a ContentState {
        self.content_state
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn atomic_handler(&self) -> Option<&AtomicHandler<'a, E>> {
        self.atomic_handler.as_deref()
    }

    pub fn custom_block_handler(&self) -> Option<&CustomBlockHandler<'a, E>> {
        self.custom_block_handler.as_deref()
    }

    pub fn navigate(&self) -> Option<&Navigate> {
        self.navigate.as_ref()
    }

    /// Pass-through context handed to every renderer call.
    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext {
            entity_map: &self.content_state.entity_map,
            custom_styles: &self.options.custom_styles,
            navigate: self.navigate.as_ref(),
            depth_margin: self.options.depth_margin,
            ordered_list_separator: self.options.ordered_list_separator.as_deref(),
            text_props: &self.options.text_props,
        }
    }
}

impl<E> fmt::Debug for LayoutParams<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutParams")
            .field("blocks", &self.content_state.block_count())
            .field("options", &self.options)
            .field("atomic_handler", &self.atomic_handler.is_some())
            .field("custom_block_handler", &self.custom_block_handler.is_some())
            .field("navigate", &self.navigate.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    use crate::node::Element;

    #[test]
    fn test_options_from_json() {
        let options = LayoutOptions::from_json(
            r#"{
                "orderedListSeparator": ")",
                "depthMargin": 24,
                "numberOfLines": 3,
                "customStyles": {"viewAfterList": {"marginBottom": 8}},
                "textProps": {"selectable": true}
            }"#,
        )
        .unwrap();
        assert_eq!(options.ordered_list_separator.as_deref(), Some(")"));
        assert_eq!(options.depth_margin, Some(24.0));
        assert_eq!(options.number_of_lines, Some(3));
        assert!(options.custom_styles.view_after_list().is_some());
        assert!(!options.text_props.is_empty());
    }

    #[test]
    fn test_options_defaults() {
        let options = LayoutOptions::from_json("{}").unwrap();
        assert_eq!(options, LayoutOptions::default());
        assert!(options.text_props.is_empty());

        let err = LayoutOptions::from_json(r#"{"depthMargin": "wide"}"#).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidOptions(_)));
    }

    #[test]
    fn test_render_context_forwards_options() {
        let state = ContentState::new(vec![]);
        let params: LayoutParams<'_, Infallible> = LayoutParams::new(&state)
            .with_options(
                LayoutOptions::new()
                    .with_ordered_list_separator(".")
                    .with_depth_margin(12.0),
            )
            .with_navigate(Navigate::new(|_| {}));
        let ctx = params.render_context();
        assert_eq!(ctx.ordered_list_separator, Some("."));
        assert_eq!(ctx.depth_margin, Some(12.0));
        assert!(ctx.navigate.is_some());
        assert!(ctx.custom_styles.is_empty());
    }

    #[test]
    fn test_handlers_are_optional() {
        let state = ContentState::new(vec![]);
        let params: LayoutParams<'_, Infallible> = LayoutParams::new(&state);
        assert!(params.atomic_handler().is_none());
        assert!(params.custom_block_handler().is_none());

        let params = params
            .with_atomic_handler(|block, _| Ok(Element::new("img").attr("alt", &block.text).into()))
            .with_custom_block_handler(|_, _| Ok(Element::new("hr").into()));
        assert!(params.atomic_handler().is_some());
        assert!(params.custom_block_handler().is_some());

        let debug = format!("{params:?}");
        assert!(debug.contains("atomic_handler: true"));
    }
}
