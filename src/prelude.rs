//! Prelude module for common imports.
//!
//! ```ignore
//! use draft_vdom::prelude::*;
//! ```

// Content model
pub use crate::content::{
    BlockType, ContentBlock, ContentState, Entity, EntityMap, EntityRange, InlineStyleRange,
    ListKind,
};

// Props
pub use crate::props::{CustomStyles, Props, Style, TextProps, VIEW_AFTER_LIST};

// Node types
pub use crate::node::{Attrs, Children, Element, Node, Text, CONTAINER_TAG, SEPARATOR_TAG};

// Keys
pub use crate::key::{KeyGenerator, NodeKey, SequentialKeys};

// Layout
pub use crate::layout::{
    layout_blocks, AtomicHandler, BlockLayout, BlockRenderer, CustomBlockHandler, ItemData,
    LayoutOptions, LayoutParams, Navigate, RenderContext,
};

// Render
pub use crate::render::{
    render_html, render_html_with, BasicRenderer, HtmlConfig, HtmlWriter, BULLET,
    DEFAULT_KEY_ATTR, DEFAULT_ORDERED_SEPARATOR,
};

// Error
pub use crate::error::{LayoutError, LayoutResult};
