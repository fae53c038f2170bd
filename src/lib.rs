//! draft-vdom - Keyed view trees from Draft.js content state
//!
//! ## Core Concepts
//!
//! **Block layout**: a flat, ordered list of content blocks is turned into a
//! sequence of keyed nodes. Consecutive list items form runs; when a run ends
//! a separator node is emitted so renderers can space lists apart. Ordered
//! items are numbered per run, nested items per parent.
//!
//! **Pluggable rendering**: the engine owns grouping, numbering and keys. What
//! each block looks like is decided by a [`BlockRenderer`], plus optional
//! handlers for atomic and custom block types.
//!
//! ## Modules
//! - `content`: Draft.js raw content model (blocks, entities)
//! - `props`: style and prop maps, custom style table
//! - `node`: Node/Element/Text output tree
//! - `key`: node keys and key generators
//! - `layout`: the layout engine, options and renderer traits
//! - `render`: stock renderer and HTML serialization
//!
//! ## Usage
//!
//! ```ignore
//! use draft_vdom::prelude::*;
//!
//! let state = ContentState::from_json(raw)?;
//! let params = LayoutParams::new(&state);
//! if let Some(nodes) = layout_blocks(&params, BasicRenderer::new())? {
//!     println!("{}", render_html(&nodes));
//! }
//! ```

#[macro_use]
mod macros;

// =============================================================================
// Core modules
// =============================================================================

/// Draft.js content model
pub mod content;

/// Style and prop maps
pub mod props;

/// Node types: Element, Node, Text
pub mod node;

/// Node keys
pub mod key;

/// Block layout engine
pub mod layout;

/// Stock renderer and HTML output
pub mod render;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Content model
pub use content::{BlockType, ContentBlock, ContentState, Entity, EntityMap, ListKind};

// Props
pub use props::{CustomStyles, Props, Style, TextProps, VIEW_AFTER_LIST};

// Node types
pub use node::{Children, Element, Node, Text};

// Keys
pub use key::{KeyGenerator, NodeKey, SequentialKeys};

// Layout
pub use layout::{
    layout_blocks, BlockLayout, BlockRenderer, ItemData, LayoutOptions, LayoutParams, Navigate,
    RenderContext,
};

// Render
pub use render::{render_html, render_html_with, BasicRenderer, HtmlConfig};

// Error types
pub use error::{LayoutError, LayoutResult};
