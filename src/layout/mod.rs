//! Block layout: flat content blocks → keyed node sequence.
//!
//! One pass over the blocks, in order. For every block the engine:
//!
//! 1. closes list runs that end here, emitting a separator node
//! 2. updates the list counters for its own kind
//! 3. dispatches to the renderer (or handler) for its type
//! 4. appends one node, usually a keyed container holding the optional
//!    separator followed by the rendered block
//!
//! # Run boundaries
//!
//! Unordered and ordered runs are tracked separately. A non-list block ends
//! both; a list item ends only the run of the other kind. Either way the end
//! of a non-empty run yields one separator, styled with the `viewAfterList`
//! custom style.
//!
//! # Example
//!
//! ```ignore
//! use draft_vdom::prelude::*;
//!
//! let state = ContentState::from_json(json)?;
//! let params = LayoutParams::new(&state)
//!     .with_options(LayoutOptions::new().with_ordered_list_separator("."));
//! let nodes = layout_blocks(&params, BasicRenderer::new())?;
//! ```

mod counter;
mod options;
mod renderer;

pub use options::{AtomicHandler, CustomBlockHandler, LayoutOptions, LayoutParams};
pub use renderer::{BlockRenderer, ItemData, Navigate, RenderContext};

use tracing::{debug, debug_span, trace};

use crate::content::{BlockType, ContentBlock, ListKind};
use crate::key::{KeyGenerator, NodeKey, SequentialKeys};
use crate::node::{Element, Node};

use self::counter::ListCounters;

// =============================================================================
// Entry points
// =============================================================================

/// Lay out `params` with `renderer` and a fresh [`SequentialKeys`] source.
///
/// Returns `Ok(None)` when the content state has no block list.
pub fn layout_blocks<R: BlockRenderer>(
    params: &LayoutParams<'_, R::Error>,
    renderer: R,
) -> Result<Option<Vec<Node>>, R::Error> {
    BlockLayout::new(renderer).layout(params)
}

/// Layout engine bound to a renderer and a key source.
///
/// Reusable: counters are created per [`layout`](Self::layout) call, only the
/// key source carries over between calls.
#[derive(Debug)]
pub struct BlockLayout<R, K = SequentialKeys> {
    renderer: R,
    keys: K,
}

impl<R: BlockRenderer> BlockLayout<R, SequentialKeys> {
    pub fn new(renderer: R) -> Self {
        Self::with_keys(renderer, SequentialKeys::new())
    }
}

impl<R: BlockRenderer, K: KeyGenerator> BlockLayout<R, K> {
    pub fn with_keys(renderer: R, keys: K) -> Self {
        Self { renderer, keys }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_parts(self) -> (R, K) {
        (self.renderer, self.keys)
    }

    /// Run one layout pass.
    ///
    /// The first renderer or handler error stops the pass and is returned
    /// unchanged; nodes produced so far are discarded.
    pub fn layout(
        &mut self,
        params: &LayoutParams<'_, R::Error>,
    ) -> Result<Option<Vec<Node>>, R::Error> {
        let Some(blocks) = params.content_state().blocks.as_deref() else {
            debug!("content state has no block list");
            return Ok(None);
        };

        let _span = debug_span!("layout_blocks", blocks = blocks.len()).entered();
        let limit = params.options().number_of_lines;

        let mut pass = LayoutPass {
            params,
            renderer: &mut self.renderer,
            keys: &mut self.keys,
            counters: ListCounters::new(),
            output: Vec::with_capacity(limit.map_or(blocks.len(), |n| n.min(blocks.len()))),
        };

        for (index, block) in blocks.iter().enumerate() {
            if Some(index) == limit {
                debug!(index, "block limit reached, stopping");
                break;
            }
            trace!(index, key = %block.key, block_type = %block.block_type, "laying out block");
            pass.layout_block(block)?;
        }

        Ok(Some(pass.output))
    }
}

// =============================================================================
// LayoutPass
// =============================================================================

/// State of a single pass. Dropped when the pass returns.
struct LayoutPass<'p, 'a, R: BlockRenderer, K> {
    params: &'p LayoutParams<'a, R::Error>,
    renderer: &'p mut R,
    keys: &'p mut K,
    counters: ListCounters,
    output: Vec<Node>,
}

impl<R: BlockRenderer, K: KeyGenerator> LayoutPass<'_, '_, R, K> {
    fn layout_block(&mut self, block: &ContentBlock) -> Result<(), R::Error> {
        let params = self.params;
        let item = ItemData::from(block);
        let ctx = params.render_context();

        match &block.block_type {
            BlockType::Unstyled
            | BlockType::Paragraph
            | BlockType::HeaderOne
            | BlockType::HeaderTwo
            | BlockType::HeaderThree
            | BlockType::HeaderFour
            | BlockType::HeaderFive
            | BlockType::HeaderSix
            | BlockType::CodeBlock => {
                let separator = self.close_runs(None);
                let key = self.keys.next_key();
                let node = self.renderer.text(&item, &ctx)?;
                self.push_container(key, separator, node);
            }

            BlockType::Blockquote => {
                let separator = self.close_runs(None);
                let key = self.keys.next_key();
                let node = self.renderer.quote(&item, &ctx)?;
                self.push_container(key, separator, node);
            }

            BlockType::Atomic => match params.atomic_handler() {
                Some(handler) => {
                    let separator = self.close_runs(None);
                    let node = handler(block, &params.content_state().entity_map)?;
                    match separator {
                        Some(separator) => {
                            let key = self.keys.next_key();
                            self.push_container(key, Some(separator), node);
                        }
                        None => self.output.push(node),
                    }
                }
                None => {
                    trace!(key = %block.key, "no atomic handler, passing block through");
                    self.output.push(Node::from(block.clone()));
                }
            },

            BlockType::UnorderedListItem => {
                let separator = self.close_runs(Some(ListKind::Unordered));
                self.counters.next_unordered();
                let key = self.keys.next_key();
                let node = self.renderer.unordered_item(&item, &ctx)?;
                self.push_container(key, separator, node);
            }

            BlockType::OrderedListItem => {
                let separator = self.close_runs(Some(ListKind::Ordered));
                let number = self.counters.next_ordered(block.is_nested());
                let key = self.keys.next_key();
                let node = self.renderer.ordered_item(&item, number, &ctx)?;
                self.push_container(key, separator, node);
            }

            BlockType::Custom(tag) => {
                let separator = self.close_runs(None);
                match params.custom_block_handler() {
                    Some(handler) => {
                        if separator.is_some() {
                            debug!(block_type = %tag, "custom handler owns keying, separator dropped");
                        }
                        let node = handler(block, params)?;
                        self.output.push(node);
                    }
                    None => {
                        let key = self.keys.next_key();
                        let container = Element::container(key).maybe_child(separator);
                        self.output.push(container.into());
                    }
                }
            }
        }

        Ok(())
    }

    /// Apply the run-boundary policy for a block of list kind `current`
    /// (`None` for non-list blocks). Must run once per block.
    fn close_runs(&mut self, current: Option<ListKind>) -> Option<Element> {
        let ended = match current {
            None => self.counters.end_all_runs(),
            Some(kind) => self.counters.end_other_run(kind),
        };
        if !ended {
            return None;
        }

        debug!(before = ?current.map(ListKind::as_str), "list run ended, inserting separator");
        let params = self.params;
        let style = params.options().custom_styles.view_after_list();
        Some(Element::separator(self.keys.next_key(), style))
    }

    fn push_container(&mut self, key: NodeKey, separator: Option<Element>, node: Node) {
        let container = Element::container(key).maybe_child(separator).child(node);
        self.output.push(container.into());
    }
}

// =============================================================================
// Tests
// =============================================================================
