//! Input model: Draft.js raw content state.
//!
//! - `ContentBlock` / `BlockType` - one flat block and its type tag
//! - `ContentState` - block list plus entity map, loadable from JSON

mod block;
mod state;

pub use block::{BlockType, ContentBlock, EntityRange, InlineStyleRange, ListKind};
pub use state::{ContentState, Entity, EntityMap};
