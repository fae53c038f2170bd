//! Content state: the block list plus the entity map.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LayoutError, LayoutResult};

use super::ContentBlock;

/// An entity referenced from block text (links, mentions, embedded media).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type", default)]
    pub entity_type: String,
    #[serde(default)]
    pub mutability: String,
    #[serde(default)]
    pub data: Value,
}

impl Entity {
    pub fn new(entity_type: impl Into<String>, data: Value) -> Self {
        Self {
            entity_type: entity_type.into(),
            mutability: "MUTABLE".to_string(),
            data,
        }
    }
}

/// Entity id → entity payload.
pub type EntityMap = FxHashMap<String, Entity>;

/// Raw content state as serialized by the editor.
///
/// `blocks` stays `None` when the source has no block list at all, which the
/// layout engine reports as an absent result rather than an empty one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentState {
    #[serde(default)]
    pub blocks: Option<Vec<ContentBlock>>,
    #[serde(default)]
    pub entity_map: EntityMap,
}

impl ContentState {
    /// Content state with the given blocks and no entities.
    pub fn new(blocks: Vec<ContentBlock>) -> Self {
        Self {
            blocks: Some(blocks),
            entity_map: EntityMap::default(),
        }
    }

    /// Content state without a block list.
    pub fn without_blocks() -> Self {
        Self::default()
    }

    pub fn with_entity(mut self, id: impl Into<String>, entity: Entity) -> Self {
        self.entity_map.insert(id.into(), entity);
        self
    }

    /// Parse a raw content state from JSON text.
    pub fn from_json(json: &str) -> LayoutResult<Self> {
        serde_json::from_str(json).map_err(LayoutError::InvalidContent)
    }

    /// Convert an already-parsed JSON value.
    pub fn from_value(value: Value) -> LayoutResult<Self> {
        serde_json::from_value(value).map_err(LayoutError::InvalidContent)
    }

    /// Number of blocks (0 when the list is absent).
    pub fn block_count(&self) -> usize {
        self.blocks.as_ref().map_or(0, Vec::len)
    }

    /// Look up an entity by its range key.
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entity_map.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::BlockType;

    const RAW: &str = r#"{
        "blocks": [
            {"key": "a", "text": "Title", "type": "header-one", "depth": 0,
             "inlineStyleRanges": [], "entityRanges": [], "data": {}},
            {"key": "b", "text": "see here", "type": "unstyled", "depth": 0,
             "inlineStyleRanges": [], "entityRanges": [{"offset": 4, "length": 4, "key": 0}],
             "data": {}}
        ],
        "entityMap": {
            "0": {"type": "LINK", "mutability": "MUTABLE", "data": {"url": "https://example.com"}}
        }
    }"#;

    #[test]
    fn test_from_json() {
        let state = ContentState::from_json(RAW).unwrap();
        assert_eq!(state.block_count(), 2);
        let blocks = state.blocks.as_ref().unwrap();
        assert_eq!(blocks[0].block_type, BlockType::HeaderOne);

        let key = blocks[1].entity_ranges[0].entity_key().unwrap();
        let link = state.entity(&key).unwrap();
        assert_eq!(link.entity_type, "LINK");
        assert_eq!(link.data["url"], "https://example.com");
    }

    #[test]
    fn test_missing_blocks_stays_absent() {
        let state = ContentState::from_json(r#"{"entityMap": {}}"#).unwrap();
        assert!(state.blocks.is_none());
        assert_eq!(state.block_count(), 0);

        let state = ContentState::from_json(r#"{"blocks": []}"#).unwrap();
        assert_eq!(state.blocks.as_deref().map(<[_]>::len), Some(0));
    }

    #[test]
    fn test_null_block_fields_still_load() {
        let state =
            ContentState::from_json(r#"{"blocks": [{"key": "n", "text": null, "type": null}]}"#)
                .unwrap();
        let block = &state.blocks.as_ref().unwrap()[0];
        assert_eq!(block.text, "");
        assert_eq!(block.block_type, BlockType::Unstyled);
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = ContentState::from_json("{\"blocks\": 3}").unwrap_err();
        assert!(matches!(err, LayoutError::InvalidContent(_)));
        assert!(err.to_string().starts_with("invalid content state"));
    }
}
