//! Grid item module orchestrator.
//!
//! Callers import `GridItem` and the id helpers from here; the positioned
//! item lives in `core` and id generation lives in `ids`.

mod core;
pub mod ids;

pub use self::core::{GridItem, ItemKind, MAX_GRID_EXTENT};
pub use ids::{
    CONTENT_PREFIX, PLACEHOLDER_PREFIX, PlaceholderIdSource, SequentialPlaceholderIds,
    UuidPlaceholderIds, content_item_id, is_placeholder_id,
};
