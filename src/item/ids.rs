//! Item id conventions and placeholder id generation.
//!
//! Content items carry `block-<content id>`; placeholders carry
//! `block-appender-<suffix>`. Placeholder ids also start with the content
//! prefix, so classification must always test the placeholder prefix first.

use uuid::Uuid;

pub const CONTENT_PREFIX: &str = "block-";
pub const PLACEHOLDER_PREFIX: &str = "block-appender-";

/// Grid item id for a content (block) id.
pub fn content_item_id(content_id: &str) -> String {
    format!("{CONTENT_PREFIX}{content_id}")
}

pub fn is_placeholder_id(id: &str) -> bool {
    id.starts_with(PLACEHOLDER_PREFIX)
}

/// Supplies fresh, unique placeholder ids to the fill step.
pub trait PlaceholderIdSource {
    fn next_id(&mut self) -> String;
}

/// Random `block-appender-<uuid v4>` ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidPlaceholderIds;

impl PlaceholderIdSource for UuidPlaceholderIds {
    fn next_id(&mut self) -> String {
        format!("{PLACEHOLDER_PREFIX}{}", Uuid::new_v4())
    }
}

/// Counter-based ids (`block-appender-0`, `block-appender-1`, ...).
#[derive(Debug, Default, Clone)]
pub struct SequentialPlaceholderIds {
    next: u64,
}

impl SequentialPlaceholderIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl PlaceholderIdSource for SequentialPlaceholderIds {
    fn next_id(&mut self) -> String {
        let id = format!("{PLACEHOLDER_PREFIX}{}", self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_prefix_wins_over_content_prefix() {
        assert!(is_placeholder_id("block-appender-7"));
        assert!(!is_placeholder_id("block-7"));
        assert!(!is_placeholder_id("block-appende"));
    }

    #[test]
    fn uuid_ids_are_prefixed_and_unique() {
        let mut ids = UuidPlaceholderIds;
        let a = ids.next_id();
        let b = ids.next_id();
        assert!(is_placeholder_id(&a));
        assert_eq!(a.len(), PLACEHOLDER_PREFIX.len() + 36);
        assert_ne!(a, b);
    }

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialPlaceholderIds::starting_at(11);
        assert_eq!(ids.next_id(), "block-appender-11");
        assert_eq!(ids.next_id(), "block-appender-12");
    }
}
