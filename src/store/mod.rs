//! Persistence seam between the grid and its owning document.
//!
//! The document stores a `grid` attribute keyed by breakpoint. Writes are
//! fire-and-forget from the grid's point of view.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::error::Result;
use crate::item::GridItem;
use crate::layout::Breakpoint;

/// Persisted `grid` attribute: content items per breakpoint.
pub type GridAttribute = BTreeMap<Breakpoint, Vec<GridItem>>;

pub fn attribute_from_json(raw: &str) -> Result<GridAttribute> {
    Ok(serde_json::from_str(raw)?)
}

pub fn attribute_to_json(attr: &GridAttribute) -> Result<String> {
    Ok(serde_json::to_string(attr)?)
}

/// Receives placeholder-free layouts after a manual edit.
pub trait GridStore: Send + Sync {
    fn update_grid(&self, attr: &GridAttribute);
}

/// Drops every write.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStore;

impl GridStore for NullStore {
    fn update_grid(&self, _attr: &GridAttribute) {}
}

/// Keeps every write in memory. Clones share the same history.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    writes: Arc<Mutex<Vec<GridAttribute>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<GridAttribute> {
        self.writes
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<GridAttribute> {
        self.writes
            .lock()
            .ok()
            .and_then(|guard| guard.last().cloned())
    }
}

impl GridStore for MemoryStore {
    fn update_grid(&self, attr: &GridAttribute) {
        if let Ok(mut guard) = self.writes.lock() {
            guard.push(attr.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;

    #[test]
    fn parses_native_attribute_json() {
        let raw = r#"{"xs":[{"i":"block-a","x":0,"y":0,"w":2,"h":1}],"lg":[]}"#;
        let attr = attribute_from_json(raw).unwrap();
        assert_eq!(attr[&Breakpoint::Xs], vec![GridItem::new("block-a", 0, 0, 2, 1)]);
        assert!(attr[&Breakpoint::Lg].is_empty());
    }

    #[test]
    fn writes_breakpoints_in_order() {
        let mut attr = GridAttribute::new();
        attr.insert(Breakpoint::Xs, vec![GridItem::cell("block-a", 1, 2)]);
        let json = attribute_to_json(&attr).unwrap();
        assert_eq!(json, r#"{"xs":[{"i":"block-a","x":1,"y":2,"w":1,"h":1}]}"#);
    }

    #[test]
    fn rejects_unknown_breakpoint() {
        let err = attribute_from_json(r#"{"huge":[]}"#).unwrap_err();
        assert!(matches!(err, GridError::Serde(_)));
    }

    #[test]
    fn memory_store_records_writes() {
        let store = MemoryStore::new();
        let shared = store.clone();
        let mut attr = GridAttribute::new();
        attr.insert(Breakpoint::Xs, Vec::new());
        store.update_grid(&attr);
        assert_eq!(shared.writes().len(), 1);
        assert_eq!(shared.last(), Some(attr));
    }
}
