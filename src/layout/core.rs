use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::item::GridItem;

/// Ordered grid items for a single breakpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    items: Vec<GridItem>,
}

impl Layout {
    pub const fn new(items: Vec<GridItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[GridItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<GridItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GridItem> {
        self.items.iter()
    }

    pub fn push(&mut self, item: GridItem) {
        self.items.push(item);
    }

    pub fn find(&self, id: &str) -> Option<&GridItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn content_items(&self) -> impl Iterator<Item = &GridItem> {
        self.items.iter().filter(|item| !item.is_placeholder())
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &GridItem> {
        self.items.iter().filter(|item| item.is_placeholder())
    }

    /// Lowest row reached by any content item, ignoring placeholders.
    pub fn max_content_row(&self) -> Option<u32> {
        self.content_items().map(GridItem::bottom_row).max()
    }

    /// Rightmost column reached by any item.
    pub fn max_col(&self) -> Option<u32> {
        self.items.iter().map(GridItem::right_col).max()
    }

    /// Number of items covering each occupied cell.
    pub fn occupancy(&self) -> HashMap<(u32, u32), usize> {
        let mut cells = HashMap::new();
        for item in &self.items {
            for cell in item.cells() {
                *cells.entry(cell).or_insert(0) += 1;
            }
        }
        cells
    }

    /// Reject empty spans and repeated ids.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            item.validate()?;
            if !seen.insert(item.id.as_str()) {
                return Err(GridError::DuplicateId(item.id.clone()));
            }
        }
        Ok(())
    }

    /// Copy of this layout without placeholder items.
    pub fn without_placeholders(&self) -> Layout {
        self.content_items().cloned().collect()
    }
}

impl FromIterator<GridItem> for Layout {
    fn from_iter<I: IntoIterator<Item = GridItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<GridItem>> for Layout {
    fn from(items: Vec<GridItem>) -> Self {
        Self::new(items)
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a GridItem;
    type IntoIter = std::slice::Iter<'a, GridItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
