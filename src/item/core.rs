use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::item::ids::{content_item_id, is_placeholder_id};

/// Whether an item positions a block or marks an empty insertion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Content,
    Placeholder,
}

/// Largest column or row count a grid may reach.
pub const MAX_GRID_EXTENT: u32 = 1024;

/// A positioned cell span on the grid.
///
/// `x`/`y` are the 0-based top-left cell; `w`/`h` are the span in cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridItem {
    #[serde(rename = "i", alias = "id")]
    pub id: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl GridItem {
    pub fn new(id: impl Into<String>, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w,
            h,
        }
    }

    /// A 1×1 item at `(x, y)`.
    pub fn cell(id: impl Into<String>, x: u32, y: u32) -> Self {
        Self::new(id, x, y, 1, 1)
    }

    /// Content item for `content_id`, applying the content prefix.
    pub fn content(content_id: &str, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self::new(content_item_id(content_id), x, y, w, h)
    }

    pub fn kind(&self) -> ItemKind {
        if is_placeholder_id(&self.id) {
            ItemKind::Placeholder
        } else {
            ItemKind::Content
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind() == ItemKind::Placeholder
    }

    /// Last column covered by this item. Zero-width items report their origin.
    pub fn right_col(&self) -> u32 {
        self.x.saturating_add(self.w.saturating_sub(1))
    }

    /// Last row covered by this item. Zero-height items report their origin.
    pub fn bottom_row(&self) -> u32 {
        self.y.saturating_add(self.h.saturating_sub(1))
    }

    /// Whether the item has a non-empty span that ends within `MAX_GRID_EXTENT`.
    pub fn in_bounds(&self) -> bool {
        self.w > 0
            && self.h > 0
            && self.x.saturating_add(self.w) <= MAX_GRID_EXTENT
            && self.y.saturating_add(self.h) <= MAX_GRID_EXTENT
    }

    /// Whether `(col, row)` lies in the occupied rectangle. Out-of-bounds
    /// items cover nothing.
    pub fn covers(&self, col: u32, row: u32) -> bool {
        self.in_bounds()
            && col >= self.x
            && col < self.x + self.w
            && row >= self.y
            && row < self.y + self.h
    }

    /// Whether the two occupied rectangles share at least one cell.
    pub fn overlaps(&self, other: &GridItem) -> bool {
        self.in_bounds()
            && other.in_bounds()
            && self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    /// Every `(col, row)` inside the occupied rectangle. Out-of-bounds items
    /// occupy nothing.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let (cols, rows) = if self.in_bounds() {
            (self.x..self.x + self.w, self.y..self.y + self.h)
        } else {
            (0..0, 0..0)
        };
        cols.flat_map(move |col| rows.clone().map(move |row| (col, row)))
    }

    pub fn validate(&self) -> Result<()> {
        if self.w == 0 || self.h == 0 {
            return Err(GridError::EmptySpan(self.id.clone()));
        }
        if !self.in_bounds() {
            return Err(GridError::OutOfBounds(self.id.clone()));
        }
        Ok(())
    }
}
