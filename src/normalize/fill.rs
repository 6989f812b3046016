//! Bounds cropping and gap filling.
//!
//! Placeholders never push the grid below the lowest content row, and every
//! cell inside the bounds ends up covered by some item.

use std::collections::HashSet;

use crate::item::{GridItem, MAX_GRID_EXTENT, PlaceholderIdSource};
use crate::layout::{Layout, SEED_COLS, SEED_ROWS};

/// Minimum visible grid size, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridFloor {
    pub min_cols: u32,
    pub min_rows: u32,
}

impl Default for GridFloor {
    fn default() -> Self {
        Self {
            min_cols: SEED_COLS,
            min_rows: SEED_ROWS,
        }
    }
}

/// Inclusive last column and row of the visible grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub max_col: u32,
    pub max_row: u32,
}

impl GridBounds {
    /// Bounds for `items`: rows follow content only, columns follow every item.
    /// Out-of-bounds items are ignored and floors are capped at `MAX_GRID_EXTENT`.
    pub fn of<'a>(items: impl IntoIterator<Item = &'a GridItem>, floor: GridFloor) -> Self {
        let mut max_col = floor.min_cols.min(MAX_GRID_EXTENT).saturating_sub(1);
        let mut max_row = floor.min_rows.min(MAX_GRID_EXTENT).saturating_sub(1);
        for item in items.into_iter().filter(|item| item.in_bounds()) {
            max_col = max_col.max(item.right_col());
            if !item.is_placeholder() {
                max_row = max_row.max(item.bottom_row());
            }
        }
        Self { max_col, max_row }
    }

    pub fn cols(&self) -> u32 {
        self.max_col + 1
    }

    pub fn rows(&self) -> u32 {
        self.max_row + 1
    }
}

/// Drop every item starting below `max_row`, and every placeholder that a
/// content item has grown over.
pub fn crop(layout: &Layout, max_row: u32) -> Option<Layout> {
    let content: Vec<&GridItem> = layout.content_items().collect();
    let keep = |item: &GridItem| {
        item.y <= max_row
            && !(item.is_placeholder() && content.iter().any(|other| other.overlaps(item)))
    };
    if layout.iter().all(keep) {
        return None;
    }
    Some(layout.iter().filter(|item| keep(*item)).cloned().collect())
}

/// Uncovered cells inside `bounds`, column-major.
pub fn empty_cells(layout: &Layout, bounds: GridBounds) -> Vec<(u32, u32)> {
    let occupied: HashSet<(u32, u32)> = layout.iter().flat_map(|item| item.cells()).collect();
    (0..=bounds.max_col)
        .flat_map(|col| (0..=bounds.max_row).map(move |row| (col, row)))
        .filter(|cell| !occupied.contains(cell))
        .collect()
}

/// Outcome of a crop-and-fill pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CropFill {
    pub layout: Option<Layout>,
    pub cropped: usize,
    pub filled: usize,
}

/// Crop below the content and fill every gap with a fresh 1×1 placeholder.
pub fn crop_and_fill_counted(
    layout: &Layout,
    floor: GridFloor,
    ids: &mut dyn PlaceholderIdSource,
) -> CropFill {
    let max_row = GridBounds::of(layout, floor).max_row;
    let cropped_layout = crop(layout, max_row);
    let cropped = cropped_layout
        .as_ref()
        .map_or(0, |next| layout.len() - next.len());

    let current = cropped_layout.as_ref().unwrap_or(layout);
    let bounds = GridBounds::of(current, floor);
    let gaps = empty_cells(current, bounds);
    if gaps.is_empty() {
        return CropFill {
            layout: cropped_layout,
            cropped,
            filled: 0,
        };
    }

    let filled = gaps.len();
    let mut next = cropped_layout.unwrap_or_else(|| layout.clone());
    for (col, row) in gaps {
        next.push(GridItem::cell(ids.next_id(), col, row));
    }
    CropFill {
        layout: Some(next),
        cropped,
        filled,
    }
}

/// Crop below the content and fill every gap. Returns `None` when nothing changes.
pub fn crop_and_fill(
    layout: &Layout,
    floor: GridFloor,
    ids: &mut dyn PlaceholderIdSource,
) -> Option<Layout> {
    crop_and_fill_counted(layout, floor, ids).layout
}
