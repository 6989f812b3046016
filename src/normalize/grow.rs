//! Overflow-driven cell growth.

use std::collections::HashMap;

use crate::item::{GridItem, MAX_GRID_EXTENT, content_item_id};
use crate::layout::Layout;

/// Vertical padding allowance subtracted from rendered height, in pixels.
pub const DEFAULT_VERTICAL_INSET_PX: f64 = 20.0;

/// Measured size of a block's rendered content, with the pixel size of one
/// grid cell at the time of measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedExtent {
    pub content_width: f64,
    pub content_height: f64,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl RenderedExtent {
    pub fn new(content_width: f64, content_height: f64, cell_width: f64, cell_height: f64) -> Self {
        Self {
            content_width,
            content_height,
            cell_width,
            cell_height,
        }
    }

    /// Derive the cell size from the containing track measured at a `w`×`h` span.
    pub fn from_track(
        content_width: f64,
        content_height: f64,
        track_width: f64,
        track_height: f64,
        w: u32,
        h: u32,
    ) -> Self {
        Self::new(
            content_width,
            content_height,
            track_width / f64::from(w.max(1)),
            track_height / f64::from(h.max(1)),
        )
    }

    /// Minimum `(cols, rows)` needed to contain the content, capped at
    /// `MAX_GRID_EXTENT`, or `None` when the cell size is unusable.
    pub fn min_span(&self, vertical_inset: f64) -> Option<(u32, u32)> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !usable(self.cell_width) || !usable(self.cell_height) {
            return None;
        }
        let cols = (self.content_width / self.cell_width).ceil();
        let rows = ((self.content_height - vertical_inset) / self.cell_height).ceil();
        if !cols.is_finite() || !rows.is_finite() {
            return None;
        }
        let cap = f64::from(MAX_GRID_EXTENT);
        Some((cols.clamp(0.0, cap) as u32, rows.clamp(0.0, cap) as u32))
    }
}

/// Measured extents keyed by content id.
pub type Extents = HashMap<String, RenderedExtent>;

/// New `(w, h)` for every item whose span is too small for its content.
/// Growth stops at the grid limit; out-of-bounds items are skipped.
pub fn overflow_changes(
    extents: &Extents,
    layout: &Layout,
    vertical_inset: f64,
) -> HashMap<String, (u32, u32)> {
    let mut changes = HashMap::new();
    for (content_id, extent) in extents {
        let item_id = content_item_id(content_id);
        let Some(item) = layout.find(&item_id).filter(|item| item.in_bounds()) else {
            continue;
        };
        let Some((min_cols, min_rows)) = extent.min_span(vertical_inset) else {
            continue;
        };
        let w = item.w.max(min_cols.min(MAX_GRID_EXTENT - item.x));
        let h = item.h.max(min_rows.min(MAX_GRID_EXTENT - item.y));
        if (w, h) != (item.w, item.h) {
            changes.insert(item_id, (w, h));
        }
    }
    changes
}

/// Widen or heighten items whose rendered content overflows their span.
///
/// Spans never shrink. Entries without a layout item, or with an unusable
/// cell size, are skipped. Returns `None` when nothing changes.
pub fn grow_overflowing(extents: &Extents, layout: &Layout, vertical_inset: f64) -> Option<Layout> {
    let changes = overflow_changes(extents, layout, vertical_inset);
    apply_changes(layout, &changes)
}

pub(crate) fn apply_changes(
    layout: &Layout,
    changes: &HashMap<String, (u32, u32)>,
) -> Option<Layout> {
    if changes.is_empty() {
        return None;
    }
    let items = layout
        .iter()
        .map(|item| match changes.get(&item.id) {
            Some(&(w, h)) => GridItem { w, h, ..item.clone() },
            None => item.clone(),
        })
        .collect();
    Some(items)
}
