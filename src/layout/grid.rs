//! Per-breakpoint layouts.
//!
//! Only the active breakpoint (extra-small by default) is normalized; every
//! other breakpoint is carried through unchanged so a persisted attribute
//! round-trips intact.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::item::{GridItem, PlaceholderIdSource, SequentialPlaceholderIds, content_item_id};
use crate::layout::Layout;
use crate::store::GridAttribute;

/// Columns in the default placeholder grid.
pub const SEED_COLS: u32 = 4;
/// Rows in the default placeholder grid.
pub const SEED_ROWS: u32 = 3;

/// Viewport size class a layout applies to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Lg,
    Md,
    Sm,
    #[default]
    Xs,
    Xxs,
}

/// Layouts keyed by breakpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layouts {
    layouts: BTreeMap<Breakpoint, Layout>,
}

impl Layouts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default 4×3 grid of 1×1 placeholders on `active`, ids `block-appender-0..11`.
    pub fn seed(active: Breakpoint) -> Self {
        let mut ids = SequentialPlaceholderIds::new();
        let layout = (0..SEED_COLS * SEED_ROWS)
            .map(|n| GridItem::cell(ids.next_id(), n % SEED_COLS, n / SEED_COLS))
            .collect();
        let mut layouts = Self::new();
        layouts.set(active, layout);
        layouts
    }

    /// Rebuild layouts from a persisted attribute.
    ///
    /// Persisted items on `active` are matched to `content_order` by position
    /// and re-keyed as `block-<content id>`; items without a matching content
    /// id, and items with an empty or out-of-range span, are dropped. A
    /// missing attribute yields the seed grid.
    pub fn hydrate(
        attr: Option<&GridAttribute>,
        content_order: &[String],
        active: Breakpoint,
    ) -> Self {
        let Some(attr) = attr else {
            return Self::seed(active);
        };

        let mut layouts = Self::new();
        for (breakpoint, items) in attr.iter() {
            let layout = if *breakpoint == active {
                items
                    .iter()
                    .zip(content_order)
                    .map(|(item, content_id)| GridItem {
                        id: content_item_id(content_id),
                        ..item.clone()
                    })
                    .filter(|item| item.validate().is_ok())
                    .collect()
            } else {
                Layout::new(items.clone())
            };
            layouts.set(*breakpoint, layout);
        }
        if layouts.get(active).is_none() {
            layouts.set(active, Layout::default());
        }
        layouts
    }

    pub fn get(&self, breakpoint: Breakpoint) -> Option<&Layout> {
        self.layouts.get(&breakpoint)
    }

    pub fn set(&mut self, breakpoint: Breakpoint, layout: Layout) {
        self.layouts.insert(breakpoint, layout);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Breakpoint, &Layout)> {
        self.layouts.iter()
    }

    /// Placeholder-free projection written back to the owning document.
    pub fn persisted(&self) -> GridAttribute {
        self.layouts
            .iter()
            .map(|(breakpoint, layout)| (*breakpoint, layout.without_placeholders().into_items()))
            .collect()
    }
}

impl FromIterator<(Breakpoint, Layout)> for Layouts {
    fn from_iter<I: IntoIterator<Item = (Breakpoint, Layout)>>(iter: I) -> Self {
        Self {
            layouts: iter.into_iter().collect(),
        }
    }
}
