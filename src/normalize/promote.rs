//! Placeholder-to-content promotion.
//!
//! When a block is appended to the content order, the placeholder the user
//! last activated becomes that block's cell.

use crate::item::{GridItem, content_item_id};
use crate::layout::Layout;

/// Give the newest content id the cell of the last activated placeholder.
///
/// Fires only when the last id of `order` is absent from `prev_order` and
/// `last_activated` names an item in `layout`. Any item already carrying the
/// promoted id is removed. When several ids arrive at once only the last is
/// promoted. Returns `None` when nothing changes.
pub fn promote_placeholder(
    prev_order: &[String],
    order: &[String],
    layout: &Layout,
    last_activated: Option<&str>,
) -> Option<Layout> {
    let newest = order.last()?;
    if prev_order.contains(newest) {
        return None;
    }
    let placeholder_id = last_activated?;
    layout.position_of(placeholder_id)?;

    let promoted_id = content_item_id(newest);
    let items = layout
        .iter()
        .filter_map(|item| {
            if item.id == placeholder_id {
                Some(GridItem {
                    id: promoted_id.clone(),
                    ..item.clone()
                })
            } else if item.id == promoted_id {
                None
            } else {
                Some(item.clone())
            }
        })
        .collect();
    Some(items)
}
