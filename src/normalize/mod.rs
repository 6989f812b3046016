//! Layout normalization pipeline.
//!
//! Three pure steps run in a fixed order, each consuming the previous
//! step's output: promotion, growth, then crop-and-fill. Every step returns
//! `None` when it leaves the layout alone, so a pass over unchanged inputs
//! reports no change and the caller keeps its current value.

pub mod fill;
pub mod grow;
pub mod promote;

pub use fill::{
    CropFill, GridBounds, GridFloor, crop, crop_and_fill, crop_and_fill_counted, empty_cells,
};
pub use grow::{
    DEFAULT_VERTICAL_INSET_PX, Extents, RenderedExtent, grow_overflowing, overflow_changes,
};
pub use promote::promote_placeholder;

use crate::item::PlaceholderIdSource;
use crate::layout::Layout;

/// Everything a pass reads.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeInput<'a> {
    pub prev_order: &'a [String],
    pub order: &'a [String],
    pub layout: &'a Layout,
    pub last_activated: Option<&'a str>,
    pub extents: &'a Extents,
    pub vertical_inset: f64,
    pub floor: GridFloor,
}

/// Which steps changed the layout, and by how much.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub promoted: bool,
    pub grown: usize,
    pub cropped: usize,
    pub filled: usize,
}

impl NormalizeReport {
    pub fn changed(&self) -> bool {
        self.promoted || self.grown > 0 || self.cropped > 0 || self.filled > 0
    }
}

/// Result of one pass. `layout` is `None` when the input is already normal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    pub layout: Option<Layout>,
    pub report: NormalizeReport,
}

/// Run promotion, growth and crop-and-fill over `input.layout`.
pub fn normalize(input: &NormalizeInput<'_>, ids: &mut dyn PlaceholderIdSource) -> Normalized {
    let mut report = NormalizeReport::default();
    let mut next: Option<Layout> = None;

    if let Some(promoted) = promote_placeholder(
        input.prev_order,
        input.order,
        input.layout,
        input.last_activated,
    ) {
        report.promoted = true;
        next = Some(promoted);
    }

    let current = next.as_ref().unwrap_or(input.layout);
    let changes = overflow_changes(input.extents, current, input.vertical_inset);
    if let Some(grown) = grow::apply_changes(current, &changes) {
        report.grown = changes.len();
        next = Some(grown);
    }

    let current = next.as_ref().unwrap_or(input.layout);
    let outcome = crop_and_fill_counted(current, input.floor, ids);
    report.cropped = outcome.cropped;
    report.filled = outcome.filled;
    if let Some(filled) = outcome.layout {
        next = Some(filled);
    }

    Normalized {
        layout: next,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{GridItem, SequentialPlaceholderIds, UuidPlaceholderIds};
    use crate::layout::{Breakpoint, Layouts};

    fn order(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn input<'a>(
        prev: &'a [String],
        next: &'a [String],
        layout: &'a Layout,
        last: Option<&'a str>,
        extents: &'a Extents,
    ) -> NormalizeInput<'a> {
        NormalizeInput {
            prev_order: prev,
            order: next,
            layout,
            last_activated: last,
            extents,
            vertical_inset: DEFAULT_VERTICAL_INSET_PX,
            floor: GridFloor::default(),
        }
    }

    fn assert_normal(layout: &Layout) {
        let bounds = GridBounds::of(layout, GridFloor::default());
        let content_floor = layout.max_content_row().unwrap_or(0).max(2);
        assert!(layout.iter().all(|item| item.y <= content_floor));

        let cells = layout.occupancy();
        for col in 0..=bounds.max_col {
            for row in 0..=bounds.max_row {
                assert_eq!(cells.get(&(col, row)), Some(&1), "cell ({col}, {row})");
            }
        }
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn seed_grid_is_already_normal() {
        let seed = Layouts::seed(Breakpoint::Xs);
        let layout = seed.get(Breakpoint::Xs).unwrap();
        let none = Extents::new();
        let result = normalize(&input(&[], &[], layout, None, &none), &mut UuidPlaceholderIds);
        assert_eq!(result.layout, None);
        assert!(!result.report.changed());
    }

    #[test]
    fn insertion_then_growth_then_fill() {
        let seed = Layouts::seed(Breakpoint::Xs);
        let layout = seed.get(Breakpoint::Xs).unwrap();
        let prev = order(&[]);
        let next = order(&["A"]);
        let mut extents = Extents::new();
        extents.insert("A".to_string(), RenderedExtent::new(180.0, 260.0, 100.0, 100.0));

        let mut ids = SequentialPlaceholderIds::starting_at(50);
        let result = normalize(
            &input(&prev, &next, layout, Some("block-appender-5"), &extents),
            &mut ids,
        );

        let normal = result.layout.expect("changed");
        assert_eq!(normal.find("block-A"), Some(&GridItem::new("block-A", 1, 1, 2, 3)));
        assert!(result.report.promoted);
        assert_eq!(result.report.grown, 1);
        assert_eq!(result.report.cropped, 3);
        assert_eq!(result.report.filled, 2);
        assert_normal(&normal);
    }

    #[test]
    fn second_pass_over_same_inputs_is_a_no_op() {
        let layout = Layout::new(vec![GridItem::cell("block-A", 0, 0)]);
        let prev = order(&["A"]);
        let mut extents = Extents::new();
        extents.insert("A".to_string(), RenderedExtent::new(250.0, 90.0, 100.0, 100.0));

        let first = normalize(
            &input(&prev, &prev, &layout, None, &extents),
            &mut UuidPlaceholderIds,
        )
        .layout
        .expect("changed");
        assert_eq!(first.find("block-A").map(|item| item.w), Some(3));
        assert_normal(&first);

        let second = normalize(
            &input(&prev, &prev, &first, None, &extents),
            &mut UuidPlaceholderIds,
        );
        assert_eq!(second.layout, None);
    }

    #[test]
    fn growth_is_monotonic() {
        let layout = Layout::new(vec![
            GridItem::new("block-A", 0, 0, 2, 2),
            GridItem::new("block-B", 2, 0, 2, 1),
            GridItem::cell("block-C", 0, 2),
        ]);
        let prev = order(&["A", "B", "C"]);
        let mut extents = Extents::new();
        extents.insert("A".to_string(), RenderedExtent::new(10.0, 10.0, 100.0, 100.0));
        extents.insert("B".to_string(), RenderedExtent::new(10.0, 330.0, 100.0, 100.0));
        extents.insert("C".to_string(), RenderedExtent::new(640.0, 10.0, 100.0, 100.0));

        let normal = normalize(
            &input(&prev, &prev, &layout, None, &extents),
            &mut UuidPlaceholderIds,
        )
        .layout
        .expect("changed");

        for before in layout.iter() {
            let after = normal.find(&before.id).expect("kept");
            assert!(after.w >= before.w && after.h >= before.h, "{}", before.id);
        }
        assert_eq!(normal.find("block-B").map(|item| item.h), Some(4));
        assert_eq!(normal.find("block-C").map(|item| item.w), Some(7));
    }
}
