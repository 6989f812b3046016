use crate::item::{CONTENT_PREFIX, GridItem};
use crate::layout::Layout;
use crate::normalize::{GridBounds, GridFloor};
use crate::width::fit_to_width;

/// CSS `grid-area` placement for one saved item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridArea {
    pub id: String,
    pub area: String,
}

impl GridArea {
    /// `row-start / column-start / row-end / column-end`, 1-based.
    pub fn of(item: &GridItem) -> Self {
        Self {
            id: item.id.clone(),
            area: format!(
                "{} / {} / {} / {}",
                item.y + 1,
                item.x + 1,
                item.y + 1 + item.h,
                item.x + 1 + item.w
            ),
        }
    }

    pub fn style(&self) -> String {
        format!("grid-area: {}", self.area)
    }
}

/// Track counts and item placement for saved grid markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridTemplate {
    pub rows: u32,
    pub cols: u32,
    pub areas: Vec<GridArea>,
}

impl GridTemplate {
    pub fn from_items(items: &[GridItem], floor: GridFloor) -> Self {
        let bounds = GridBounds::of(items, floor);
        Self {
            rows: bounds.rows(),
            cols: bounds.cols(),
            areas: items.iter().map(GridArea::of).collect(),
        }
    }

    /// Inline style for the grid container.
    pub fn style(&self) -> String {
        format!(
            "display: grid; grid-template-rows: repeat({}, 1fr); grid-template-columns: repeat({}, 1fr)",
            self.rows, self.cols
        )
    }
}

/// Fixed-width map of `layout`, one line per row.
///
/// Cells show `+` for placeholders, the content id (without its prefix)
/// for content, `.` for gaps and `#` where items overlap.
pub fn render_text(layout: &Layout, floor: GridFloor, cell_width: usize) -> String {
    let bounds = GridBounds::of(layout, floor);
    let cell_width = cell_width.max(1);
    let mut lines = Vec::with_capacity(bounds.rows() as usize);
    for row in 0..=bounds.max_row {
        let cells: Vec<String> = (0..=bounds.max_col)
            .map(|col| {
                let mut covering = layout.iter().filter(|item| item.covers(col, row));
                let label = match (covering.next(), covering.next()) {
                    (None, _) => ".",
                    (Some(_), Some(_)) => "#",
                    (Some(item), None) if item.is_placeholder() => "+",
                    (Some(item), None) => item.id.strip_prefix(CONTENT_PREFIX).unwrap_or(&item.id),
                };
                fit_to_width(label, cell_width)
            })
            .collect();
        lines.push(cells.join(" ").trim_end().to_string());
    }
    lines.join("\n")
}
