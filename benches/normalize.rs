use std::sync::Arc;

use block_grid::logging::{LogEvent, LogSink};
use block_grid::{
    Breakpoint, Extents, GridConfig, GridFloor, GridItem, GridState, Layout, Layouts, Logger,
    LoggingResult, NormalizeInput, NullStore, RenderedExtent, SequentialPlaceholderIds,
    normalize,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

#[derive(Clone, Default)]
struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _event: &LogEvent) -> LoggingResult<()> {
        Ok(())
    }
}

fn content_order(count: usize) -> Vec<String> {
    (0..count).map(|n| format!("b{n}")).collect()
}

/// Blocks stacked two per row, half of them overflowing.
fn sparse_layout(order: &[String]) -> (Layout, Extents) {
    let mut extents = Extents::new();
    let items = order
        .iter()
        .enumerate()
        .map(|(n, id)| {
            let width = if n % 2 == 0 { 260.0 } else { 90.0 };
            extents.insert(id.clone(), RenderedExtent::new(width, 150.0, 100.0, 100.0));
            GridItem::content(id, (n as u32 % 2) * 4, (n as u32 / 2) * 2, 1, 1)
        })
        .collect();
    (items, extents)
}

fn normalize_sparse(c: &mut Criterion) {
    let order = content_order(64);
    let (layout, extents) = sparse_layout(&order);
    c.bench_function("normalize_sparse_64", |b| {
        b.iter(|| {
            let mut ids = SequentialPlaceholderIds::new();
            let input = NormalizeInput {
                prev_order: &order,
                order: &order,
                layout: black_box(&layout),
                last_activated: None,
                extents: &extents,
                vertical_inset: 20.0,
                floor: GridFloor::default(),
            };
            normalize(&input, &mut ids)
        });
    });
}

fn state_insert_script(c: &mut Criterion) {
    c.bench_function("state_insert_12", |b| {
        b.iter(|| {
            let config = GridConfig::default().with_logger(Logger::new(NullSink));
            let mut state = GridState::new(None, Vec::new(), config, Arc::new(NullStore))
                .with_placeholder_ids(SequentialPlaceholderIds::starting_at(12));
            let extents = Extents::new();
            let mut order = Vec::new();
            for n in 0..12 {
                let target = state
                    .layout()
                    .placeholders()
                    .next()
                    .map(|item| item.id.clone());
                if let Some(target) = target {
                    state.activate_placeholder(&target).expect("placeholder");
                }
                order.push(format!("b{n}"));
                state.sync(black_box(&order), &extents);
            }
            state.layouts().get(Breakpoint::Xs).map(Layout::len)
        });
    });
}

fn persist_projection(c: &mut Criterion) {
    let order = content_order(48);
    let (layout, _) = sparse_layout(&order);
    let layouts: Layouts = [(Breakpoint::Xs, layout)].into_iter().collect();
    c.bench_function("persist_projection_48", |b| {
        b.iter(|| black_box(&layouts).persisted());
    });
}

criterion_group!(benches, normalize_sparse, state_insert_script, persist_projection);
criterion_main!(benches);
