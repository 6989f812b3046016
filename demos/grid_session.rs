//! Walk through a short editing session and print the grid after each step.
//!
//! Run with `cargo run --example grid_session`.

use std::sync::Arc;

use block_grid::{
    Extents, GridConfig, GridFloor, GridState, GridTemplate, LogLevel, Logger, MemorySink,
    MemoryStore, RenderedExtent, Result, attribute_to_json, render_text,
};

fn show(label: &str, state: &GridState) {
    println!("== {label}");
    println!("{}\n", render_text(state.layout(), GridFloor::default(), 6));
}

fn main() -> Result<()> {
    let sink = MemorySink::new();
    let mut config =
        GridConfig::default().with_logger(Logger::new(sink.clone()).with_min_level(LogLevel::Info));
    config.enable_metrics();
    let store = MemoryStore::new();
    let mut state = GridState::new(None, Vec::new(), config, Arc::new(store.clone()));
    show("seed", &state);

    let mut order = Vec::new();
    let mut extents = Extents::new();

    let target = state.layout().items()[5].id.clone();
    state.activate_placeholder(&target)?;
    order.push("intro".to_string());
    state.sync(&order, &extents);
    show("insert `intro` at (1, 1)", &state);

    extents.insert(
        "intro".to_string(),
        RenderedExtent::from_track(240.0, 260.0, 100.0, 100.0, 1, 1),
    );
    state.sync(&order, &extents);
    show("`intro` measured at 240×260px", &state);

    let mut dragged = state.layouts().clone();
    if let Some(layout) = state.layouts().get(state.config().active_breakpoint) {
        let moved = layout
            .iter()
            .map(|item| {
                let mut item = item.clone();
                if item.id == "block-intro" {
                    item.x = 0;
                }
                item
            })
            .filter(|item| !item.is_placeholder())
            .collect();
        dragged.set(state.config().active_breakpoint, moved);
    }
    state.apply_manual_layout(dragged)?;
    state.sync(&order, &extents);
    show("after dragging `intro` to column 0", &state);

    let persisted = state.persisted();
    println!("persisted: {}", attribute_to_json(&persisted)?);
    if let Some(items) = persisted.get(&state.config().active_breakpoint) {
        println!("saved markup: {}", GridTemplate::from_items(items, GridFloor::default()).style());
    }
    println!("store writes: {}", store.writes().len());

    state.emit_metrics();
    for event in sink.events() {
        println!("log: {} {:?}", event.message, event.fields);
    }
    Ok(())
}
