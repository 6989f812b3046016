//! Layout module orchestrator.
//!
//! `core` holds the ordered item collection for one breakpoint; `grid`
//! holds the per-breakpoint set along with seeding and hydration.

mod core;
pub mod grid;

pub use self::core::Layout;
pub use grid::{Breakpoint, Layouts, SEED_COLS, SEED_ROWS};
