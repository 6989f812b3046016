//! Rendering of saved grids.
//!
//! `core` turns persisted items into CSS grid placement for saved markup and
//! draws a fixed-width text map of a layout for logs and debugging.

mod core;

pub use self::core::{GridArea, GridTemplate, render_text};
