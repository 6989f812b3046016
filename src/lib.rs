//! Responsive block grid layout normalization.
//!
//! A grid holds positioned blocks and clickable placeholder cells. After
//! every change to the block order or to measured block sizes, the layout is
//! normalized: a new block takes the placeholder the user last activated,
//! overflowing blocks grow to fit, and placeholders are cropped to the
//! content's extent and refilled so every visible cell is covered.
//!
//! [`GridState`] owns a grid instance; the pure steps live in [`normalize`].

pub mod config;
pub mod error;
pub mod item;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod normalize;
pub mod render;
pub mod state;
pub mod store;
pub mod width;

pub use config::GridConfig;
pub use error::{GridError, Result};
pub use item::{
    GridItem, ItemKind, PlaceholderIdSource, SequentialPlaceholderIds, UuidPlaceholderIds,
    content_item_id, is_placeholder_id,
};
pub use layout::{Breakpoint, Layout, Layouts};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{GridMetrics, MetricSnapshot};
pub use normalize::{
    Extents, GridBounds, GridFloor, NormalizeInput, NormalizeReport, Normalized, RenderedExtent,
    normalize,
};
pub use render::{GridArea, GridTemplate, render_text};
pub use state::GridState;
pub use store::{
    GridAttribute, GridStore, MemoryStore, NullStore, attribute_from_json, attribute_to_json,
};
pub use width::display_width;
