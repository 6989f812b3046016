//! Error orchestrator. Concrete types live in `types`.

mod types;

pub use types::{GridError, Result};
