use std::sync::{Arc, Mutex};

use crate::layout::Breakpoint;
use crate::logging::Logger;
use crate::metrics::GridMetrics;
use crate::normalize::{DEFAULT_VERTICAL_INSET_PX, GridFloor};

/// Configuration knobs for a grid instance.
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Breakpoint that is normalized; all others pass through.
    pub active_breakpoint: Breakpoint,
    /// Minimum visible columns and rows.
    pub floor: GridFloor,
    /// Padding allowance subtracted from measured content height, in pixels.
    pub vertical_inset_px: f64,
    /// Optional structured logger.
    pub logger: Option<Logger>,
    /// Shared counters, when enabled.
    pub metrics: Option<Arc<Mutex<GridMetrics>>>,
    /// Target used for state events.
    pub log_target: String,
    /// Target used for normalization pass events.
    pub normalize_log_target: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            active_breakpoint: Breakpoint::Xs,
            floor: GridFloor::default(),
            vertical_inset_px: DEFAULT_VERTICAL_INSET_PX,
            logger: None,
            metrics: None,
            log_target: "grid::state".to_string(),
            normalize_log_target: "grid::normalize".to_string(),
        }
    }
}

impl GridConfig {
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(GridMetrics::new())));
        }
    }

    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    pub fn metrics_handle(&self) -> Option<Arc<Mutex<GridMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_seed_grid() {
        let config = GridConfig::default();
        assert_eq!(config.active_breakpoint, Breakpoint::Xs);
        assert_eq!(config.floor, GridFloor { min_cols: 4, min_rows: 3 });
        assert_eq!(config.vertical_inset_px, 20.0);
        assert!(config.metrics_handle().is_none());
    }

    #[test]
    fn enable_metrics_is_sticky() {
        let mut config = GridConfig::default();
        config.enable_metrics();
        let first = config.metrics_handle().unwrap();
        config.enable_metrics();
        assert!(Arc::ptr_eq(&first, &config.metrics_handle().unwrap()));
        config.disable_metrics();
        assert!(config.metrics_handle().is_none());
    }
}
