//! Owned grid state for one editor instance.
//!
//! `GridState` holds the layouts, the placeholder the user last activated,
//! and the content order seen by the previous pass. Normalization runs
//! through [`GridState::sync`]; manual drags bypass it through
//! [`GridState::apply_manual_layout`] and go straight to the store.

use std::sync::Arc;

use serde_json::json;

use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::item::{PlaceholderIdSource, UuidPlaceholderIds, is_placeholder_id};
use crate::layout::{Layout, Layouts};
use crate::logging::{LogLevel, event_with_fields, json_kv};
use crate::normalize::{Extents, NormalizeInput, NormalizeReport, normalize};
use crate::store::{GridAttribute, GridStore, attribute_to_json};

static EMPTY_LAYOUT: Layout = Layout::new(Vec::new());

pub struct GridState {
    layouts: Layouts,
    last_activated: Option<String>,
    prev_order: Vec<String>,
    config: GridConfig,
    store: Arc<dyn GridStore>,
    ids: Box<dyn PlaceholderIdSource + Send>,
    last_written: Option<blake3::Hash>,
}

impl GridState {
    /// Hydrate from the persisted attribute, or seed the default grid.
    ///
    /// The returned state has not been normalized yet; call [`sync`](Self::sync)
    /// once measurements are available.
    pub fn new(
        attr: Option<&GridAttribute>,
        content_order: Vec<String>,
        config: GridConfig,
        store: Arc<dyn GridStore>,
    ) -> Self {
        let layouts = Layouts::hydrate(attr, &content_order, config.active_breakpoint);
        let state = Self {
            layouts,
            last_activated: None,
            prev_order: content_order,
            config,
            store,
            ids: Box::new(UuidPlaceholderIds),
            last_written: None,
        };
        state.log(
            LogLevel::Info,
            &state.config.log_target,
            "grid_hydrated",
            [
                json_kv("from_attribute", json!(attr.is_some())),
                json_kv("items", json!(state.layout().len())),
            ],
        );
        state
    }

    /// Replace the placeholder id generator.
    pub fn with_placeholder_ids<S>(mut self, ids: S) -> Self
    where
        S: PlaceholderIdSource + Send + 'static,
    {
        self.ids = Box::new(ids);
        self
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn layouts(&self) -> &Layouts {
        &self.layouts
    }

    /// Layout of the active breakpoint.
    pub fn layout(&self) -> &Layout {
        self.layouts
            .get(self.config.active_breakpoint)
            .unwrap_or(&EMPTY_LAYOUT)
    }

    pub fn last_activated(&self) -> Option<&str> {
        self.last_activated.as_deref()
    }

    /// Record the placeholder the user clicked or keyed on.
    pub fn activate_placeholder(&mut self, id: &str) -> Result<()> {
        if !is_placeholder_id(id) {
            return Err(GridError::NotAPlaceholder(id.to_string()));
        }
        self.last_activated = Some(id.to_string());
        self.log(
            LogLevel::Debug,
            &self.config.log_target,
            "placeholder_activated",
            [json_kv("id", json!(id))],
        );
        Ok(())
    }

    /// Normalize against the current content order and measurements.
    ///
    /// Returns `true` when the held layout was replaced. The order is always
    /// remembered for the next pass.
    pub fn sync(&mut self, order: &[String], extents: &Extents) -> bool {
        let outcome = {
            let input = NormalizeInput {
                prev_order: &self.prev_order,
                order,
                layout: self
                    .layouts
                    .get(self.config.active_breakpoint)
                    .unwrap_or(&EMPTY_LAYOUT),
                last_activated: self.last_activated.as_deref(),
                extents,
                vertical_inset: self.config.vertical_inset_px,
                floor: self.config.floor,
            };
            normalize(&input, &mut *self.ids)
        };
        self.prev_order = order.to_vec();
        self.record_pass(&outcome.report);

        if outcome.report.promoted {
            self.last_activated = None;
        }

        let Some(next) = outcome.layout else {
            return false;
        };
        let report = outcome.report;
        self.log(
            LogLevel::Debug,
            &self.config.normalize_log_target,
            "layout_normalized",
            [
                json_kv("promoted", json!(report.promoted)),
                json_kv("grown", json!(report.grown)),
                json_kv("cropped", json!(report.cropped)),
                json_kv("filled", json!(report.filled)),
                json_kv("items", json!(next.len())),
            ],
        );
        self.layouts.set(self.config.active_breakpoint, next);
        true
    }

    /// Take a layout produced by a manual drag and persist its content items.
    ///
    /// The active layout must be valid. Returns `true` when a write was sent;
    /// a projection identical to the last one written is not re-sent.
    pub fn apply_manual_layout(&mut self, mut layouts: Layouts) -> Result<bool> {
        let active = self.config.active_breakpoint;
        match layouts.get(active) {
            Some(layout) => layout.validate()?,
            None => layouts.set(active, Layout::default()),
        }
        self.layouts = layouts;

        let attr = self.persisted();
        let fingerprint = blake3::hash(attribute_to_json(&attr)?.as_bytes());
        let sent = self.last_written != Some(fingerprint);
        if sent {
            self.store.update_grid(&attr);
            self.last_written = Some(fingerprint);
        }
        self.record_manual_write(sent);
        self.log(
            LogLevel::Info,
            &self.config.log_target,
            if sent { "grid_persisted" } else { "grid_persist_skipped" },
            [
                json_kv("fingerprint", json!(fingerprint.to_hex().to_string())),
                json_kv("items", json!(self.layout().len())),
            ],
        );
        Ok(sent)
    }

    /// Placeholder-free projection of every breakpoint.
    pub fn persisted(&self) -> GridAttribute {
        self.layouts.persisted()
    }

    /// Write a metrics snapshot through the configured logger, if both exist.
    pub fn emit_metrics(&self) {
        if let (Some(logger), Some(metrics)) =
            (self.config.logger.as_ref(), self.config.metrics.as_ref())
        {
            if let Ok(guard) = metrics.lock() {
                let _ = logger.log_event(guard.snapshot().to_log_event("grid::metrics"));
            }
        }
    }

    fn log<I>(&self, level: LogLevel, target: &str, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, serde_json::Value)>,
    {
        if let Some(logger) = self.config.logger.as_ref() {
            let event = event_with_fields(level, target, message, fields);
            let _ = logger.log_event(event);
        }
    }

    fn record_pass(&self, report: &NormalizeReport) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_pass(report);
            }
        }
    }

    fn record_manual_write(&self, sent: bool) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_manual_write(sent);
            }
        }
    }
}

impl std::fmt::Debug for GridState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridState")
            .field("layouts", &self.layouts)
            .field("last_activated", &self.last_activated)
            .field("prev_order", &self.prev_order)
            .finish_non_exhaustive()
    }
}
