use crate::logging::{LogEvent, LogFields, LogLevel};
use crate::normalize::NormalizeReport;
use serde_json::json;

/// Counters accumulated across normalization passes and manual edits.
#[derive(Debug, Default, Clone)]
pub struct GridMetrics {
    passes: u64,
    changed_passes: u64,
    promotions: u64,
    grown_items: u64,
    cropped_items: u64,
    filled_cells: u64,
    manual_writes: u64,
    skipped_writes: u64,
}

impl GridMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_pass(&mut self, report: &NormalizeReport) {
        self.passes = self.passes.saturating_add(1);
        if report.changed() {
            self.changed_passes = self.changed_passes.saturating_add(1);
        }
        if report.promoted {
            self.promotions = self.promotions.saturating_add(1);
        }
        self.grown_items = self.grown_items.saturating_add(report.grown as u64);
        self.cropped_items = self.cropped_items.saturating_add(report.cropped as u64);
        self.filled_cells = self.filled_cells.saturating_add(report.filled as u64);
    }

    pub fn record_manual_write(&mut self, sent: bool) {
        if sent {
            self.manual_writes = self.manual_writes.saturating_add(1);
        } else {
            self.skipped_writes = self.skipped_writes.saturating_add(1);
        }
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            passes: self.passes,
            changed_passes: self.changed_passes,
            promotions: self.promotions,
            grown_items: self.grown_items,
            cropped_items: self.cropped_items,
            filled_cells: self.filled_cells,
            manual_writes: self.manual_writes,
            skipped_writes: self.skipped_writes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub passes: u64,
    pub changed_passes: u64,
    pub promotions: u64,
    pub grown_items: u64,
    pub cropped_items: u64,
    pub filled_cells: u64,
    pub manual_writes: u64,
    pub skipped_writes: u64,
}

impl MetricSnapshot {
    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("passes".to_string(), json!(self.passes));
        map.insert("changed_passes".to_string(), json!(self.changed_passes));
        map.insert("promotions".to_string(), json!(self.promotions));
        map.insert("grown_items".to_string(), json!(self.grown_items));
        map.insert("cropped_items".to_string(), json!(self.cropped_items));
        map.insert("filled_cells".to_string(), json!(self.filled_cells));
        map.insert("manual_writes".to_string(), json!(self.manual_writes));
        map.insert("skipped_writes".to_string(), json!(self.skipped_writes));
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "grid_metrics", self.as_fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_pass_reports() {
        let mut metrics = GridMetrics::new();
        metrics.record_pass(&NormalizeReport::default());
        metrics.record_pass(&NormalizeReport {
            promoted: true,
            grown: 1,
            cropped: 2,
            filled: 3,
        });
        metrics.record_manual_write(true);
        metrics.record_manual_write(false);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.passes, 2);
        assert_eq!(snapshot.changed_passes, 1);
        assert_eq!(snapshot.promotions, 1);
        assert_eq!(snapshot.filled_cells, 3);
        assert_eq!(snapshot.manual_writes, 1);
        assert_eq!(snapshot.skipped_writes, 1);

        let event = snapshot.to_log_event("grid::metrics");
        assert_eq!(event.message, "grid_metrics");
        assert_eq!(event.fields["cropped_items"], json!(2));
    }
}
