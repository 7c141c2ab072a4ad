//! Global feature statistics
//!
//! One-time aggregation over the full feature set, computed at startup and
//! shared read-only with every request handler. A snapshot, never refreshed
//! while the process runs.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::TradeFeatureRecord;

/// The numeric trade signals consulted by the explanation rules.
pub const SIGNALS: [&str; 5] = [
    "export_qty_log",
    "num_trade_events",
    "source_risk",
    "live_trade_ratio",
    "appendix_risk",
];

/// Per-signal arithmetic means across all known trade feature records.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GlobalMeans {
    means: HashMap<String, f64>,
}

impl GlobalMeans {
    /// Empty statistics. Every lookup yields 0.0.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compute the mean of each signal over `records`.
    ///
    /// Missing values are excluded from that signal's mean, not counted as
    /// zero. An empty record set produces an empty mapping.
    pub fn compute(records: &[TradeFeatureRecord]) -> Self {
        let mut means = HashMap::new();

        for signal in SIGNALS {
            let mut sum = 0.0;
            let mut count = 0usize;
            for record in records {
                if let Some(value) = record.signal(signal) {
                    sum += value;
                    count += 1;
                }
            }
            if count > 0 {
                means.insert(signal.to_string(), sum / count as f64);
            }
        }

        Self { means }
    }

    /// Mean for a signal, defaulting to 0.0 when the signal was never
    /// observed (empty dataset or all values missing).
    pub fn mean(&self, signal: &str) -> f64 {
        self.means.get(signal).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }

    pub fn len(&self) -> usize {
        self.means.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(taxon: &str, exporter: &str, qty: f64, events: f64) -> TradeFeatureRecord {
        TradeFeatureRecord {
            id: uuid::Uuid::nil(),
            taxon: taxon.to_string(),
            exporter: exporter.to_string(),
            export_qty_log: Some(qty),
            num_trade_events: Some(events),
            source_risk: Some(0.5),
            live_trade_ratio: Some(0.2),
            appendix_risk: Some(1.0),
        }
    }

    #[test]
    fn test_means_over_records() {
        let records = vec![
            record("Python bivittatus", "VN", 2.0, 10.0),
            record("Python bivittatus", "ID", 4.0, 20.0),
        ];
        let means = GlobalMeans::compute(&records);
        assert_eq!(means.mean("export_qty_log"), 3.0);
        assert_eq!(means.mean("num_trade_events"), 15.0);
        assert_eq!(means.len(), 5);
    }

    #[test]
    fn test_missing_values_excluded_not_zeroed() {
        let mut a = record("Varanus salvator", "MY", 6.0, 3.0);
        a.source_risk = None;
        let b = record("Varanus salvator", "TH", 2.0, 5.0);
        let means = GlobalMeans::compute(&[a, b]);
        // Only b contributes to source_risk, so the mean is b's value.
        assert_eq!(means.mean("source_risk"), 0.5);
        assert_eq!(means.mean("export_qty_log"), 4.0);
    }

    #[test]
    fn test_all_missing_signal_absent_from_mapping() {
        let mut a = record("Crocodylus niloticus", "EG", 1.0, 1.0);
        a.live_trade_ratio = None;
        let means = GlobalMeans::compute(&[a]);
        assert_eq!(means.len(), 4);
        assert_eq!(means.mean("live_trade_ratio"), 0.0);
    }

    #[test]
    fn test_empty_records_give_empty_mapping() {
        let means = GlobalMeans::compute(&[]);
        assert!(means.is_empty());
        assert_eq!(means.mean("export_qty_log"), 0.0);
        assert_eq!(means.mean("no_such_signal"), 0.0);
    }
}
