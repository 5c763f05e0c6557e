//! [`ObservabilityEngine`]: owns run metrics and degradation tracking.

use marketfuse_core::errors::MarketFuseResult;
use marketfuse_core::models::{DegradationEvent, ReconciledMetric};

use crate::dashboard::MarketDashboard;
use crate::degradation::DegradationTracker;
use crate::metrics::RunMetrics;

#[derive(Debug, Default)]
pub struct ObservabilityEngine {
    pub metrics: RunMetrics,
    pub degradation: DegradationTracker,
}

impl ObservabilityEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_reconciled<'a>(&mut self, metrics: impl IntoIterator<Item = &'a ReconciledMetric>) {
        for m in metrics {
            self.metrics.record_reconciled(m);
        }
    }

    pub fn record_degradation(&mut self, event: DegradationEvent) {
        self.degradation.record(event);
    }

    pub fn mark_recovered(&mut self, component: &str) {
        self.degradation.mark_recovered(component);
    }

    /// Dashboard over the tier histogram and degradations; the caller adds
    /// cache and quarantine figures it owns.
    pub fn dashboard(&self) -> MarketDashboard {
        MarketDashboard::new(self.metrics.tiers)
            .with_active_degradations(self.degradation.active_degradations().len())
    }

    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Metrics plus degradation counts as JSON.
    pub fn metrics_snapshot(&self) -> MarketFuseResult<serde_json::Value> {
        let metrics = serde_json::to_value(&self.metrics)?;
        Ok(serde_json::json!({
            "metrics": metrics,
            "degradations": self.degradation.events().len(),
            "active_degradations": self.degradation.active_degradations().len(),
        }))
    }
}
