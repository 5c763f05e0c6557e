//! ReconciliationContext: per-geography correction counters and quarantine.

use std::sync::Arc;

use dashmap::DashMap;
use marketfuse_core::config::ReconcileConfig;
use marketfuse_core::models::{Geography, Provenance, RentCurvePoint};
use marketfuse_observability::tracing_setup::events;
use serde::{Deserialize, Serialize};

/// Running correction totals for one geography.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrectionStats {
    pub corrections: u32,
    pub cumulative_delta: f64,
    /// Sticky until [`ReconciliationContext::clear`].
    pub quarantined: bool,
}

impl CorrectionStats {
    pub fn average_delta(&self) -> f64 {
        if self.corrections == 0 {
            0.0
        } else {
            self.cumulative_delta / self.corrections as f64
        }
    }
}

/// Caller-owned quarantine state, typically one per analysis session.
///
/// Cloning shares the underlying counters. Updates to the same geography
/// from concurrent callers may interleave; counts are advisory.
#[derive(Debug, Clone)]
pub struct ReconciliationContext {
    counters: Arc<DashMap<Geography, CorrectionStats>>,
    min_corrections: u32,
    avg_delta_threshold: f64,
}

impl ReconciliationContext {
    /// Empty context using the quarantine thresholds from `config`.
    pub fn new(config: &ReconcileConfig) -> Self {
        Self::with_thresholds(config.quarantine_min_corrections, config.quarantine_avg_delta)
    }

    pub fn with_thresholds(min_corrections: u32, avg_delta_threshold: f64) -> Self {
        Self {
            counters: Arc::new(DashMap::new()),
            min_corrections,
            avg_delta_threshold,
        }
    }

    /// Record one correction of `delta` dollars. Returns true when this
    /// correction put the geography into quarantine.
    pub fn record_correction(&self, geography: &Geography, delta: f64) -> bool {
        let mut entry = self.counters.entry(geography.clone()).or_default();
        entry.corrections = entry.corrections.saturating_add(1);
        entry.cumulative_delta += delta.abs();

        let trips = entry.corrections > self.min_corrections
            && entry.average_delta() > self.avg_delta_threshold;
        if trips && !entry.quarantined {
            entry.quarantined = true;
            events::geography_quarantined(
                &geography.to_string(),
                entry.corrections,
                entry.average_delta(),
            );
            return true;
        }
        false
    }

    /// Record every non-original point of an enforced rent curve.
    /// Returns true if the geography became quarantined.
    pub fn record_curve_corrections(&self, geography: &Geography, points: &[RentCurvePoint]) -> bool {
        let mut newly = false;
        for p in points.iter().filter(|p| p.provenance != Provenance::Original) {
            newly |= self.record_correction(geography, p.correction_delta);
        }
        newly
    }

    pub fn is_quarantined(&self, geography: &Geography) -> bool {
        self.counters
            .get(geography)
            .map(|s| s.quarantined)
            .unwrap_or(false)
    }

    /// Reset a geography's counters and lift its quarantine.
    pub fn clear(&self, geography: &Geography) -> Option<CorrectionStats> {
        self.counters.remove(geography).map(|(_, v)| v)
    }

    pub fn stats(&self, geography: &Geography) -> Option<CorrectionStats> {
        self.counters.get(geography).map(|s| s.clone())
    }

    /// Copy of every tracked geography, sorted by geography.
    pub fn snapshot(&self) -> Vec<(Geography, CorrectionStats)> {
        let mut all: Vec<_> = self
            .counters
            .iter()
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect();
        all.sort_by(|a, b| a.0.to_string().cmp(&b.0.to_string()));
        all
    }

    pub fn quarantined(&self) -> Vec<Geography> {
        self.snapshot()
            .into_iter()
            .filter(|(_, s)| s.quarantined)
            .map(|(g, _)| g)
            .collect()
    }

    pub fn quarantined_count(&self) -> usize {
        self.counters.iter().filter(|r| r.quarantined).count()
    }
}

impl Default for ReconciliationContext {
    fn default() -> Self {
        Self::new(&ReconcileConfig::default())
    }
}
