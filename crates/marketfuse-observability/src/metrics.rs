//! Counters accumulated across pipeline runs.

use marketfuse_core::models::{ConfidenceTier, ReconciledMetric};
use serde::{Deserialize, Serialize};

/// Reconciled metrics per confidence tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierHistogram {
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

impl TierHistogram {
    pub fn record(&mut self, tier: ConfidenceTier) {
        match tier {
            ConfidenceTier::High => self.high += 1,
            ConfidenceTier::Medium => self.medium += 1,
            ConfidenceTier::Low => self.low += 1,
        }
    }

    pub fn get(&self, tier: ConfidenceTier) -> u64 {
        match tier {
            ConfidenceTier::High => self.high,
            ConfidenceTier::Medium => self.medium,
            ConfidenceTier::Low => self.low,
        }
    }

    pub fn total(&self) -> u64 {
        self.high + self.medium + self.low
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    pub runs: u64,
    pub tiers: TierHistogram,
    pub requires_review: u64,
    pub observations_extracted: u64,
    pub findings_dropped: u64,
    pub curves_enforced: u64,
    pub curves_failed: u64,
    /// Curve points that were corrected or imputed.
    pub curve_points_adjusted: u64,
}

impl RunMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_reconciled(&mut self, metric: &ReconciledMetric) {
        self.tiers.record(metric.tier);
        if metric.requires_review {
            self.requires_review += 1;
        }
    }

    pub fn record_extraction(&mut self, findings: usize, observations: usize) {
        self.observations_extracted += observations as u64;
        self.findings_dropped += findings.saturating_sub(observations) as u64;
    }

    /// `adjusted` is `None` when the curve could not be built.
    pub fn record_curve(&mut self, adjusted: Option<usize>) {
        match adjusted {
            Some(n) => {
                self.curves_enforced += 1;
                self.curve_points_adjusted += n as u64;
            }
            None => self.curves_failed += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
