use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::ConfidenceTier;

/// Trust weight per confidence tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TierWeights {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl TierWeights {
    pub fn weight(&self, tier: ConfidenceTier) -> f64 {
        match tier {
            ConfidenceTier::High => self.high,
            ConfidenceTier::Medium => self.medium,
            ConfidenceTier::Low => self.low,
        }
    }
}

impl Default for TierWeights {
    fn default() -> Self {
        Self {
            high: defaults::DEFAULT_TRUST_WEIGHT_HIGH,
            medium: defaults::DEFAULT_TRUST_WEIGHT_MEDIUM,
            low: defaults::DEFAULT_TRUST_WEIGHT_LOW,
        }
    }
}

/// Per-metric override of the registry's disagreement tolerances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToleranceOverride {
    /// Relative disagreement still compatible with HIGH confidence.
    pub tolerance: f64,
    /// Relative disagreement that must be surfaced for review.
    pub critical: Option<f64>,
}

/// Source-reconciler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileConfig {
    /// Age (days) at which an observation's weight halves.
    pub staleness_half_life_days: f64,
    /// Default trust weight per tier.
    pub trust_weights: TierWeights,
    /// Explicit trust weights for individual sources (take precedence over tier weights).
    pub source_trust_overrides: HashMap<String, f64>,
    /// Minimum contributing observations for a HIGH fused confidence.
    pub min_sources_for_high: usize,
    /// A geography is quarantined once its correction count exceeds this...
    pub quarantine_min_corrections: u32,
    /// ...and its average correction delta (dollars) exceeds this.
    pub quarantine_avg_delta: f64,
    /// Tolerance overrides keyed by metric name.
    pub tolerance_overrides: HashMap<String, ToleranceOverride>,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            staleness_half_life_days: defaults::DEFAULT_STALENESS_HALF_LIFE_DAYS,
            trust_weights: TierWeights::default(),
            source_trust_overrides: HashMap::new(),
            min_sources_for_high: defaults::DEFAULT_MIN_SOURCES_FOR_HIGH,
            quarantine_min_corrections: defaults::DEFAULT_QUARANTINE_MIN_CORRECTIONS,
            quarantine_avg_delta: defaults::DEFAULT_QUARANTINE_AVG_DELTA,
            tolerance_overrides: HashMap::new(),
        }
    }
}
