use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::ConfidenceTier;

/// Finding-extractor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Range width divided by this gives σ.
    pub range_sigma_divisor: f64,
    /// σ for single-point answers, as a fraction of the value.
    pub point_sigma_fraction: f64,
    /// Derived metrics below this combined sample count are discarded.
    pub min_derived_samples: u32,
    /// Per-source confidence tiers. Key is the source id.
    pub source_tiers: HashMap<String, ConfidenceTier>,
    /// Tier for sources not listed in `source_tiers`.
    pub default_tier: ConfidenceTier,
}

impl ExtractionConfig {
    /// Tier assigned to observations from `source_id`.
    pub fn tier_for(&self, source_id: &str) -> ConfidenceTier {
        self.source_tiers
            .get(source_id)
            .copied()
            .unwrap_or(self.default_tier)
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            range_sigma_divisor: defaults::DEFAULT_RANGE_SIGMA_DIVISOR,
            point_sigma_fraction: defaults::DEFAULT_POINT_SIGMA_FRACTION,
            min_derived_samples: defaults::DEFAULT_MIN_DERIVED_SAMPLES,
            source_tiers: HashMap::new(),
            default_tier: ConfidenceTier::Medium,
        }
    }
}
