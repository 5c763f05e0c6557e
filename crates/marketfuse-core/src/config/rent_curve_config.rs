use serde::{Deserialize, Serialize};

use super::defaults;

/// Allowed dollar gap between two adjacent bedroom classes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapBound {
    pub min: f64,
    pub max: f64,
}

impl GapBound {
    pub fn clamp(&self, gap: f64) -> f64 {
        gap.clamp(self.min, self.max)
    }
}

fn default_bounds() -> [GapBound; 3] {
    defaults::DEFAULT_GAP_BOUNDS.map(|(min, max)| GapBound { min, max })
}

/// Monotonic rent enforcer configuration.
///
/// Every array is indexed by adjacent pair: `[studio↔1BR, 1BR↔2BR, 2BR↔3BR]`.
/// The ratios and bounds are empirical tuning values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RentCurveConfig {
    /// Minimum dollar step between adjacent classes.
    pub min_step: f64,
    /// Floor for imputed and overridden rents. Reported values are kept.
    pub min_rent: f64,
    /// Imputation toward studio: `lower = higher × ratio`.
    pub backward_ratios: [f64; 3],
    /// Imputation toward 3BR: `higher = lower × ratio`.
    pub forward_ratios: [f64; 3],
    /// Gap bounds applied while imputing toward studio.
    pub backward_bounds: [GapBound; 3],
    /// Gap bounds applied while imputing toward 3BR.
    pub forward_bounds: [GapBound; 3],
    /// `high > max_spread_ratio × low` is flagged by the band check.
    pub max_spread_ratio: f64,
}

impl Default for RentCurveConfig {
    fn default() -> Self {
        Self {
            min_step: defaults::DEFAULT_MIN_STEP,
            min_rent: defaults::DEFAULT_MIN_RENT,
            backward_ratios: defaults::DEFAULT_BACKWARD_RATIOS,
            forward_ratios: defaults::DEFAULT_FORWARD_RATIOS,
            backward_bounds: default_bounds(),
            forward_bounds: default_bounds(),
            max_spread_ratio: defaults::DEFAULT_MAX_SPREAD_RATIO,
        }
    }
}
