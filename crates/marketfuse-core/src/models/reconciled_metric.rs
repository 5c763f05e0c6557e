use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CanonicalMetricKey, ConfidenceTier, Geography};

/// Fused, confidence-scored result over all observations for one
/// metric/geography pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciledMetric {
    pub metric: CanonicalMetricKey,
    pub geography: Geography,
    /// Weighted fused value.
    pub value: f64,
    /// Fused standard deviation.
    pub uncertainty: f64,
    pub band_low: f64,
    pub band_high: f64,
    pub tier: ConfidenceTier,
    pub observation_count: usize,
    /// Issue codes with detail, e.g. `"DIVERGENCE: 18.2% > 10.0%"`.
    pub issues: Vec<String>,
    /// Set when divergence exceeded the metric's critical tolerance.
    /// The caller decides whether to proceed.
    pub requires_review: bool,
    pub updated_at: DateTime<Utc>,
}

impl ReconciledMetric {
    pub fn has_issue(&self, code: &str) -> bool {
        self.issues.iter().any(|i| i.starts_with(code))
    }
}
