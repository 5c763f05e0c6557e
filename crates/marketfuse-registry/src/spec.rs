use marketfuse_core::config::ToleranceOverride;
use marketfuse_core::models::CanonicalMetricKey;
use serde::{Deserialize, Serialize};

/// How a metric's numbers are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitConvention {
    /// Decimal fraction (0.065 = 6.5%). Percent inputs are normalized.
    Rate,
    /// Dollars.
    Currency,
    /// Unitless ratio.
    Ratio,
}

/// Whether a metric is reported as a single value or a `[min, max]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueShape {
    Point,
    Range,
}

/// Relative disagreement limits for reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToleranceSpec {
    /// Weighted relative disagreement still compatible with HIGH confidence.
    pub tolerance: f64,
    /// Beyond this the divergence is surfaced for review, never auto-resolved.
    pub critical: Option<f64>,
}

impl From<ToleranceOverride> for ToleranceSpec {
    fn from(o: ToleranceOverride) -> Self {
        Self {
            tolerance: o.tolerance,
            critical: o.critical,
        }
    }
}

/// Everything the registry knows about one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSpec {
    pub key: CanonicalMetricKey,
    pub unit: UnitConvention,
    pub shape: ValueShape,
    /// Inclusive lower bound, in normalized units.
    pub min: f64,
    /// Inclusive upper bound, in normalized units.
    pub max: f64,
    pub tolerance: ToleranceSpec,
}

impl MetricSpec {
    pub fn in_bounds(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}
