use chrono::{DateTime, Utc};
use marketfuse_cache::RentLookup;
use marketfuse_core::models::{CanonicalMetricKey, Geography, ReconciledMetric};
use marketfuse_rentcurve::RentCurveReport;
use marketfuse_units::UnitDetectionResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of one [`MarketPipeline::run`](crate::MarketPipeline::run).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    pub run_id: Uuid,
    pub geography: Geography,
    pub started_at: DateTime<Utc>,
    /// Findings addressed to this geography.
    pub findings: usize,
    /// Observations that survived extraction, derived ones included.
    pub observations: usize,
    pub metrics: Vec<ReconciledMetric>,
    /// Groups that could not be reconciled, as `metric: error`.
    pub failures: Vec<String>,
    pub curve: RentCurveReport,
    pub band_issues: Vec<String>,
    /// Content hash of the published table, if one was published.
    pub published_hash: Option<String>,
    pub quarantined: bool,
}

impl PipelineReport {
    pub fn metric(&self, key: CanonicalMetricKey) -> Option<&ReconciledMetric> {
        self.metrics.iter().find(|m| m.metric == key)
    }

    /// True when any metric diverged past its critical tolerance.
    pub fn requires_review(&self) -> bool {
        self.metrics.iter().any(|m| m.requires_review)
    }
}

/// Rent estimate for a whole property: detected units times per-unit rent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyRent {
    pub units: UnitDetectionResult,
    pub per_unit: RentLookup,
    /// `None` when the per-unit lookup failed.
    pub total: Option<f64>,
}
