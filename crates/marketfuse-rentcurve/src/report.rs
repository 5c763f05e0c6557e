use marketfuse_core::errors::RentCurveError;
use marketfuse_core::models::{BedroomClass, Provenance, RentCurvePoint};
use serde::{Deserialize, Serialize};

/// Aggregate statistics for one enforcement run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveMetrics {
    /// Fraction of the four points that are not `original`.
    pub correction_rate: f64,
    /// Mean absolute delta over `corrected` points; zero when none.
    pub avg_correction_magnitude: f64,
    /// Class the propagation started from.
    pub seed: BedroomClass,
}

impl CurveMetrics {
    pub(crate) fn from_points(points: &[RentCurvePoint; 4], seed: BedroomClass) -> Self {
        let altered = points
            .iter()
            .filter(|p| p.provenance != Provenance::Original)
            .count();
        let corrected: Vec<f64> = points
            .iter()
            .filter(|p| p.provenance == Provenance::Corrected)
            .map(|p| p.correction_delta)
            .collect();
        let avg_correction_magnitude = if corrected.is_empty() {
            0.0
        } else {
            corrected.iter().sum::<f64>() / corrected.len() as f64
        };
        Self {
            correction_rate: altered as f64 / points.len() as f64,
            avg_correction_magnitude,
            seed,
        }
    }

    pub fn seed_label(&self) -> &'static str {
        self.seed.label()
    }
}

/// A repaired, strictly increasing rent curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnforcedCurve {
    pub points: [RentCurvePoint; 4],
    pub metrics: CurveMetrics,
}

impl EnforcedCurve {
    pub fn point(&self, class: BedroomClass) -> &RentCurvePoint {
        &self.points[class.index()]
    }

    pub fn rent(&self, class: BedroomClass) -> f64 {
        self.point(class).median_rent
    }

    pub fn values(&self) -> [f64; 4] {
        self.points.map(|p| p.median_rent)
    }
}

/// Enforcer output. `curve` is `None` exactly when `valid` is false; no
/// partial curve is ever returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentCurveReport {
    pub valid: bool,
    pub curve: Option<EnforcedCurve>,
    pub issues: Vec<String>,
}

impl RentCurveReport {
    pub(crate) fn failed(issue: &str) -> Self {
        Self {
            valid: false,
            curve: None,
            issues: vec![issue.to_string()],
        }
    }

    pub fn has_issue(&self, code: &str) -> bool {
        self.issues.iter().any(|i| i.starts_with(code))
    }

    pub fn into_result(self) -> Result<EnforcedCurve, RentCurveError> {
        self.curve.ok_or(RentCurveError::NoValidRentPoints)
    }
}
