use std::fmt;

use serde::{Deserialize, Serialize};

/// How far a unit count can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DetectionConfidence {
    High,
    Medium,
    Low,
    Unknown,
}

impl DetectionConfidence {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for DetectionConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which rung of the detection cascade produced the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InferenceSource {
    StructuredStyle,
    DescriptionPattern,
    BedroomHeuristic,
    MultiFamilyDefault,
    SingleUnitType,
    NoData,
}

/// Unit count for one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDetectionResult {
    pub units: u32,
    pub confidence: DetectionConfidence,
    pub source: InferenceSource,
    /// Matched fragments and counts that fed the decision, e.g.
    /// `style:3 Family` or `bedrooms:6`.
    pub raw_indicators: Vec<String>,
    pub needs_research: bool,
}

impl UnitDetectionResult {
    pub fn is_multi_unit(&self) -> bool {
        self.units > 1
    }
}
