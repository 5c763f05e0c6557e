use std::fmt;

use serde::{Deserialize, Serialize};

/// Downstream confidence in a looked-up rent.
///
/// Ordered `Failed < Heuristic < MarketModeled < CompsInferred < MarketReported`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataConfidenceLabel {
    Failed,
    Heuristic,
    MarketModeled,
    CompsInferred,
    MarketReported,
}

impl DataConfidenceLabel {
    pub const ALL: [DataConfidenceLabel; 5] = [
        Self::MarketReported,
        Self::CompsInferred,
        Self::MarketModeled,
        Self::Heuristic,
        Self::Failed,
    ];

    /// Label for a table found `depth` levels above the requested geography,
    /// lowered one step per staleness level. Table data never drops below
    /// `Heuristic`.
    pub fn for_table(depth: usize, staleness_steps: u8) -> Self {
        let base = match depth {
            0 => Self::MarketReported,
            1 => Self::CompsInferred,
            _ => Self::MarketModeled,
        };
        (0..staleness_steps).fold(base, |label, _| label.step_down())
    }

    /// Cap for data that must be treated as unreliable: a LOW-confidence
    /// table or a quarantined geography.
    pub fn capped_unreliable(self) -> Self {
        self.min(Self::Heuristic)
    }

    fn step_down(self) -> Self {
        match self {
            Self::MarketReported => Self::CompsInferred,
            Self::CompsInferred => Self::MarketModeled,
            Self::MarketModeled | Self::Heuristic => Self::Heuristic,
            Self::Failed => Self::Failed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MarketReported => "MARKET_REPORTED",
            Self::CompsInferred => "COMPS_INFERRED",
            Self::MarketModeled => "MARKET_MODELED",
            Self::Heuristic => "HEURISTIC",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for DataConfidenceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
