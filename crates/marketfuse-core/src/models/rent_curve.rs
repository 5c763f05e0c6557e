use serde::{Deserialize, Serialize};
use std::fmt;

/// Bedroom class on the rent curve, ordered studio → 3BR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BedroomClass {
    Studio,
    OneBedroom,
    TwoBedroom,
    ThreeBedroom,
}

impl BedroomClass {
    pub const ALL: [BedroomClass; 4] = [
        Self::Studio,
        Self::OneBedroom,
        Self::TwoBedroom,
        Self::ThreeBedroom,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Studio => "studio",
            Self::OneBedroom => "1BR",
            Self::TwoBedroom => "2BR",
            Self::ThreeBedroom => "3BR",
        }
    }
}

impl fmt::Display for BedroomClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a rent-curve value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Input value passed through unchanged.
    Original,
    /// Input existed but was altered.
    Corrected,
    /// No usable input existed.
    Imputed,
}

/// One point on an enforced rent curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RentCurvePoint {
    pub class: BedroomClass,
    pub median_rent: f64,
    pub provenance: Provenance,
    /// Absolute change from the input; zero for original and imputed points.
    pub correction_delta: f64,
}
