//! Low/median/high consistency per unit type. Reports only; never mutates.

use marketfuse_core::constants::issues;
use serde::{Deserialize, Serialize};

/// Reported rent band for one unit type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitBand {
    pub label: String,
    pub low: f64,
    pub median: f64,
    pub high: f64,
}

impl UnitBand {
    pub fn new(label: impl Into<String>, low: f64, median: f64, high: f64) -> Self {
        Self {
            label: label.into(),
            low,
            median,
            high,
        }
    }
}

/// Flag bands where `low < median < high` fails, and bands whose high end
/// exceeds `max_spread_ratio × low`. The two checks are independent.
pub fn check_bands(bands: &[UnitBand], max_spread_ratio: f64) -> Vec<String> {
    let mut found = Vec::new();
    for b in bands {
        if !(b.low < b.median && b.median < b.high) {
            found.push(format!(
                "{}: {} low {} / median {} / high {}",
                issues::BAND_ORDER,
                b.label,
                b.low,
                b.median,
                b.high
            ));
        }
        if b.high > max_spread_ratio * b.low {
            found.push(format!(
                "{}: {} high {} > {max_spread_ratio} x low {}",
                issues::EXCESSIVE_SPREAD,
                b.label,
                b.high,
                b.low
            ));
        }
    }
    found
}
