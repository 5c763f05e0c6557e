use serde::{Deserialize, Serialize};

use super::defaults;

/// Static baseline rents (condition grade B) used when no table is published.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineRents {
    pub studio: f64,
    pub one_bedroom: f64,
    pub two_bedroom: f64,
    pub three_bedroom: f64,
    pub four_plus: f64,
}

impl Default for BaselineRents {
    fn default() -> Self {
        Self {
            studio: defaults::DEFAULT_BASELINE_STUDIO,
            one_bedroom: defaults::DEFAULT_BASELINE_ONE_BEDROOM,
            two_bedroom: defaults::DEFAULT_BASELINE_TWO_BEDROOM,
            three_bedroom: defaults::DEFAULT_BASELINE_THREE_BEDROOM,
            four_plus: defaults::DEFAULT_BASELINE_FOUR_PLUS,
        }
    }
}

/// Rent multiplier per condition grade, relative to grade B.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeMultipliers {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Default for GradeMultipliers {
    fn default() -> Self {
        Self {
            a: defaults::DEFAULT_GRADE_A_MULTIPLIER,
            b: defaults::DEFAULT_GRADE_B_MULTIPLIER,
            c: defaults::DEFAULT_GRADE_C_MULTIPLIER,
        }
    }
}

/// Rent-table cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Reference-config refresh interval in seconds.
    pub reference_ttl_secs: u64,
    /// Tables older than this lose one confidence step.
    pub stale_after_days: i64,
    /// Tables older than this lose two confidence steps.
    pub expired_after_days: i64,
    pub baseline_rents: BaselineRents,
    pub grade_multipliers: GradeMultipliers,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            reference_ttl_secs: defaults::DEFAULT_REFERENCE_TTL_SECS,
            stale_after_days: defaults::DEFAULT_STALE_AFTER_DAYS,
            expired_after_days: defaults::DEFAULT_EXPIRED_AFTER_DAYS,
            baseline_rents: BaselineRents::default(),
            grade_multipliers: GradeMultipliers::default(),
        }
    }
}
