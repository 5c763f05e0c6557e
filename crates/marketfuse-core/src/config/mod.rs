pub mod cache_config;
pub mod defaults;
pub mod extraction_config;
pub mod observability_config;
pub mod reconcile_config;
pub mod rent_curve_config;

pub use cache_config::{BaselineRents, CacheConfig, GradeMultipliers};
pub use extraction_config::ExtractionConfig;
pub use observability_config::ObservabilityConfig;
pub use reconcile_config::{ReconcileConfig, TierWeights, ToleranceOverride};
pub use rent_curve_config::{GapBound, RentCurveConfig};

use serde::{Deserialize, Serialize};

use crate::errors::{MarketFuseError, MarketFuseResult};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketFuseConfig {
    pub extraction: ExtractionConfig,
    pub reconcile: ReconcileConfig,
    pub rent_curve: RentCurveConfig,
    pub cache: CacheConfig,
    pub observability: ObservabilityConfig,
}

impl MarketFuseConfig {
    /// Parse a TOML document. Missing sections and fields use defaults.
    pub fn from_toml(toml_str: &str) -> MarketFuseResult<Self> {
        toml::from_str(toml_str).map_err(|e| MarketFuseError::ConfigError(e.to_string()))
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> MarketFuseResult<String> {
        toml::to_string(self).map_err(|e| MarketFuseError::ConfigError(e.to_string()))
    }
}
