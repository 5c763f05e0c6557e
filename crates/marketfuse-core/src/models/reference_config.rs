use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Underwriting reference values refreshed on a TTL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceConfig {
    pub conventional_rate: f64,
    pub fha_rate: f64,
    pub fha_loan_limit: f64,
    pub conforming_loan_limit: f64,
    /// Effective property tax rate keyed by lowercase state identifier.
    pub property_tax_rates: HashMap<String, f64>,
    pub default_property_tax_rate: f64,
    pub loaded_at: DateTime<Utc>,
    /// True when these values are the static baseline, not a live load.
    pub is_baseline: bool,
}

impl ReferenceConfig {
    /// The documented static baseline served when a refresh fails.
    pub fn baseline() -> Self {
        Self {
            conventional_rate: defaults::BASELINE_CONVENTIONAL_RATE,
            fha_rate: defaults::BASELINE_FHA_RATE,
            fha_loan_limit: defaults::BASELINE_FHA_LOAN_LIMIT,
            conforming_loan_limit: defaults::BASELINE_CONFORMING_LOAN_LIMIT,
            property_tax_rates: HashMap::new(),
            default_property_tax_rate: defaults::BASELINE_PROPERTY_TAX_RATE,
            loaded_at: Utc::now(),
            is_baseline: true,
        }
    }

    pub fn property_tax_rate(&self, state: &str) -> f64 {
        self.property_tax_rates
            .get(&state.trim().to_lowercase())
            .copied()
            .unwrap_or(self.default_property_tax_rate)
    }
}
