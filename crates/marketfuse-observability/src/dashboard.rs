//! Plain-text summary for operators. Not a stable format.

use std::fmt::Write as _;

use marketfuse_core::models::ConfidenceTier;
use serde::Serialize;

use crate::metrics::TierHistogram;

const BAR_WIDTH: u64 = 20;

/// Snapshot of engine health rendered as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarketDashboard {
    pub tiers: TierHistogram,
    pub avg_fallback_depth: f64,
    pub cache_hit_rate: f64,
    pub cache_lookups: u64,
    pub quarantined: usize,
    pub active_degradations: usize,
}

impl MarketDashboard {
    pub fn new(tiers: TierHistogram) -> Self {
        Self {
            tiers,
            ..Self::default()
        }
    }

    pub fn with_cache(mut self, lookups: u64, hit_rate: f64, avg_fallback_depth: f64) -> Self {
        self.cache_lookups = lookups;
        self.cache_hit_rate = hit_rate;
        self.avg_fallback_depth = avg_fallback_depth;
        self
    }

    pub fn with_quarantined(mut self, quarantined: usize) -> Self {
        self.quarantined = quarantined;
        self
    }

    pub fn with_active_degradations(mut self, active: usize) -> Self {
        self.active_degradations = active;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::from("MarketFuse dashboard\n");
        let total = self.tiers.total();

        out.push_str("confidence tiers\n");
        for tier in ConfidenceTier::ALL {
            let n = self.tiers.get(tier);
            let bar = if total == 0 { 0 } else { n * BAR_WIDTH / total };
            let _ = writeln!(
                out,
                "  {:<6} {:>5} {}",
                tier.as_str(),
                n,
                "#".repeat(bar as usize)
            );
        }

        let _ = writeln!(out, "cache lookups       {}", self.cache_lookups);
        let _ = writeln!(out, "cache hit rate      {:.1}%", self.cache_hit_rate * 100.0);
        let _ = writeln!(out, "avg fallback depth  {:.2}", self.avg_fallback_depth);
        let _ = writeln!(out, "quarantined geos    {}", self.quarantined);
        if self.active_degradations > 0 {
            let _ = writeln!(out, "active degradations {}", self.active_degradations);
        }
        out
    }
}

impl std::fmt::Display for MarketDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
