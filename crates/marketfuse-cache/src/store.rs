use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use marketfuse_core::config::CacheConfig;
use marketfuse_core::errors::{CacheError, MarketFuseResult};
use marketfuse_core::models::{ConfidenceTier, GeoPath, Geography};
use marketfuse_observability::tracing_setup::events;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::condition::ConditionGrade;
use crate::label::DataConfidenceLabel;
use crate::table::CityRentTable;
use crate::unit_type::{UnitQuery, UnitType};

/// Depth histogram buckets: exact, three broader levels, baseline.
const DEPTH_BUCKETS: usize = 5;

/// Result of one rent lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentLookup {
    /// `None` only when the unit type could not be understood.
    pub rent: Option<f64>,
    pub unit: Option<UnitType>,
    pub condition: ConditionGrade,
    /// Geography whose table answered; `None` for the baseline.
    pub served_by: Option<Geography>,
    /// 0 = exact match; one more per broader level; the baseline sits one
    /// past the last level on the path.
    pub fallback_depth: usize,
    pub used_baseline: bool,
    pub label: DataConfidenceLabel,
    pub table_hash: Option<String>,
    /// Confidence recorded on the serving table; `None` for the baseline.
    pub table_confidence: Option<ConfidenceTier>,
    /// Serving geography is quarantined. The cache itself never sets this;
    /// callers that own a reconciliation context do.
    pub quarantined: bool,
}

impl RentLookup {
    /// Flag the serving geography as quarantined and cap the label.
    pub fn mark_quarantined(&mut self) {
        self.quarantined = true;
        self.label = self.label.capped_unreliable();
    }
}

/// Point-in-time copy of the lookup counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStatsSnapshot {
    pub lookups: u64,
    /// Lookups answered by any published table.
    pub hits: u64,
    /// Lookups answered by the static baseline.
    pub baseline_served: u64,
    pub failed: u64,
    pub depth_histogram: [u64; DEPTH_BUCKETS],
    pub tables: usize,
}

impl CacheStatsSnapshot {
    pub fn hit_rate(&self) -> f64 {
        if self.lookups == 0 {
            0.0
        } else {
            self.hits as f64 / self.lookups as f64
        }
    }

    pub fn avg_fallback_depth(&self) -> f64 {
        let served: u64 = self.depth_histogram.iter().sum();
        if served == 0 {
            return 0.0;
        }
        let weighted: u64 = self
            .depth_histogram
            .iter()
            .enumerate()
            .map(|(depth, n)| depth as u64 * n)
            .sum();
        weighted as f64 / served as f64
    }
}

#[derive(Debug, Default)]
struct CacheStats {
    lookups: AtomicU64,
    hits: AtomicU64,
    baseline_served: AtomicU64,
    failed: AtomicU64,
    depth_histogram: [AtomicU64; DEPTH_BUCKETS],
}

impl CacheStats {
    fn record(&self, lookup: &RentLookup) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        if lookup.rent.is_none() {
            self.failed.fetch_add(1, Ordering::Relaxed);
            return;
        }
        if lookup.used_baseline {
            self.baseline_served.fetch_add(1, Ordering::Relaxed);
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        let bucket = lookup.fallback_depth.min(DEPTH_BUCKETS - 1);
        self.depth_histogram[bucket].fetch_add(1, Ordering::Relaxed);
    }
}

/// Keyed store of immutable rent tables.
///
/// Each slot holds an `Arc`; publishing replaces the `Arc`, so a reader
/// holding the previous table keeps a complete, consistent copy.
#[derive(Debug)]
pub struct RentTableCache {
    tables: DashMap<Geography, Arc<CityRentTable>>,
    config: CacheConfig,
    stats: CacheStats,
}

impl RentTableCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            tables: DashMap::new(),
            config,
            stats: CacheStats::default(),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Install `table` for its geography, replacing any previous table.
    /// Returns the replaced table.
    pub fn publish(&self, table: CityRentTable) -> Option<Arc<CityRentTable>> {
        let geography = table.geography().clone();
        let hash = table.content_hash().to_string();
        let previous = self.tables.insert(geography.clone(), Arc::new(table));

        match &previous {
            Some(prev) if prev.content_hash() == hash => {
                debug!(geography = %geography, hash = %hash, "republished identical table");
            }
            _ => events::table_published(&geography.to_string(), &hash, previous.is_some()),
        }
        previous
    }

    pub fn table(&self, geography: &Geography) -> Option<Arc<CityRentTable>> {
        self.tables.get(geography).map(|r| Arc::clone(r.value()))
    }

    pub fn remove(&self, geography: &Geography) -> Option<Arc<CityRentTable>> {
        self.tables.remove(geography).map(|(_, t)| t)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Rent for `unit` at the most specific geography on `path` that has a
    /// table, else the static baseline. Never fails; an unreadable unit
    /// type yields `rent: None` with the `Failed` label.
    pub fn lookup<'a>(
        &self,
        path: &GeoPath,
        unit: impl Into<UnitQuery<'a>>,
        condition: &str,
        now: DateTime<Utc>,
    ) -> RentLookup {
        let grade = ConditionGrade::normalize(condition);
        let result = match unit.into().resolve() {
            Ok(unit) => self.resolve(path, unit, grade, now),
            Err(e) => {
                debug!(error = %e, "rent lookup failed");
                RentLookup {
                    rent: None,
                    unit: None,
                    condition: grade,
                    served_by: None,
                    fallback_depth: 0,
                    used_baseline: false,
                    label: DataConfidenceLabel::Failed,
                    table_hash: None,
                    table_confidence: None,
                    quarantined: false,
                }
            }
        };
        self.stats.record(&result);
        result
    }

    /// [`lookup`](Self::lookup) reduced to the rent value.
    pub fn get_rent<'a>(
        &self,
        path: &GeoPath,
        unit: impl Into<UnitQuery<'a>>,
        condition: &str,
    ) -> MarketFuseResult<f64> {
        let unit = unit.into();
        let lookup = self.lookup(path, unit, condition, Utc::now());
        lookup.rent.ok_or_else(|| {
            CacheError::UnknownUnitType {
                label: format!("{unit:?}"),
            }
            .into()
        })
    }

    pub fn stats(&self) -> CacheStatsSnapshot {
        let load = |a: &AtomicU64| a.load(Ordering::Relaxed);
        CacheStatsSnapshot {
            lookups: load(&self.stats.lookups),
            hits: load(&self.stats.hits),
            baseline_served: load(&self.stats.baseline_served),
            failed: load(&self.stats.failed),
            depth_histogram: std::array::from_fn(|i| load(&self.stats.depth_histogram[i])),
            tables: self.tables.len(),
        }
    }

    fn resolve(
        &self,
        path: &GeoPath,
        unit: UnitType,
        grade: ConditionGrade,
        now: DateTime<Utc>,
    ) -> RentLookup {
        let cascade = path.cascade();
        for (depth, geography) in cascade.iter().enumerate() {
            let Some(table) = self.table(geography) else {
                continue;
            };
            let Some(rent) = self.rent_from(&table, unit, grade) else {
                continue;
            };
            let confidence = table.metadata().confidence;
            let mut label = DataConfidenceLabel::for_table(depth, self.staleness_steps(&table, now));
            if confidence == ConfidenceTier::Low {
                label = label.capped_unreliable();
            }
            if depth > 0 {
                events::fallback_used(&requested(&cascade), Some(&geography.to_string()), depth);
            }
            return RentLookup {
                rent: Some(rent),
                unit: Some(unit),
                condition: grade,
                served_by: Some(geography.clone()),
                fallback_depth: depth,
                used_baseline: false,
                label,
                table_hash: Some(table.content_hash().to_string()),
                table_confidence: Some(confidence),
                quarantined: false,
            };
        }

        let depth = cascade.len().max(1);
        events::fallback_used(&requested(&cascade), None, depth);
        RentLookup {
            rent: Some(self.baseline_rent(unit) * self.multiplier(grade)),
            unit: Some(unit),
            condition: grade,
            served_by: None,
            fallback_depth: depth,
            used_baseline: true,
            label: DataConfidenceLabel::Heuristic,
            table_hash: None,
            table_confidence: None,
            quarantined: false,
        }
    }

    /// Exact cell, else the grade-B cell scaled by the grade multiplier.
    fn rent_from(&self, table: &CityRentTable, unit: UnitType, grade: ConditionGrade) -> Option<f64> {
        table.rent(unit, grade).or_else(|| {
            let b = table.rent(unit, ConditionGrade::B)?;
            Some(b * self.multiplier(grade) / self.multiplier(ConditionGrade::B))
        })
    }

    fn staleness_steps(&self, table: &CityRentTable, now: DateTime<Utc>) -> u8 {
        let age = table.age_days(now);
        if age > self.config.expired_after_days {
            2
        } else if age > self.config.stale_after_days {
            1
        } else {
            0
        }
    }

    fn multiplier(&self, grade: ConditionGrade) -> f64 {
        let m = &self.config.grade_multipliers;
        match grade {
            ConditionGrade::A => m.a,
            ConditionGrade::B => m.b,
            ConditionGrade::C => m.c,
        }
    }

    fn baseline_rent(&self, unit: UnitType) -> f64 {
        let b = &self.config.baseline_rents;
        match unit {
            UnitType::Studio => b.studio,
            UnitType::OneBedroom => b.one_bedroom,
            UnitType::TwoBedroom => b.two_bedroom,
            UnitType::ThreeBedroom => b.three_bedroom,
            UnitType::FourPlus => b.four_plus,
        }
    }
}

impl Default for RentTableCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

fn requested(cascade: &[Geography]) -> String {
    cascade
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| "empty path".to_string())
}
