//! Immutable per-geography rent matrix.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use marketfuse_core::config::GradeMultipliers;
use marketfuse_core::errors::CacheError;
use marketfuse_core::models::{ConfidenceTier, Geography, RentCurvePoint};
use serde::{Deserialize, Serialize};

use crate::condition::ConditionGrade;
use crate::unit_type::UnitType;

/// Provenance of a published table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableMetadata {
    /// When the underlying data was observed.
    pub as_of: DateTime<Utc>,
    pub sources: Vec<String>,
    pub confidence: ConfidenceTier,
}

impl TableMetadata {
    pub fn new(as_of: DateTime<Utc>, confidence: ConfidenceTier) -> Self {
        Self {
            as_of,
            sources: Vec::new(),
            confidence,
        }
    }

    pub fn with_sources(mut self, sources: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.sources = sources.into_iter().map(Into::into).collect();
        self
    }
}

/// One cell of a rent table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RentEntry {
    pub unit: UnitType,
    pub grade: ConditionGrade,
    pub rent: f64,
}

/// Rent by (unit type, condition grade) for one geography.
///
/// Built once and never mutated. There are no setters; deriving a changed
/// table goes through [`to_builder`](Self::to_builder) and a new publish.
#[derive(Debug, Clone, PartialEq)]
pub struct CityRentTable {
    geography: Geography,
    rents: BTreeMap<(UnitType, ConditionGrade), f64>,
    metadata: TableMetadata,
    content_hash: String,
}

impl CityRentTable {
    pub fn builder(geography: Geography, metadata: TableMetadata) -> CityRentTableBuilder {
        CityRentTableBuilder {
            geography,
            rents: BTreeMap::new(),
            metadata,
        }
    }

    /// A/B/C matrix from an enforced rent curve. The curve is grade B; other
    /// grades apply `multipliers`. The 4BR+ row continues the 2BR→3BR step.
    pub fn from_curve(
        geography: Geography,
        points: &[RentCurvePoint],
        multipliers: &GradeMultipliers,
        metadata: TableMetadata,
    ) -> Result<Self, CacheError> {
        let mut builder = Self::builder(geography, metadata);
        let mut by_unit: BTreeMap<UnitType, f64> = BTreeMap::new();
        for p in points {
            by_unit.insert(p.class.into(), p.median_rent);
        }
        if let (Some(two), Some(three)) = (
            by_unit.get(&UnitType::TwoBedroom).copied(),
            by_unit.get(&UnitType::ThreeBedroom).copied(),
        ) {
            by_unit.insert(UnitType::FourPlus, three + (three - two).max(0.0));
        }

        for (unit, base) in by_unit {
            builder = builder
                .rent(unit, ConditionGrade::A, base * multipliers.a)
                .rent(unit, ConditionGrade::B, base * multipliers.b)
                .rent(unit, ConditionGrade::C, base * multipliers.c);
        }
        builder.build()
    }

    pub fn geography(&self) -> &Geography {
        &self.geography
    }

    pub fn metadata(&self) -> &TableMetadata {
        &self.metadata
    }

    /// blake3 hex digest over geography and every cell.
    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }

    pub fn rent(&self, unit: UnitType, grade: ConditionGrade) -> Option<f64> {
        self.rents.get(&(unit, grade)).copied()
    }

    pub fn len(&self) -> usize {
        self.rents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rents.is_empty()
    }

    pub fn entries(&self) -> Vec<RentEntry> {
        self.rents
            .iter()
            .map(|(&(unit, grade), &rent)| RentEntry { unit, grade, rent })
            .collect()
    }

    /// Days between the data timestamp and `now`, floored at zero.
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.metadata.as_of).num_days().max(0)
    }

    /// A builder seeded with this table's contents.
    pub fn to_builder(&self) -> CityRentTableBuilder {
        CityRentTableBuilder {
            geography: self.geography.clone(),
            rents: self.rents.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

/// Collects cells for a [`CityRentTable`].
#[derive(Debug, Clone)]
pub struct CityRentTableBuilder {
    geography: Geography,
    rents: BTreeMap<(UnitType, ConditionGrade), f64>,
    metadata: TableMetadata,
}

impl CityRentTableBuilder {
    pub fn rent(mut self, unit: UnitType, grade: ConditionGrade, rent: f64) -> Self {
        self.rents.insert((unit, grade), rent);
        self
    }

    pub fn entries(mut self, entries: impl IntoIterator<Item = RentEntry>) -> Self {
        for e in entries {
            self.rents.insert((e.unit, e.grade), e.rent);
        }
        self
    }

    pub fn metadata(mut self, metadata: TableMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Fails on an empty table or a non-positive or non-finite rent.
    pub fn build(self) -> Result<CityRentTable, CacheError> {
        if self.rents.is_empty() {
            return Err(CacheError::InvalidTable {
                geography: self.geography.to_string(),
                reason: "no rents".to_string(),
            });
        }
        if let Some(((unit, grade), rent)) = self
            .rents
            .iter()
            .find(|(_, r)| !r.is_finite() || **r <= 0.0)
        {
            return Err(CacheError::InvalidTable {
                geography: self.geography.to_string(),
                reason: format!("{unit}/{grade} rent {rent}"),
            });
        }

        let content_hash = hash_content(&self.geography, &self.rents);
        Ok(CityRentTable {
            geography: self.geography,
            rents: self.rents,
            metadata: self.metadata,
            content_hash,
        })
    }
}

fn hash_content(geography: &Geography, rents: &BTreeMap<(UnitType, ConditionGrade), f64>) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(geography.to_string().as_bytes());
    for ((unit, grade), rent) in rents {
        hasher.update(unit.label().as_bytes());
        hasher.update(grade.as_str().as_bytes());
        hasher.update(&rent.to_bits().to_le_bytes());
    }
    hasher.finalize().to_hex().to_string()
}
