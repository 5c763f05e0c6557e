use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use marketfuse_cache::{
    CityRentTable, ConditionGrade, DataConfidenceLabel, ReferenceConfigCache, RentTableCache,
    TableMetadata, UnitType,
};
use marketfuse_core::config::{CacheConfig, GradeMultipliers};
use marketfuse_core::errors::{CacheError, MarketFuseError, MarketFuseResult};
use marketfuse_core::models::{
    BedroomClass, ConfidenceTier, GeoPath, Geography, Provenance, ReferenceConfig, RentCurvePoint,
};
use marketfuse_core::traits::IReferenceLoader;

fn austin_path() -> GeoPath {
    GeoPath::new()
        .with_zip("78701")
        .with_city("Austin")
        .with_county("Travis")
        .with_state("TX")
}

fn table(geo: Geography, two_br: f64) -> CityRentTable {
    CityRentTable::builder(geo, TableMetadata::new(Utc::now(), ConfidenceTier::High))
        .rent(UnitType::OneBedroom, ConditionGrade::B, two_br - 300.0)
        .rent(UnitType::TwoBedroom, ConditionGrade::A, two_br * 1.2)
        .rent(UnitType::TwoBedroom, ConditionGrade::B, two_br)
        .build()
        .unwrap()
}

#[test]
fn exact_match_is_market_reported() {
    let cache = RentTableCache::default();
    cache.publish(table(Geography::city("Austin"), 1_800.0));

    let path = GeoPath::new().with_city("Austin").with_state("TX");
    let hit = cache.lookup(&path, 2u32, "B", Utc::now());
    assert_eq!(hit.rent, Some(1_800.0));
    assert_eq!(hit.fallback_depth, 0);
    assert_eq!(hit.label, DataConfidenceLabel::MarketReported);
    assert_eq!(hit.served_by, Some(Geography::city("austin")));
    assert_eq!(hit.table_confidence, Some(ConfidenceTier::High));
}

#[test]
fn low_confidence_table_is_served_as_heuristic() {
    let cache = RentTableCache::default();
    let low = CityRentTable::builder(
        Geography::city("Austin"),
        TableMetadata::new(Utc::now(), ConfidenceTier::Low),
    )
    .rent(UnitType::TwoBedroom, ConditionGrade::B, 1_800.0)
    .build()
    .unwrap();
    cache.publish(low);

    let hit = cache.lookup(&GeoPath::new().with_city("Austin"), 2u32, "B", Utc::now());
    assert_eq!(hit.rent, Some(1_800.0));
    assert_eq!(hit.fallback_depth, 0);
    assert_eq!(hit.table_confidence, Some(ConfidenceTier::Low));
    assert_eq!(hit.label, DataConfidenceLabel::Heuristic);
    assert!(!hit.quarantined);

    let mut flagged = hit.clone();
    flagged.mark_quarantined();
    assert!(flagged.quarantined);
    assert_eq!(flagged.label, DataConfidenceLabel::Heuristic);
}

#[test]
fn bedroom_count_and_label_resolve_identically() {
    let cache = RentTableCache::default();
    cache.publish(table(Geography::city("Austin"), 1_800.0));
    let path = GeoPath::new().with_city("Austin");
    let by_count = cache.get_rent(&path, 1u32, "B").unwrap();
    let by_label = cache.get_rent(&path, "1BR", "B").unwrap();
    assert_eq!(by_count, by_label);
    assert_eq!(by_count, 1_500.0);
}

#[test]
fn unpublished_city_falls_back_to_county_then_state() {
    let cache = RentTableCache::default();
    cache.publish(table(Geography::county("Travis"), 1_700.0));
    cache.publish(table(Geography::state("TX"), 1_500.0));

    let county = cache.lookup(&austin_path(), 2u32, "B", Utc::now());
    assert_eq!(county.rent, Some(1_700.0));
    assert_eq!(county.fallback_depth, 2);
    assert_eq!(county.label, DataConfidenceLabel::MarketModeled);

    cache.remove(&Geography::county("Travis"));
    let state = cache.lookup(&austin_path(), 2u32, "B", Utc::now());
    assert_eq!(state.rent, Some(1_500.0));
    assert_eq!(state.fallback_depth, 3);
}

#[test]
fn nothing_published_serves_documented_baseline() {
    let cache = RentTableCache::default();
    let path = GeoPath::new().with_city("Nowhere").with_county("Empty").with_state("ZZ");
    let lookup = cache.lookup(&path, "2BR", "B", Utc::now());

    assert_eq!(lookup.rent, Some(CacheConfig::default().baseline_rents.two_bedroom));
    assert!(lookup.used_baseline);
    assert_eq!(lookup.fallback_depth, 3);
    assert_eq!(lookup.label, DataConfidenceLabel::Heuristic);
    assert!(lookup.served_by.is_none());
}

#[test]
fn condition_grades_normalize() {
    let cache = RentTableCache::default();
    cache.publish(table(Geography::city("Austin"), 2_000.0));
    let path = GeoPath::new().with_city("Austin");

    let a = cache.get_rent(&path, 2u32, "A").unwrap();
    assert_eq!(cache.get_rent(&path, 2u32, "A+").unwrap(), a);
    assert_eq!(cache.get_rent(&path, 2u32, "A-").unwrap(), a);
    assert_eq!(a, 2_400.0);

    // No C cell: grade B scaled by the C multiplier.
    let z = cache.lookup(&path, 2u32, "Z", Utc::now());
    assert_eq!(z.condition, ConditionGrade::C);
    assert!((z.rent.unwrap() - 2_000.0 * 0.85).abs() < 1e-9);

    assert_eq!(cache.get_rent(&path, 2u32, "excellent").unwrap(), 2_000.0);
}

#[test]
fn unknown_unit_type_is_failed_not_a_panic() {
    let cache = RentTableCache::default();
    let lookup = cache.lookup(&austin_path(), "penthouse", "B", Utc::now());
    assert_eq!(lookup.rent, None);
    assert_eq!(lookup.label, DataConfidenceLabel::Failed);

    let err = cache.get_rent(&austin_path(), "penthouse", "B").unwrap_err();
    assert!(matches!(
        err,
        MarketFuseError::CacheError(CacheError::UnknownUnitType { .. })
    ));
}

#[test]
fn stale_tables_lose_confidence() {
    let cache = RentTableCache::default();
    let old = CityRentTable::builder(
        Geography::city("Austin"),
        TableMetadata::new(Utc::now() - ChronoDuration::days(120), ConfidenceTier::High),
    )
    .rent(UnitType::TwoBedroom, ConditionGrade::B, 1_800.0)
    .build()
    .unwrap();
    cache.publish(old);

    let path = GeoPath::new().with_city("Austin");
    let lookup = cache.lookup(&path, 2u32, "B", Utc::now());
    assert_eq!(lookup.label, DataConfidenceLabel::CompsInferred);

    let later = cache.lookup(&path, 2u32, "B", Utc::now() + ChronoDuration::days(400));
    assert_eq!(later.label, DataConfidenceLabel::MarketModeled);
}

#[test]
fn held_reference_is_unaffected_by_republish() {
    let cache = RentTableCache::default();
    let geo = Geography::city("Austin");
    cache.publish(table(geo.clone(), 1_800.0));

    let held = cache.table(&geo).unwrap();
    let edited = held
        .to_builder()
        .rent(UnitType::TwoBedroom, ConditionGrade::B, 9_999.0)
        .build()
        .unwrap();

    // Editing a copy changes nothing until it is published.
    let path = GeoPath::new().with_city("Austin");
    assert_eq!(cache.get_rent(&path, 2u32, "B").unwrap(), 1_800.0);
    assert_ne!(edited.content_hash(), held.content_hash());

    let replaced = cache.publish(edited).unwrap();
    assert_eq!(replaced.rent(UnitType::TwoBedroom, ConditionGrade::B), Some(1_800.0));
    assert_eq!(held.rent(UnitType::TwoBedroom, ConditionGrade::B), Some(1_800.0));
    assert_eq!(cache.get_rent(&path, 2u32, "B").unwrap(), 9_999.0);
}

#[test]
fn identical_content_hashes_match() {
    let a = table(Geography::city("Austin"), 1_800.0);
    let b = table(Geography::city("austin"), 1_800.0);
    let c = table(Geography::city("Dallas"), 1_800.0);
    assert_eq!(a.content_hash(), b.content_hash());
    assert_ne!(a.content_hash(), c.content_hash());
}

#[test]
fn invalid_tables_are_rejected() {
    let meta = TableMetadata::new(Utc::now(), ConfidenceTier::Low);
    let empty = CityRentTable::builder(Geography::city("x"), meta.clone()).build();
    assert!(matches!(empty, Err(CacheError::InvalidTable { .. })));

    let negative = CityRentTable::builder(Geography::city("x"), meta)
        .rent(UnitType::Studio, ConditionGrade::B, -10.0)
        .build();
    assert!(matches!(negative, Err(CacheError::InvalidTable { .. })));
}

#[test]
fn table_from_curve_applies_grade_multipliers() {
    let point = |class, rent| RentCurvePoint {
        class,
        median_rent: rent,
        provenance: Provenance::Original,
        correction_delta: 0.0,
    };
    let curve = [
        point(BedroomClass::Studio, 1_000.0),
        point(BedroomClass::OneBedroom, 1_200.0),
        point(BedroomClass::TwoBedroom, 1_500.0),
        point(BedroomClass::ThreeBedroom, 1_900.0),
    ];
    let table = CityRentTable::from_curve(
        Geography::city("Austin"),
        &curve,
        &GradeMultipliers::default(),
        TableMetadata::new(Utc::now(), ConfidenceTier::Medium).with_sources(["census"]),
    )
    .unwrap();

    assert_eq!(table.len(), 15);
    assert_eq!(table.rent(UnitType::TwoBedroom, ConditionGrade::B), Some(1_500.0));
    assert!((table.rent(UnitType::Studio, ConditionGrade::A).unwrap() - 1_150.0).abs() < 1e-9);
    assert_eq!(table.rent(UnitType::FourPlus, ConditionGrade::B), Some(2_300.0));
    assert_eq!(table.metadata().sources, vec!["census".to_string()]);
}

#[test]
fn stats_track_hits_baseline_and_depth() {
    let cache = RentTableCache::default();
    cache.publish(table(Geography::county("Travis"), 1_700.0));
    let now = Utc::now();

    cache.lookup(&austin_path(), 2u32, "B", now); // county, depth 2
    cache.lookup(&GeoPath::new().with_city("Elsewhere"), 2u32, "B", now); // baseline, depth 1
    cache.lookup(&austin_path(), "penthouse", "B", now); // failed

    let stats = cache.stats();
    assert_eq!(stats.lookups, 3);
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.baseline_served, 1);
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.tables, 1);
    assert!((stats.hit_rate() - 1.0 / 3.0).abs() < 1e-12);
    assert!((stats.avg_fallback_depth() - 1.5).abs() < 1e-12);
}

struct CountingLoader {
    calls: AtomicUsize,
    fail: bool,
}

impl IReferenceLoader for CountingLoader {
    fn load(&self) -> MarketFuseResult<ReferenceConfig> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(CacheError::ReferenceLoadFailed {
                reason: "upstream down".to_string(),
            }
            .into());
        }
        Ok(ReferenceConfig {
            conventional_rate: 0.0675,
            is_baseline: false,
            ..ReferenceConfig::baseline()
        })
    }
}

#[test]
fn reference_config_is_served_from_cache_within_ttl() {
    let loader = Arc::new(CountingLoader {
        calls: AtomicUsize::new(0),
        fail: false,
    });
    let cache = ReferenceConfigCache::new(loader.clone(), Duration::from_secs(60));

    let first = cache.get();
    let second = cache.get();
    assert_eq!(first.conventional_rate, 0.0675);
    assert!(!second.is_baseline);
    assert_eq!(loader.calls.load(Ordering::SeqCst), 1);

    cache.invalidate();
    cache.get();
    assert_eq!(loader.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn reference_config_expires_after_ttl() {
    let loader = Arc::new(CountingLoader {
        calls: AtomicUsize::new(0),
        fail: false,
    });
    let cache = ReferenceConfigCache::new(loader.clone(), Duration::from_millis(50));
    cache.get();
    std::thread::sleep(Duration::from_millis(120));
    cache.get();
    assert_eq!(loader.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn failed_refresh_serves_baseline_and_records_degradation() {
    let loader = Arc::new(CountingLoader {
        calls: AtomicUsize::new(0),
        fail: true,
    });
    let cache = ReferenceConfigCache::from_config(loader, &CacheConfig::default());

    let config = cache.get();
    assert!(config.is_baseline);
    assert_eq!(config.fha_loan_limit, ReferenceConfig::baseline().fha_loan_limit);
    assert_eq!(config.property_tax_rate("tx"), 0.011);

    let events = cache.drain_degradations();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].component, "reference_config");
    assert!(cache.drain_degradations().is_empty());
}
