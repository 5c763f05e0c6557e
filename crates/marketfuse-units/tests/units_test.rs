use marketfuse_units::{
    detect_units, DetectionConfidence, InferenceSource, PropertyRecord, UnitDetectionResult,
};

fn detect(p: PropertyRecord) -> UnitDetectionResult {
    detect_units(&p)
}

#[test]
fn structured_family_style_wins_over_room_counts() {
    for (beds, baths) in [(0, 0.0), (2, 1.0), (12, 6.0)] {
        let r = detect(
            PropertyRecord::new()
                .with_style("3 Family")
                .with_bedrooms(beds)
                .with_bathrooms(baths),
        );
        assert_eq!(r.units, 3);
        assert_eq!(r.confidence, DetectionConfidence::High);
        assert_eq!(r.source, InferenceSource::StructuredStyle);
        assert!(!r.needs_research);
        assert_eq!(r.raw_indicators, vec!["style:3 Family".to_string()]);
    }
}

#[test]
fn named_plex_styles() {
    assert_eq!(detect(PropertyRecord::new().with_style("Duplex")).units, 2);
    assert_eq!(detect(PropertyRecord::new().with_style("Triplex")).units, 3);
    assert_eq!(detect(PropertyRecord::new().with_style("Quadplex")).units, 4);
}

#[test]
fn description_count_is_medium() {
    let r = detect(
        PropertyRecord::new()
            .with_style("Residential")
            .with_description("Fully leased brick building with 4 units and off-street parking"),
    );
    assert_eq!(r.units, 4);
    assert_eq!(r.confidence, DetectionConfidence::Medium);
    assert_eq!(r.source, InferenceSource::DescriptionPattern);
    assert!(!r.needs_research);
}

#[test]
fn description_triplex_is_medium() {
    let r = detect(PropertyRecord::new().with_description("Rare triplex near downtown"));
    assert_eq!(r.units, 3);
    assert_eq!(r.confidence, DetectionConfidence::Medium);
}

#[test]
fn multi_family_bedroom_heuristic() {
    let r = detect(
        PropertyRecord::new()
            .with_style("Multi Family")
            .with_bedrooms(6)
            .with_bathrooms(3.0),
    );
    assert!((2..=4).contains(&r.units));
    assert_eq!(r.units, 2);
    assert_eq!(r.confidence, DetectionConfidence::Low);
    assert_eq!(r.source, InferenceSource::BedroomHeuristic);
    assert!(r.needs_research);
    assert!(r.raw_indicators.contains(&"bedrooms:6".to_string()));
}

#[test]
fn bathrooms_cap_the_bedroom_estimate() {
    // 10 bedrooms alone suggests 4 units; 3 baths caps it at 2.
    let capped = detect(
        PropertyRecord::new()
            .with_style("Multi-Family")
            .with_bedrooms(10)
            .with_bathrooms(3.0),
    );
    assert_eq!(capped.units, 2);

    let uncapped = detect(PropertyRecord::new().with_style("Multi-Family").with_bedrooms(10));
    assert_eq!(uncapped.units, 4);

    let huge = detect(
        PropertyRecord::new()
            .with_style("Multifamily")
            .with_bedrooms(30)
            .with_bathrooms(20.0),
    );
    assert_eq!(huge.units, 4);
}

#[test]
fn multi_family_without_signal_defaults_to_two() {
    let r = detect(PropertyRecord::new().with_style("Multi Family").with_bedrooms(3));
    assert_eq!(r.units, 2);
    assert_eq!(r.confidence, DetectionConfidence::Low);
    assert_eq!(r.source, InferenceSource::MultiFamilyDefault);
    assert!(r.needs_research);
}

#[test]
fn generic_multi_family_in_description_only() {
    let r = detect(PropertyRecord::new().with_description("Great multi-family investment"));
    assert_eq!(r.units, 2);
    assert_eq!(r.source, InferenceSource::MultiFamilyDefault);
}

#[test]
fn single_unit_types_are_high_one() {
    for style in ["Single Family Residence", "Condo", "Townhouse", "Townhome"] {
        let r = detect(PropertyRecord::new().with_style(style).with_bedrooms(5));
        assert_eq!(r.units, 1, "{style}");
        assert_eq!(r.confidence, DetectionConfidence::High, "{style}");
        assert_eq!(r.source, InferenceSource::SingleUnitType, "{style}");
        assert!(!r.needs_research);
    }
}

#[test]
fn nothing_usable_is_unknown_single_unit() {
    let empty = detect(PropertyRecord::new());
    assert_eq!(empty.units, 1);
    assert_eq!(empty.confidence, DetectionConfidence::Unknown);
    assert_eq!(empty.source, InferenceSource::NoData);
    assert!(empty.needs_research);
    assert!(empty.raw_indicators.is_empty());

    let blank = detect(
        PropertyRecord::new()
            .with_style("   ")
            .with_description("")
            .with_bathrooms(f64::NAN),
    );
    assert_eq!(blank.confidence, DetectionConfidence::Unknown);

    let unrecognized = detect(PropertyRecord::new().with_style("Farm").with_bedrooms(3));
    assert_eq!(unrecognized.units, 1);
    assert_eq!(unrecognized.confidence, DetectionConfidence::Unknown);
    assert_eq!(unrecognized.raw_indicators, vec!["style:Farm".to_string()]);
}

#[test]
fn result_serializes_with_wire_names() {
    let r = detect(PropertyRecord::new().with_style("Duplex"));
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["confidence"], "HIGH");
    assert_eq!(json["source"], "structured_style");
    assert_eq!(json["units"], 2);
}
