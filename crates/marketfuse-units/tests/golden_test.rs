//! Golden detection cases from `test-fixtures/golden/units`.

use marketfuse_units::{detect_units, DetectionConfidence, InferenceSource, PropertyRecord};
use serde::Deserialize;
use test_fixtures::load_all;

#[derive(Debug, Deserialize)]
struct GoldenCase {
    name: String,
    property: PropertyRecord,
    expected: Expected,
}

#[derive(Debug, Deserialize)]
struct Expected {
    units: u32,
    confidence: DetectionConfidence,
    source: InferenceSource,
    needs_research: bool,
}

#[test]
fn golden_unit_detection() {
    let cases = load_all::<GoldenCase>("golden/units");
    assert!(cases.len() >= 6);

    for (_, case) in cases {
        let r = detect_units(&case.property);
        assert_eq!(r.units, case.expected.units, "{}", case.name);
        assert_eq!(r.confidence, case.expected.confidence, "{}", case.name);
        assert_eq!(r.source, case.expected.source, "{}", case.name);
        assert_eq!(r.needs_research, case.expected.needs_research, "{}", case.name);
    }
}
