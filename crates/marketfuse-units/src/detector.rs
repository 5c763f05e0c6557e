//! Unit-count detection cascade.
//!
//! Signals are tried strongest first:
//!
//! 1. structured style with an explicit multi-unit count → `HIGH`
//! 2. description with an explicit count → `MEDIUM`
//! 3. generic multi-family with ≥ 4 bedrooms → `LOW` estimate from rooms
//! 4. generic multi-family otherwise → `LOW`, 2 units
//! 5. single-dwelling style → `HIGH`, 1 unit
//! 6. nothing usable → `UNKNOWN`, 1 unit

use tracing::debug;

use crate::patterns;
use crate::property::PropertyRecord;
use crate::result::{DetectionConfidence, InferenceSource, UnitDetectionResult};

/// Floor for any multi-family estimate.
pub const MIN_MULTI_FAMILY_UNITS: u32 = 2;
/// Ceiling for estimates derived from room counts.
pub const MAX_ESTIMATED_UNITS: u32 = 4;

const BEDROOM_HEURISTIC_MIN_BEDROOMS: u32 = 4;
const BEDROOMS_PER_UNIT: f64 = 2.5;
const BATHROOMS_PER_UNIT: f64 = 1.5;

/// Classify the unit count of `property`. Never fails.
pub fn detect_units(property: &PropertyRecord) -> UnitDetectionResult {
    let result = cascade(property);
    debug!(
        units = result.units,
        confidence = %result.confidence,
        source = ?result.source,
        needs_research = result.needs_research,
        "units detected"
    );
    result
}

fn cascade(property: &PropertyRecord) -> UnitDetectionResult {
    let mut indicators = Vec::new();
    let style = property.style();
    let description = property.description();

    if let Some(m) = style.and_then(patterns::style_count) {
        indicators.push(format!("style:{}", m.matched));
        return finish(m.units, DetectionConfidence::High, InferenceSource::StructuredStyle, indicators);
    }

    if let Some(m) = description.and_then(patterns::description_count) {
        indicators.push(format!("description:{}", m.matched));
        return finish(
            m.units,
            DetectionConfidence::Medium,
            InferenceSource::DescriptionPattern,
            indicators,
        );
    }

    let generic = style
        .and_then(patterns::multi_family)
        .map(|m| format!("style:{m}"))
        .or_else(|| {
            description
                .and_then(patterns::multi_family)
                .map(|m| format!("description:{m}"))
        });
    if let Some(generic) = generic {
        indicators.push(generic);
        return multi_family_estimate(property, indicators);
    }

    if let Some(kind) = style.and_then(patterns::single_unit) {
        indicators.push(format!("style:{kind}"));
        return finish(1, DetectionConfidence::High, InferenceSource::SingleUnitType, indicators);
    }

    if let Some(style) = style {
        indicators.push(format!("style:{style}"));
    }
    finish(1, DetectionConfidence::Unknown, InferenceSource::NoData, indicators)
}

/// Multi-family without a stated count: estimate from rooms when there are
/// enough bedrooms to mean something, else assume a duplex.
fn multi_family_estimate(
    property: &PropertyRecord,
    mut indicators: Vec<String>,
) -> UnitDetectionResult {
    let bedrooms = property
        .bedrooms
        .filter(|b| *b >= BEDROOM_HEURISTIC_MIN_BEDROOMS);
    let Some(bedrooms) = bedrooms else {
        return finish(
            MIN_MULTI_FAMILY_UNITS,
            DetectionConfidence::Low,
            InferenceSource::MultiFamilyDefault,
            indicators,
        );
    };

    indicators.push(format!("bedrooms:{bedrooms}"));
    let mut estimate = (f64::from(bedrooms) / BEDROOMS_PER_UNIT).round();
    if let Some(bathrooms) = property.bathrooms() {
        indicators.push(format!("bathrooms:{bathrooms}"));
        estimate = estimate.min((bathrooms / BATHROOMS_PER_UNIT).floor());
    }
    let units = estimate.clamp(
        f64::from(MIN_MULTI_FAMILY_UNITS),
        f64::from(MAX_ESTIMATED_UNITS),
    ) as u32;

    finish(units, DetectionConfidence::Low, InferenceSource::BedroomHeuristic, indicators)
}

fn finish(
    units: u32,
    confidence: DetectionConfidence,
    source: InferenceSource,
    raw_indicators: Vec<String>,
) -> UnitDetectionResult {
    let needs_research = matches!(
        confidence,
        DetectionConfidence::Low | DetectionConfidence::Unknown
    );
    UnitDetectionResult {
        units,
        confidence,
        source,
        raw_indicators,
        needs_research,
    }
}
