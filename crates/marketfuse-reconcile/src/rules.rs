//! Confidence rule table.
//!
//! | condition                                             | tier   |
//! |-------------------------------------------------------|--------|
//! | disagreement > critical                               | LOW, review |
//! | disagreement > tolerance                              | LOW    |
//! | within tolerance, HIGH source, count ≥ min for HIGH   | HIGH   |
//! | within tolerance otherwise                            | MEDIUM |
//!
//! A quarantined geography caps the result at LOW.

use marketfuse_core::constants::issues as codes;
use marketfuse_core::models::ConfidenceTier;
use marketfuse_registry::ToleranceSpec;

/// Inputs to the rule table for one fused metric.
#[derive(Debug, Clone, Copy)]
pub struct RuleInputs {
    /// Weighted relative disagreement.
    pub disagreement: f64,
    pub tolerance: ToleranceSpec,
    /// Whether a HIGH-tier observation carried non-zero weight.
    pub has_high_source: bool,
    pub observation_count: usize,
    pub min_sources_for_high: usize,
    pub quarantined: bool,
}

/// Outcome of the rule table.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub tier: ConfidenceTier,
    pub issues: Vec<String>,
    pub requires_review: bool,
}

pub fn classify(inputs: &RuleInputs) -> Classification {
    let mut issues = Vec::new();
    let mut requires_review = false;

    let critical_breach = inputs
        .tolerance
        .critical
        .is_some_and(|c| inputs.disagreement > c);

    let mut tier = if critical_breach {
        requires_review = true;
        issues.push(format!(
            "{}: {:.1}% > {:.1}%",
            codes::CRITICAL_DIVERGENCE,
            inputs.disagreement * 100.0,
            inputs.tolerance.critical.unwrap_or_default() * 100.0
        ));
        ConfidenceTier::Low
    } else if inputs.disagreement > inputs.tolerance.tolerance {
        issues.push(format!(
            "{}: {:.1}% > {:.1}%",
            codes::DIVERGENCE,
            inputs.disagreement * 100.0,
            inputs.tolerance.tolerance * 100.0
        ));
        ConfidenceTier::Low
    } else if inputs.has_high_source && inputs.observation_count >= inputs.min_sources_for_high {
        ConfidenceTier::High
    } else {
        ConfidenceTier::Medium
    };

    if inputs.observation_count < inputs.min_sources_for_high {
        issues.push(format!(
            "{}: {} of {} sources",
            codes::LOW_SAMPLE,
            inputs.observation_count,
            inputs.min_sources_for_high
        ));
    }

    if inputs.quarantined {
        tier = tier.min(ConfidenceTier::Low);
        issues.push(codes::QUARANTINED.to_string());
    }

    Classification {
        tier,
        issues,
        requires_review,
    }
}
