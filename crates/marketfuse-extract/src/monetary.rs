//! Currency-token parsing.

use std::sync::LazyLock;

use marketfuse_core::config::ExtractionConfig;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::tokens::{estimate, parse_number, suffix_multiplier};

/// `$1,250`, `$1.2M`, `$450k`, `$ 1200.50`.
static MONEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\$\s?(?P<num>\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)(?:\s?(?P<suffix>k|mm|m|million|thousand)\b)?",
    )
    .unwrap()
});

/// `$1,200 - 1,500` / `$1,200 to $1,500` where the second `$` is omitted.
static MONEY_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\$\s?(?P<a>\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)(?:\s?(?P<sa>k|mm|m|million|thousand)\b)?\s*(?:-|–|to)\s*\$?\s?(?P<b>\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)(?:\s?(?P<sb>k|mm|m|million|thousand)\b)?",
    )
    .unwrap()
});

/// Per-area unit markers: `/sqft`, `per square foot`, `psf`, `/sf`.
static PER_AREA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(/\s*(?:sq\.?\s*ft|sqft|sf|ft2|square\s+f(?:oo|ee)t)\b|\bper\s+(?:sq\.?\s*ft|sqft|square\s+f(?:oo|ee)t)\b|\bpsf\b)",
    )
    .unwrap()
});

/// Whether a monetary answer is quoted per unit of area or for a whole unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonetaryKind {
    /// Dollars per square foot.
    PerArea,
    /// Whole-unit average or median.
    Average,
}

/// Result of parsing one answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParsedValue {
    pub kind: MonetaryKind,
    /// Point value; the midpoint when a range was found.
    pub value: f64,
    pub sigma: f64,
    /// `(min, max)` when two tokens were found.
    pub range: Option<(f64, f64)>,
}

/// Detect the unit convention of an answer.
pub fn detect_kind(text: &str) -> MonetaryKind {
    if PER_AREA_RE.is_match(text) {
        MonetaryKind::PerArea
    } else {
        MonetaryKind::Average
    }
}

/// Scan `text` for one or two currency tokens.
///
/// Returns `None` when no currency token is present.
pub fn parse_monetary_value(text: &str, config: &ExtractionConfig) -> Option<ParsedValue> {
    let tokens = monetary_tokens(text);
    let (value, sigma, range) = estimate(&tokens, config)?;
    Some(ParsedValue {
        kind: detect_kind(text),
        value,
        sigma,
        range,
    })
}

fn monetary_tokens(text: &str) -> Vec<f64> {
    if let Some(caps) = MONEY_RANGE_RE.captures(text) {
        let sa = caps.name("sa").map(|m| m.as_str());
        let sb = caps.name("sb").map(|m| m.as_str());
        // "$1.2 - 1.5M": a suffix on one end applies to the other.
        let a = caps
            .name("a")
            .and_then(|m| parse_number(m.as_str()))
            .map(|v| v * suffix_multiplier(sa.or(sb)));
        let b = caps
            .name("b")
            .and_then(|m| parse_number(m.as_str()))
            .map(|v| v * suffix_multiplier(sb.or(sa)));
        if let (Some(a), Some(b)) = (a, b) {
            return vec![a, b];
        }
    }

    MONEY_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let n = parse_number(caps.name("num")?.as_str())?;
            Some(n * suffix_multiplier(caps.name("suffix").map(|m| m.as_str())))
        })
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_detection() {
        assert_eq!(detect_kind("about $2.10/sqft per month"), MonetaryKind::PerArea);
        assert_eq!(detect_kind("$310 per square foot"), MonetaryKind::PerArea);
        assert_eq!(detect_kind("median rent $1,850"), MonetaryKind::Average);
    }

    #[test]
    fn month_is_not_a_million_suffix() {
        let parsed = parse_monetary_value("$1,200 monthly", &ExtractionConfig::default()).unwrap();
        assert_eq!(parsed.value, 1200.0);
    }
}
