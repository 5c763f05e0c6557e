//! Percentage and plain-number parsing for rate and ratio metrics.

use std::sync::LazyLock;

use marketfuse_core::config::ExtractionConfig;
use regex::Regex;

use crate::monetary::{MonetaryKind, ParsedValue};
use crate::tokens::{estimate, parse_number};

/// `6.25% - 6.75%`, `6.25-6.75%`, `6.25 to 6.75 percent`.
static RATE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?P<a>\d+(?:\.\d+)?)\s*%?\s*(?:-|–|to)\s*(?P<b>\d+(?:\.\d+)?)\s*(?:%|percent\b)",
    )
    .unwrap()
});

/// `6.5%`, `6.5 percent`.
static RATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?P<num>\d+(?:\.\d+)?)\s*(?:%|percent\b)").unwrap());

/// Bare decimal fraction such as `0.065`.
static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[^\d.,$])(?P<num>0?\.\d+)").unwrap());

/// Bare number with an optional duration tail (`30-year`, `15 yr`).
static BARE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?P<num>\d+(?:\.\d+)?)(?P<term>\s*-?\s*(?:years?|yrs?)\b)?").unwrap()
});

/// Plain number, used for unitless ratios.
static PLAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<num>\d+(?:\.\d+)?)").unwrap());

/// Scan `text` for one or two rate tokens, returned as decimal fractions.
///
/// Percent-marked tokens are divided by 100 here; bare decimals pass
/// through unchanged. Failing both, the first bare number up to 100 that is
/// not a loan term is returned as written, left for the registry to read as
/// a percentage.
pub fn parse_rate_value(text: &str, config: &ExtractionConfig) -> Option<ParsedValue> {
    let tokens = rate_tokens(text);
    let (value, sigma, range) = estimate(&tokens, config)?;
    Some(ParsedValue {
        kind: MonetaryKind::Average,
        value,
        sigma,
        range,
    })
}

/// Scan `text` for one or two plain numbers (ratios).
pub fn parse_ratio_value(text: &str, config: &ExtractionConfig) -> Option<ParsedValue> {
    let tokens: Vec<f64> = PLAIN_RE
        .captures_iter(text)
        .filter_map(|c| parse_number(c.name("num")?.as_str()))
        .take(2)
        .collect();
    let (value, sigma, range) = estimate(&tokens, config)?;
    Some(ParsedValue {
        kind: MonetaryKind::Average,
        value,
        sigma,
        range,
    })
}

fn rate_tokens(text: &str) -> Vec<f64> {
    if let Some(caps) = RATE_RANGE_RE.captures(text) {
        let a = caps.name("a").and_then(|m| parse_number(m.as_str()));
        let b = caps.name("b").and_then(|m| parse_number(m.as_str()));
        if let (Some(a), Some(b)) = (a, b) {
            return vec![a / 100.0, b / 100.0];
        }
    }

    let percents: Vec<f64> = RATE_RE
        .captures_iter(text)
        .filter_map(|c| parse_number(c.name("num")?.as_str()))
        .map(|v| v / 100.0)
        .take(2)
        .collect();
    if !percents.is_empty() {
        return percents;
    }

    let decimals: Vec<f64> = DECIMAL_RE
        .captures_iter(text)
        .filter_map(|c| parse_number(c.name("num")?.as_str()))
        .take(2)
        .collect();
    if !decimals.is_empty() {
        return decimals;
    }

    BARE_RE
        .captures_iter(text)
        .filter(|c| c.name("term").is_none())
        .filter_map(|c| parse_number(c.name("num")?.as_str()))
        .find(|v| *v <= 100.0)
        .into_iter()
        .collect()
}
