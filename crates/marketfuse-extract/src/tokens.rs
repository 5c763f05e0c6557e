//! Shared token helpers: σ estimation and number cleanup.

use marketfuse_core::config::ExtractionConfig;

/// Collapse one or two numeric tokens into `(point, σ, range)`.
///
/// Two tokens are a range: midpoint, σ = width / divisor.
/// One token is a point: σ = value × fraction.
pub(crate) fn estimate(
    tokens: &[f64],
    config: &ExtractionConfig,
) -> Option<(f64, f64, Option<(f64, f64)>)> {
    match tokens {
        [] => None,
        [v] => Some((*v, v.abs() * config.point_sigma_fraction, None)),
        [a, b, ..] => {
            let (lo, hi) = if a <= b { (*a, *b) } else { (*b, *a) };
            let sigma = (hi - lo) / config.range_sigma_divisor;
            Some(((lo + hi) / 2.0, sigma, Some((lo, hi))))
        }
    }
}

/// Parse `"1,250.50"` into `1250.5`.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Multiplier for a magnitude suffix such as `k` or `million`.
pub(crate) fn suffix_multiplier(suffix: Option<&str>) -> f64 {
    match suffix.map(|s| s.to_ascii_lowercase()) {
        Some(s) if s == "k" || s == "thousand" => 1_000.0,
        Some(s) if s == "m" || s == "mm" || s == "million" => 1_000_000.0,
        _ => 1.0,
    }
}
