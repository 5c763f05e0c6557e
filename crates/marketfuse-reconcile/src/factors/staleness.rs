/// Staleness decay: `0.5^(ageDays / halfLife)`.
///
/// Range: 0.0 – 1.0. A non-positive half-life disables decay.
pub fn decay(age_days: f64, half_life_days: f64) -> f64 {
    if half_life_days <= 0.0 || !half_life_days.is_finite() {
        return 1.0;
    }
    0.5f64.powf(age_days.max(0.0) / half_life_days)
}
