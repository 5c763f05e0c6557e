use marketfuse_core::config::RentCurveConfig;
use marketfuse_core::constants::{issues, RENT_CURVE_POINTS};
use marketfuse_core::models::{BedroomClass, Provenance, RentCurvePoint};
use tracing::debug;

use crate::input::RentCurveInput;
use crate::report::{CurveMetrics, EnforcedCurve, RentCurveReport};

/// Most commonly reported class first.
const SEED_PRIORITY: [usize; 4] = [2, 1, 3, 0];

/// Float slack when comparing dollar amounts produced by arithmetic.
const EPSILON: f64 = 1e-6;

/// Monotonic rent enforcer. Holds only configuration.
#[derive(Debug, Clone, Default)]
pub struct RentCurveEnforcer {
    config: RentCurveConfig,
}

impl RentCurveEnforcer {
    pub fn new(config: RentCurveConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RentCurveConfig {
        &self.config
    }

    /// Repair `input` into a strictly increasing curve.
    pub fn enforce(&self, input: &RentCurveInput) -> RentCurveReport {
        let step = self.config.min_step;
        let mut issue_list = Vec::new();

        let raw = input.as_array();
        let mut present: [Option<f64>; RENT_CURVE_POINTS] = [None; RENT_CURVE_POINTS];
        for (i, v) in raw.iter().enumerate() {
            match v {
                Some(v) if v.is_finite() && *v > 0.0 => present[i] = Some(*v),
                Some(v) => issue_list.push(format!(
                    "{}: {} = {v}",
                    issues::INVALID_INPUT,
                    label(i)
                )),
                None => {}
            }
        }

        let Some(seed) = SEED_PRIORITY.iter().copied().find(|i| present[*i].is_some()) else {
            debug!("rent curve has no usable points");
            return RentCurveReport::failed(issues::NO_VALID_RENT_POINTS);
        };

        // Present values must already be ordered among themselves; raise the
        // higher class of any inverted pair.
        let mut anchored = present;
        let mut last: Option<(usize, f64)> = None;
        for i in 0..RENT_CURVE_POINTS {
            let Some(v) = anchored[i] else { continue };
            if let Some((j, lv)) = last {
                let required = lv + step * (i - j) as f64;
                if v < required {
                    issue_list.push(format!(
                        "{}: {} {v} < {} {lv} + {}",
                        issues::ORDERING_VIOLATION,
                        label(i),
                        label(j),
                        step * (i - j) as f64
                    ));
                    anchored[i] = Some(required);
                }
            }
            last = anchored[i].map(|v| (i, v));
        }

        let mut out = [0.0; RENT_CURVE_POINTS];
        out[seed] = anchored[seed].unwrap_or_default();

        // Toward studio. Only reported values may sit below the rent floor.
        for i in (0..seed).rev() {
            let next = out[i + 1];
            let v = match anchored[i] {
                Some(v) if v > next - step + EPSILON => {
                    issue_list.push(format!(
                        "{}: {} {v} overridden to {}",
                        issues::ORDERING_VIOLATION,
                        label(i),
                        next - step
                    ));
                    next - step
                }
                Some(v) => v,
                None => {
                    let ratio = self.config.backward_ratios[i];
                    let gap = self.config.backward_bounds[i]
                        .clamp(next - next * ratio)
                        .max(step);
                    let mut v = next - gap;
                    if let Some(floor) = floor_below(&anchored, i, step) {
                        v = v.max(floor);
                    }
                    v
                }
            };
            out[i] = if v < self.config.min_rent && anchored[i] != Some(v) {
                issue_list.push(format!(
                    "{}: {} {v} raised to {}",
                    issues::RENT_FLOOR,
                    label(i),
                    self.config.min_rent
                ));
                self.config.min_rent
            } else {
                v
            };
        }

        // Toward 3BR.
        for i in seed + 1..RENT_CURVE_POINTS {
            let prev = out[i - 1];
            out[i] = match anchored[i] {
                Some(v) if v < prev + step - EPSILON => {
                    issue_list.push(format!(
                        "{}: {} {v} overridden to {}",
                        issues::ORDERING_VIOLATION,
                        label(i),
                        prev + step
                    ));
                    prev + step
                }
                Some(v) => v,
                None => {
                    let ratio = self.config.forward_ratios[i - 1];
                    let gap = self.config.forward_bounds[i - 1]
                        .clamp(prev * ratio - prev)
                        .max(step);
                    let mut v = prev + gap;
                    if let Some(ceiling) = ceiling_above(&anchored, i, step) {
                        v = v.min(ceiling);
                    }
                    v
                }
            };
        }

        // Final sweep.
        for i in 1..RENT_CURVE_POINTS {
            let required = out[i - 1] + step;
            if out[i] + EPSILON < required {
                issue_list.push(format!(
                    "{}: {} {} raised to {required}",
                    issues::RESIDUAL_VIOLATION,
                    label(i),
                    out[i]
                ));
                out[i] = required;
            }
        }

        let points: [RentCurvePoint; RENT_CURVE_POINTS] = std::array::from_fn(|i| {
            let class = BedroomClass::ALL[i];
            match present[i] {
                None => RentCurvePoint {
                    class,
                    median_rent: out[i],
                    provenance: Provenance::Imputed,
                    correction_delta: 0.0,
                },
                Some(original) if (out[i] - original).abs() > EPSILON => RentCurvePoint {
                    class,
                    median_rent: out[i],
                    provenance: Provenance::Corrected,
                    correction_delta: (out[i] - original).abs(),
                },
                Some(original) => RentCurvePoint {
                    class,
                    median_rent: original,
                    provenance: Provenance::Original,
                    correction_delta: 0.0,
                },
            }
        });

        let metrics = CurveMetrics::from_points(&points, BedroomClass::ALL[seed]);
        debug!(
            seed = metrics.seed_label(),
            correction_rate = metrics.correction_rate,
            avg_correction = metrics.avg_correction_magnitude,
            issues = issue_list.len(),
            "rent curve enforced"
        );

        RentCurveReport {
            valid: true,
            curve: Some(EnforcedCurve { points, metrics }),
            issues: issue_list,
        }
    }
}

fn label(index: usize) -> &'static str {
    BedroomClass::from_index(index).map_or("?", BedroomClass::label)
}

/// Lowest value class `i` may take given the nearest present class below it.
fn floor_below(values: &[Option<f64>; RENT_CURVE_POINTS], i: usize, step: f64) -> Option<f64> {
    (0..i)
        .rev()
        .find_map(|j| values[j].map(|v| v + step * (i - j) as f64))
}

/// Highest value class `i` may take given the nearest present class above it.
fn ceiling_above(values: &[Option<f64>; RENT_CURVE_POINTS], i: usize, step: f64) -> Option<f64> {
    (i + 1..RENT_CURVE_POINTS).find_map(|k| values[k].map(|v| v - step * (k - i) as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_and_ceiling_scale_with_distance() {
        let values = [Some(1_000.0), None, None, Some(2_000.0)];
        assert_eq!(floor_below(&values, 2, 75.0), Some(1_150.0));
        assert_eq!(ceiling_above(&values, 1, 75.0), Some(1_850.0));
        assert_eq!(floor_below(&values, 0, 75.0), None);
        assert_eq!(ceiling_above(&values, 3, 75.0), None);
    }
}
