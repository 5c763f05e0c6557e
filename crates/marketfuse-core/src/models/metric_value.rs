use serde::{Deserialize, Serialize};

/// A reported value: a single point or a `[min, max]` range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum MetricValue {
    Point { value: f64 },
    Range { min: f64, max: f64 },
}

impl MetricValue {
    pub fn point(value: f64) -> Self {
        Self::Point { value }
    }

    pub fn range(min: f64, max: f64) -> Self {
        Self::Range { min, max }
    }

    /// Representative point value; the midpoint for ranges.
    pub fn center(&self) -> f64 {
        match *self {
            Self::Point { value } => value,
            Self::Range { min, max } => (min + max) / 2.0,
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }

    /// Apply `f` to every number in the value.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        match self {
            Self::Point { value } => Self::Point { value: f(value) },
            Self::Range { min, max } => Self::Range {
                min: f(min),
                max: f(max),
            },
        }
    }
}
