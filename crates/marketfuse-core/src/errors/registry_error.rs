/// Metrics-registry errors.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("unknown metric key: {name}")]
    UnknownMetric { name: String },

    #[error("{metric}: value {value} outside [{min}, {max}]")]
    OutOfBounds {
        metric: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{metric}: expected a {expected} value")]
    ShapeMismatch { metric: String, expected: String },
}
