/// MarketFuse engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of points on a rent-by-bedroom curve (studio, 1BR, 2BR, 3BR).
pub const RENT_CURVE_POINTS: usize = 4;

/// Issue codes attached to reconciled metrics and rent curves.
pub mod issues {
    pub const NO_VALID_RENT_POINTS: &str = "NO_VALID_RENT_POINTS";
    pub const ORDERING_VIOLATION: &str = "ORDERING_VIOLATION";
    pub const RESIDUAL_VIOLATION: &str = "RESIDUAL_VIOLATION";
    pub const RENT_FLOOR: &str = "RENT_FLOOR";
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    pub const BAND_ORDER: &str = "BAND_ORDER";
    pub const EXCESSIVE_SPREAD: &str = "EXCESSIVE_SPREAD";
    pub const DIVERGENCE: &str = "DIVERGENCE";
    pub const CRITICAL_DIVERGENCE: &str = "CRITICAL_DIVERGENCE";
    pub const LOW_SAMPLE: &str = "LOW_SAMPLE";
    pub const DROPPED_INVALID: &str = "DROPPED_INVALID";
    pub const QUARANTINED: &str = "QUARANTINED";
}
