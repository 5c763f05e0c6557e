// Single source of truth for all default values.

// --- Extraction ---
/// Divisor turning a reported [min, max] range into a standard deviation.
/// A near-normal spread puts ~93% of mass inside ±1.349σ, so width / 2.698.
pub const DEFAULT_RANGE_SIGMA_DIVISOR: f64 = 2.698;
/// σ for single-point answers, as a fraction of the value.
pub const DEFAULT_POINT_SIGMA_FRACTION: f64 = 0.15;
/// Minimum combined sample count for a derived metric to survive.
pub const DEFAULT_MIN_DERIVED_SAMPLES: u32 = 3;

// --- Reconcile ---
pub const DEFAULT_STALENESS_HALF_LIFE_DAYS: f64 = 180.0;
pub const DEFAULT_TRUST_WEIGHT_HIGH: f64 = 1.0;
pub const DEFAULT_TRUST_WEIGHT_MEDIUM: f64 = 0.6;
pub const DEFAULT_TRUST_WEIGHT_LOW: f64 = 0.25;
pub const DEFAULT_MIN_SOURCES_FOR_HIGH: usize = 2;
pub const DEFAULT_QUARANTINE_MIN_CORRECTIONS: u32 = 3;
pub const DEFAULT_QUARANTINE_AVG_DELTA: f64 = 150.0;

// --- Rent curve ---
pub const DEFAULT_MIN_STEP: f64 = 75.0;
/// Lowest rent the enforcer will impute or override to.
pub const DEFAULT_MIN_RENT: f64 = 50.0;
/// lower = higher × ratio, per adjacent pair (studio↔1BR, 1BR↔2BR, 2BR↔3BR).
pub const DEFAULT_BACKWARD_RATIOS: [f64; 3] = [0.8, 0.9, 0.9];
/// higher = lower × ratio, per adjacent pair.
pub const DEFAULT_FORWARD_RATIOS: [f64; 3] = [1.2, 1.1, 1.15];
/// Dollar gap bounds per adjacent pair.
pub const DEFAULT_GAP_BOUNDS: [(f64, f64); 3] = [(100.0, 600.0), (150.0, 800.0), (150.0, 1000.0)];
pub const DEFAULT_MAX_SPREAD_RATIO: f64 = 2.5;

// --- Cache ---
pub const DEFAULT_REFERENCE_TTL_SECS: u64 = 60;
pub const DEFAULT_STALE_AFTER_DAYS: i64 = 90;
pub const DEFAULT_EXPIRED_AFTER_DAYS: i64 = 365;
/// National baseline rents for condition grade B.
pub const DEFAULT_BASELINE_STUDIO: f64 = 1_100.0;
pub const DEFAULT_BASELINE_ONE_BEDROOM: f64 = 1_300.0;
pub const DEFAULT_BASELINE_TWO_BEDROOM: f64 = 1_600.0;
pub const DEFAULT_BASELINE_THREE_BEDROOM: f64 = 2_000.0;
pub const DEFAULT_BASELINE_FOUR_PLUS: f64 = 2_400.0;
pub const DEFAULT_GRADE_A_MULTIPLIER: f64 = 1.15;
pub const DEFAULT_GRADE_B_MULTIPLIER: f64 = 1.0;
pub const DEFAULT_GRADE_C_MULTIPLIER: f64 = 0.85;

// --- Reference baseline (served when a refresh fails) ---
pub const BASELINE_CONVENTIONAL_RATE: f64 = 0.07;
pub const BASELINE_FHA_RATE: f64 = 0.065;
pub const BASELINE_FHA_LOAN_LIMIT: f64 = 498_257.0;
pub const BASELINE_CONFORMING_LOAN_LIMIT: f64 = 766_550.0;
pub const BASELINE_PROPERTY_TAX_RATE: f64 = 0.011;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_TRACING_ENABLED: bool = false;
