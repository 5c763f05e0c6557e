/// Monotonic rent enforcer errors.
#[derive(Debug, thiserror::Error)]
pub enum RentCurveError {
    #[error("NO_VALID_RENT_POINTS")]
    NoValidRentPoints,
}
