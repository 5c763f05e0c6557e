use crate::errors::MarketFuseResult;
use crate::models::Observation;

/// Boundary seam for anything that produces typed observations.
///
/// The reconciler and rent enforcer only ever see `Observation`s; free-text
/// parsing or a structured feed sit behind this trait.
pub trait IObservationSource: Send + Sync {
    /// Identifier for logging.
    fn name(&self) -> &str;

    /// Produce the observations this source currently holds.
    fn observations(&self) -> MarketFuseResult<Vec<Observation>>;
}
