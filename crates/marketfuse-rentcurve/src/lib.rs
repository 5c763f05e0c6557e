//! # marketfuse-rentcurve
//!
//! Repairs a four-point rent curve (studio, 1BR, 2BR, 3BR) so it strictly
//! increases by at least `min_step` dollars per class.
//!
//! Seed-and-propagate:
//! 1. Present inputs that are out of order relative to each other are raised.
//! 2. Seed from the first present value in priority 2BR, 1BR, 3BR, studio.
//! 3. Walk toward studio, imputing missing classes by ratio within gap bounds.
//! 4. Walk toward 3BR the same way.
//! 5. A final left-to-right sweep force-corrects anything left over.
//!
//! Deterministic: the output depends only on the input and the config.

pub mod bands;
pub mod enforcer;
pub mod input;
pub mod report;

pub use bands::{check_bands, UnitBand};
pub use enforcer::RentCurveEnforcer;
pub use input::RentCurveInput;
pub use report::{CurveMetrics, EnforcedCurve, RentCurveReport};
