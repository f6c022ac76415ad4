//! Estimator types.

mod estimate;
pub use estimate::*;

mod snapshot;
pub use snapshot::MarketSnapshot;
