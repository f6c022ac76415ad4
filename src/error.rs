//! Estimator error types.

/// Errors that can occur while computing a fee table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FeeError {
    /// No ETH/USD price was available and the configured policy refuses to
    /// produce a table without one.
    #[error("no ETH/USD price available")]
    EthPriceUnavailable,

    /// The transaction cost did not fit the integer domain used for exact wei
    /// arithmetic.
    #[error("transaction cost overflow: {gas_limit} gas at {gas_price_gwei} gwei")]
    CostOverflow {
        /// Gas limit of the estimated transaction.
        gas_limit: u64,
        /// Gas price (gwei) of the offending row.
        gas_price_gwei: f64,
    },
}
