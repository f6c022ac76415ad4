//! Per-row cost arithmetic and table assembly.

use crate::{
    config::{FeePolicy, MissingUsdPolicy},
    constants::{BALANCE_BUFFER, WEI_PER_ETH, WEI_PER_GWEI},
    error::FeeError,
    fees::generate_sequence,
    types::{FeeEstimationInput, FeeRow, FeeTable, MarketSnapshot},
};
use alloy::primitives::U256;

/// Computes the exact transaction cost in wei.
///
/// The gas price is rounded to an integral wei-per-unit quantity first, then
/// multiplied in [`U256`]. Doubles lose integer precision above 2^53, which a
/// large gas limit times a large gas price exceeds easily, so the product must
/// stay in the integer domain.
pub fn transaction_cost_wei(gas_limit: u64, gas_price_gwei: f64) -> Result<U256, FeeError> {
    let overflow = || FeeError::CostOverflow { gas_limit, gas_price_gwei };

    let wei_per_unit = (gas_price_gwei * WEI_PER_GWEI).round();
    if !(0.0..=u128::MAX as f64).contains(&wei_per_unit) {
        return Err(overflow());
    }

    U256::from(gas_limit).checked_mul(U256::from(wei_per_unit as u128)).ok_or_else(overflow)
}

/// Computes one fee row from a single gas price and the estimation input.
///
/// Pure: identical inputs yield bit-identical rows. The USD value is present
/// iff `eth_usd` is.
pub fn compute_row(
    gas_price_gwei: f64,
    input: &FeeEstimationInput,
    eth_usd: Option<f64>,
) -> Result<FeeRow, FeeError> {
    let cost_wei = transaction_cost_wei(input.gas_limit, gas_price_gwei)?;

    // The wei quantity is exact; only this final conversion for display is
    // allowed to go through floating point.
    let cost_wei = u128::try_from(cost_wei)
        .map_err(|_| FeeError::CostOverflow { gas_limit: input.gas_limit, gas_price_gwei })?;
    let transaction_cost_eth = cost_wei as f64 / WEI_PER_ETH;

    let total_cost_eth = input.mint_price_eth + transaction_cost_eth;

    Ok(FeeRow {
        gas_price_gwei,
        transaction_cost_eth,
        total_cost_eth,
        balance_needed_eth: total_cost_eth * BALANCE_BUFFER,
        usd_value: eth_usd.map(|price| total_cost_eth * price),
    })
}

impl FeeTable {
    /// Generates a fee table from scratch: the gas price sequence per the
    /// input mode and policy tiers, then one row per sequence entry.
    ///
    /// Under [`MissingUsdPolicy::Omit`] a missing ETH/USD price simply leaves
    /// the USD column absent; under [`MissingUsdPolicy::Refuse`] it is
    /// [`FeeError::EthPriceUnavailable`].
    pub fn generate(
        input: &FeeEstimationInput,
        snapshot: &MarketSnapshot,
        policy: &FeePolicy,
    ) -> Result<Self, FeeError> {
        if policy.missing_usd == MissingUsdPolicy::Refuse && snapshot.eth_usd.is_none() {
            return Err(FeeError::EthPriceUnavailable);
        }

        let rows = generate_sequence(&input.mode, input.row_count, &policy.default_tiers)
            .into_iter()
            .map(|gwei| compute_row(gwei, input, snapshot.eth_usd))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows, snapshot: *snapshot })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SequenceMode;

    fn snapshot(eth_usd: Option<f64>) -> MarketSnapshot {
        MarketSnapshot { eth_usd, ..MarketSnapshot::empty() }
    }

    fn input(mint_price_eth: f64, gas_limit: u64) -> FeeEstimationInput {
        FeeEstimationInput::new(mint_price_eth, gas_limit, 5, SequenceMode::Default)
    }

    #[test]
    fn transfer_at_25_gwei() {
        let row = compute_row(25.0, &input(0.0, 21_000), Some(2000.0)).unwrap();
        assert_eq!(row.transaction_cost_eth, 0.000525);
        assert_eq!(row.total_cost_eth, 0.000525);
        // 0.000525 * 1.25 is one ulp off the decimal value in f64.
        assert!((row.balance_needed_eth - 0.00065625).abs() < 1e-12);
        assert_eq!(row.usd_value, Some(1.05));
    }

    #[test]
    fn exact_wei_product_survives_the_double_precision_cliff() {
        // 5e11 gas at 5e11 gwei: both factors are large enough that an f64
        // product would be off by millions of wei.
        let wei = transaction_cost_wei(500_000_000_000, 500_000_000_000.0).unwrap();
        let reference = U256::from(500_000_000_000u128) * U256::from(500_000_000_000_000_000_000u128);
        assert_eq!(wei, reference);
    }

    #[test]
    fn fractional_gwei_rounds_to_integral_wei() {
        // 1.5000000004 gwei rounds to exactly 1500000000 wei per unit.
        let wei = transaction_cost_wei(21_000, 1.500_000_000_4).unwrap();
        assert_eq!(wei, U256::from(21_000u64) * U256::from(1_500_000_000u64));
    }

    #[test]
    fn usd_column_follows_price_presence() {
        let with_price = compute_row(25.0, &input(0.1, 21_000), Some(1800.0)).unwrap();
        assert!(with_price.usd_value.is_some());

        let without = compute_row(25.0, &input(0.1, 21_000), None).unwrap();
        assert_eq!(without.usd_value, None);
        assert_eq!(without.total_cost_eth, with_price.total_cost_eth);
    }

    #[test]
    fn refuse_policy_requires_a_price() {
        let policy = FeePolicy { missing_usd: MissingUsdPolicy::Refuse, ..Default::default() };
        let err = FeeTable::generate(&input(0.0, 21_000), &snapshot(None), &policy).unwrap_err();
        assert_eq!(err, FeeError::EthPriceUnavailable);

        let table = FeeTable::generate(&input(0.0, 21_000), &snapshot(Some(2000.0)), &policy);
        assert!(table.is_ok());
    }

    #[test]
    fn table_is_recomputed_identically() {
        let input = FeeEstimationInput::new(0.05, 150_000, 12, SequenceMode::custom(2.5, 7.5));
        let snapshot = snapshot(Some(1925.33));
        let policy = FeePolicy::default();

        let first = FeeTable::generate(&input, &snapshot, &policy).unwrap();
        let second = FeeTable::generate(&input, &snapshot, &policy).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.rows.len(), 12);
    }
}
