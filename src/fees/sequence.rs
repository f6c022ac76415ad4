//! Gas price sequence generation.

use crate::{constants::TIER_STEP, types::SequenceMode};

/// Rounds to 5 decimal places.
///
/// Custom sequences are built by repeated addition of a user-entered step, so
/// without this the rows accumulate visible floating point drift
/// (`0.1 + 0.2`-style artifacts) within a handful of entries.
pub fn round5(value: f64) -> f64 {
    (value * 1e5).round() / 1e5
}

/// Generates the ordered gas prices (gwei) for a fee table.
///
/// In custom mode this is the arithmetic sequence `start + i * step`, each
/// entry rounded via [`round5`]. In default mode the fixed `tiers` prefix is
/// emitted first, then 25 gwei increments from the last tier until `row_count`
/// entries exist; a `row_count` smaller than the prefix truncates it.
///
/// Total over the clamped input domain: always returns exactly `row_count`
/// entries.
pub fn generate_sequence(mode: &SequenceMode, row_count: u32, tiers: &[f64]) -> Vec<f64> {
    let row_count = row_count as usize;
    match *mode {
        SequenceMode::Custom { start, step } => {
            (0..row_count).map(|i| round5(start + i as f64 * step)).collect()
        }
        SequenceMode::Default => {
            let mut prices: Vec<f64> = tiers.iter().copied().take(row_count).collect();
            let last = prices.last().copied().unwrap_or(0.0);
            for k in 1..=row_count.saturating_sub(tiers.len()) {
                prices.push(last + k as f64 * TIER_STEP);
            }
            prices
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_GAS_TIERS, LEGACY_GAS_TIERS, MAX_ROW_COUNT, MIN_ROW_COUNT};

    #[test]
    fn default_sequence_eight_rows() {
        let prices = generate_sequence(&SequenceMode::Default, 8, &DEFAULT_GAS_TIERS);
        assert_eq!(prices, vec![5.0, 10.0, 15.0, 25.0, 50.0, 75.0, 100.0, 125.0]);
    }

    #[test]
    fn legacy_tiers_continue_in_25_gwei_steps() {
        let prices = generate_sequence(&SequenceMode::Default, 6, &LEGACY_GAS_TIERS);
        assert_eq!(prices, vec![5.0, 15.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn custom_sequence_matches_start_and_step() {
        let prices = generate_sequence(&SequenceMode::custom(10.0, 15.0), 5, &DEFAULT_GAS_TIERS);
        assert_eq!(prices, vec![10.0, 25.0, 40.0, 55.0, 70.0]);
    }

    #[test]
    fn custom_sequence_rounds_away_float_drift() {
        let prices = generate_sequence(&SequenceMode::custom(0.1, 0.2), 5, &DEFAULT_GAS_TIERS);
        assert_eq!(prices, vec![0.1, 0.3, 0.5, 0.7, 0.9]);
    }

    #[test]
    fn row_count_is_exact_and_ordered() {
        for row_count in MIN_ROW_COUNT..=MAX_ROW_COUNT {
            let default = generate_sequence(&SequenceMode::Default, row_count, &DEFAULT_GAS_TIERS);
            assert_eq!(default.len(), row_count as usize);
            assert!(default.windows(2).all(|w| w[0] <= w[1]));

            let custom =
                generate_sequence(&SequenceMode::custom(1.5, 0.5), row_count, &DEFAULT_GAS_TIERS);
            assert_eq!(custom.len(), row_count as usize);
            assert!(custom.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn short_row_count_truncates_the_prefix() {
        // The clamped domain starts at 5 rows, but the generator itself stays
        // total below that.
        let prices = generate_sequence(&SequenceMode::Default, 3, &DEFAULT_GAS_TIERS);
        assert_eq!(prices, vec![5.0, 10.0, 15.0]);
    }
}
