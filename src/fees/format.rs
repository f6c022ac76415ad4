//! Gwei display formatting.

use crate::constants::DEFAULT_MID_GWEI_DECIMALS;

/// Formats a gwei value with the canonical precision thresholds.
///
/// See [`format_gwei_with`].
pub fn format_gwei(value: f64) -> String {
    format_gwei_with(value, DEFAULT_MID_GWEI_DECIMALS)
}

/// Formats a gwei value for display.
///
/// The precision scales with magnitude so that sub-gwei prices stay readable
/// without drowning round numbers in zeros:
///
/// - exact integers render without a decimal point,
/// - values below 0.01 get 5 decimal places,
/// - values below 1 get 3,
/// - values below 10 get `mid_decimals` (canonically 2),
/// - larger values snap to the nearest integer when within 0.001 of it,
///   otherwise 2 decimal places.
pub fn format_gwei_with(value: f64, mid_decimals: u8) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else if value < 0.01 {
        format!("{value:.5}")
    } else if value < 1.0 {
        format!("{value:.3}")
    } else if value < 10.0 {
        format!("{value:.prec$}", prec = mid_decimals as usize)
    } else if (value.round() - value).abs() < 0.001 {
        format!("{:.0}", value.round())
    } else {
        format!("{value:.2}")
    }
}
