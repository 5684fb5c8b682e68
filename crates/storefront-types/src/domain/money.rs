use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount with two decimals, rounding half away from zero.
///
/// Rounding starts from the shortest decimal form of `value`, so `0.125`
/// prints as `0.13` and `1.005` as `1.01`.
pub fn format_amount(value: f64) -> String {
    match Decimal::from_str(&value.to_string()) {
        Ok(d) => {
            let rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.2}")
        }
        // Beyond Decimal's range; cents are lost in f64 there anyway.
        Err(_) => format!("{value:.2}"),
    }
}
