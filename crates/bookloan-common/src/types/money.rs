//! Amount rendering
//!
//! Two conventions are in use on the console: per-book lines show the
//! amount truncated toward zero, totals show it rounded to two decimals.

use rust_decimal::{Decimal, RoundingStrategy};

/// Amount truncated toward zero, e.g. `10989.9` -> `10989`
pub fn whole(amount: Decimal) -> String {
    amount.trunc().normalize().to_string()
}

/// Amount rounded half away from zero to two decimals, e.g. `3596.8` -> `3596.80`
pub fn fixed2(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Amount without trailing fractional zeros, e.g. `10989.00` -> `10989`
pub fn plain(amount: Decimal) -> String {
    amount.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_whole_truncates() {
        assert_eq!(whole(dec!(10989.00)), "10989");
        assert_eq!(whole(dec!(3596.8)), "3596");
        assert_eq!(whole(dec!(-0.5)), "0");
    }

    #[test]
    fn test_fixed2_pads_and_rounds() {
        assert_eq!(fixed2(dec!(3596.8)), "3596.80");
        assert_eq!(fixed2(dec!(32371.2)), "32371.20");
        assert_eq!(fixed2(dec!(0)), "0.00");
        assert_eq!(fixed2(dec!(1.005)), "1.01");
    }

    #[test]
    fn test_plain() {
        assert_eq!(plain(dec!(100.50)), "100.5");
        assert_eq!(plain(dec!(12990)), "12990");
    }
}
