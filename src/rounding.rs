use rust_decimal::Decimal;

use crate::decimal::Money;

/// Split a real-valued total into `n` whole-unit parts that sum exactly to
/// the rounded total.
///
/// All slots get the rounded equal share; the last slot absorbs the
/// remainder, so no currency leaks or is fabricated by rounding.
pub fn distribute(total: Decimal, n: u32) -> Vec<Money> {
    if n == 0 {
        // degenerate guard, never reached from a validated context
        return vec![Money::ZERO];
    }

    let base = Money::from_decimal(total / Decimal::from(n));
    let mut parts = vec![base; n as usize];

    let target = Money::from_decimal(total);
    let filled: Money = parts.iter().copied().sum();
    let diff = target - filled;

    if let Some(last) = parts.last_mut() {
        *last += diff;
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn conserved(total: Decimal, n: u32) {
        let parts = distribute(total, n);
        let sum: Money = parts.iter().copied().sum();
        assert_eq!(sum, Money::from_decimal(total), "total {} over {}", total, n);
    }

    #[test]
    fn test_conservation() {
        conserved(dec!(1_000_000), 3);
        conserved(dec!(1_000_000), 7);
        conserved(dec!(100), 1);
        conserved(dec!(0.4), 3);
        conserved(dec!(99999.5), 4);
        conserved(dec!(-1234.56), 5);
    }

    #[test]
    fn test_last_slot_absorbs_remainder() {
        let parts = distribute(dec!(1_000_000), 3);
        assert_eq!(
            parts,
            vec![
                Money::from_major(333_333),
                Money::from_major(333_333),
                Money::from_major(333_334),
            ]
        );
    }

    #[test]
    fn test_zero_total() {
        let parts = distribute(dec!(0), 4);
        assert_eq!(parts, vec![Money::ZERO; 4]);
    }

    #[test]
    fn test_degenerate_count() {
        assert_eq!(distribute(dec!(500), 0), vec![Money::ZERO]);
    }

    #[test]
    fn test_single_slot_takes_rounded_total() {
        assert_eq!(distribute(dec!(1234.5), 1), vec![Money::from_major(1235)]);
    }
}
