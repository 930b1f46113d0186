//! The statutory premium rounding rule.

use rust_decimal::Decimal;

/// Rounds a raw fractional-yen premium to whole yen under the statutory
/// rule: a fractional part of 0.5 yen or less is dropped, anything above
/// 0.5 rounds up.
///
/// This is not round-half-up — exactly 0.5 rounds *down*. The comparison
/// is exact `Decimal` arithmetic, so the boundary never drifts the way a
/// floating-point rule would.
///
/// # Example
///
/// ```
/// use premium_engine::calculation::round_premium;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let raw = Decimal::from_str("1510.5").unwrap();
/// assert_eq!(round_premium(raw), Decimal::from(1510));
/// ```
pub fn round_premium(raw: Decimal) -> Decimal {
    let integer = raw.floor();
    let fraction = raw - integer;
    if fraction <= Decimal::new(5, 1) {
        integer
    } else {
        integer + Decimal::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_half_rounds_down() {
        assert_eq!(round_premium(dec("10.50")), dec("10"));
        assert_eq!(round_premium(dec("0.50")), dec("0"));
    }

    #[test]
    fn test_just_above_half_rounds_up() {
        assert_eq!(round_premium(dec("10.51")), dec("11"));
    }

    #[test]
    fn test_whole_number_is_unchanged() {
        assert_eq!(round_premium(dec("10.00")), dec("10"));
        assert_eq!(round_premium(dec("0")), dec("0"));
    }

    #[test]
    fn test_schedule_values() {
        // Grade 1 health premium and grade 16 care surcharge.
        assert_eq!(round_premium(dec("2876.8")), dec("2877"));
        assert_eq!(round_premium(dec("1510.5")), dec("1510"));
    }

    #[test]
    fn test_negative_adjacent_values_follow_the_literal_rule() {
        // floor(-1.2) = -2 with a fractional part of 0.8, which rounds up.
        assert_eq!(round_premium(dec("-1.2")), dec("-1"));
        // floor(-1.5) = -2 with a fractional part of 0.5, which drops.
        assert_eq!(round_premium(dec("-1.5")), dec("-2"));
    }
}
