//! Premium bracket model.
//!
//! This module defines the [`PremiumBracket`] type, one row of the
//! standard-remuneration grade table, and the [`PremiumRates`] projection
//! handed to the calculation engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One standard-remuneration grade of the premium schedule.
///
/// A bracket maps the half-open salary band `[salary_min, salary_max)` to a
/// standard remuneration and the employee-share premiums computed from it.
/// Premium amounts are fractional yen; rounding to whole yen happens in the
/// engine, never in the table.
///
/// # Example
///
/// ```
/// use premium_engine::models::PremiumBracket;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let bracket = PremiumBracket {
///     grade: "22".to_string(),
///     standard_remuneration: 300000,
///     salary_min: 290000,
///     salary_max: 310000,
///     health_no_care: Decimal::from_str("14880.0").unwrap(),
///     health_with_care: Decimal::from_str("17265.0").unwrap(),
///     pension: Decimal::from_str("27450.0").unwrap(),
/// };
/// assert!(bracket.contains(300000));
/// assert!(!bracket.contains(310000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumBracket {
    /// The grade label from the published schedule. Not used computationally,
    /// retained for traceability.
    pub grade: String,
    /// The standard remuneration in yen used as the premium basis.
    pub standard_remuneration: i64,
    /// Inclusive lower salary bound of the band, in yen.
    pub salary_min: i64,
    /// Exclusive upper salary bound of the band, in yen. The last grade uses
    /// a sentinel large enough to cover any salary.
    pub salary_max: i64,
    /// Employee-share health premium without the long-term-care surcharge.
    pub health_no_care: Decimal,
    /// Employee-share health premium including the long-term-care surcharge.
    pub health_with_care: Decimal,
    /// Employee-share employees' pension premium.
    pub pension: Decimal,
}

impl PremiumBracket {
    /// Returns true when the salary falls inside `[salary_min, salary_max)`.
    pub fn contains(&self, salary: i64) -> bool {
        salary >= self.salary_min && salary < self.salary_max
    }

    /// Projects the bracket onto the fields the engine consumes.
    pub fn rates(&self) -> PremiumRates {
        PremiumRates {
            standard_remuneration: self.standard_remuneration,
            health_no_care: self.health_no_care,
            health_with_care: self.health_with_care,
            pension: self.pension,
        }
    }
}

/// The raw premium figures resolved for one salary.
///
/// This is what a rate source returns to the engine: the embedded table
/// projects a bracket, the remote source reassembles it from the wire
/// response. A remote source that does not carry the standard remuneration
/// reports it as `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumRates {
    /// The standard remuneration in yen, or `0` when the source omits it.
    pub standard_remuneration: i64,
    /// Employee-share health premium, care surcharge excluded.
    pub health_no_care: Decimal,
    /// Employee-share health premium, care surcharge included.
    pub health_with_care: Decimal,
    /// Employee-share pension premium.
    pub pension: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_bracket() -> PremiumBracket {
        PremiumBracket {
            grade: "22".to_string(),
            standard_remuneration: 300000,
            salary_min: 290000,
            salary_max: 310000,
            health_no_care: dec("14880.0"),
            health_with_care: dec("17265.0"),
            pension: dec("27450.0"),
        }
    }

    #[test]
    fn test_contains_lower_bound_inclusive() {
        assert!(sample_bracket().contains(290000));
    }

    #[test]
    fn test_contains_upper_bound_exclusive() {
        assert!(!sample_bracket().contains(310000));
        assert!(sample_bracket().contains(309999));
    }

    #[test]
    fn test_rates_projection_copies_all_fields() {
        let bracket = sample_bracket();
        let rates = bracket.rates();
        assert_eq!(rates.standard_remuneration, 300000);
        assert_eq!(rates.health_no_care, dec("14880.0"));
        assert_eq!(rates.health_with_care, dec("17265.0"));
        assert_eq!(rates.pension, dec("27450.0"));
    }

    #[test]
    fn test_bracket_deserialization_from_yaml() {
        let yaml = r#"
grade: "5"
standard_remuneration: 98000
salary_min: 93000
salary_max: 101000
health_no_care: "4860.8"
health_with_care: "5639.9"
pension: "8967.0"
"#;
        let bracket: PremiumBracket = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(bracket.grade, "5");
        assert_eq!(bracket.standard_remuneration, 98000);
        assert_eq!(bracket.health_no_care, dec("4860.8"));
        assert_eq!(bracket.health_with_care, dec("5639.9"));
        assert_eq!(bracket.pension, dec("8967.0"));
    }

    #[test]
    fn test_bracket_serde_round_trip() {
        let bracket = sample_bracket();
        let json = serde_json::to_string(&bracket).unwrap();
        let back: PremiumBracket = serde_json::from_str(&json).unwrap();
        assert_eq!(bracket, back);
    }
}
