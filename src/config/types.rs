//! Configuration types for the premium schedule.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML schedule files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::PremiumBracket;

/// The published contribution rates the bracket premiums are derived from.
///
/// Each rate is the combined (employee plus employer) percentage expressed
/// as a fraction; the employee share is half of it.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributionRates {
    /// Health insurance rate, care surcharge excluded.
    pub health: Decimal,
    /// Health insurance rate including the long-term-care surcharge.
    pub health_with_care: Decimal,
    /// Employees' pension rate.
    pub pension: Decimal,
}

/// The pension scheme's own standard-remuneration grade range.
///
/// Pension premiums use the health grade's standard remuneration clamped to
/// this range.
#[derive(Debug, Clone, Deserialize)]
pub struct PensionBasis {
    /// Lowest standard remuneration the pension scheme recognises.
    pub min_standard_remuneration: i64,
    /// Highest standard remuneration the pension scheme recognises.
    pub max_standard_remuneration: i64,
}

/// Metadata and rates of a premium schedule, from `schedule.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// The human-readable name of the schedule.
    pub name: String,
    /// The insurer branch the schedule belongs to (e.g., "Kanagawa").
    pub branch: String,
    /// The date the schedule takes effect. Age and bracket lookups are
    /// evaluated against this date, never against the wall clock.
    pub effective_date: NaiveDate,
    /// URL to the official schedule publication.
    pub source_url: String,
    /// The published contribution rates.
    pub rates: ContributionRates,
    /// The pension basis clamp range.
    pub pension_basis: PensionBasis,
}

/// Bracket table file structure, from `brackets.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct BracketsConfig {
    /// The grade rows, ordered ascending by salary band.
    pub brackets: Vec<PremiumBracket>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_schedule_config_deserialization() {
        let yaml = r#"
name: "Test schedule"
branch: "Kanagawa"
effective_date: 2025-03-01
source_url: "https://example.com"
rates:
  health: "0.0992"
  health_with_care: "0.1151"
  pension: "0.1830"
pension_basis:
  min_standard_remuneration: 88000
  max_standard_remuneration: 650000
"#;
        let config: ScheduleConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.branch, "Kanagawa");
        assert_eq!(
            config.effective_date,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        assert_eq!(config.rates.health, Decimal::from_str("0.0992").unwrap());
        assert_eq!(config.pension_basis.max_standard_remuneration, 650000);
    }

    #[test]
    fn test_brackets_config_deserialization() {
        let yaml = r#"
brackets:
  - grade: "1"
    standard_remuneration: 58000
    salary_min: 0
    salary_max: 63000
    health_no_care: "2876.8"
    health_with_care: "3337.9"
    pension: "8052.0"
"#;
        let config: BracketsConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.brackets.len(), 1);
        assert_eq!(config.brackets[0].grade, "1");
    }
}
