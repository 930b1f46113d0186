//! The premium computation engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::CalculationResult;
use crate::table::RateSource;

use super::age::age_at;
use super::rounding::round_premium;

/// Youngest age (inclusive) at which the long-term-care surcharge applies.
pub const CARE_AGE_MIN: i32 = 40;
/// Oldest age (inclusive) at which the long-term-care surcharge applies.
pub const CARE_AGE_MAX: i32 = 64;

/// Computes premium deductions and take-home pay from raw form inputs.
///
/// The engine is a pure function of its inputs, the rate source and the
/// configured reference date: it validates the two input strings, resolves
/// the age and the long-term-care window, asks the source for the premium
/// figures, applies the statutory rounding to each component and assembles
/// the result. It holds no mutable state and is safe to share across tasks.
///
/// # Example
///
/// ```
/// use premium_engine::calculation::PremiumEngine;
/// use premium_engine::config::ConfigLoader;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let config = ConfigLoader::embedded().unwrap();
/// let reference_date = config.reference_date();
/// let engine = PremiumEngine::new(config.into_table(), reference_date);
///
/// let result = engine.compute("300000", "1980-01-01").await.unwrap();
/// assert_eq!(result.take_home_pay, 300000 - result.total_deduction);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct PremiumEngine<S> {
    source: S,
    reference_date: NaiveDate,
}

impl<S: RateSource> PremiumEngine<S> {
    /// Creates an engine over a rate source, anchored to the schedule's
    /// reference date.
    pub fn new(source: S, reference_date: NaiveDate) -> Self {
        Self {
            source,
            reference_date,
        }
    }

    /// Returns the date ages and brackets are evaluated against.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Runs one premium computation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSalary`, `MissingBirthDate` or `InvalidBirthDate`
    /// for rejected inputs, `RateNotFound` for a bracket table gap, and
    /// `Transport` when a remote source fails.
    pub async fn compute(
        &self,
        salary_text: &str,
        birth_date_text: &str,
    ) -> EngineResult<CalculationResult> {
        let salary = parse_salary(salary_text)?;
        let birth_date = parse_birth_date(birth_date_text)?;

        let age = age_at(birth_date, self.reference_date);
        let care_applicable = (CARE_AGE_MIN..=CARE_AGE_MAX).contains(&age);
        debug!(salary, age, care_applicable, "computing premiums");

        let rates = self.source.lookup(salary, age).await?;

        let health_raw = rates.health_no_care;
        let care_raw = if care_applicable {
            rates.health_with_care - rates.health_no_care
        } else {
            Decimal::ZERO
        };
        let pension_raw = rates.pension;

        Ok(CalculationResult::assemble(
            salary,
            rates.standard_remuneration,
            to_yen(round_premium(health_raw))?,
            to_yen(round_premium(care_raw))?,
            to_yen(round_premium(pension_raw))?,
        ))
    }
}

/// Parses a salary input string into positive whole yen.
fn parse_salary(text: &str) -> EngineResult<i64> {
    let salary = text
        .trim()
        .parse::<i64>()
        .map_err(|_| EngineError::InvalidSalary {
            input: text.to_string(),
        })?;
    if salary <= 0 {
        return Err(EngineError::InvalidSalary {
            input: text.to_string(),
        });
    }
    Ok(salary)
}

/// Parses a birth date input string in `YYYY-MM-DD` form.
fn parse_birth_date(text: &str) -> EngineResult<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EngineError::MissingBirthDate);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| EngineError::InvalidBirthDate {
        input: trimmed.to_string(),
    })
}

fn to_yen(amount: Decimal) -> EngineResult<i64> {
    amount.to_i64().ok_or_else(|| EngineError::Unknown {
        message: format!("premium amount {amount} does not fit in whole yen"),
    })
}
