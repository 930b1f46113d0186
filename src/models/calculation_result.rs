//! Calculation result model.
//!
//! This module contains the [`CalculationResult`] value object produced by a
//! successful premium computation.

use serde::{Deserialize, Serialize};

/// The complete result of one premium computation.
///
/// All amounts are whole yen. The totals are derived in
/// [`CalculationResult::assemble`] so that the invariants
/// `total_deduction == health + care + pension` and
/// `take_home_pay == salary - total_deduction` hold by construction;
/// downstream code must never recompute them.
///
/// # Example
///
/// ```
/// use premium_engine::models::CalculationResult;
///
/// let result = CalculationResult::assemble(300000, 300000, 14880, 2385, 27450);
/// assert_eq!(result.total_deduction, 44715);
/// assert_eq!(result.take_home_pay, 255285);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The gross monthly salary the computation was run for, echoed back.
    pub salary: i64,
    /// The standard remuneration the premiums were based on, or `0` when
    /// the rate source does not report it.
    pub standard_remuneration: i64,
    /// Employee-share health premium, care surcharge excluded.
    pub health_insurance: i64,
    /// Employee-share long-term-care surcharge; `0` outside the statutory
    /// age window.
    pub long_term_care_insurance: i64,
    /// Employee-share employees' pension premium.
    pub pension_insurance: i64,
    /// Sum of the three premium components.
    pub total_deduction: i64,
    /// Salary minus the total deduction.
    pub take_home_pay: i64,
}

impl CalculationResult {
    /// Builds a result from the three rounded premium components, deriving
    /// the totals.
    pub fn assemble(
        salary: i64,
        standard_remuneration: i64,
        health_insurance: i64,
        long_term_care_insurance: i64,
        pension_insurance: i64,
    ) -> Self {
        let total_deduction = health_insurance + long_term_care_insurance + pension_insurance;
        Self {
            salary,
            standard_remuneration,
            health_insurance,
            long_term_care_insurance,
            pension_insurance,
            total_deduction,
            take_home_pay: salary - total_deduction,
        }
    }
}
