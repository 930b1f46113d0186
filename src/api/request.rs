//! Request types for the rate service API.

use serde::{Deserialize, Serialize};

/// Query parameters of `GET /socialInsuranceQuery`.
///
/// The wire format uses camelCase names, matching what the form client
/// sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialInsuranceParams {
    /// The gross monthly salary in yen.
    pub monthly_salary: i64,
    /// The age at the schedule's reference date.
    pub age: i32,
}
