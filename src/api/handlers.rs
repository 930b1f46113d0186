//! HTTP request handlers for the rate service.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
    routing::get,
};
use rust_decimal::Decimal;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::calculation::CARE_AGE_MIN;

use super::request::SocialInsuranceParams;
use super::response::{ApiErrorResponse, InsuranceCost, SocialInsuranceDto};
use super::state::AppState;

/// The path of the social insurance query endpoint.
pub const SOCIAL_INSURANCE_QUERY_PATH: &str = "/socialInsuranceQuery";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(SOCIAL_INSURANCE_QUERY_PATH, get(social_insurance_query))
        .with_state(state)
}

/// Handler for `GET /socialInsuranceQuery?monthlySalary=..&age=..`.
///
/// Resolves the bracket for the salary and returns the employee and
/// employer shares of the three premium components, pre-rounding. The
/// handler gates the care surcharge at the lower care age only; the upper
/// bound of the statutory window is the computation engine's policy.
async fn social_insurance_query(
    State(state): State<AppState>,
    params: Result<Query<SocialInsuranceParams>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => {
            let message = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %message,
                "rejecting malformed query"
            );
            return ApiErrorResponse::bad_request(message, SOCIAL_INSURANCE_QUERY_PATH)
                .into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        monthly_salary = params.monthly_salary,
        age = params.age,
        "processing social insurance query"
    );

    match state.table().find(params.monthly_salary) {
        Ok(bracket) => {
            let care_cost = if params.age >= CARE_AGE_MIN {
                bracket.health_with_care - bracket.health_no_care
            } else {
                Decimal::ZERO
            };
            let employee_cost = InsuranceCost {
                health_cost_with_no_care: bracket.health_no_care,
                care_cost,
                pension: bracket.pension,
            };
            // The employer carries the same half of every component.
            let dto = SocialInsuranceDto {
                employer_cost: employee_cost.clone(),
                employee_cost,
            };
            Json(dto).into_response()
        }
        Err(err) => {
            error!(
                correlation_id = %correlation_id,
                monthly_salary = params.monthly_salary,
                error = %err,
                "bracket lookup failed"
            );
            ApiErrorResponse::from_error(&err, SOCIAL_INSURANCE_QUERY_PATH).into_response()
        }
    }
}
