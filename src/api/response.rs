//! Response types for the rate service API.
//!
//! This module defines the wire shapes of the query response and the
//! uniform error body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// One side's share of the three premium components, in fractional yen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceCost {
    /// Health premium, care surcharge excluded.
    pub health_cost_with_no_care: Decimal,
    /// Long-term-care surcharge; zero below the care age.
    pub care_cost: Decimal,
    /// Employees' pension premium.
    pub pension: Decimal,
}

/// The response body of `GET /socialInsuranceQuery`.
///
/// Employee and employer carry the premiums half each, so the two sides
/// mirror one another; the engine only consumes the employee side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialInsuranceDto {
    /// The employee's share.
    pub employee_cost: InsuranceCost,
    /// The employer's share.
    pub employer_cost: InsuranceCost,
}

/// The uniform error body returned for any failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// When the error was produced.
    pub timestamp: DateTime<Utc>,
    /// The HTTP status code, duplicated into the body.
    pub status: u16,
    /// The status reason phrase.
    pub error: String,
    /// A description of what went wrong.
    pub message: String,
    /// The request path that failed.
    pub path: String,
}

impl ErrorResponse {
    /// Builds an error body for a status code and message.
    pub fn new(status: StatusCode, message: impl Into<String>, path: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: message.into(),
            path: path.to_string(),
        }
    }
}

/// An error body paired with its HTTP status.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub body: ErrorResponse,
}

impl ApiErrorResponse {
    /// Builds a 400 response for a rejected request.
    pub fn bad_request(message: impl Into<String>, path: &str) -> Self {
        let status = StatusCode::BAD_REQUEST;
        Self {
            status,
            body: ErrorResponse::new(status, message, path),
        }
    }

    /// Maps an engine failure onto a status and error body.
    ///
    /// A bracket miss is the caller's lookup failing (404); anything else
    /// that escapes the handler is a server-side problem (500).
    pub fn from_error(error: &EngineError, path: &str) -> Self {
        let status = match error {
            EngineError::RateNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            body: ErrorResponse::new(status, error.to_string(), path),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
