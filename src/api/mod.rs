//! HTTP API module for the rate service.
//!
//! This module provides the REST endpoint that serves premium figures from
//! the bracket table, mirroring what [`crate::table::RemoteRateTable`]
//! consumes on the client side.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{SOCIAL_INSURANCE_QUERY_PATH, create_router};
pub use request::SocialInsuranceParams;
pub use response::{ErrorResponse, InsuranceCost, SocialInsuranceDto};
pub use state::AppState;
