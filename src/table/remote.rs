//! Remote premium bracket source.
//!
//! [`RemoteRateTable`] resolves premium figures by querying the rate
//! service instead of an in-memory table. The service is addressed as a
//! [`tower`] service handle (an [`axum::Router`]); in tests and single
//! process deployments that is the router itself, behind a listener it is
//! whatever the deployment mounts the router on.

use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use tracing::debug;

use crate::api::{ErrorResponse, SocialInsuranceDto};
use crate::error::{EngineError, EngineResult};
use crate::models::PremiumRates;

use super::RateSource;

/// Upper bound on a rate service round trip before it is reported as a
/// transport failure.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// A rate source backed by the rate service.
///
/// The wire format does not carry the standard remuneration, so results
/// from this source report it as `0`.
///
/// # Example
///
/// ```
/// use premium_engine::api::{AppState, create_router};
/// use premium_engine::config::ConfigLoader;
/// use premium_engine::table::RemoteRateTable;
///
/// let table = ConfigLoader::embedded().unwrap().into_table();
/// let remote = RemoteRateTable::new(create_router(AppState::new(table)));
/// # let _ = remote;
/// ```
#[derive(Debug, Clone)]
pub struct RemoteRateTable {
    service: Router,
    timeout: Duration,
}

impl RemoteRateTable {
    /// Creates a remote source with the default query timeout.
    pub fn new(service: Router) -> Self {
        Self::with_timeout(service, DEFAULT_QUERY_TIMEOUT)
    }

    /// Creates a remote source with an explicit query timeout.
    pub fn with_timeout(service: Router, timeout: Duration) -> Self {
        Self { service, timeout }
    }
}

#[async_trait]
impl RateSource for RemoteRateTable {
    async fn lookup(&self, salary: i64, age: i32) -> EngineResult<PremiumRates> {
        let uri = format!("/socialInsuranceQuery?monthlySalary={salary}&age={age}");
        debug!(uri = %uri, "querying rate service");

        let request =
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .map_err(|e| EngineError::Transport {
                    message: e.to_string(),
                })?;

        let response = tokio::time::timeout(self.timeout, self.service.clone().oneshot(request))
            .await
            .map_err(|_| EngineError::Transport {
                message: format!("request timed out after {} ms", self.timeout.as_millis()),
            })?
            .map_err(|e| EngineError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| EngineError::Transport {
                message: e.to_string(),
            })?;

        if status == StatusCode::NOT_FOUND {
            return Err(EngineError::RateNotFound { salary });
        }
        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorResponse>(&bytes)
                .map(|body| body.message)
                .unwrap_or_else(|_| status.to_string());
            return Err(EngineError::Transport { message });
        }

        let dto: SocialInsuranceDto =
            serde_json::from_slice(&bytes).map_err(|e| EngineError::Transport {
                message: format!("malformed rate service response: {e}"),
            })?;

        let employee = dto.employee_cost;
        Ok(PremiumRates {
            // Not carried on the wire; reported as zero by this variant.
            standard_remuneration: 0,
            health_no_care: employee.health_cost_with_no_care,
            health_with_care: employee.health_cost_with_no_care + employee.care_cost,
            pension: employee.pension,
        })
    }
}
