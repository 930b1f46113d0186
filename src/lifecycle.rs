//! The request lifecycle around the premium engine.
//!
//! This module owns the state a caller (typically a form UI) observes while
//! a computation is in flight: `idle` before the first submission, `loading`
//! while one runs, then `succeeded` with a result or `failed` with a
//! user-facing message. A newer submission supersedes an older in-flight
//! one; the older completion is discarded when it finally arrives.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::calculation::PremiumEngine;
use crate::error::EngineError;
use crate::models::CalculationResult;
use crate::table::RateSource;

/// Where a computation currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputationStatus {
    /// No computation has been submitted yet.
    Idle,
    /// A computation is in flight.
    Loading,
    /// The latest computation produced a result.
    Succeeded,
    /// The latest computation failed; see the error message.
    Failed,
}

/// The state a caller observes for one calculator.
///
/// Mutated only through [`Calculator`] transitions. `result` and
/// `error_message` are mutually exclusive: a terminal state carries exactly
/// one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputationState {
    /// The salary text of the latest submission, echoed back.
    pub salary_text: String,
    /// The birth date text of the latest submission, echoed back.
    pub birth_date_text: String,
    /// The result of the latest successful computation.
    pub result: Option<CalculationResult>,
    /// Where the latest submission stands.
    pub status: ComputationStatus,
    /// The user-facing message of the latest failed computation.
    pub error_message: Option<String>,
}

impl Default for ComputationState {
    fn default() -> Self {
        Self {
            salary_text: String::new(),
            birth_date_text: String::new(),
            result: None,
            status: ComputationStatus::Idle,
            error_message: None,
        }
    }
}

/// The state machine wrapping a [`PremiumEngine`].
///
/// Cloning yields a handle to the same state, so a submission can run in a
/// spawned task while other handles observe it. Transitions are serialized
/// behind a mutex; each submission takes a monotonically increasing token
/// and only the holder of the latest token may apply a terminal transition,
/// which is what keeps a stale response from overwriting a newer request.
///
/// # Example
///
/// ```
/// use premium_engine::calculation::PremiumEngine;
/// use premium_engine::config::ConfigLoader;
/// use premium_engine::lifecycle::{Calculator, ComputationStatus};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let config = ConfigLoader::embedded().unwrap();
/// let reference_date = config.reference_date();
/// let calculator = Calculator::new(PremiumEngine::new(config.into_table(), reference_date));
///
/// let state = calculator.submit("300000", "1980-01-01").await;
/// assert_eq!(state.status, ComputationStatus::Succeeded);
/// # });
/// ```
#[derive(Debug)]
pub struct Calculator<S> {
    engine: Arc<PremiumEngine<S>>,
    state: Arc<Mutex<ComputationState>>,
    latest_token: Arc<AtomicU64>,
}

impl<S> Clone for Calculator<S> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            state: Arc::clone(&self.state),
            latest_token: Arc::clone(&self.latest_token),
        }
    }
}

impl<S: RateSource> Calculator<S> {
    /// Creates a calculator in the `idle` state.
    pub fn new(engine: PremiumEngine<S>) -> Self {
        Self {
            engine: Arc::new(engine),
            state: Arc::new(Mutex::new(ComputationState::default())),
            latest_token: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Returns a snapshot of the current state.
    pub async fn state(&self) -> ComputationState {
        self.state.lock().await.clone()
    }

    /// Submits a computation and drives it to a terminal state.
    ///
    /// Entering `loading` discards any prior result or error. If another
    /// submission arrives while this one is in flight, this one's outcome
    /// is discarded and the returned snapshot reflects whatever the newer
    /// submission has done with the state so far.
    pub async fn submit(&self, salary_text: &str, birth_date_text: &str) -> ComputationState {
        let token = self.latest_token.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.state.lock().await;
            *state = ComputationState {
                salary_text: salary_text.to_string(),
                birth_date_text: birth_date_text.to_string(),
                result: None,
                status: ComputationStatus::Loading,
                error_message: None,
            };
        }

        let outcome = self.engine.compute(salary_text, birth_date_text).await;
        self.apply(token, outcome).await
    }

    /// Applies a terminal transition if `token` is still the latest.
    async fn apply(
        &self,
        token: u64,
        outcome: Result<CalculationResult, EngineError>,
    ) -> ComputationState {
        let mut state = self.state.lock().await;

        if token != self.latest_token.load(Ordering::SeqCst) {
            debug!(token, "discarding superseded computation");
            return state.clone();
        }

        match outcome {
            Ok(result) => {
                info!(
                    salary = result.salary,
                    total_deduction = result.total_deduction,
                    "computation succeeded"
                );
                state.status = ComputationStatus::Succeeded;
                state.result = Some(result);
                state.error_message = None;
            }
            Err(err) => {
                // Data and transport failures are operator problems; keep
                // them apart from plain input rejections in the logs even
                // though the stored message is user-facing either way.
                if err.is_user_input() {
                    info!(error = %err, "computation rejected");
                } else {
                    error!(error = %err, "computation failed");
                }
                state.status = ComputationStatus::Failed;
                state.result = None;
                state.error_message = Some(err.user_message());
            }
        }

        state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::error::EngineResult;
    use crate::models::PremiumRates;
    use crate::table::EmbeddedRateTable;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    fn embedded_calculator() -> Calculator<EmbeddedRateTable> {
        let config = ConfigLoader::embedded().unwrap();
        let reference_date = config.reference_date();
        Calculator::new(PremiumEngine::new(config.into_table(), reference_date))
    }

    #[tokio::test]
    async fn test_starts_idle_and_empty() {
        let calculator = embedded_calculator();
        let state = calculator.state().await;
        assert_eq!(state.status, ComputationStatus::Idle);
        assert!(state.result.is_none());
        assert!(state.error_message.is_none());
    }

    #[tokio::test]
    async fn test_successful_submission_reaches_succeeded() {
        let calculator = embedded_calculator();
        let state = calculator.submit("300000", "1980-01-01").await;

        assert_eq!(state.status, ComputationStatus::Succeeded);
        assert_eq!(state.salary_text, "300000");
        let result = state.result.expect("result should be present");
        assert_eq!(result.take_home_pay, 255285);
        assert!(state.error_message.is_none());
    }

    #[tokio::test]
    async fn test_failed_submission_stores_user_message() {
        let calculator = embedded_calculator();
        let state = calculator.submit("-5", "1980-01-01").await;

        assert_eq!(state.status, ComputationStatus::Failed);
        assert!(state.result.is_none());
        assert_eq!(
            state.error_message.as_deref(),
            Some("Enter a valid monthly salary.")
        );
    }

    #[tokio::test]
    async fn test_resubmission_clears_prior_result() {
        let calculator = embedded_calculator();

        let first = calculator.submit("300000", "1980-01-01").await;
        assert!(first.result.is_some());

        let second = calculator.submit("300000", "").await;
        assert_eq!(second.status, ComputationStatus::Failed);
        assert!(second.result.is_none());
        assert_eq!(second.error_message.as_deref(), Some("Enter your birth date."));
    }

    #[tokio::test]
    async fn test_failure_then_success_clears_error() {
        let calculator = embedded_calculator();

        calculator.submit("abc", "1980-01-01").await;
        let state = calculator.submit("300000", "1980-01-01").await;

        assert_eq!(state.status, ComputationStatus::Succeeded);
        assert!(state.error_message.is_none());
    }

    /// A rate source whose first lookup parks until released, so a test can
    /// hold one submission in flight while a newer one completes.
    struct GatedSource {
        table: EmbeddedRateTable,
        entered: Arc<Notify>,
        release: Arc<Notify>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RateSource for GatedSource {
        async fn lookup(&self, salary: i64, age: i32) -> EngineResult<PremiumRates> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                self.entered.notify_one();
                self.release.notified().await;
            }
            self.table.lookup(salary, age).await
        }
    }

    #[tokio::test]
    async fn test_stale_completion_is_discarded() {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let config = ConfigLoader::embedded().unwrap();
        let reference_date = config.reference_date();
        let source = Arc::new(GatedSource {
            table: config.into_table(),
            entered: Arc::clone(&entered),
            release: Arc::clone(&release),
            calls: AtomicUsize::new(0),
        });
        let calculator = Calculator::new(PremiumEngine::new(source, reference_date));

        // First submission parks inside the rate source.
        let first = {
            let calculator = calculator.clone();
            tokio::spawn(async move { calculator.submit("300000", "1980-01-01").await })
        };
        entered.notified().await;
        assert_eq!(calculator.state().await.status, ComputationStatus::Loading);

        // Second submission completes while the first is still in flight.
        let second = calculator.submit("190000", "1995-01-01").await;
        assert_eq!(second.status, ComputationStatus::Succeeded);

        // Now let the first one finish; its completion must be discarded.
        release.notify_one();
        first.await.expect("first submission task panicked");

        let state = calculator.state().await;
        assert_eq!(state.status, ComputationStatus::Succeeded);
        assert_eq!(state.salary_text, "190000");
        let result = state.result.expect("latest result should survive");
        assert_eq!(result.salary, 190000);
        assert_eq!(result.long_term_care_insurance, 0);
    }

    #[test]
    fn test_status_serialization_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&ComputationStatus::Idle).unwrap(),
            "\"idle\""
        );
        assert_eq!(
            serde_json::to_string(&ComputationStatus::Loading).unwrap(),
            "\"loading\""
        );
        assert_eq!(
            serde_json::to_string(&ComputationStatus::Succeeded).unwrap(),
            "\"succeeded\""
        );
        assert_eq!(
            serde_json::to_string(&ComputationStatus::Failed).unwrap(),
            "\"failed\""
        );
    }
}
