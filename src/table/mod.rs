//! Premium bracket lookup sources.
//!
//! The [`RateSource`] trait is the seam between the calculation engine and
//! wherever the bracket data lives. [`EmbeddedRateTable`] resolves brackets
//! from the schedule compiled into (or loaded alongside) the binary;
//! [`RemoteRateTable`] resolves them through the rate service. The engine is
//! generic over the source, so the two are interchangeable.

mod remote;

pub use remote::{DEFAULT_QUERY_TIMEOUT, RemoteRateTable};

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{EngineError, EngineResult};
use crate::models::{PremiumBracket, PremiumRates};

/// A source of premium figures for a given salary.
///
/// `age` is part of the contract because the remote query protocol requires
/// it; sources that resolve whole brackets locally ignore it. The engine
/// applies the statutory age window itself regardless of what the source
/// did with the age.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Resolves the premium figures for a salary.
    ///
    /// # Errors
    ///
    /// Returns `RateNotFound` when no bracket covers the salary and
    /// `Transport` when a remote source cannot be reached.
    async fn lookup(&self, salary: i64, age: i32) -> EngineResult<PremiumRates>;
}

#[async_trait]
impl<S: RateSource + ?Sized> RateSource for Arc<S> {
    async fn lookup(&self, salary: i64, age: i32) -> EngineResult<PremiumRates> {
        (**self).lookup(salary, age).await
    }
}

/// An in-memory, validated bracket table.
///
/// Construction enforces the schedule invariants: bands are ascending,
/// contiguous and non-overlapping, and the care-inclusive premium is never
/// below the care-exclusive one. After that, any salary at or above the
/// first band's floor resolves to exactly one bracket.
///
/// # Example
///
/// ```
/// use premium_engine::config::ConfigLoader;
///
/// let table = ConfigLoader::embedded().unwrap().into_table();
/// let bracket = table.find(300000).unwrap();
/// assert_eq!(bracket.standard_remuneration, 300000);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedRateTable {
    brackets: Vec<PremiumBracket>,
}

impl EmbeddedRateTable {
    /// Validates the rows and builds a table.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTable` naming the offending grade when a row has an
    /// empty or inverted band, overlaps or leaves a gap against its
    /// predecessor, or carries a care-inclusive premium below the
    /// care-exclusive one.
    pub fn new(brackets: Vec<PremiumBracket>) -> EngineResult<Self> {
        if brackets.is_empty() {
            return Err(EngineError::InvalidTable {
                message: "bracket table is empty".to_string(),
            });
        }

        for bracket in &brackets {
            if bracket.salary_min >= bracket.salary_max {
                return Err(EngineError::InvalidTable {
                    message: format!(
                        "grade {} has an empty salary band [{}, {})",
                        bracket.grade, bracket.salary_min, bracket.salary_max
                    ),
                });
            }
            if bracket.health_with_care < bracket.health_no_care {
                return Err(EngineError::InvalidTable {
                    message: format!(
                        "grade {} care-inclusive premium is below the care-exclusive one",
                        bracket.grade
                    ),
                });
            }
        }

        for pair in brackets.windows(2) {
            if pair[0].salary_max != pair[1].salary_min {
                return Err(EngineError::InvalidTable {
                    message: format!(
                        "grades {} and {} are not contiguous",
                        pair[0].grade, pair[1].grade
                    ),
                });
            }
        }

        Ok(Self { brackets })
    }

    /// Returns the rows, ordered ascending by salary band.
    pub fn brackets(&self) -> &[PremiumBracket] {
        &self.brackets
    }

    /// Finds the bracket whose band contains the salary.
    ///
    /// # Errors
    ///
    /// Returns `RateNotFound` when the salary falls outside every band —
    /// for a well-formed schedule that means a salary below the first
    /// band's floor, which is a data error rather than a user error.
    pub fn find(&self, salary: i64) -> EngineResult<&PremiumBracket> {
        self.brackets
            .iter()
            .find(|bracket| bracket.contains(salary))
            .ok_or(EngineError::RateNotFound { salary })
    }
}

#[async_trait]
impl RateSource for EmbeddedRateTable {
    async fn lookup(&self, salary: i64, _age: i32) -> EngineResult<PremiumRates> {
        self.find(salary).map(PremiumBracket::rates)
    }
}
