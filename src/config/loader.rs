//! Schedule loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a premium
//! schedule from YAML files or from the copy embedded in the crate.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::table::EmbeddedRateTable;

use super::types::{BracketsConfig, ScheduleConfig};

/// Loads and provides access to a premium schedule.
///
/// The `ConfigLoader` reads YAML schedule files from a directory, validates
/// the bracket table against the published rates, and exposes the resulting
/// [`EmbeddedRateTable`].
///
/// # Directory Structure
///
/// ```text
/// config/kanagawa-2025-03/
/// ├── schedule.yaml   # Metadata, contribution rates, pension basis
/// └── brackets.yaml   # Standard-remuneration grade rows
/// ```
///
/// # Example
///
/// ```no_run
/// use premium_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/kanagawa-2025-03").unwrap();
/// println!("Schedule effective {}", loader.reference_date());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    schedule: ScheduleConfig,
    table: EmbeddedRateTable,
}

impl ConfigLoader {
    /// Loads a schedule from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` when a required file is missing,
    /// `ConfigParseError` when a file contains invalid YAML, and
    /// `InvalidTable` when the bracket rows violate a schedule invariant
    /// or disagree with the published rates.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let schedule_path = path.join("schedule.yaml");
        let schedule = Self::load_yaml::<ScheduleConfig>(&schedule_path)?;

        let brackets_path = path.join("brackets.yaml");
        let brackets = Self::load_yaml::<BracketsConfig>(&brackets_path)?;

        Self::assemble(schedule, brackets)
    }

    /// Builds the loader from the schedule copy embedded in the crate.
    ///
    /// This is the variant used when the engine ships with its table; it
    /// cannot hit the filesystem errors of [`ConfigLoader::load`] but still
    /// validates the data.
    pub fn embedded() -> EngineResult<Self> {
        const SCHEDULE: &str = include_str!("../../config/kanagawa-2025-03/schedule.yaml");
        const BRACKETS: &str = include_str!("../../config/kanagawa-2025-03/brackets.yaml");

        let schedule = Self::parse_yaml::<ScheduleConfig>("embedded schedule.yaml", SCHEDULE)?;
        let brackets = Self::parse_yaml::<BracketsConfig>("embedded brackets.yaml", BRACKETS)?;

        Self::assemble(schedule, brackets)
    }

    fn assemble(schedule: ScheduleConfig, brackets: BracketsConfig) -> EngineResult<Self> {
        let table = EmbeddedRateTable::new(brackets.brackets)?;
        verify_against_rates(&schedule, &table)?;
        Ok(Self { schedule, table })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Parses YAML content that is already in memory.
    fn parse_yaml<T: serde::de::DeserializeOwned>(name: &str, content: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: name.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the schedule metadata and rates.
    pub fn schedule(&self) -> &ScheduleConfig {
        &self.schedule
    }

    /// Returns the date all computations against this schedule are anchored
    /// to. Callers must not substitute wall-clock time.
    pub fn reference_date(&self) -> NaiveDate {
        self.schedule.effective_date
    }

    /// Returns the validated bracket table.
    pub fn table(&self) -> &EmbeddedRateTable {
        &self.table
    }

    /// Consumes the loader, yielding the bracket table.
    pub fn into_table(self) -> EmbeddedRateTable {
        self.table
    }
}

/// Checks every bracket row against the published contribution rates.
///
/// The schedule files carry the per-row premiums the insurer publishes; this
/// recomputes each one as `basis * rate / 2` and rejects any disagreement,
/// so a hand-edited row cannot silently drift from the rates.
fn verify_against_rates(schedule: &ScheduleConfig, table: &EmbeddedRateTable) -> EngineResult<()> {
    let basis_range = &schedule.pension_basis;
    if basis_range.min_standard_remuneration > basis_range.max_standard_remuneration {
        return Err(EngineError::InvalidTable {
            message: "pension basis range is inverted".to_string(),
        });
    }

    let two = Decimal::from(2);

    for bracket in table.brackets() {
        let basis = Decimal::from(bracket.standard_remuneration);
        let pension_basis = Decimal::from(bracket.standard_remuneration.clamp(
            schedule.pension_basis.min_standard_remuneration,
            schedule.pension_basis.max_standard_remuneration,
        ));

        let expected_no_care = basis * schedule.rates.health / two;
        let expected_with_care = basis * schedule.rates.health_with_care / two;
        let expected_pension = pension_basis * schedule.rates.pension / two;

        if bracket.health_no_care != expected_no_care
            || bracket.health_with_care != expected_with_care
            || bracket.pension != expected_pension
        {
            return Err(EngineError::InvalidTable {
                message: format!(
                    "grade {} premiums disagree with the published rates",
                    bracket.grade
                ),
            });
        }
    }

    Ok(())
}
