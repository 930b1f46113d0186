//! Configuration loading and management for the Premium Computation Engine.
//!
//! This module provides functionality to load a premium schedule from YAML
//! files, including schedule metadata, the published contribution rates, and
//! the standard-remuneration bracket table.
//!
//! # Example
//!
//! ```
//! use premium_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::embedded().unwrap();
//! println!("Loaded schedule: {}", config.schedule().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BracketsConfig, ContributionRates, PensionBasis, ScheduleConfig};
