//! Core data models for the Premium Computation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod bracket;
mod calculation_result;

pub use bracket::{PremiumBracket, PremiumRates};
pub use calculation_result::CalculationResult;
