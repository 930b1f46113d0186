//! Error types for the Premium Computation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during premium computation.

use thiserror::Error;

/// The main error type for the Premium Computation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use premium_engine::error::EngineError;
///
/// let error = EngineError::RateNotFound { salary: 123 };
/// assert_eq!(
///     error.to_string(),
///     "No premium bracket covers monthly salary 123"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The bracket table violates a schedule invariant.
    #[error("Invalid premium bracket table: {message}")]
    InvalidTable {
        /// A description of the violated invariant.
        message: String,
    },

    /// The salary input was not a positive integer amount of yen.
    #[error("Invalid monthly salary: '{input}'")]
    InvalidSalary {
        /// The raw input that was rejected.
        input: String,
    },

    /// The birth date input was empty.
    #[error("Birth date is missing")]
    MissingBirthDate,

    /// The birth date input could not be parsed as a calendar date.
    #[error("Invalid birth date: '{input}'")]
    InvalidBirthDate {
        /// The raw input that was rejected.
        input: String,
    },

    /// No bracket in the table covers the given salary.
    ///
    /// A well-formed schedule covers every non-negative salary, so this is
    /// a data error rather than a user-input error.
    #[error("No premium bracket covers monthly salary {salary}")]
    RateNotFound {
        /// The salary that missed every bracket.
        salary: i64,
    },

    /// The remote rate service could not be reached or timed out.
    #[error("Rate service request failed: {message}")]
    Transport {
        /// A description of the transport failure.
        message: String,
    },

    /// A failure that does not fit any other category.
    #[error("Unexpected error: {message}")]
    Unknown {
        /// A description of the failure.
        message: String,
    },
}

impl EngineError {
    /// Returns the human-readable message shown to the end user.
    ///
    /// The wording is deliberately uniform for data and transport errors so
    /// that internal details never leak to the form; the precise failure kind
    /// stays available through `Display` for logs.
    pub fn user_message(&self) -> String {
        match self {
            EngineError::InvalidSalary { .. } => "Enter a valid monthly salary.",
            EngineError::MissingBirthDate => "Enter your birth date.",
            EngineError::InvalidBirthDate { .. } => "Enter a valid birth date.",
            EngineError::RateNotFound { .. } => {
                "No premium data was found for that monthly salary. Check the entered amount."
            }
            EngineError::Transport { .. } => {
                "Could not reach the premium data service. Try again later."
            }
            _ => "An unexpected error occurred. Try again later.",
        }
        .to_string()
    }

    /// Returns true when the error was caused by user input rather than by
    /// the schedule data or the rate service.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidSalary { .. }
                | EngineError::MissingBirthDate
                | EngineError::InvalidBirthDate { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
